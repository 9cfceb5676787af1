//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum router that forwards every request to the dispatcher
//! - Wire up middleware (tracing, request timeout)
//! - Convert dispatcher responses into axum responses
//! - Serve until the shutdown future resolves

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body as HttpBody,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::Response as HttpResponse,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::response::Response;
use crate::routing::Dispatcher;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// Serves a frozen route table over HTTP.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig, dispatcher: Arc<Dispatcher>) -> Self {
        let state = AppState { dispatcher };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The axum router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` completes.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Hand method and path to the dispatcher.
async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> HttpResponse {
    let response = state.dispatcher.handle(method.as_str(), uri.path());
    into_http_response(response)
}

/// Convert a dispatcher response into an axum response.
///
/// An out-of-range status becomes 500; headers axum cannot represent are
/// dropped with a warning.
pub fn into_http_response(response: Response) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or_else(|_| {
        tracing::warn!(status = response.status, "Handler returned invalid status");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    let mut out = HttpResponse::new(HttpBody::from(response.body.to_text()));
    *out.status_mut() = status;

    for (name, value) in response.headers() {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                out.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = %name, "Dropping invalid response header"),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::CONTENT_TYPE_HTML;
    use crate::routing::Router as RouteRegistry;
    use axum::http::Request;
    use tower::ServiceExt;

    fn server() -> HttpServer {
        let mut routes = RouteRegistry::new();
        routes
            .get("/greet/:name", |ctx| {
                Response::html(format!("Hello, {}!", ctx.param("name").unwrap_or_default()))
            })
            .unwrap()
            .delete("/items/:id", |_| Response::new(204))
            .unwrap();
        HttpServer::new(AppConfig::default(), Arc::new(routes.into_dispatcher()))
    }

    async fn send(server: &HttpServer, method: &str, uri: &str) -> (StatusCode, Option<String>, String) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(HttpBody::empty())
            .unwrap();
        let response = server.router().oneshot(request).await.unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_matched_route() {
        let (status, content_type, body) = send(&server(), "GET", "/greet/Ada").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(CONTENT_TYPE_HTML));
        assert_eq!(body, "Hello, Ada!");
    }

    #[tokio::test]
    async fn test_other_methods_reach_dispatcher() {
        let (status, _, _) = send(&server(), "DELETE", "/items/1").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_root_without_route_is_404() {
        let (status, _, body) = send(&server(), "GET", "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "No route matches /");
    }

    #[test]
    fn test_invalid_status_and_header() {
        let response = Response::new(42)
            .with_header("bad header", "x")
            .with_header("x-ok", "yes")
            .with_body("body");
        let converted = into_http_response(response);

        assert_eq!(converted.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(converted.headers().get("bad header").is_none());
        assert_eq!(converted.headers().get("x-ok").unwrap(), "yes");
    }
}

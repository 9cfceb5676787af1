//! Segment-based HTTP request router.
//!
//! Routes are registered on a [`Router`], frozen into a [`Dispatcher`], and
//! matched first-match-wins against `(method, path)` pairs.
//!
//! ```
//! use segment_router::{Response, Router};
//!
//! let mut router = Router::new();
//! router
//!     .get("/greet/:name", |ctx| {
//!         Response::html(format!("Hello, {}!", ctx.param("name").unwrap_or_default()))
//!     })
//!     .unwrap();
//!
//! let dispatcher = router.into_dispatcher();
//! assert_eq!(dispatcher.handle("GET", "/greet/Ada").body.to_text(), "Hello, Ada!");
//! assert_eq!(dispatcher.handle("GET", "/nope").status, 404);
//! ```

// Core
pub mod routing;

// HTTP surface
pub mod app;
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::AppConfig;
pub use http::{HttpServer, RequestContext, Response};
pub use routing::{Dispatcher, ParameterSet, RouteError, Router};

//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use segment_router::{AppConfig, Dispatcher, HttpServer};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A server running on an ephemeral port. Dropping it stops the server.
pub struct RunningServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl RunningServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Serve `dispatcher` on 127.0.0.1 with a random port.
pub async fn start_server(dispatcher: Dispatcher) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let server = HttpServer::new(AppConfig::default(), Arc::new(dispatcher));
    tokio::spawn(async move {
        let _ = server
            .run(listener, async {
                let _ = rx.await;
            })
            .await;
    });

    RunningServer {
        addr,
        _shutdown: tx,
    }
}

/// A client that never pools or proxies, so each test sees a fresh connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

//! HTTP-facing types and the server binding.
//!
//! # Data Flow
//! ```text
//! TCP connection (axum)
//!     → server.rs (method + path extracted)
//!     → Dispatcher::handle
//!     → handler receives request.rs RequestContext
//!     → handler returns response.rs Response
//!     → server.rs converts to an axum response
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RequestContext;
pub use response::{
    Body, Response, BAD_REQUEST, CONTENT_LENGTH, CONTENT_TYPE, CONTENT_TYPE_HTML,
    CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT, CREATED, FORBIDDEN, NOT_FOUND, OK, UNAUTHORIZED,
};
pub use server::HttpServer;

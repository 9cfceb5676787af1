//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     router.get("/users/:id", handler)
//!     → pattern.rs (split template, tag segments)
//!     → table.rs (append, registration order = priority)
//!     → router.into_dispatcher() freezes the table
//!
//! Incoming Request (method, path)
//!     → dispatcher.rs (entry point)
//!     → matcher.rs (first route whose method and segments match)
//!     → params.rs (captures for that request)
//!     → handler.rs (application code) or 404
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex anywhere; segments are tagged Literal / Param / Wildcard
//! - Deterministic: same input always matches same route
//! - First match wins (ordered by registration)
//! - Logging goes through an injectable observer

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod matcher;
pub mod observer;
pub mod params;
pub mod pattern;
pub mod router;
pub mod table;

pub use dispatcher::Dispatcher;
pub use error::RouteError;
pub use handler::Handler;
pub use matcher::{find_match, MatchResult};
pub use observer::{NoopObserver, RouterObserver, TracingObserver};
pub use params::ParameterSet;
pub use pattern::{compile, CompiledRoute, RouteOptions, Segment};
pub use router::Router;
pub use table::RouteTable;

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing::TracingObserver, http::server (TraceLayer)
//!     → tracing events
//!     → logging.rs subscriber (env filter + fmt layer)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;

//! Extension points for watching the router at work.
//!
//! # Responsibilities
//! - Notify on route registration
//! - Notify on every match attempt and its outcome
//!
//! # Design Decisions
//! - Every callback has an empty default body, so observers implement only
//!   what they need
//! - The default observer logs through `tracing` at debug level; tests swap
//!   in recording observers

use crate::routing::params::ParameterSet;
use crate::routing::pattern::CompiledRoute;

/// Callbacks invoked by the router and dispatcher.
pub trait RouterObserver: Send + Sync + std::fmt::Debug {
    /// A route was appended to the table.
    fn route_registered(&self, _route: &CompiledRoute) {}

    /// A request is about to be matched.
    fn match_attempted(&self, _method: &str, _path: &str) {}

    /// A route matched and its parameters were captured.
    fn match_succeeded(&self, _route: &CompiledRoute, _params: &ParameterSet) {}

    /// No route matched the request.
    fn match_failed(&self, _method: &str, _path: &str) {}
}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RouterObserver for TracingObserver {
    fn route_registered(&self, route: &CompiledRoute) {
        tracing::debug!(
            method = %route.method(),
            template = %route.template(),
            params = ?route.param_names(),
            "Route registered"
        );
    }

    fn match_attempted(&self, method: &str, path: &str) {
        tracing::trace!(method = %method, path = %path, "Matching request");
    }

    fn match_succeeded(&self, route: &CompiledRoute, params: &ParameterSet) {
        tracing::debug!(
            method = %route.method(),
            template = %route.template(),
            params = ?params,
            "Route matched"
        );
    }

    fn match_failed(&self, method: &str, path: &str) {
        tracing::debug!(method = %method, path = %path, "No route matched");
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RouterObserver for NoopObserver {}

//! Ordered route storage.
//!
//! Registration order is match priority. The table never deduplicates or
//! reorders: a route fully shadowed by an earlier one simply never matches.

use crate::routing::pattern::CompiledRoute;

/// Append-only list of compiled routes.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route at the lowest priority.
    pub fn register(&mut self, route: CompiledRoute) {
        self.routes.push(route);
    }

    /// All routes, highest priority first.
    pub fn all_routes(&self) -> &[CompiledRoute] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

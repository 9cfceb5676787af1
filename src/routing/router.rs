//! Route registration.
//!
//! # Responsibilities
//! - Compile templates and append them to the route table
//! - Offer verb helpers (`get`, `post`, `put`, `delete`)
//! - Freeze the table into a [`Dispatcher`] once setup is done
//!
//! # Design Decisions
//! - Registration takes `&mut self`; dispatch needs the frozen
//!   [`Dispatcher`], so routes cannot change once traffic is served
//! - Registration errors are returned, never logged and skipped

use std::fmt;
use std::sync::Arc;

use crate::http::{RequestContext, Response};
use crate::routing::dispatcher::Dispatcher;
use crate::routing::error::RouteError;
use crate::routing::handler::Handler;
use crate::routing::observer::{RouterObserver, TracingObserver};
use crate::routing::pattern::{compile, RouteOptions};
use crate::routing::table::RouteTable;

/// Mutable route table used during application setup.
pub struct Router {
    table: RouteTable,
    observer: Arc<dyn RouterObserver>,
}

impl Router {
    /// Create an empty router that logs through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    /// Create an empty router reporting to `observer`.
    pub fn with_observer(observer: Arc<dyn RouterObserver>) -> Self {
        Self {
            table: RouteTable::new(),
            observer,
        }
    }

    /// Register an already-boxed handler.
    pub fn route(
        &mut self,
        method: &str,
        template: &str,
        handler: Arc<dyn Handler>,
        options: RouteOptions,
    ) -> Result<&mut Self, RouteError> {
        let route = compile(method, template, handler)?.with_options(options);
        self.observer.route_registered(&route);
        self.table.register(route);
        Ok(self)
    }

    /// Register `handler` for `method` and `template`.
    pub fn register<F>(&mut self, method: &str, template: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(method, template, Arc::new(handler), RouteOptions::default())
    }

    /// Register with explicit per-route options.
    pub fn register_with<F>(
        &mut self,
        method: &str,
        template: &str,
        handler: F,
        options: RouteOptions,
    ) -> Result<&mut Self, RouteError>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.route(method, template, Arc::new(handler), options)
    }

    pub fn get<F>(&mut self, template: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.register("GET", template, handler)
    }

    pub fn post<F>(&mut self, template: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.register("POST", template, handler)
    }

    pub fn put<F>(&mut self, template: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.register("PUT", template, handler)
    }

    pub fn delete<F>(&mut self, template: &str, handler: F) -> Result<&mut Self, RouteError>
    where
        F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
    {
        self.register("DELETE", template, handler)
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Stop accepting registrations and build the request dispatcher.
    pub fn into_dispatcher(self) -> Dispatcher {
        tracing::info!(routes = self.table.len(), "Route table frozen");
        Dispatcher::new(self.table, self.observer)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("table", &self.table)
            .field("observer", &self.observer)
            .finish()
    }
}

//! Request dispatch.
//!
//! # Responsibilities
//! - Match a request against the frozen route table
//! - Build the request context and invoke the bound handler
//! - Turn a missing route into a 404 response
//! - Apply per-route post-processing (wildcard splicing)
//!
//! # Design Decisions
//! - Immutable after construction (shared via `Arc` without locks)
//! - Never panics on unmatched input; `NotFound` is an ordinary outcome
//! - The handler's response is returned as-is unless the route opted in
//!   to splicing

use std::fmt;
use std::sync::Arc;

use crate::config::DispatchConfig;
use crate::http::{RequestContext, Response, CONTENT_TYPE_HTML};
use crate::routing::matcher::{find_match, MatchResult};
use crate::routing::observer::RouterObserver;
use crate::routing::pattern::CompiledRoute;
use crate::routing::table::RouteTable;

/// Frozen route table plus the request entry point.
pub struct Dispatcher {
    table: RouteTable,
    observer: Arc<dyn RouterObserver>,
    not_found_content_type: String,
}

impl Dispatcher {
    pub(crate) fn new(table: RouteTable, observer: Arc<dyn RouterObserver>) -> Self {
        Self {
            table,
            observer,
            not_found_content_type: CONTENT_TYPE_HTML.to_string(),
        }
    }

    /// Apply dispatch settings from configuration.
    pub fn configure(mut self, config: &DispatchConfig) -> Self {
        self.not_found_content_type = config.not_found_content_type.clone();
        self
    }

    /// Routes in priority order.
    pub fn routes(&self) -> &[CompiledRoute] {
        self.table.all_routes()
    }

    /// Match without invoking a handler.
    pub fn find(&self, method: &str, path: &str) -> MatchResult<'_> {
        find_match(self.table.all_routes(), method, path, self.observer.as_ref())
    }

    /// Serve one request.
    pub fn handle(&self, method: &str, path: &str) -> Response {
        let (route, params) = match self.find(method, path) {
            MatchResult::Matched { route, params } => (route, params),
            MatchResult::NotFound => {
                return Response::not_found(path, &self.not_found_content_type);
            }
        };

        let ctx = RequestContext::new(method, path, params);
        let mut response = route.handler().call(&ctx);

        if route.options().splice_wildcard {
            if let Some(name) = route.wildcard_name() {
                let captured = ctx.param(name).unwrap_or_default();
                response.write(&format!("Wildcard path: {}", captured));
            }
        }

        response
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routes", &self.table.len())
            .field("not_found_content_type", &self.not_found_content_type)
            .finish_non_exhaustive()
    }
}

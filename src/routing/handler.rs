//! The handler seam between the router and application code.

use crate::http::{RequestContext, Response};

/// Application code bound to a route.
///
/// Any `Fn(&RequestContext) -> Response` closure or function that is
/// `Send + Sync` implements this trait, so most routes never name it.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, ctx: &RequestContext) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&RequestContext) -> Response + Send + Sync + 'static,
{
    fn call(&self, ctx: &RequestContext) -> Response {
        self(ctx)
    }
}

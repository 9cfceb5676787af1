//! Demo application route table.
//!
//! Registers the four routes the example service ships with. The wildcard
//! route goes last so the specific routes take priority.

use crate::http::{RequestContext, Response};
use crate::routing::{RouteError, Router};

/// Register the demo routes on `router`.
pub fn register_demo_routes(router: &mut Router) -> Result<(), RouteError> {
    router
        .get("/", home)?
        .get("/greet/:name", greet)?
        .get("/users/:user_id/posts/:post_id", user_post)?
        .get("/*", wildcard)?;
    Ok(())
}

/// A fresh router holding only the demo routes.
pub fn demo_router() -> Result<Router, RouteError> {
    let mut router = Router::new();
    register_demo_routes(&mut router)?;
    Ok(router)
}

fn home(_ctx: &RequestContext) -> Response {
    Response::html("You are at Home!")
}

fn greet(ctx: &RequestContext) -> Response {
    let name = ctx.param("name").unwrap_or_default();
    Response::html(format!("Hello, {}!", name))
}

fn user_post(ctx: &RequestContext) -> Response {
    let user_id = ctx.param("user_id").unwrap_or_default();
    let post_id = ctx.param("post_id").unwrap_or_default();
    Response::html(format!(
        "You are viewing post {} of user {}!",
        post_id, user_id
    ))
}

fn wildcard(ctx: &RequestContext) -> Response {
    let path = ctx.param("").unwrap_or_default();
    Response::html(format!("Wildcard path: {}", path))
}

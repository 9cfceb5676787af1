//! Registration-time errors.

use thiserror::Error;

/// Errors raised while compiling or registering a route.
///
/// These are configuration mistakes in the application's route table and
/// are meant to abort startup. Request-time failures (no matching route)
/// are not errors; the dispatcher turns them into a 404 response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A wildcard segment appeared before the end of the template.
    #[error("wildcard must be the last segment of `{template}` (found at segment {position})")]
    WildcardNotLast { template: String, position: usize },

    /// The route was registered with an empty method string.
    #[error("route `{template}` was registered without an HTTP method")]
    EmptyMethod { template: String },
}

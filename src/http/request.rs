//! Request-scoped context handed to handlers.

use crate::routing::params::ParameterSet;

/// What a handler knows about the request it is serving.
///
/// Built by the dispatcher after a successful match and dropped once the
/// handler returns. Nothing in it is shared with other requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: String,
    path: String,
    params: ParameterSet,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>, params: ParameterSet) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            params,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request path as received, before segment normalization.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Shorthand for `params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

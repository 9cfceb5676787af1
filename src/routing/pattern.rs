//! Route template compilation.
//!
//! # Responsibilities
//! - Split a template such as `/users/:id/posts/*` into tagged segments
//! - Record parameter names in declaration order
//! - Reject templates whose wildcard is not the final segment
//!
//! # Design Decisions
//! - Literals are compared as plain strings, never compiled into a regex,
//!   so characters like `.` or `(` in a template match themselves
//! - Empty segments from leading, trailing or doubled slashes are dropped

use std::fmt;
use std::sync::Arc;

use crate::routing::error::RouteError;
use crate::routing::handler::Handler;

/// One compiled `/`-delimited piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// `:name`, captures exactly one path segment.
    Param(String),
    /// `*` or `*name`, captures the rest of the path. The name is empty for a
    /// bare `*`.
    Wildcard(String),
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if let Some(name) = raw.strip_prefix(':') {
            Segment::Param(name.to_string())
        } else if let Some(name) = raw.strip_prefix('*') {
            Segment::Wildcard(name.to_string())
        } else {
            Segment::Literal(raw.to_string())
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

/// Per-route behaviors chosen at registration time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Append `Wildcard path: <capture>` to the handler's body after it runs.
    /// Only has an effect on routes that contain a wildcard.
    pub splice_wildcard: bool,
}

/// A registered route, ready for matching.
#[derive(Clone)]
pub struct CompiledRoute {
    method: String,
    template: String,
    segments: Vec<Segment>,
    param_names: Vec<String>,
    handler: Arc<dyn Handler>,
    options: RouteOptions,
}

impl CompiledRoute {
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The template exactly as it was registered.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter and wildcard names, left to right.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    pub fn handler(&self) -> &Arc<dyn Handler> {
        &self.handler
    }

    pub fn options(&self) -> RouteOptions {
        self.options
    }

    /// Name of the trailing wildcard, if the template ends in one.
    pub fn wildcard_name(&self) -> Option<&str> {
        match self.segments.last() {
            Some(Segment::Wildcard(name)) => Some(name),
            _ => None,
        }
    }

    pub(crate) fn with_options(mut self, options: RouteOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Debug for CompiledRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledRoute")
            .field("method", &self.method)
            .field("template", &self.template)
            .field("segments", &self.segments)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Split a path or template on `/`, skipping empty pieces.
pub(crate) fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Compile a template into a route bound to `handler`.
pub fn compile(
    method: impl Into<String>,
    template: impl Into<String>,
    handler: Arc<dyn Handler>,
) -> Result<CompiledRoute, RouteError> {
    let method = method.into();
    let template = template.into();

    if method.is_empty() {
        return Err(RouteError::EmptyMethod { template });
    }

    let segments: Vec<Segment> = split_segments(&template).map(Segment::parse).collect();

    if let Some(position) = segments.iter().position(Segment::is_wildcard) {
        if position + 1 != segments.len() {
            return Err(RouteError::WildcardNotLast { template, position });
        }
    }

    let param_names = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Param(name) | Segment::Wildcard(name) => Some(name.clone()),
            Segment::Literal(_) => None,
        })
        .collect();

    Ok(CompiledRoute {
        method,
        template,
        segments,
        param_names,
        handler,
        options: RouteOptions::default(),
    })
}

//! Route matching logic.
//!
//! # Responsibilities
//! - Normalize the request path into segments
//! - Filter routes by method (exact, case-sensitive)
//! - Compare segments and capture parameters
//! - Return the first matching route or an explicit `NotFound`
//!
//! # Design Decisions
//! - Method comparison is exact; callers normalize verbs to upper case
//! - Segment count is checked before any per-segment work
//! - First match wins, regardless of how specific later routes are
//! - No regex, so matching is O(routes × segments)

use crate::routing::observer::RouterObserver;
use crate::routing::params::ParameterSet;
use crate::routing::pattern::{split_segments, CompiledRoute, Segment};

/// Outcome of matching a request against the route table.
#[derive(Debug)]
pub enum MatchResult<'a> {
    Matched {
        route: &'a CompiledRoute,
        params: ParameterSet,
    },
    NotFound,
}

impl<'a> MatchResult<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    /// The matched route, if any.
    pub fn route(&self) -> Option<&'a CompiledRoute> {
        match self {
            MatchResult::Matched { route, .. } => Some(*route),
            MatchResult::NotFound => None,
        }
    }

    /// The captured parameters, if any.
    pub fn params(&self) -> Option<&ParameterSet> {
        match self {
            MatchResult::Matched { params, .. } => Some(params),
            MatchResult::NotFound => None,
        }
    }
}

impl CompiledRoute {
    /// Compare this route's segments against an already-split path.
    ///
    /// Returns the captures on success. The method is not checked here.
    pub fn capture(&self, path: &[&str]) -> Option<ParameterSet> {
        let segments = self.segments();

        let eligible = if self.wildcard_name().is_some() {
            path.len() + 1 >= segments.len()
        } else {
            path.len() == segments.len()
        };
        if !eligible {
            return None;
        }

        let mut params = ParameterSet::new();
        for (i, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Literal(text) => {
                    if path[i] != text.as_str() {
                        return None;
                    }
                }
                Segment::Param(name) => params.add(name.as_str(), path[i]),
                Segment::Wildcard(name) => {
                    params.add(name.as_str(), path[i..].join("/"));
                    break;
                }
            }
        }
        Some(params)
    }
}

/// Find the first route accepting `method` and `path`.
pub fn find_match<'a>(
    routes: &'a [CompiledRoute],
    method: &str,
    path: &str,
    observer: &dyn RouterObserver,
) -> MatchResult<'a> {
    observer.match_attempted(method, path);

    let path_segments: Vec<&str> = split_segments(path).collect();

    for route in routes.iter().filter(|r| r.method() == method) {
        if let Some(params) = route.capture(&path_segments) {
            observer.match_succeeded(route, &params);
            return MatchResult::Matched { route, params };
        }
    }

    observer.match_failed(method, path);
    MatchResult::NotFound
}

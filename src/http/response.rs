//! Response descriptors returned by handlers.
//!
//! # Responsibilities
//! - Carry status, headers and body independently of any HTTP library
//! - Offer the small set of builders handlers need (html, text, json)
//! - Compute `content-length` when the response is finished
//!
//! # Design Decisions
//! - Header names are lower-cased on insert so lookups are case-insensitive
//! - Headers are kept in a `BTreeMap` for deterministic output
//! - A body is either one string or an ordered list of chunks

use std::collections::BTreeMap;

use serde::Serialize;

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const BAD_REQUEST: u16 = 400;
pub const UNAUTHORIZED: u16 = 401;
pub const FORBIDDEN: u16 = 403;
pub const NOT_FOUND: u16 = 404;

pub const CONTENT_TYPE: &str = "content-type";
pub const CONTENT_LENGTH: &str = "content-length";

pub const CONTENT_TYPE_HTML: &str = "text/html";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Chunks(Vec<String>),
}

impl Body {
    /// Total size in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            Body::Text(text) => text.len(),
            Body::Chunks(chunks) => chunks.iter().map(String::len).sum(),
        }
    }

    /// The body as one string.
    pub fn to_text(&self) -> String {
        match self {
            Body::Text(text) => text.clone(),
            Body::Chunks(chunks) => chunks.concat(),
        }
    }

    /// The body as a list of chunks. A text body is a single chunk.
    pub fn chunks(&self) -> Vec<&str> {
        match self {
            Body::Text(text) => vec![text.as_str()],
            Body::Chunks(chunks) => chunks.iter().map(String::as_str).collect(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Body::Chunks(Vec::new())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Vec<String>> for Body {
    fn from(chunks: Vec<String>) -> Self {
        Body::Chunks(chunks)
    }
}

/// Status, headers and body produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    headers: BTreeMap<String, String>,
    pub body: Body,
}

impl Response {
    /// Empty response with the given status.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body: Body::default(),
        }
    }

    /// Empty 200 response.
    pub fn ok() -> Self {
        Self::new(OK)
    }

    /// 200 response with an HTML body.
    pub fn html(content: impl Into<String>) -> Self {
        Self::ok()
            .with_header(CONTENT_TYPE, CONTENT_TYPE_HTML)
            .with_body(content.into())
    }

    /// 200 response with a plain-text body.
    pub fn text(content: impl Into<String>) -> Self {
        Self::ok()
            .with_header(CONTENT_TYPE, CONTENT_TYPE_TEXT)
            .with_body(content.into())
    }

    /// 200 response with `data` serialized as JSON.
    pub fn json<T: Serialize + ?Sized>(data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        Ok(Self::ok()
            .with_header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .with_body(body))
    }

    /// 404 response naming the unmatched path.
    pub fn not_found(path: &str, content_type: &str) -> Self {
        Self::new(NOT_FOUND)
            .with_header(CONTENT_TYPE, content_type)
            .with_body(vec![format!("No route matches {}", path)])
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Merge `headers` into this response.
    pub fn set_headers<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.set_header(name, value);
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append `data` to the body. Chunked bodies are joined first.
    pub fn write(&mut self, data: &str) {
        let mut text = self.body.to_text();
        text.push_str(data);
        self.body = Body::Text(text);
    }

    /// Record the body length in `content-length`.
    pub fn finish(mut self) -> Self {
        let length = self.body.byte_len();
        self.set_header(CONTENT_LENGTH, length.to_string());
        self
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

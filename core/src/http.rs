//! HTTP exchange types for RPC calls.
//!
//! # Design
//! A stub describes its request as plain data and parses a response handed
//! back to it. Who performs the round-trip is decided by the caller: the
//! async [`Transport`](crate::transport::Transport) seam, or any host that
//! executes `HttpRequest` values itself and feeds `HttpResponse` values back.
//!
//! `path` is the endpoint path only (`/rpc/app/test`). Resolving it against
//! an origin is the transport's job.

use std::fmt;

/// HTTP method for a request. Every remote procedure is a `POST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A `200 OK` response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

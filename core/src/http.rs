//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The controller builds
//! `HttpRequest` values and consumes `HttpResponse` values without ever
//! touching the network — the host (UI event loop, test harness, whatever
//! embeds the controller) executes the actual round-trip. That keeps the
//! controller deterministic: a "network failure" in a test is just a
//! fabricated response, and a settlement can be delivered whenever the
//! host pleases, in any order.
//!
//! All fields are owned so values can be handed across threads or queued
//! without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, built by [`TodoApi`] methods.
///
/// The host is responsible for executing it and producing the matching
/// [`HttpResponse`].
///
/// [`TodoApi`]: crate::api::TodoApi
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A body-less request with no headers.
    pub(crate) fn bare(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a JSON body.
    pub(crate) fn json(method: HttpMethod, url: String, body: String) -> Self {
        Self {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an [`HttpRequest`], then fed
/// back through [`TodoListController::resolve`].
///
/// [`TodoListController::resolve`]: crate::controller::TodoListController::resolve
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status. The remote store contract treats every
    /// 2xx as success and everything else as failure, regardless of body.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

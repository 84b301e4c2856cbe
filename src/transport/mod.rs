//! HTTP transport seam
//!
//! The search client never talks to the network directly. It hands a
//! fully-built GET request (endpoint plus query pairs) to a `Transport` and
//! gets back a status code and body. The default implementation is
//! `http::ReqwestTransport`; tests substitute a recording stub.
//!
//! Dropping the future returned by `Transport::get` abandons the request.
//! Nothing is written anywhere, so a cancelled search leaves no trace.

pub mod http;

pub use http::ReqwestTransport;

use crate::error::Result;
use std::future::Future;

/// Raw outcome of one GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, `None` when the server sent nothing
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// A response carrying `body`
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: Some(body.into()),
        }
    }

    /// A response with no body at all
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a single GET-with-query-parameters call
///
/// Network-level failures are reported as `Error::Transport`. Status codes
/// are returned as-is; interpreting them is the caller's job.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<TransportResponse>> + Send;
}

impl<T: Transport> Transport for &T {
    fn get(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> impl Future<Output = Result<TransportResponse>> + Send {
        (**self).get(endpoint, query)
    }
}

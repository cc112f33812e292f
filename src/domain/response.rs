//! # Response
//!
//! Outcome of an executed request as recorded by the engine.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::cookie::Cookies;
use super::header::Headers;

/// Domain-level HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Response {
    /// Identifier of the request that produced this response
    pub request: String,
    /// Dispatch time, epoch milliseconds
    pub date: i64,
    /// Elapsed milliseconds; zero or negative means indeterminate
    pub time: i64,
    pub status: u16,
    pub headers: Headers,
    pub cookies: Cookies,
    pub body: Body,
    /// Byte length of the body
    pub size: usize,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

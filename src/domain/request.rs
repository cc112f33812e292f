//! # Request
//!
//! Stored description of an HTTP call.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::header::Headers;

/// Domain-level HTTP request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Request {
    /// Identifier, empty until the request is stored
    pub id: String,
    pub name: String,
    /// Creation time, epoch milliseconds
    pub timestamp: i64,
    /// Last modification time, epoch milliseconds
    pub modified: i64,
    /// Method string, expected in canonical upper case
    pub method: String,
    pub uri: String,
    pub headers: Headers,
    pub body: Body,
}

impl Request {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

//! # Headers
//!
//! Multi-valued header collection keyed by header name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name under which servers deliver cookies
pub const SET_COOKIE: &str = "Set-Cookie";

/// A single header name's state: whether it is sent, and its values in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub active: bool,
    pub values: Vec<String>,
}

impl Header {
    pub fn new(active: bool, values: Vec<String>) -> Self {
        Self { active, values }
    }

    /// An active header holding the given values
    pub fn active(values: Vec<String>) -> Self {
        Self::new(true, values)
    }
}

/// Header collection: name to [`Header`]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Headers {
    pub headers: HashMap<String, Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `name`, creating an active header if needed
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers
            .entry(name.into())
            .or_insert_with(|| Header::active(Vec::new()))
            .values
            .push(value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Header> {
        self.headers.get(name)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl From<HashMap<String, Header>> for Headers {
    fn from(headers: HashMap<String, Header>) -> Self {
        Self { headers }
    }
}

/// Canonical MIME form of a header name: first letter and every letter
/// following a hyphen upper-cased, the rest lower-cased
///
/// Names containing bytes outside the token alphabet are returned unchanged.
pub fn canonical_header_name(name: &str) -> String {
    let is_token = |c: char| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c);
    if name.is_empty() || !name.chars().all(is_token) {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let mapped = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            mapped
        })
        .collect()
}

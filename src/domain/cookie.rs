//! # Cookies
//!
//! Cookie records parsed from `Set-Cookie` header values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Error raised when a `Set-Cookie` value cannot be parsed
#[derive(Debug, Error)]
pub enum CookieError {
    #[error("Invalid Set-Cookie value '{raw}': {source}")]
    Malformed {
        raw: String,
        #[source]
        source: cookie::ParseError,
    },
}

/// `SameSite` attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// A cookie as delivered by a single `Set-Cookie` header value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub code: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    /// `Expires` as seconds since the Unix epoch
    pub expiration: Option<i64>,
    /// `Max-Age` in seconds
    pub max_age: Option<i64>,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: Option<SameSite>,
}

/// Cookie collection keyed by cookie name
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cookies {
    pub cookies: HashMap<String, Cookie>,
}

impl Cookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, code: &str) -> Option<&Cookie> {
        self.cookies.get(code)
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl From<HashMap<String, Cookie>> for Cookies {
    fn from(cookies: HashMap<String, Cookie>) -> Self {
        Self { cookies }
    }
}

/// Parse one raw `Set-Cookie` value into a [`Cookie`]
pub fn parse_cookie(raw: &str) -> Result<Cookie, CookieError> {
    let parsed = cookie::Cookie::parse(raw).map_err(|source| CookieError::Malformed {
        raw: raw.to_string(),
        source,
    })?;

    let same_site = parsed.same_site().map(|same_site| match same_site {
        cookie::SameSite::Strict => SameSite::Strict,
        cookie::SameSite::Lax => SameSite::Lax,
        cookie::SameSite::None => SameSite::None,
    });

    Ok(Cookie {
        code: parsed.name().to_string(),
        value: parsed.value().to_string(),
        domain: parsed.domain().map(str::to_string),
        path: parsed.path().map(str::to_string),
        expiration: parsed
            .expires()
            .and_then(|expires| expires.datetime())
            .map(|datetime| datetime.unix_timestamp()),
        max_age: parsed.max_age().map(|max_age| max_age.whole_seconds()),
        secure: parsed.secure().unwrap_or(false),
        http_only: parsed.http_only().unwrap_or(false),
        same_site,
    })
}

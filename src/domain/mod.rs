//! # Domain Model
//!
//! Typed, storable representation of HTTP calls: requests, responses,
//! headers, cookies and bodies.

pub mod body;
pub mod cookie;
pub mod header;
pub mod request;
pub mod response;

pub use body::{Body, ContentType};
pub use cookie::{parse_cookie, Cookie, CookieError, Cookies, SameSite};
pub use header::{canonical_header_name, Header, Headers, SET_COOKIE};
pub use request::Request;
pub use response::Response;

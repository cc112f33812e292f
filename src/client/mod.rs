//! # HTTP Transaction Engine
//!
//! Turns a domain [`Request`] into a wire request, executes it on the
//! calling thread and rebuilds a domain [`Response`] from the reply.
//!
//! A call goes through three phases:
//!
//! ```text
//! Building ──► Sent ──► Completed
//!    │           │
//!    └──► Failed ◄┘
//! ```
//!
//! Every failure ends the call with an [`ApiError`]; no partial response is
//! ever returned. Non-2xx replies are ordinary responses.

mod clock;
mod config;

pub use clock::{Clock, SystemClock};
pub use config::{ClientConfig, DEFAULT_REDIRECT_LIMIT};

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::blocking::{Client, Request as WireRequest, Response as WireResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

use crate::collection::CollectionMap;
use crate::domain::{
    canonical_header_name, parse_cookie, Body, ContentType, Cookie, Cookies, Header, Headers,
    Request, Response, SET_COOKIE,
};
use crate::error::ApiError;

/// Synchronous executor of domain requests
///
/// Holds no per-call state; one instance can serve concurrent callers.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    clock: Arc<dyn Clock>,
}

impl HttpClient {
    /// Create a client using the system clock
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a client with an explicit timestamp source
    pub fn with_clock(config: &ClientConfig, clock: Arc<dyn Clock>) -> Result<Self, ApiError> {
        tracing::debug!("Creating HTTP transport with {config:?}");
        let client = config.builder().build().map_err(ApiError::Transport)?;
        Ok(Self { client, clock })
    }

    /// Execute `request` and materialize the reply
    pub fn execute(&self, request: &Request) -> Result<Response, ApiError> {
        let wire = self.build(request)?;
        tracing::debug!("Sending {} {}", wire.method(), wire.url());

        let start = self.clock.now_millis();
        let result = self.client.execute(wire);
        let end = self.clock.now_millis();

        let reply = result.map_err(|e| {
            tracing::warn!("HTTP request '{}' failed: {e}", request.uri);
            ApiError::Transport(e)
        })?;
        tracing::debug!("Received {} after {} ms", reply.status(), end - start);

        materialize(start, end, &request.id, reply)
    }

    /// Translate a domain request into a wire request without sending it
    ///
    /// The body is attached only when it is non-empty and the method is
    /// neither `GET` nor `HEAD`. Header values are appended per name in
    /// their stored order, whether or not the header is active.
    pub fn build(&self, request: &Request) -> Result<WireRequest, ApiError> {
        let method = Method::from_bytes(request.method.as_bytes()).map_err(|e| {
            ApiError::construction(format!("invalid method '{}'", request.method), e)
        })?;
        let url = Url::parse(&request.uri)
            .map_err(|e| ApiError::construction(format!("invalid uri '{}'", request.uri), e))?;

        let mut wire = WireRequest::new(method, url);

        if carries_body(request) {
            *wire.body_mut() = Some(request.body.bytes.clone().into());
        }

        let headers: CollectionMap<&String, &Header> = request.headers.headers.iter().collect();
        let projected = headers.map_values(|_, header| &header.values);
        for (name, values) in projected.collect() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::construction(format!("invalid header name '{name}'"), e))?;
            for value in values.iter() {
                let value = HeaderValue::from_str(value).map_err(|e| {
                    ApiError::construction(format!("invalid value for header '{name}'"), e)
                })?;
                wire.headers_mut().append(name.clone(), value);
            }
        }

        Ok(wire)
    }
}

fn carries_body(request: &Request) -> bool {
    !request.body.is_empty() && request.method != "GET" && request.method != "HEAD"
}

fn materialize(
    start: i64,
    end: i64,
    request_id: &str,
    reply: WireResponse,
) -> Result<Response, ApiError> {
    let status = reply.status().as_u16();
    let headers = Headers::from(project_headers(reply.headers()));

    let bytes: Bytes = reply.bytes().map_err(|e| {
        tracing::warn!("Failed to read response body: {e}");
        ApiError::ResponseRead(e)
    })?;

    let cookies = extract_cookies(&headers)?;

    Ok(Response {
        request: request_id.to_string(),
        date: start,
        time: end - start,
        status,
        headers,
        cookies,
        size: bytes.len(),
        body: Body::new(ContentType::None, bytes.to_vec()),
    })
}

/// Group reply header values by canonical name, every header active
fn project_headers(map: &HeaderMap) -> HashMap<String, Header> {
    let raw: HashMap<String, Vec<String>> = map
        .keys()
        .map(|name| {
            let values = map
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect();
            (canonical_header_name(name.as_str()), values)
        })
        .collect();

    CollectionMap::map_from(raw, |_, values| Header::active(values)).into_inner()
}

/// Parse every `Set-Cookie` value; the first failure aborts the whole set
fn extract_cookies(headers: &Headers) -> Result<Cookies, ApiError> {
    let mut cookies: CollectionMap<String, Cookie> = CollectionMap::new();

    if let Some(set_cookie) = headers.get(SET_COOKIE) {
        for raw in &set_cookie.values {
            let cookie = parse_cookie(raw).map_err(|e| {
                tracing::warn!("Rejecting response: {e}");
                e
            })?;
            cookies.put(cookie.code.clone(), cookie);
        }
    }

    Ok(Cookies::from(cookies.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn client() -> HttpClient {
        HttpClient::new(&ClientConfig::default().with_system_proxy(false)).unwrap()
    }

    fn wire_body(wire: &WireRequest) -> Option<Vec<u8>> {
        wire.body()
            .map(|body| body.as_bytes().unwrap_or_default().to_vec())
    }

    #[test]
    fn build_should_copy_method_and_uri_for_plain_get() {
        let request = Request::new("GET", "http://x/y");

        let wire = client().build(&request).unwrap();

        assert_eq!(*wire.method(), Method::GET);
        assert_eq!(wire.url().as_str(), "http://x/y");
        assert!(wire.body().is_none());
    }

    #[test]
    fn build_should_drop_body_for_get_and_head() {
        for method in ["GET", "HEAD"] {
            let request = Request::new(method, "http://x/y")
                .with_body(Body::new(ContentType::Json, r#"{"a":1}"#));

            let wire = client().build(&request).unwrap();

            assert!(wire.body().is_none(), "{method} must not carry a body");
        }
    }

    #[test]
    fn build_should_attach_exact_body_bytes_for_other_methods() {
        let payload = vec![0u8, 159, 146, 150, b'{', b'}'];
        for method in ["POST", "PUT", "PATCH", "DELETE", "OPTIONS"] {
            let request = Request::new(method, "http://x/y")
                .with_body(Body::new(ContentType::Text, payload.clone()));

            let wire = client().build(&request).unwrap();

            assert_eq!(wire_body(&wire), Some(payload.clone()), "{method}");
        }
    }

    #[test]
    fn build_should_send_no_body_when_payload_is_empty() {
        let request = Request::new("POST", "http://x/y");

        let wire = client().build(&request).unwrap();

        assert!(wire.body().is_none());
    }

    #[test]
    fn build_should_compare_method_case_sensitively() {
        let request =
            Request::new("get", "http://x/y").with_body(Body::new(ContentType::Text, "data"));

        let wire = client().build(&request).unwrap();

        assert_eq!(wire.method().as_str(), "get");
        assert_eq!(wire_body(&wire), Some(b"data".to_vec()));
    }

    #[test]
    fn build_should_project_multi_value_headers_in_order() {
        let mut request = Request::new("GET", "http://x/y")
            .with_header("X-Test", "a")
            .with_header("X-Test", "b")
            .with_header("Accept", "text/plain");
        request
            .headers
            .headers
            .insert("X-Off".to_string(), Header::new(false, vec!["z".to_string()]));

        let wire = client().build(&request).unwrap();

        let values: Vec<&str> = wire
            .headers()
            .get_all("x-test")
            .iter()
            .map(|value| value.to_str().unwrap())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
        assert_eq!(wire.headers().get("accept").unwrap(), "text/plain");
        assert_eq!(wire.headers().get("x-off").unwrap(), "z");
    }

    #[test]
    fn build_should_be_repeatable() {
        let request = Request::new("PUT", "http://x/y?q=1")
            .with_header("X-Test", "a")
            .with_body(Body::new(ContentType::Text, "payload"));
        let client = client();

        let first = client.build(&request).unwrap();
        let second = client.build(&request).unwrap();

        assert_eq!(first.method(), second.method());
        assert_eq!(first.url(), second.url());
        assert_eq!(first.headers(), second.headers());
        assert_eq!(wire_body(&first), wire_body(&second));
    }

    #[test]
    fn build_should_reject_malformed_uri() {
        let request = Request::new("GET", "://nowhere");

        let error = client().build(&request).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::RequestConstruction);
        assert_eq!(error.code(), 500);
    }

    #[test]
    fn build_should_reject_malformed_method() {
        let request = Request::new("GE T", "http://x/y");

        let error = client().build(&request).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::RequestConstruction);
    }

    #[test]
    fn build_should_reject_malformed_header() {
        let bad_name = Request::new("GET", "http://x/y").with_header("Bad Name", "v");
        let bad_value = Request::new("GET", "http://x/y").with_header("X-Ok", "line\nbreak");

        assert_eq!(
            client().build(&bad_name).unwrap_err().kind(),
            ErrorKind::RequestConstruction
        );
        assert_eq!(
            client().build(&bad_value).unwrap_err().kind(),
            ErrorKind::RequestConstruction
        );
    }

    #[test]
    fn execute_should_not_dispatch_when_build_fails() {
        let request = Request::new("GET", "not a uri");

        let error = client().execute(&request).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::RequestConstruction);
    }

    #[test]
    fn project_headers_should_canonicalize_and_activate() {
        let mut map = HeaderMap::new();
        map.append("x-test", HeaderValue::from_static("a"));
        map.append("x-test", HeaderValue::from_static("b"));
        map.append("content-type", HeaderValue::from_static("text/plain"));

        let headers = project_headers(&map);

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("X-Test"),
            Some(&Header::active(vec!["a".to_string(), "b".to_string()]))
        );
        assert!(headers.get("Content-Type").unwrap().active);
    }

    #[test]
    fn extract_cookies_should_keep_last_value_per_name() {
        let mut headers = Headers::new();
        headers
            .add(SET_COOKIE, "a=1")
            .add(SET_COOKIE, "b=x; Path=/")
            .add(SET_COOKIE, "a=2");

        let cookies = extract_cookies(&headers).unwrap();

        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies.get("a").unwrap().value, "2");
        assert_eq!(cookies.get("b").unwrap().path.as_deref(), Some("/"));
    }

    #[test]
    fn extract_cookies_should_fail_on_any_malformed_value() {
        let mut headers = Headers::new();
        headers.add(SET_COOKIE, "a=1").add(SET_COOKIE, "garbage");

        let error = extract_cookies(&headers).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::CookieParse);
    }

    #[test]
    fn extract_cookies_should_be_empty_without_set_cookie() {
        let mut headers = Headers::new();
        headers.add("Content-Type", "text/plain");

        assert!(extract_cookies(&headers).unwrap().is_empty());
    }
}

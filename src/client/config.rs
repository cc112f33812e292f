//! # Client Configuration
//!
//! Transport settings injected into [`HttpClient`](super::HttpClient) at
//! construction. The defaults reproduce a plain transport: no timeout,
//! the transport's own redirect limit, certificate validation on.

use std::time::Duration;

use reqwest::blocking::ClientBuilder;
use reqwest::redirect::Policy;

/// Number of redirects the transport follows by default
pub const DEFAULT_REDIRECT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-call timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Redirects to follow; `None` returns 3xx replies as-is
    pub redirect_limit: Option<usize>,
    pub accept_invalid_certs: bool,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment
    pub system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            redirect_limit: Some(DEFAULT_REDIRECT_LIMIT),
            accept_invalid_certs: false,
            system_proxy: true,
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_redirect_limit(mut self, limit: Option<usize>) -> Self {
        self.redirect_limit = limit;
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn with_system_proxy(mut self, enabled: bool) -> Self {
        self.system_proxy = enabled;
        self
    }

    /// Translate the settings into a transport builder
    pub(crate) fn builder(&self) -> ClientBuilder {
        let redirect = match self.redirect_limit {
            Some(limit) => Policy::limited(limit),
            None => Policy::none(),
        };

        let builder = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .redirect(redirect)
            .danger_accept_invalid_certs(self.accept_invalid_certs);

        if self.system_proxy {
            builder
        } else {
            builder.no_proxy()
        }
    }
}

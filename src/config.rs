//! Configuration constants and profile loading for wirecall
//!
//! Transport settings live in an INI profile file, one section per profile:
//!
//! ```ini
//! [default]
//! timeout_ms = 5000
//! max_redirects = 10
//! insecure = false
//! ```

use std::path::Path;
use std::time::Duration;

use ini::Ini;
use thiserror::Error;

use crate::client::ClientConfig;

/// Default profile file path for wirecall
pub const DEFAULT_PROFILE_PATH: &str = "~/.wirecall/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "WIRECALL_PROFILE_PATH";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot load profile file '{path}': {source}")]
    Load {
        path: String,
        #[source]
        source: ini::Error,
    },
    #[error("Invalid value '{value}' for '{key}' in profile '{profile}'")]
    InvalidValue {
        profile: String,
        key: String,
        value: String,
    },
}

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Load the transport settings of `profile` from the file at `path`
///
/// `~` in `path` is expanded. A missing file or section yields the default
/// configuration; unknown keys are ignored.
pub fn load_client_config(path: &str, profile: &str) -> Result<ClientConfig, ConfigError> {
    let expanded = shellexpand::tilde(path).into_owned();
    if !Path::new(&expanded).exists() {
        tracing::debug!("Profile file '{expanded}' not found, using defaults");
        return Ok(ClientConfig::default());
    }

    let ini = Ini::load_from_file(&expanded).map_err(|source| ConfigError::Load {
        path: expanded.clone(),
        source,
    })?;

    let Some(section) = ini.section(Some(profile)) else {
        tracing::debug!("Profile '{profile}' not found in '{expanded}', using defaults");
        return Ok(ClientConfig::default());
    };

    let invalid = |key: &str, value: &str| ConfigError::InvalidValue {
        profile: profile.to_string(),
        key: key.to_string(),
        value: value.to_string(),
    };

    let mut config = ClientConfig::default();

    if let Some(value) = section.get("timeout_ms") {
        let millis: u64 = value.trim().parse().map_err(|_| invalid("timeout_ms", value))?;
        config = config.with_timeout(Duration::from_millis(millis));
    }

    if let Some(value) = section.get("max_redirects") {
        let limit: usize = value
            .trim()
            .parse()
            .map_err(|_| invalid("max_redirects", value))?;
        config = config.with_redirect_limit((limit > 0).then_some(limit));
    }

    if let Some(value) = section.get("insecure") {
        let insecure: bool = value.trim().parse().map_err(|_| invalid("insecure", value))?;
        config = config.with_accept_invalid_certs(insecure);
    }

    tracing::debug!("Profile '{profile}' loaded: {config:?}");
    Ok(config)
}

//! # Errors
//!
//! Failures raised by the transaction engine. Every variant maps to a
//! status-like code; engine failures are internal failures of the caller,
//! never a property of the remote server's reply.

use thiserror::Error;

use crate::domain::CookieError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Discriminant of [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequestConstruction,
    Transport,
    ResponseRead,
    CookieParse,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The wire request could not be built; nothing was sent
    #[error("Cannot build HTTP request: {message}")]
    RequestConstruction {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
    /// The call failed at the transport level; no response exists
    #[error("Cannot execute HTTP request")]
    Transport(#[source] reqwest::Error),
    /// The reply body could not be drained
    #[error("Failed to read response")]
    ResponseRead(#[source] reqwest::Error),
    #[error(transparent)]
    CookieParse(#[from] CookieError),
}

impl ApiError {
    pub fn construction(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::RequestConstruction {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RequestConstruction { .. } => ErrorKind::RequestConstruction,
            Self::Transport(_) => ErrorKind::Transport,
            Self::ResponseRead(_) => ErrorKind::ResponseRead,
            Self::CookieParse(_) => ErrorKind::CookieParse,
        }
    }

    /// HTTP-analog status code
    pub fn code(&self) -> u16 {
        500
    }
}

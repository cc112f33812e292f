//! # wirecall - HTTP Transaction Engine
//!
//! Executes stored HTTP API requests and records what came back.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  build   ┌──────────────┐  execute  ┌──────────┐
//! │   Request   │─────────►│ wire request │──────────►│  server  │
//! │  (domain)   │          └──────────────┘           └────┬─────┘
//! └─────────────┘                                          │
//!        ▲                                                 ▼
//!        │ replay     ┌─────────────┐  materialize  ┌──────────────┐
//! ┌──────┴──────┐     │  Response   │◄──────────────│  wire reply  │
//! │ Repository  │     │  (domain)   │               └──────────────┘
//! └─────────────┘     └─────────────┘
//! ```
//!
//! - [`collection`]: generic keyed container used to reshape collections
//! - [`domain`]: requests, responses, headers, cookies and bodies
//! - [`client`]: the synchronous transaction engine
//! - [`repository`]: request storage
//! - [`config`]: profile-based transport settings

pub mod client;
pub mod cmd_args;
pub mod collection;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;

// Re-export main types for easy access
pub use client::{ClientConfig, Clock, HttpClient, SystemClock};
pub use collection::CollectionMap;
pub use domain::{
    parse_cookie, Body, ContentType, Cookie, CookieError, Cookies, Header, Headers, Request,
    Response,
};
pub use error::{ApiError, ErrorKind};
pub use repository::{JsonFileRepository, MemoryRepository, RepositoryError, RequestRepository};

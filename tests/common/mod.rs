//! Common test utilities and infrastructure
//!
//! This module provides shared functionality for integration tests including:
//! - A one-shot loopback HTTP server replying with canned bytes
//! - A stepping clock for deterministic timing

#![allow(dead_code)]

pub mod clock;
pub mod server;

// Re-export commonly used items
#[allow(unused_imports)]
pub use clock::SteppingClock;
#[allow(unused_imports)]
pub use server::{http_reply, refused_address, serve_once, CapturedRequest, TestServer};

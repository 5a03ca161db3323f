//! Centralized HTTP client for PricePred
//!
//! Provides a configurable HTTP client wrapper for the PricePred crates.
//!
//! ## Features
//!
//! - **Configurable**: Timeouts, user-agent, redirect policy
//! - **Uniform errors**: Network failures and non-2xx statuses surface as `HttpError`
//! - **Connection pooling**: Managed by underlying reqwest client
//! - **Testing support**: Easy mocking with wiremock

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpClient;
pub use config::HttpConfig;
pub use error::{HttpError, Result};

/// Re-export commonly used types
pub use reqwest::{header, Method, Response, StatusCode};

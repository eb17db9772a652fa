//! HTTP client utilities
//!
//! Provides a reqwest::Client configured with a timeout and a versioned
//! user agent. System proxy env vars (HTTP_PROXY / HTTPS_PROXY / NO_PROXY)
//! are honored by reqwest's default proxy handling.

use reqwest::Client;
use std::time::Duration;

/// Build a reqwest Client with the given timeout
pub fn client_with_timeout(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("sociona-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

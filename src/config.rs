//! Process configuration
//!
//! The environment is read exactly once at startup; the resulting [`Config`]
//! is passed by reference into the API client so the core stays testable with
//! injected fake configuration.

use crate::error::AppError;

/// Production endpoint used when `SOCIONA_API_BASE` is not set
pub const DEFAULT_API_BASE: &str = "https://api.sociona.com/api/v1";

/// Startup configuration for the Sociona API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the Sociona API
    pub api_key: String,
    /// Base URL endpoints are joined onto
    pub api_base: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into(),
        }
    }

    /// Build configuration from the process environment
    ///
    /// `SOCIONA_API_KEY` is required; a missing or empty value is a fatal
    /// startup condition. `SOCIONA_API_BASE` optionally overrides the
    /// production endpoint.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var("SOCIONA_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("SOCIONA_API_KEY environment variable is required".to_string())
            })?;

        let api_base = std::env::var("SOCIONA_API_BASE")
            .ok()
            .filter(|base| !base.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self { api_key, api_base })
    }
}

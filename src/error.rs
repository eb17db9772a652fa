//! Error types and handling for the Sociona MCP server

use thiserror::Error;

/// Application error taxonomy
///
/// Variants whose message travels back to the MCP client verbatim (upstream
/// API failures, account resolution) display their payload without a prefix,
/// so the client sees exactly what the upstream reported.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Config(String),
    /// Upstream API failure; carries the extracted upstream message
    #[error("{0}")]
    Api(String),
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
    /// No connected account for the requested platform
    #[error("{0}")]
    AccountNotFound(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for MCP responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Config(_) => "config_error",
            AppError::Api(_) => "api_error",
            AppError::MalformedResponse(_) => "malformed_response",
            AppError::AccountNotFound(_) => "account_not_found",
            AppError::UnknownTool(_) => "unknown_tool",
            AppError::Timeout(_) => "timeout",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Convert anyhow::Error to AppError
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Convert reqwest::Error to AppError
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else if err.is_connect() || err.is_request() {
            AppError::Api(format!("Request failed: {}", err))
        } else if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

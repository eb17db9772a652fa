//! Sociona API integration
//!
//! One authenticated HTTP client plus the typed request/response schemas the
//! upstream publishing API speaks.

pub mod client;
pub mod types;

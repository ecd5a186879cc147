//! Error types module.
//!
//! This module defines the error types used throughout the dnshog
//! application. It uses `thiserror` for structured error handling and
//! provides a custom `Result` type alias for convenience.

use thiserror::Error;

/// A specialized `Result` type for dnshog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the dnshog application.
///
/// Each variant represents a different category of error that can occur
/// while probing resolvers or rendering results.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON serialization error (JSON output format)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A DNS lookup against a specific provider failed
    /// (timeout, SERVFAIL, NXDOMAIN, network unreachable).
    #[error("resolution failed for {provider}: {source}")]
    Resolution {
        /// Name of the provider whose lookup failed
        provider: String,
        /// Underlying resolver error
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },

    /// Parse error (malformed nameserver address)
    #[error("parse error: {0}")]
    Parse(String),

    /// Host failed the domain-name syntax check
    #[error("invalid host: {0}")]
    InvalidHost(String),
}

impl Error {
    /// Create a resolution error for the given provider.
    #[must_use]
    pub fn resolution(
        provider: impl Into<String>,
        source: trust_dns_resolver::error::ResolveError,
    ) -> Self {
        Self::Resolution {
            provider: provider.into(),
            source,
        }
    }

    /// Create a new parse error with a message.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

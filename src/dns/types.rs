//! DNS types and data structures.
//!
//! This module provides the core types used for resolver configuration
//! and probe results.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// A public DNS provider with its pair of nameserver addresses.
///
/// Each provider ships a primary and a secondary resolver address; the
/// secondary exists for resolver-level failover and is handed to the
/// underlying resolver alongside the primary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Provider name (e.g., "Cloudflare", "Google")
    pub name: String,
    /// Nameserver IP addresses (primary, secondary)
    pub addresses: [String; 2],
}

impl ResolverConfig {
    /// Create a new resolver configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = ResolverConfig::new("Cloudflare", ["1.1.1.1", "1.0.0.1"]);
    /// ```
    pub fn new(name: impl Into<String>, addresses: [&str; 2]) -> Self {
        Self {
            name: name.into(),
            addresses: [addresses[0].to_string(), addresses[1].to_string()],
        }
    }

    /// Parse both address strings into `IpAddr`s.
    ///
    /// # Returns
    ///
    /// Returns `Some([primary, secondary])` if both parse, `None` otherwise.
    #[must_use]
    pub fn ip_addrs(&self) -> Option<[IpAddr; 2]> {
        let primary = self.addresses[0].parse().ok()?;
        let secondary = self.addresses[1].parse().ok()?;
        Some([primary, secondary])
    }

    /// The primary nameserver address string.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.addresses[0]
    }
}

/// Result of one timed DNS lookup against one provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeResult {
    /// Name of the provider that was probed
    pub provider: String,
    /// Elapsed lookup time in milliseconds, rounded to two decimals
    pub duration_ms: f64,
}

impl ProbeResult {
    /// Create a probe result, rounding the duration to two decimal places.
    #[must_use]
    pub fn new(provider: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            provider: provider.into(),
            duration_ms: round2(duration_ms),
        }
    }

    /// Duration formatted for display, e.g. `"12.34 ms"`.
    #[must_use]
    pub fn duration_text(&self) -> String {
        format!("{:.2} ms", self.duration_ms)
    }
}

/// Round a millisecond value to two decimal places.
#[must_use]
pub fn round2(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

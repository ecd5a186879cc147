//! dnshog - DNS resolution latency comparison tool.
//!
//! This crate provides both a library API and a CLI tool for measuring
//! how long a hostname takes to resolve against a fixed set of public
//! DNS providers (Cloudflare, Google, Quad9, OpenDNS, AdGuard,
//! SafeServe) and presenting the results side by side.
//!
//! # Library Usage
//!
//! ```ignore
//! use dnshog::{dns, Prober};
//!
//! let prober = Prober::new();
//! for config in dns::registry::resolvers() {
//!     let result = prober.probe("example.com", &config).await?;
//!     println!("{}: {}", result.provider, result.duration_text());
//! }
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # Probe all providers for a host
//! dnshog ping --host example.com
//! dnshog ping -h example.com --format json
//!
//! # Version banner (default command)
//! dnshog info
//! ```

pub mod cli;
pub mod dns;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use dns::types::{ProbeResult, ResolverConfig};
pub use dns::Prober;
pub use error::{Error, Result};

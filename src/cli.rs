//! Command-line interface (CLI) argument parsing module.
//!
//! This module provides CLI argument parsing using `clap`, plus the
//! domain-name syntax check applied to the ping target before any
//! probe runs.

use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// CLI argument parser using clap derive macro.
///
/// # Example
///
/// ```ignore
/// let cli = Cli::parse();
/// match cli.command {
///     Some(Commands::Ping { host, .. }) => { /* ... */ }
///     Some(Commands::Info) | None => { /* version banner */ }
/// }
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "dnshog",
    version,
    about = "Compare DNS resolution latency across public resolvers",
    infer_subcommands = true
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for the ping command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format (default, human-readable)
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated)
    Tsv,
}

impl OutputFormat {
    /// Get all available output format names.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        &["table", "json", "csv", "tsv"]
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!(
                "Unknown format: {}. Valid options are: {:?}",
                s,
                Self::names()
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

/// Available commands for the dnshog CLI.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show version information
    ///
    /// Prints the version banner. This is the default command when no
    /// subcommand is given.
    Info,

    /// Measure DNS resolution latency for a host
    ///
    /// Probes each registered public resolver in turn with a timed
    /// A-record lookup and prints a comparison table.
    // -h is taken by --host here, so the help flag is long-only.
    #[command(disable_help_flag = true)]
    Ping {
        /// Host to ping
        #[arg(short = 'h', long)]
        host: String,

        /// Delay between probes in milliseconds
        #[arg(long, default_value = "1000")]
        delay: u64,

        /// Timeout per probe in seconds
        #[arg(long, default_value = "5")]
        timeout: u64,

        /// Print help
        #[arg(long, action = ArgAction::HelpLong)]
        help: Option<bool>,
    },
}

/// Maximum total length of a domain name.
const MAX_DOMAIN_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// Check `host` against domain-name syntax.
///
/// Returns one message per issue found; an empty vector means the host
/// is acceptable. Mirrors the usual domain pattern: dot-separated
/// labels of alphanumerics and interior hyphens, at least two labels,
/// with an alphabetic top-level label of two or more characters.
#[must_use]
pub fn validate_host(host: &str) -> Vec<String> {
    let mut issues = Vec::new();

    if host.is_empty() {
        issues.push("host must not be empty".to_string());
        return issues;
    }

    if host.len() > MAX_DOMAIN_LEN {
        issues.push(format!("host exceeds {MAX_DOMAIN_LEN} characters"));
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 {
        issues.push("host must contain at least two dot-separated labels".to_string());
    }

    for label in &labels {
        if label.is_empty() {
            issues.push("host contains an empty label".to_string());
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            issues.push(format!("label '{label}' exceeds {MAX_LABEL_LEN} characters"));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            issues.push(format!("label '{label}' contains invalid characters"));
        } else if label.starts_with('-') || label.ends_with('-') {
            issues.push(format!("label '{label}' must not start or end with a hyphen"));
        }
    }

    if let Some(tld) = labels.last() {
        if !tld.is_empty()
            && (tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()))
        {
            issues.push(format!(
                "top-level label '{tld}' must be at least two alphabetic characters"
            ));
        }
    }

    issues
}

/// Parse CLI arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

//! dnshog - DNS resolution latency comparison tool.
//!
//! Binary entry point for the dnshog CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use dnshog::cli::{self, Commands, OutputFormat};
use dnshog::dns::{registry, Prober};
use dnshog::error::{Error, Result};
use dnshog::report;
use std::time::Duration;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `quiet` - Enable error-level only logging
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time())
        .init();
}

/// Print the version banner.
fn run_info() {
    println!("DNSHog CLI - Version {}", env!("CARGO_PKG_VERSION"));
}

/// Probe every registered resolver for `host` and print the results.
///
/// Validates the host first; on validation failure each issue is
/// reported on its own line and no probe runs.
///
/// # Arguments
///
/// * `host` - Hostname to resolve
/// * `delay_ms` - Pacing delay between probes
/// * `timeout_secs` - Per-probe timeout budget
/// * `format` - Output format
async fn run_ping(host: String, delay_ms: u64, timeout_secs: u64, format: OutputFormat) -> Result<()> {
    let issues = cli::validate_host(&host);
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("- [host] {issue}");
        }
        return Err(Error::InvalidHost(host));
    }

    let prober = Prober::with_settings(
        Duration::from_secs(timeout_secs),
        Duration::from_millis(delay_ms),
    );

    let results = prober
        .run_all(&host, &registry::resolvers(), Some(|idx: usize, total: usize, config: &dnshog::ResolverConfig| {
            print!(
                "\rProbing [{}/{}] {} ({})          ",
                idx + 1,
                total,
                config.name,
                config.primary()
            );
            let _ = std::io::Write::flush(&mut std::io::stdout());
        }))
        .await?;

    println!("\n");

    match format {
        OutputFormat::Table => print!("{}", report::render_table(&results)),
        OutputFormat::Json => println!("{}", report::render_json(&results)?),
        OutputFormat::Csv => print!("{}", report::render_csv(&results)),
        OutputFormat::Tsv => print!("{}", report::render_tsv(&results)),
    }

    Ok(())
}

/// Main entry point for the dnshog CLI application.
#[tokio::main]
async fn main() {
    let cli = cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    tracing::debug!("dnshog starting...");

    let result = match cli.command {
        Some(Commands::Ping {
            host,
            delay,
            timeout,
            help: _,
        }) => run_ping(host, delay, timeout, cli.format).await,

        Some(Commands::Info) | None => {
            run_info();
            Ok(())
        }
    };

    if let Err(e) = result {
        // Validation issues were already reported line by line.
        if !matches!(e, Error::InvalidHost(_)) {
            eprintln!("An unexpected error occurred: {e}");
        }
        std::process::exit(1);
    }
}

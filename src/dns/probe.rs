//! Timed DNS resolution probes.
//!
//! This module provides the latency-probing core: issuing an A-record
//! lookup against a specific provider's nameservers and timing it with
//! a monotonic clock.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]

use crate::dns::types::{ProbeResult, ResolverConfig};
use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use trust_dns_resolver::config::{self, NameServerConfigGroup, ResolverOpts};
use trust_dns_resolver::proto::rr::RecordType;
use trust_dns_resolver::TokioAsyncResolver;

/// Default timeout for each lookup in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default pacing delay between probes in milliseconds.
const DEFAULT_PACING_MS: u64 = 1000;

/// DNS latency prober.
///
/// Issues one timed A-record lookup per provider. Each probe builds its
/// own resolver client bound to that provider's nameserver pair, so
/// probes share no state.
///
/// # Example
///
/// ```ignore
/// let prober = Prober::new();
/// let config = ResolverConfig::new("Cloudflare", ["1.1.1.1", "1.0.0.1"]);
/// let result = prober.probe("example.com", &config).await?;
/// println!("{}: {} ms", result.provider, result.duration_ms);
/// ```
pub struct Prober {
    timeout: Duration,
    pacing: Duration,
}

impl Prober {
    /// Create a new `Prober` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
        }
    }

    /// Create a new `Prober` with custom settings.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Timeout budget for each lookup
    /// * `pacing` - Delay inserted between consecutive probes
    #[must_use]
    pub fn with_settings(timeout: Duration, pacing: Duration) -> Self {
        Self { timeout, pacing }
    }

    /// Resolver options for one probe: no retries, no caching, and one
    /// request in flight, so the secondary nameserver is a sequential
    /// fallback rather than a raced competitor and the elapsed time
    /// reflects a single round-trip against the primary.
    fn resolver_opts(&self) -> ResolverOpts {
        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        opts.attempts = 0;
        opts.num_concurrent_reqs = 1;
        opts.cache_size = 0;
        opts
    }

    /// Probe a single provider: time one A-record lookup for `host`.
    ///
    /// The resolver is configured with the provider's primary and
    /// secondary nameservers, no retries, and no response caching, so
    /// the elapsed time reflects one real network round-trip.
    ///
    /// # Errors
    ///
    /// Returns `Error::Resolution` if the lookup fails (timeout,
    /// SERVFAIL, NXDOMAIN, unreachable), carrying the provider name and
    /// the underlying cause.
    pub async fn probe(&self, host: &str, resolver: &ResolverConfig) -> Result<ProbeResult> {
        let ips = resolver.ip_addrs().ok_or_else(|| {
            Error::parse(format!("invalid nameserver address for {}", resolver.name))
        })?;

        let upstream = config::ResolverConfig::from_parts(
            None,
            vec![],
            NameServerConfigGroup::from_ips_clear(&ips, 53, true),
        );

        let client = TokioAsyncResolver::tokio(upstream, self.resolver_opts())
            .map_err(|e| Error::resolution(&resolver.name, e))?;

        // Trailing dot prevents search-domain suffixing.
        let fqdn = if host.ends_with('.') {
            host.to_string()
        } else {
            format!("{host}.")
        };

        let start = Instant::now();
        client
            .lookup(fqdn.as_str(), RecordType::A)
            .await
            .map_err(|e| Error::resolution(&resolver.name, e))?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            "{} ({}): {:.2} ms",
            resolver.name,
            resolver.primary(),
            elapsed_ms
        );

        Ok(ProbeResult::new(&resolver.name, elapsed_ms))
    }

    /// Probe the given providers sequentially, preserving input order.
    ///
    /// A pacing sleep separates consecutive probes. The first failing
    /// lookup aborts the run and propagates its error; no partial
    /// results are returned. Pass `registry::resolvers()` for the
    /// standard provider set.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname to resolve
    /// * `resolvers` - Provider configurations to probe
    /// * `progress` - Optional callback invoked before each probe with
    ///   `(index, total, config)`
    pub async fn run_all(
        &self,
        host: &str,
        resolvers: &[ResolverConfig],
        progress: Option<impl Fn(usize, usize, &ResolverConfig)>,
    ) -> Result<Vec<ProbeResult>> {
        let total = resolvers.len();
        let mut results = Vec::with_capacity(total);

        for (idx, config) in resolvers.iter().enumerate() {
            if let Some(ref cb) = progress {
                cb(idx, total, config);
            }

            let result = self.probe(host, config).await?;
            results.push(result);

            if idx + 1 < total {
                tokio::time::sleep(self.pacing).await;
            }
        }

        Ok(results)
    }
}

impl Default for Prober {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::registry;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_resolver_opts_single_round_trip() {
        let prober = Prober::with_settings(
            Duration::from_secs(3),
            Duration::from_millis(100),
        );
        let opts = prober.resolver_opts();

        assert_eq!(opts.timeout, Duration::from_secs(3));
        assert_eq!(opts.attempts, 0);
        assert_eq!(opts.num_concurrent_reqs, 1);
        assert_eq!(opts.cache_size, 0);
    }

    #[tokio::test]
    async fn test_run_all_aborts_on_first_failure() {
        // TEST-NET addresses never answer; a short timeout keeps the
        // probe failure quick and offline.
        let prober = Prober::with_settings(
            Duration::from_millis(200),
            Duration::from_millis(1),
        );
        let configs = vec![
            ResolverConfig::new("First", ["192.0.2.1", "192.0.2.2"]),
            ResolverConfig::new("Second", ["192.0.2.3", "192.0.2.4"]),
            ResolverConfig::new("Third", ["192.0.2.5", "192.0.2.6"]),
        ];

        let probed = AtomicUsize::new(0);
        let result = prober
            .run_all(
                "example.com",
                &configs,
                Some(|idx: usize, _total: usize, _config: &ResolverConfig| {
                    probed.store(idx + 1, Ordering::SeqCst);
                }),
            )
            .await;

        match result {
            Err(Error::Resolution { provider, .. }) => assert_eq!(provider, "First"),
            other => panic!("expected resolution failure, got {other:?}"),
        }
        // Aborted at index 0: nothing past the failing config was probed.
        assert_eq!(probed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_probe_rejects_bad_nameserver() {
        let prober = Prober::new();
        let config = ResolverConfig::new("Broken", ["not-an-ip", "1.0.0.1"]);
        let result = prober.probe("example.com", &config).await;
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn test_probe_cloudflare() {
        // Requires network access which may be unreliable in CI
        if std::env::var("CI").is_ok() {
            return;
        }

        let prober = Prober::new();
        let config = ResolverConfig::new("Cloudflare", ["1.1.1.1", "1.0.0.1"]);
        let result = prober.probe("example.com", &config).await.unwrap();

        assert_eq!(result.provider, "Cloudflare");
        assert!(result.duration_ms >= 0.0);
        // Rounded to at most two decimal places
        let scaled = result.duration_ms * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_run_all_registry_order() {
        if std::env::var("CI").is_ok() {
            return;
        }

        let prober = Prober::with_settings(
            Duration::from_secs(5),
            Duration::from_millis(10),
        );
        let results = prober
            .run_all(
                "example.com",
                &registry::resolvers(),
                None::<fn(usize, usize, &ResolverConfig)>,
            )
            .await
            .unwrap();

        let expected: Vec<_> = registry::resolvers().into_iter().map(|r| r.name).collect();
        let actual: Vec<_> = results.into_iter().map(|r| r.provider).collect();
        assert_eq!(actual, expected);
    }
}

//! Result rendering.
//!
//! Formats collected probe results as a table (default), JSON, CSV, or
//! TSV. Pure formatting, no network or timing logic.

use crate::dns::types::ProbeResult;
use crate::error::Result;
use std::fmt::Write as _;

/// Render results as a two-column table.
///
/// Columns are `dns` (provider name) and `duration` (milliseconds with
/// a `" ms"` suffix), one row per result, preserving input order.
#[must_use]
pub fn render_table(results: &[ProbeResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:<12}", "dns", "duration");
    let _ = writeln!(out, "{}", "-".repeat(25));

    for r in results {
        let _ = writeln!(out, "{:<12} {:<12}", r.provider, r.duration_text());
    }

    out
}

/// Render results as pretty-printed JSON.
pub fn render_json(results: &[ProbeResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Render results as CSV with a header row.
#[must_use]
pub fn render_csv(results: &[ProbeResult]) -> String {
    let mut out = String::from("dns,duration_ms\n");
    for r in results {
        let _ = writeln!(out, "{},{:.2}", r.provider, r.duration_ms);
    }
    out
}

/// Render results as TSV with a header row.
#[must_use]
pub fn render_tsv(results: &[ProbeResult]) -> String {
    let mut out = String::from("dns\tduration_ms\n");
    for r in results {
        let _ = writeln!(out, "{}\t{:.2}", r.provider, r.duration_ms);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_single_row() {
        let results = vec![ProbeResult::new("Cloudflare", 12.34)];
        let table = render_table(&results);

        let rows: Vec<_> = table.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("dns"));
        assert!(rows[0].contains("duration"));
        assert!(rows[2].contains("Cloudflare"));
        assert!(rows[2].contains("12.34 ms"));
    }

    #[test]
    fn test_render_table_preserves_order() {
        let results = vec![
            ProbeResult::new("Google", 8.0),
            ProbeResult::new("Quad9", 15.5),
        ];
        let table = render_table(&results);

        let google = table.find("Google").unwrap();
        let quad9 = table.find("Quad9").unwrap();
        assert!(google < quad9);
        assert!(table.contains("8.00 ms"));
        assert!(table.contains("15.50 ms"));
    }

    #[test]
    fn test_render_json() {
        let results = vec![ProbeResult::new("Cloudflare", 12.34)];
        let json = render_json(&results).unwrap();
        let parsed: Vec<ProbeResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_render_csv_tsv() {
        let results = vec![ProbeResult::new("OpenDNS", 20.1)];
        assert_eq!(render_csv(&results), "dns,duration_ms\nOpenDNS,20.10\n");
        assert_eq!(render_tsv(&results), "dns\tduration_ms\nOpenDNS\t20.10\n");
    }
}

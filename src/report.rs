//! Text and JSON reports of benchmark results

use std::fs;
use std::path::{Path, PathBuf};

use crate::benchmark::metrics::{self, Faster};
use crate::error::BenchResult;
use crate::models::BenchmarkResults;
use crate::utils::validation::file_stem_for;

/// Suffix of exported result files, kept apart from `<stem>.json` charts
const RESULTS_SUFFIX: &str = "results.json";

/// One line per candidate, `name: [t0, t1, ...]`, in candidate order
pub fn format_results(results: &BenchmarkResults) -> String {
    results
        .candidates
        .iter()
        .map(|c| format!("{}: {:?}", c.name, c.per_call_seconds))
        .collect::<Vec<_>>()
        .join("\n")
}

/// How each candidate compares to the baseline at the largest size
pub fn format_summary(results: &BenchmarkResults) -> String {
    let mut lines = vec![format!(
        "{} (valid: {}, sizes: 10^{:?})",
        results.title, results.valid, results.size_powers
    )];

    for comparison in metrics::compare_at_largest(results) {
        let verdict = match comparison.faster {
            Faster::Candidate => "faster than",
            Faster::Baseline => "slower than",
            Faster::Equal => "as fast as",
        };
        lines.push(format!(
            "  {} is {} {} at 10^{} ({:.2}x, {:+.1}%)",
            comparison.candidate,
            verdict,
            comparison.baseline,
            comparison.size_power,
            comparison.ratio,
            comparison.time_diff_percent
        ));
    }

    lines.join("\n")
}

/// Write `results` as JSON to `<dir>/<title>.results.json`.
///
/// `dir` must already exist.
pub fn export_results(results: &BenchmarkResults, dir: &Path) -> BenchResult<PathBuf> {
    let path = dir.join(format!("{}.{}", file_stem_for(&results.title), RESULTS_SUFFIX));
    let json = serde_json::to_string_pretty(results)?;
    fs::write(&path, json)?;
    Ok(path)
}

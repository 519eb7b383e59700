//! Relative timings and comparisons

use crate::models::{BenchmarkResults, CandidateTimings};

/// Divide `series` elementwise by `baseline`
pub fn relative_series(series: &[f64], baseline: &[f64]) -> Vec<f64> {
    series
        .iter()
        .zip(baseline)
        .map(|(value, base)| value / base)
        .collect()
}

/// Every candidate's timings normalized by the baseline candidate's.
///
/// The baseline's own series comes out as all ones (for nonzero timings).
pub fn relative_results(results: &BenchmarkResults) -> Vec<CandidateTimings> {
    let Some(baseline) = results.baseline() else {
        return Vec::new();
    };

    results
        .candidates
        .iter()
        .map(|candidate| {
            CandidateTimings::new(
                candidate.name.clone(),
                relative_series(&candidate.per_call_seconds, &baseline.per_call_seconds),
            )
        })
        .collect()
}

/// Largest finite ratio across all relative series
pub fn max_ratio(relative: &[CandidateTimings]) -> Option<f64> {
    relative
        .iter()
        .flat_map(|c| c.per_call_seconds.iter().copied())
        .filter(|v| v.is_finite())
        .fold(None, |max, v| Some(max.map_or(v, |m: f64| m.max(v))))
}

/// Which side of a comparison was faster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faster {
    Baseline,
    Candidate,
    Equal,
}

/// Performance comparison of one candidate against the baseline at one size
#[derive(Debug, Clone)]
pub struct PerformanceComparison {
    pub candidate: String,
    pub baseline: String,
    pub size_power: u32,
    /// candidate time / baseline time
    pub ratio: f64,
    pub time_diff_percent: f64,
    pub faster: Faster,
}

impl PerformanceComparison {
    /// Compare two timings measured at the same size
    pub fn compare(
        baseline: &CandidateTimings,
        candidate: &CandidateTimings,
        position: usize,
        size_power: u32,
    ) -> Option<Self> {
        let base = *baseline.per_call_seconds.get(position)?;
        let value = *candidate.per_call_seconds.get(position)?;

        let time_diff_percent = if base > 0.0 {
            ((value - base) / base) * 100.0
        } else {
            0.0
        };

        let faster = if (value - base).abs() <= f64::EPSILON * base.abs().max(1.0) {
            Faster::Equal
        } else if base < value {
            Faster::Baseline
        } else {
            Faster::Candidate
        };

        Some(Self {
            candidate: candidate.name.clone(),
            baseline: baseline.name.clone(),
            size_power,
            ratio: value / base,
            time_diff_percent,
            faster,
        })
    }
}

/// Compare every non-baseline candidate to the baseline at the largest size
pub fn compare_at_largest(results: &BenchmarkResults) -> Vec<PerformanceComparison> {
    let (Some(baseline), Some(&size_power)) = (results.baseline(), results.size_powers.last())
    else {
        return Vec::new();
    };
    let position = results.size_powers.len() - 1;

    results
        .candidates
        .iter()
        .skip(1)
        .filter_map(|c| PerformanceComparison::compare(baseline, c, position, size_power))
        .collect()
}

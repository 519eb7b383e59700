//! Timed trials

use std::hint::black_box;
use std::time::{Duration, Instant};

use super::Candidate;
use crate::error::BenchResult;
use crate::models::Table;

/// Invoke `candidate` back-to-back on the same table and return the elapsed
/// monotonic time. Runs at least once even when `invocations` is zero.
pub fn time_invocations(
    candidate: &Candidate,
    table: &mut Table,
    invocations: u64,
) -> BenchResult<Duration> {
    let start = Instant::now();
    for _ in 0..invocations.max(1) {
        black_box(candidate.call(table)?);
    }
    Ok(start.elapsed())
}

/// Mean seconds per call
pub fn per_call_seconds(elapsed: Duration, invocations: u64) -> f64 {
    elapsed.as_secs_f64() / invocations.max(1) as f64
}

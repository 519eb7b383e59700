//! Benchmark execution engine
//!
//! The `Benchmarker` owns one comparison study:
//!
//! 1. **Probe** (`validation.rs`): run every candidate once at the smallest
//!    size and check that they agree.
//! 2. **Time** (`timing.rs`): for each size, generate a fresh table and call
//!    each candidate back-to-back, reporting the mean time per call.
//! 3. **Compare** (`metrics.rs`): normalize every series by the baseline
//!    candidate for the relative chart.

pub mod candidate;
pub mod generator;
pub mod metrics;
pub mod params;
pub mod runner;
pub mod timing;
pub mod validation;

pub use candidate::{Candidate, CandidateFn};
pub use generator::{GeneratorFn, TableGenerator};
pub use metrics::PerformanceComparison;
pub use params::BenchmarkParams;
pub use runner::{Benchmarker, Phase};

//! framebench - Comparative micro-benchmarking of table operations
//!
//! This library times several candidate implementations of the same table
//! operation across a schedule of growing input sizes, checks up front that
//! the candidates agree, and reports the results as text, JSON and charts.
//!
//! # Features
//!
//! - Equivalence probe at the smallest size before any timing
//! - Power-of-ten size and repetition schedules
//! - Absolute and baseline-relative charts (SVG or JSON)
//! - Bundled studies for common column operations
//!
//! # Architecture
//!
//! - **Models**: tables, candidate outcomes, schedules and results
//! - **Benchmark**: candidates, generators and the `Benchmarker` itself
//! - **Chart / Report**: pure layout plus renderers and exporters
//! - **Studies**: ready-made parameter sets used by the binary

pub mod benchmark;
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod report;
pub mod studies;
pub mod utils;

// Re-export commonly used types
pub use benchmark::{BenchmarkParams, Benchmarker, Candidate, TableGenerator};
pub use config::Config;
pub use error::{BenchError, BenchResult};
pub use models::{BenchmarkResults, Outcome, Table};

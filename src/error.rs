//! Custom error types and handling
//!
//! This module defines the harness error type. Candidate functions and table
//! generators are user code and report failures through `anyhow`; the harness
//! wraps those into the typed variants below.

/// Harness-wide error type
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    // Parameter errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Size schedule is empty")]
    EmptySchedule,

    #[error("Schedule length mismatch: {sizes} size powers vs {repetitions} repetition powers")]
    ScheduleMismatch { sizes: usize, repetitions: usize },

    #[error("Schedule power 10^{power} does not fit in usize")]
    ScheduleOverflow { power: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // User code errors
    #[error("Table generator failed: {0}")]
    Generator(String),

    #[error("Candidate '{name}' failed: {message}")]
    Candidate { name: String, message: String },

    // Lifecycle errors
    #[error("Results are not available before benchmarking")]
    NotBenchmarked,

    #[error("Benchmarks have already been run for this instance")]
    AlreadyBenchmarked,

    // Output errors
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl BenchError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::EmptySchedule => "EMPTY_SCHEDULE",
            Self::ScheduleMismatch { .. } => "SCHEDULE_MISMATCH",
            Self::ScheduleOverflow { .. } => "SCHEDULE_OVERFLOW",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Generator(_) => "GENERATOR_ERROR",
            Self::Candidate { .. } => "CANDIDATE_ERROR",
            Self::NotBenchmarked => "NOT_BENCHMARKED",
            Self::AlreadyBenchmarked => "ALREADY_BENCHMARKED",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Wrap a failure raised by a candidate function
    pub fn candidate(name: &str, err: anyhow::Error) -> Self {
        Self::Candidate {
            name: name.to_string(),
            message: format!("{:#}", err),
        }
    }

    /// Wrap a failure raised by the table generator
    pub fn generator(size: usize, err: anyhow::Error) -> Self {
        Self::Generator(format!("size {}: {:#}", size, err))
    }
}

// Implement From for common error types
impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for BenchError {
    fn from(err: validator::ValidationErrors) -> Self {
        BenchError::Validation(err.to_string())
    }
}

impl From<crate::config::ConfigError> for BenchError {
    fn from(err: crate::config::ConfigError) -> Self {
        BenchError::Configuration(err.to_string())
    }
}

/// Result type alias using BenchError
pub type BenchResult<T> = Result<T, BenchError>;

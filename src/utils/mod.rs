//! Utility functions

pub mod time;
pub mod validation;

pub use time::{format_seconds, now_utc};
pub use validation::{file_stem_for, sanitize_string};

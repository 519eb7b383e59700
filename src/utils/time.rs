//! Time utilities

use chrono::{DateTime, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format a per-call time in seconds as a human-readable string
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return format!("{}s", seconds);
    }

    if seconds < 1e-3 {
        format!("{:.2}µs", seconds * 1e6)
    } else if seconds < 1.0 {
        format!("{:.2}ms", seconds * 1e3)
    } else if seconds < 60.0 {
        format!("{:.2}s", seconds)
    } else {
        let whole = seconds as u64;
        format!("{}m {}s", whole / 60, whole % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0000025), "2.50µs");
        assert_eq!(format_seconds(0.0125), "12.50ms");
        assert_eq!(format_seconds(1.5), "1.50s");
        assert_eq!(format_seconds(65.0), "1m 5s");
    }

    #[test]
    fn test_format_seconds_passes_through_odd_values() {
        assert_eq!(format_seconds(f64::INFINITY), "infs");
        assert_eq!(format_seconds(-1.0), "-1s");
    }
}

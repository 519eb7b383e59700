//! Benchmark result models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::schedule::Schedule;
use crate::utils::time::now_utc;

/// Per-call timings of one candidate, one entry per schedule entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateTimings {
    /// Candidate function name
    pub name: String,
    /// Mean seconds per call, in schedule order
    pub per_call_seconds: Vec<f64>,
}

impl CandidateTimings {
    pub fn new(name: impl Into<String>, per_call_seconds: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            per_call_seconds,
        }
    }
}

/// Results of one comparison study
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResults {
    pub title: String,
    pub size_powers: Vec<u32>,
    pub loop_powers: Vec<u32>,
    /// Outcome of the equivalence probe at construction
    pub valid: bool,
    /// Timings in candidate order; the first entry is the baseline
    pub candidates: Vec<CandidateTimings>,
    pub generated_at: DateTime<Utc>,
}

impl BenchmarkResults {
    pub fn new(
        title: &str,
        schedule: &Schedule,
        valid: bool,
        candidates: Vec<CandidateTimings>,
    ) -> Self {
        Self {
            title: title.to_string(),
            size_powers: schedule.size_powers(),
            loop_powers: schedule.loop_powers(),
            valid,
            candidates,
            generated_at: now_utc(),
        }
    }

    /// The first-listed candidate
    pub fn baseline(&self) -> Option<&CandidateTimings> {
        self.candidates.first()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_keep_candidate_order() {
        let schedule = Schedule::new(&[2, 3], &[1, 0], true).unwrap();
        let results = BenchmarkResults::new(
            "Sum",
            &schedule,
            true,
            vec![
                CandidateTimings::new("b", vec![2.0, 4.0]),
                CandidateTimings::new("a", vec![1.0, 2.0]),
            ],
        );

        assert_eq!(results.baseline().unwrap().name, "b");
        assert_eq!(results.candidates[1].per_call_seconds, vec![1.0, 2.0]);
        assert_eq!(results.size_powers, vec![2, 3]);
        assert_eq!(results.loop_powers, vec![1, 0]);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_results_serialize() {
        let schedule = Schedule::new(&[2], &[0], true).unwrap();
        let results = BenchmarkResults::new(
            "Sum",
            &schedule,
            false,
            vec![CandidateTimings::new("a", vec![0.5])],
        );
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["title"], "Sum");
        assert_eq!(json["valid"], false);
        assert_eq!(json["candidates"][0]["per_call_seconds"][0], 0.5);
    }
}

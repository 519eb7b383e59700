//! Benchmark parameter record

use validator::{Validate, ValidationError};

use super::{Candidate, TableGenerator};
use crate::constants::MAX_TITLE_LENGTH;

/// Everything needed to construct a [`super::Benchmarker`]
#[derive(Debug, Validate)]
pub struct BenchmarkParams {
    /// Produces a fresh input table per size
    pub generator: TableGenerator,

    /// Implementations under comparison; the first is the baseline
    #[validate(custom(function = "validate_candidates"))]
    pub candidates: Vec<Candidate>,

    /// Study title, also used as the export file name
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    /// Table sizes as powers of ten (defaults when `None`)
    pub size_powers: Option<Vec<u32>>,

    /// Invocation counts as powers of ten (defaults when `None`)
    pub loop_powers: Option<Vec<u32>>,

    /// Measure the largest size with a single call
    pub largest_single_test: bool,
}

impl BenchmarkParams {
    pub fn new(
        title: impl Into<String>,
        generator: TableGenerator,
        candidates: Vec<Candidate>,
    ) -> Self {
        Self {
            generator,
            candidates,
            title: title.into(),
            size_powers: None,
            loop_powers: None,
            largest_single_test: true,
        }
    }

    pub fn size_powers(mut self, powers: &[u32]) -> Self {
        self.size_powers = Some(powers.to_vec());
        self
    }

    pub fn loop_powers(mut self, powers: &[u32]) -> Self {
        self.loop_powers = Some(powers.to_vec());
        self
    }

    pub fn largest_single_test(mut self, single: bool) -> Self {
        self.largest_single_test = single;
        self
    }
}

fn validate_candidates(candidates: &[Candidate]) -> Result<(), ValidationError> {
    if candidates.is_empty() {
        let mut err = ValidationError::new("empty_candidates");
        err.message = Some("At least one candidate function is required".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Outcome, Table};

    fn noop(_: &mut Table) -> anyhow::Result<Outcome> {
        Ok(Outcome::Unit)
    }

    #[test]
    fn test_defaults() {
        let params = BenchmarkParams::new(
            "Noop",
            TableGenerator::random_ints(&["A"]),
            vec![crate::candidate!(noop)],
        );
        assert!(params.largest_single_test);
        assert!(params.size_powers.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let params = BenchmarkParams::new(
            "Noop",
            TableGenerator::random_ints(&["A"]),
            vec![crate::candidate!(noop)],
        )
        .size_powers(&[2, 3])
        .loop_powers(&[1, 0])
        .largest_single_test(false);

        assert_eq!(params.size_powers.as_deref(), Some(&[2, 3][..]));
        assert_eq!(params.loop_powers.as_deref(), Some(&[1, 0][..]));
        assert!(!params.largest_single_test);
    }

    #[test]
    fn test_rejects_empty_candidates_and_title() {
        let no_candidates =
            BenchmarkParams::new("Noop", TableGenerator::random_ints(&["A"]), vec![]);
        let errors = no_candidates.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("candidates"));

        let no_title = BenchmarkParams::new(
            "",
            TableGenerator::random_ints(&["A"]),
            vec![crate::candidate!(noop)],
        );
        assert!(no_title.validate().is_err());
    }
}

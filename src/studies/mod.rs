//! Bundled comparison studies
//!
//! Each study module exposes `params(seed)` building a ready-to-run
//! [`BenchmarkParams`]. The binary looks studies up through [`all`] and
//! [`by_name`].

pub mod create_column;
pub mod drop_duplicates;
pub mod loop_rows;
pub mod mean;
pub mod median;
pub mod prod;
pub mod selection;
pub mod sort;
pub mod sum;
pub mod unique;

use anyhow::Context;

use crate::benchmark::BenchmarkParams;
use crate::models::Table;

/// A named, buildable study
#[derive(Debug, Clone, Copy)]
pub struct Study {
    pub name: &'static str,
    pub build: fn(Option<u64>) -> BenchmarkParams,
}

impl Study {
    /// Build the study's parameters, seeded if `seed` is given
    pub fn params(&self, seed: Option<u64>) -> BenchmarkParams {
        (self.build)(seed)
    }
}

const STUDIES: &[Study] = &[
    Study { name: "create_column", build: create_column::params },
    Study { name: "drop_duplicates", build: drop_duplicates::params },
    Study { name: "loop_rows", build: loop_rows::params },
    Study { name: "mean", build: mean::params },
    Study { name: "median", build: median::params },
    Study { name: "prod", build: prod::params },
    Study { name: "selection", build: selection::params },
    Study { name: "sort", build: sort::params },
    Study { name: "sum", build: sum::params },
    Study { name: "unique", build: unique::params },
];

/// Every bundled study, in alphabetical order
pub fn all() -> &'static [Study] {
    STUDIES
}

/// Look a study up by its registry name
pub fn by_name(name: &str) -> Option<&'static Study> {
    STUDIES.iter().find(|s| s.name == name)
}

/// Borrow an integer column, failing with a readable message otherwise
pub(crate) fn int_column<'a>(table: &'a Table, name: &str) -> anyhow::Result<&'a [i64]> {
    let column = table.require(name)?;
    column.as_ints().with_context(|| {
        format!("column '{}' is {}, expected int64", name, column.dtype())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::Benchmarker;
    use crate::models::Column;
    use crate::utils::validation::file_stem_for;

    #[test]
    fn test_registry_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("sum").unwrap().name, "sum");
        assert!(by_name("nope").is_none());
    }

    #[test]
    fn test_int_column_rejects_floats() {
        let table = Table::new(vec![("A".to_string(), Column::Float(vec![1.0]))]).unwrap();
        let err = int_column(&table, "A").unwrap_err();
        assert_eq!(err.to_string(), "column 'A' is float64, expected int64");
        assert!(int_column(&table, "B").is_err());
    }

    #[test]
    fn test_titles_are_valid_file_stems() {
        for study in all() {
            let title = study.params(None).title;
            assert_eq!(file_stem_for(&title), title, "study '{}'", study.name);
        }
    }

    #[test]
    fn test_every_study_constructs() {
        for study in all() {
            let params = study.params(Some(5)).size_powers(&[1, 2]).loop_powers(&[0, 0]);
            let benchmarker = Benchmarker::new(params)
                .unwrap_or_else(|e| panic!("study '{}' failed: {}", study.name, e));
            assert!(!benchmarker.candidates().is_empty());
        }
    }
}

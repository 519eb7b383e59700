//! Mean of column `A`

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Outcome, Table};

pub const TITLE: &str = "Slice Mean vs Float Mean";

fn mean_of(total: f64, n: usize) -> anyhow::Result<Outcome> {
    anyhow::ensure!(n > 0, "mean of an empty column");
    Ok(Outcome::from(total / n as f64))
}

/// Integer sum over the slice, one division
pub fn values_mean(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    mean_of(a.iter().sum::<i64>() as f64, a.len())
}

/// Float conversion, NaNs skipped
pub fn nan_mean(table: &mut Table) -> anyhow::Result<Outcome> {
    let values: Vec<f64> = table
        .require("A")?
        .to_f64()
        .into_iter()
        .filter(|v| !v.is_nan())
        .collect();
    mean_of(values.iter().sum(), values.len())
}

pub fn fold_mean(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    mean_of(a.iter().fold(0i64, |acc, v| acc + v) as f64, a.len())
}

/// Accumulates in 128 bits so the sum cannot overflow
pub fn wide_mean(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    mean_of(a.iter().map(|v| *v as i128).sum::<i128>() as f64, a.len())
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![
            candidate!(values_mean),
            candidate!(nan_mean),
            candidate!(fold_mean),
            candidate!(wide_mean),
        ],
    )
    .largest_single_test(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Column, Scalar};

    #[test]
    fn test_candidates_agree() {
        let mut table = Table::new(vec![("A".to_string(), Column::Int(vec![1, 2, 3, 6]))]).unwrap();
        for func in [values_mean, nan_mean, fold_mean, wide_mean] {
            match func(&mut table).unwrap() {
                Outcome::Scalar(Scalar::Float(v)) => assert_eq!(v, 3.0),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_column_fails() {
        let mut table = Table::new(vec![("A".to_string(), Column::Int(vec![]))]).unwrap();
        assert!(values_mean(&mut table).is_err());
    }

    #[test]
    fn test_single_test_disabled() {
        assert!(!params(None).largest_single_test);
    }
}

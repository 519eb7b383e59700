//! Sum of column `A`

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Outcome, Table};

pub const TITLE: &str = "Iterator Sum vs Fold Sum";

pub fn iter_sum(table: &mut Table) -> anyhow::Result<Outcome> {
    Ok(Outcome::from(int_column(table, "A")?.iter().sum::<i64>()))
}

pub fn fold_sum(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    Ok(Outcome::from(a.iter().fold(0i64, |acc, v| acc + v)))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![candidate!(iter_sum), candidate!(fold_sum)],
    )
    .largest_single_test(false)
}

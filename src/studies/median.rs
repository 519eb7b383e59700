//! Median of column `A`

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Outcome, Table};

pub const TITLE: &str = "Sort Median vs Select Median";

const SIZE_POWERS: &[u32] = &[2, 3, 4, 5, 6, 7, 8];
const LOOP_POWERS: &[u32] = &[5, 5, 5, 5, 3, 2, 1];

/// Median of already sorted values
fn sorted_median(sorted: &[f64]) -> anyhow::Result<Outcome> {
    let n = sorted.len();
    anyhow::ensure!(n > 0, "median of an empty column");
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };
    Ok(Outcome::from(median))
}

fn as_floats(values: &[i64]) -> Vec<f64> {
    values.iter().map(|v| *v as f64).collect()
}

pub fn sort_median(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut a = int_column(table, "A")?.to_vec();
    a.sort_unstable();
    sorted_median(&as_floats(&a))
}

/// Partial selection of the middle element(s) without a full sort
pub fn select_median(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut a = int_column(table, "A")?.to_vec();
    let n = a.len();
    anyhow::ensure!(n > 0, "median of an empty column");

    let mid = n / 2;
    let (lower, upper, _) = a.select_nth_unstable(mid);
    let upper = *upper as f64;
    if n % 2 == 1 {
        return Ok(Outcome::from(upper));
    }
    let lower = lower.iter().copied().max().unwrap_or_default() as f64;
    Ok(Outcome::from((lower + upper) / 2.0))
}

/// Float conversion, NaNs skipped, total-order sort
pub fn nan_median(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut values: Vec<f64> = table
        .require("A")?
        .to_f64()
        .into_iter()
        .filter(|v| !v.is_nan())
        .collect();
    values.sort_by(f64::total_cmp);
    sorted_median(&values)
}

pub fn stable_sort_median(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut a = int_column(table, "A")?.to_vec();
    a.sort();
    sorted_median(&as_floats(&a))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![
            candidate!(sort_median),
            candidate!(select_median),
            candidate!(nan_median),
            candidate!(stable_sort_median),
        ],
    )
    .size_powers(SIZE_POWERS)
    .loop_powers(LOOP_POWERS)
}

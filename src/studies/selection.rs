//! Row selection on `0 < A < 100`
//!
//! Every candidate keeps the row labels of the selected rows.

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Column, Outcome, Table};

pub const TITLE: &str = "Benchmark for selections";

const SIZE_POWERS: &[u32] = &[2, 3, 4, 5, 6, 7, 8];
const LOOP_POWERS: &[u32] = &[3, 3, 2, 2, 2, 2, 1];

const LOWER: i64 = 0;
const UPPER: i64 = 100;

fn in_range(value: i64) -> bool {
    LOWER < value && value < UPPER
}

/// Two comparison masks combined, then a filter
pub fn mask_selection(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = table.require("A")?;
    let mask: Vec<bool> = a
        .gt(LOWER as f64)
        .into_iter()
        .zip(a.lt(UPPER as f64))
        .map(|(above, below)| above && below)
        .collect();
    Ok(Outcome::Table(table.filter(&mask)?))
}

/// Single mask from a predicate over the raw slice
pub fn predicate_selection(table: &mut Table) -> anyhow::Result<Outcome> {
    let mask: Vec<bool> = int_column(table, "A")?.iter().map(|v| in_range(*v)).collect();
    Ok(Outcome::Table(table.filter(&mask)?))
}

/// Gather by matching positions
pub fn index_selection(table: &mut Table) -> anyhow::Result<Outcome> {
    let rows: Vec<usize> = int_column(table, "A")?
        .iter()
        .enumerate()
        .filter_map(|(row, v)| in_range(*v).then_some(row))
        .collect();
    Ok(Outcome::Table(table.take(&rows)?))
}

/// Rebuild the table column by column from the mask
pub fn rebuild_selection(table: &mut Table) -> anyhow::Result<Outcome> {
    let mask: Vec<bool> = int_column(table, "A")?.iter().map(|v| in_range(*v)).collect();

    let columns = table
        .column_names()
        .map(|name| -> anyhow::Result<(String, Column)> {
            Ok((name.to_string(), table.require(name)?.filter(&mask)?))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let index = table
        .index()
        .iter()
        .zip(&mask)
        .filter_map(|(label, keep)| keep.then_some(*label))
        .collect();

    Ok(Outcome::Table(Table::with_index(columns, index)?))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B", "C", "D"], seed),
        vec![
            candidate!(mask_selection),
            candidate!(predicate_selection),
            candidate!(index_selection),
            candidate!(rebuild_selection),
        ],
    )
    .size_powers(SIZE_POWERS)
    .loop_powers(LOOP_POWERS)
}

//! Sorting column `A`

use std::collections::BinaryHeap;

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Column, Outcome, Table};

pub const TITLE: &str = "Unstable Sort vs Stable Sort";

pub fn sort_unstable_values(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut a = int_column(table, "A")?.to_vec();
    a.sort_unstable();
    Ok(Outcome::Array(Column::Int(a)))
}

pub fn stable_sort_values(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut a = int_column(table, "A")?.to_vec();
    a.sort();
    Ok(Outcome::Array(Column::Int(a)))
}

pub fn heap_sort_values(table: &mut Table) -> anyhow::Result<Outcome> {
    let heap: BinaryHeap<i64> = int_column(table, "A")?.iter().copied().collect();
    Ok(Outcome::Array(Column::Int(heap.into_sorted_vec())))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![
            candidate!(sort_unstable_values),
            candidate!(stable_sort_values),
            candidate!(heap_sort_values),
        ],
    )
}

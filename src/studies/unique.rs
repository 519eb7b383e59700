//! Distinct values of column `A`
//!
//! `appearance_unique` keeps first-appearance order while the others sort,
//! so this study is expected to come out invalid.

use std::collections::{BTreeSet, HashSet};

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Column, Outcome, Table};

pub const TITLE: &str = "Hashed Unique vs Sorted Unique";

/// Distinct values in order of first appearance
pub fn appearance_unique(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    let mut seen = HashSet::with_capacity(a.len());
    let unique = a.iter().copied().filter(|v| seen.insert(*v)).collect();
    Ok(Outcome::Array(Column::Int(unique)))
}

pub fn sorted_unique(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut a = int_column(table, "A")?.to_vec();
    a.sort_unstable();
    a.dedup();
    Ok(Outcome::Array(Column::Int(a)))
}

pub fn btree_unique(table: &mut Table) -> anyhow::Result<Outcome> {
    let set: BTreeSet<i64> = int_column(table, "A")?.iter().copied().collect();
    Ok(Outcome::Array(Column::Int(set.into_iter().collect())))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![
            candidate!(appearance_unique),
            candidate!(sorted_unique),
            candidate!(btree_unique),
        ],
    )
}

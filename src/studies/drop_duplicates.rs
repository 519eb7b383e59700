//! Dropping rows with a duplicate `A`, keeping the first occurrence

use std::collections::HashSet;

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Outcome, Table};

pub const TITLE: &str = "Benchmark for dropping duplicate rows";

/// Negated duplicate mask, then filter
pub fn duplicated_mask(table: &mut Table) -> anyhow::Result<Outcome> {
    let keep: Vec<bool> = table.duplicated("A")?.into_iter().map(|d| !d).collect();
    Ok(Outcome::Table(table.filter(&keep)?.reset_index()))
}

pub fn drop_duplicates(table: &mut Table) -> anyhow::Result<Outcome> {
    Ok(Outcome::Table(table.drop_duplicates("A")?.reset_index()))
}

/// First row of every key group, groups in order of first appearance
pub fn group_by_first(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    let mut seen = HashSet::with_capacity(a.len());
    let firsts: Vec<usize> = a
        .iter()
        .enumerate()
        .filter_map(|(row, key)| seen.insert(*key).then_some(row))
        .collect();
    Ok(Outcome::Table(table.take(&firsts)?.reset_index()))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![
            candidate!(duplicated_mask),
            candidate!(drop_duplicates),
            candidate!(group_by_first),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    #[test]
    fn test_keeps_first_occurrence() {
        let table = Table::new(vec![
            ("A".to_string(), Column::Int(vec![3, 1, 3, 2, 1])),
            ("B".to_string(), Column::Int(vec![10, 20, 30, 40, 50])),
        ])
        .unwrap();
        let expected = Table::new(vec![
            ("A".to_string(), Column::Int(vec![3, 1, 2])),
            ("B".to_string(), Column::Int(vec![10, 20, 40])),
        ])
        .unwrap();

        for func in [duplicated_mask, drop_duplicates, group_by_first] {
            match func(&mut table.clone()).unwrap() {
                Outcome::Table(t) => assert!(t.equals(&expected)),
                other => panic!("expected a table, got {}", other.kind()),
            }
        }
    }
}

//! Iterating over every row

use std::hint::black_box;

use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Outcome, Table};

pub const TITLE: &str = "Benchmark for iterating over all rows";

const SIZE_POWERS: &[u32] = &[2, 3, 4, 5, 6];
const LOOP_POWERS: &[u32] = &[2, 2, 1, 1, 1];

/// Positional reads straight from the column buffers
pub fn column_values(table: &mut Table) -> anyhow::Result<Outcome> {
    let table: &Table = table;
    let columns: Vec<_> = table
        .column_names()
        .filter_map(|name| table.column(name))
        .collect();
    for row in 0..table.n_rows() {
        for column in &columns {
            black_box(column.get(row));
        }
    }
    Ok(Outcome::Unit)
}

/// Materialized rows of scalars
pub fn row_tuples(table: &mut Table) -> anyhow::Result<Outcome> {
    for row in table.rows() {
        black_box(row);
    }
    Ok(Outcome::Unit)
}

/// Materialized rows paired with their labels
pub fn labelled_rows(table: &mut Table) -> anyhow::Result<Outcome> {
    for (label, row) in table.index().iter().zip(table.rows()) {
        black_box((label, row));
    }
    Ok(Outcome::Unit)
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B", "C", "D"], seed),
        vec![
            candidate!(column_values),
            candidate!(row_tuples),
            candidate!(labelled_rows),
        ],
    )
    .size_powers(SIZE_POWERS)
    .loop_powers(LOOP_POWERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_override() {
        let params = params(Some(1));
        assert_eq!(params.size_powers.as_deref(), Some(SIZE_POWERS));
        assert_eq!(params.loop_powers.as_deref(), Some(LOOP_POWERS));
        assert!(params.largest_single_test);
    }

    #[test]
    fn test_loops_leave_table_untouched() {
        let mut table = TableGenerator::random_ints_seeded(&["A", "B"], 2)
            .generate(50)
            .unwrap();
        let before = table.clone();
        for func in [column_values, row_tuples, labelled_rows] {
            assert!(matches!(func(&mut table).unwrap(), Outcome::Unit));
        }
        assert!(table.equals(&before));
    }
}

//! Column creation: `E = A * B + C`, in place

use anyhow::ensure;

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Column, Outcome, Scalar, Table};

pub const TITLE: &str = "Benchmark for column creation";

/// Whole-slice arithmetic on the raw column buffers
pub fn column_values(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    let b = int_column(table, "B")?;
    let c = int_column(table, "C")?;

    let e = a
        .iter()
        .zip(b)
        .zip(c)
        .map(|((a, b), c)| a.wrapping_mul(*b).wrapping_add(*c))
        .collect();
    table.insert_column("E", Column::Int(e))?;
    Ok(Outcome::Unit)
}

/// Composed column operations
pub fn column_ops(table: &mut Table) -> anyhow::Result<Outcome> {
    let e = table
        .require("A")?
        .mul(table.require("B")?)?
        .add(table.require("C")?)?;
    table.insert_column("E", e)?;
    Ok(Outcome::Unit)
}

/// Row-at-a-time evaluation over scalar rows
pub fn row_loop(table: &mut Table) -> anyhow::Result<Outcome> {
    let mut e = Vec::with_capacity(table.n_rows());
    for row in table.rows() {
        ensure!(row.len() >= 3, "expected at least columns A, B and C");
        match (&row[0], &row[1], &row[2]) {
            (Scalar::Int(a), Scalar::Int(b), Scalar::Int(c)) => {
                e.push(a.wrapping_mul(*b).wrapping_add(*c))
            }
            other => anyhow::bail!("non-integer row {:?}", other),
        }
    }
    table.insert_column("E", Column::Int(e))?;
    Ok(Outcome::Unit)
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B", "C", "D"], seed),
        vec![
            candidate!(column_values),
            candidate!(column_ops),
            candidate!(row_loop),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(vec![
            ("A".to_string(), Column::Int(vec![1, 2, 3])),
            ("B".to_string(), Column::Int(vec![4, 5, 6])),
            ("C".to_string(), Column::Int(vec![7, 8, 9])),
            ("D".to_string(), Column::Int(vec![0, 0, 0])),
        ])
        .unwrap()
    }

    #[test]
    fn test_candidates_write_same_column() {
        let expected = Column::Int(vec![11, 18, 27]);
        for func in [column_values, column_ops, row_loop] {
            let mut t = table();
            assert!(matches!(func(&mut t).unwrap(), Outcome::Unit));
            assert_eq!(t.column("E"), Some(&expected));
            assert_eq!(t.n_cols(), 5);
        }
    }

    #[test]
    fn test_rerun_replaces_column() {
        let mut t = table();
        column_values(&mut t).unwrap();
        column_values(&mut t).unwrap();
        assert_eq!(t.n_cols(), 5);
    }
}

//! Tabular data model
//!
//! `Table` is the input handed to every candidate: ordered, labelled columns
//! sharing one row index. It carries only the primitives the bundled studies
//! and the equivalence probe need.

use std::collections::HashSet;

use rand::Rng;

use super::outcome::Scalar;
use crate::error::{BenchError, BenchResult};

/// A single typed column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<i64>),
    Float(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Int(values) => values.len(),
            Column::Float(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short dtype name, used in error messages
    pub fn dtype(&self) -> &'static str {
        match self {
            Column::Int(_) => "int64",
            Column::Float(_) => "float64",
        }
    }

    /// Get one element as a scalar
    pub fn get(&self, row: usize) -> Option<Scalar> {
        match self {
            Column::Int(values) => values.get(row).map(|v| Scalar::Int(*v)),
            Column::Float(values) => values.get(row).map(|v| Scalar::Float(*v)),
        }
    }

    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            Column::Int(values) => Some(values),
            Column::Float(_) => None,
        }
    }

    /// Copy the column into a float vector
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            Column::Int(values) => values.iter().map(|v| *v as f64).collect(),
            Column::Float(values) => values.clone(),
        }
    }

    fn value_f64(&self, row: usize) -> f64 {
        match self {
            Column::Int(values) => values[row] as f64,
            Column::Float(values) => values[row],
        }
    }

    /// Keep the elements whose mask entry is true
    pub fn filter(&self, mask: &[bool]) -> BenchResult<Column> {
        if mask.len() != self.len() {
            return Err(BenchError::InvalidInput(format!(
                "mask length {} does not match column length {}",
                mask.len(),
                self.len()
            )));
        }

        Ok(match self {
            Column::Int(values) => Column::Int(masked(values, mask)),
            Column::Float(values) => Column::Float(masked(values, mask)),
        })
    }

    /// Gather elements at the given positions
    pub fn take(&self, rows: &[usize]) -> BenchResult<Column> {
        if let Some(bad) = rows.iter().find(|r| **r >= self.len()) {
            return Err(BenchError::InvalidInput(format!(
                "row {} out of range for column of length {}",
                bad,
                self.len()
            )));
        }

        Ok(match self {
            Column::Int(values) => Column::Int(rows.iter().map(|r| values[*r]).collect()),
            Column::Float(values) => Column::Float(rows.iter().map(|r| values[*r]).collect()),
        })
    }

    /// Elementwise `value > threshold`
    pub fn gt(&self, threshold: f64) -> Vec<bool> {
        (0..self.len()).map(|r| self.value_f64(r) > threshold).collect()
    }

    /// Elementwise `value < threshold`
    pub fn lt(&self, threshold: f64) -> Vec<bool> {
        (0..self.len()).map(|r| self.value_f64(r) < threshold).collect()
    }

    /// Elementwise sum; integer overflow wraps
    pub fn add(&self, other: &Column) -> BenchResult<Column> {
        self.zip_with(other, i64::wrapping_add, |a, b| a + b)
    }

    /// Elementwise product; integer overflow wraps
    pub fn mul(&self, other: &Column) -> BenchResult<Column> {
        self.zip_with(other, i64::wrapping_mul, |a, b| a * b)
    }

    fn zip_with(
        &self,
        other: &Column,
        int_op: fn(i64, i64) -> i64,
        float_op: fn(f64, f64) -> f64,
    ) -> BenchResult<Column> {
        if self.len() != other.len() {
            return Err(BenchError::InvalidInput(format!(
                "cannot combine columns of length {} and {}",
                self.len(),
                other.len()
            )));
        }

        Ok(match (self, other) {
            (Column::Int(a), Column::Int(b)) => {
                Column::Int(a.iter().zip(b).map(|(x, y)| int_op(*x, *y)).collect())
            }
            _ => Column::Float(
                (0..self.len())
                    .map(|r| float_op(self.value_f64(r), other.value_f64(r)))
                    .collect(),
            ),
        })
    }

    /// Structural equality: same dtype, same values, NaN matches NaN
    pub fn equals(&self, other: &Column) -> bool {
        match (self, other) {
            (Column::Int(a), Column::Int(b)) => a == b,
            (Column::Float(a), Column::Float(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(x, y)| x == y || (x.is_nan() && y.is_nan()))
            }
            _ => false,
        }
    }

    /// Elementwise numeric equality across dtypes; NaN never matches
    pub fn numeric_eq(&self, other: &Column) -> bool {
        match (self, other) {
            (Column::Int(a), Column::Int(b)) => a == b,
            _ => {
                self.len() == other.len()
                    && (0..self.len()).all(|r| self.value_f64(r) == other.value_f64(r))
            }
        }
    }

    /// Hashable identity of one element, used for duplicate detection
    fn key(&self, row: usize) -> u64 {
        match self {
            Column::Int(values) => values[row] as u64,
            Column::Float(values) => {
                let v = values[row];
                if v.is_nan() {
                    f64::NAN.to_bits()
                } else if v == 0.0 {
                    0.0f64.to_bits()
                } else {
                    v.to_bits()
                }
            }
        }
    }
}

fn masked<T: Copy>(values: &[T], mask: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(mask)
        .filter_map(|(v, keep)| keep.then_some(*v))
        .collect()
}

/// Column-labelled table with a row index
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    index: Vec<u64>,
}

impl Table {
    /// Build a table with a default `0..n` index
    pub fn new(columns: Vec<(String, Column)>) -> BenchResult<Self> {
        let rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        Self::with_index(columns, (0..rows as u64).collect())
    }

    /// Build a table with explicit row labels
    pub fn with_index(columns: Vec<(String, Column)>, index: Vec<u64>) -> BenchResult<Self> {
        let mut names = HashSet::new();
        for (name, column) in &columns {
            if !names.insert(name.as_str()) {
                return Err(BenchError::InvalidInput(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
            if column.len() != index.len() {
                return Err(BenchError::InvalidInput(format!(
                    "column '{}' has {} rows, index has {}",
                    name,
                    column.len(),
                    index.len()
                )));
            }
        }

        Ok(Self { columns, index })
    }

    /// Random integer table with values drawn uniformly from `[1, rows)`
    pub fn random_ints<S, R>(rows: usize, names: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng,
    {
        let high = (rows as i64).max(2);
        let columns = names
            .iter()
            .map(|name| {
                let values = (0..rows).map(|_| rng.random_range(1..high)).collect();
                (name.as_ref().to_string(), Column::Int(values))
            })
            .collect();

        Self {
            columns,
            index: (0..rows as u64).collect(),
        }
    }

    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn index(&self) -> &[u64] {
        &self.index
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
    }

    /// Like [`Table::column`] but errors on a missing name
    pub fn require(&self, name: &str) -> BenchResult<&Column> {
        self.column(name)
            .ok_or_else(|| BenchError::InvalidInput(format!("no column named '{}'", name)))
    }

    /// Insert a column, replacing any column with the same name
    pub fn insert_column(&mut self, name: &str, column: Column) -> BenchResult<()> {
        if column.len() != self.n_rows() {
            return Err(BenchError::InvalidInput(format!(
                "column '{}' has {} rows, table has {}",
                name,
                column.len(),
                self.n_rows()
            )));
        }

        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = column,
            None => self.columns.push((name.to_string(), column)),
        }
        Ok(())
    }

    /// Keep rows whose mask entry is true, preserving their labels
    pub fn filter(&self, mask: &[bool]) -> BenchResult<Table> {
        if mask.len() != self.n_rows() {
            return Err(BenchError::InvalidInput(format!(
                "mask length {} does not match {} rows",
                mask.len(),
                self.n_rows()
            )));
        }

        let columns = self
            .columns
            .iter()
            .map(|(name, column)| Ok((name.clone(), column.filter(mask)?)))
            .collect::<BenchResult<Vec<_>>>()?;

        Ok(Table {
            columns,
            index: masked(&self.index, mask),
        })
    }

    /// Gather rows by position, preserving their labels
    pub fn take(&self, rows: &[usize]) -> BenchResult<Table> {
        let columns = self
            .columns
            .iter()
            .map(|(name, column)| Ok((name.clone(), column.take(rows)?)))
            .collect::<BenchResult<Vec<_>>>()?;

        let index = rows
            .iter()
            .map(|r| {
                self.index.get(*r).copied().ok_or_else(|| {
                    BenchError::InvalidInput(format!("row {} out of range", r))
                })
            })
            .collect::<BenchResult<Vec<_>>>()?;

        Ok(Table { columns, index })
    }

    /// Replace the row labels with `0..n`
    pub fn reset_index(mut self) -> Table {
        self.index = (0..self.n_rows() as u64).collect();
        self
    }

    /// Mark every row whose key value already appeared earlier
    pub fn duplicated(&self, key: &str) -> BenchResult<Vec<bool>> {
        let column = self.require(key)?;
        let mut seen = HashSet::with_capacity(column.len());
        Ok((0..column.len()).map(|r| !seen.insert(column.key(r))).collect())
    }

    /// Drop rows with a repeated key value, keeping the first occurrence
    pub fn drop_duplicates(&self, key: &str) -> BenchResult<Table> {
        let keep: Vec<bool> = self.duplicated(key)?.into_iter().map(|d| !d).collect();
        self.filter(&keep)
    }

    /// One row as scalars, in column order
    pub fn row(&self, row: usize) -> Option<Vec<Scalar>> {
        if row >= self.n_rows() {
            return None;
        }
        self.columns.iter().map(|(_, column)| column.get(row)).collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<Scalar>> + '_ {
        (0..self.n_rows()).filter_map(|r| self.row(r))
    }

    /// Full structural equality: shape, labels, column names and values
    pub fn equals(&self, other: &Table) -> bool {
        self.index == other.index
            && self.columns.len() == other.columns.len()
            && self
                .columns
                .iter()
                .zip(&other.columns)
                .all(|((a_name, a), (b_name, b))| a_name == b_name && a.equals(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Table {
        Table::new(vec![
            ("A".to_string(), Column::Int(vec![3, 1, 3, 2, 1])),
            ("B".to_string(), Column::Int(vec![10, 20, 30, 40, 50])),
        ])
        .unwrap()
    }

    #[test]
    fn test_random_ints_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = Table::random_ints(100, &["A", "B", "C", "D"], &mut rng);
        assert_eq!(table.shape(), (100, 4));
        let a = table.require("A").unwrap().as_ints().unwrap();
        assert!(a.iter().all(|v| (1..100).contains(v)));
        assert_eq!(table.index()[99], 99);
    }

    #[test]
    fn test_random_ints_tiny_table() {
        let mut rng = StdRng::seed_from_u64(7);
        let table = Table::random_ints(1, &["A"], &mut rng);
        assert_eq!(table.require("A").unwrap(), &Column::Int(vec![1]));
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let result = Table::new(vec![
            ("A".to_string(), Column::Int(vec![1, 2])),
            ("B".to_string(), Column::Int(vec![1])),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_drop_duplicates_keeps_first_and_labels() {
        let table = sample();
        assert_eq!(
            table.duplicated("A").unwrap(),
            vec![false, false, true, false, true]
        );

        let deduped = table.drop_duplicates("A").unwrap();
        assert_eq!(deduped.index(), &[0, 1, 3]);
        assert_eq!(deduped.require("B").unwrap(), &Column::Int(vec![10, 20, 40]));

        let reset = deduped.reset_index();
        assert_eq!(reset.index(), &[0, 1, 2]);
    }

    #[test]
    fn test_filter_and_take_agree() {
        let table = sample();
        let mask = vec![true, false, false, true, true];
        let filtered = table.filter(&mask).unwrap();
        let taken = table.take(&[0, 3, 4]).unwrap();
        assert!(filtered.equals(&taken));
        assert!(table.take(&[9]).is_err());
    }

    #[test]
    fn test_insert_column_replaces() {
        let mut table = sample();
        let sum = table
            .require("A")
            .unwrap()
            .add(table.require("B").unwrap())
            .unwrap();
        table.insert_column("E", sum).unwrap();
        assert_eq!(table.n_cols(), 3);
        table.insert_column("E", Column::Int(vec![0; 5])).unwrap();
        assert_eq!(table.n_cols(), 3);
        assert!(table.insert_column("F", Column::Int(vec![0])).is_err());
    }

    #[test]
    fn test_equals_checks_labels_and_nan() {
        let a = Table::new(vec![(
            "X".to_string(),
            Column::Float(vec![1.0, f64::NAN]),
        )])
        .unwrap();
        let b = a.clone();
        assert!(a.equals(&b));

        let relabelled = Table::with_index(
            vec![("X".to_string(), Column::Float(vec![1.0, f64::NAN]))],
            vec![5, 6],
        )
        .unwrap();
        assert!(!a.equals(&relabelled));
    }

    #[test]
    fn test_mixed_arithmetic_promotes_to_float() {
        let ints = Column::Int(vec![1, 2]);
        let floats = Column::Float(vec![0.5, 0.5]);
        assert_eq!(ints.mul(&floats).unwrap(), Column::Float(vec![0.5, 1.0]));
        assert!(ints.numeric_eq(&Column::Float(vec![1.0, 2.0])));
        assert!(!ints.equals(&Column::Float(vec![1.0, 2.0])));
    }

    #[test]
    fn test_rows() {
        let table = sample();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[1], vec![Scalar::Int(1), Scalar::Int(20)]);
        assert!(table.row(5).is_none());
    }
}

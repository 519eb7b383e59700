//! Candidate results
//!
//! Candidates may return a table, a flat array, a scalar, or nothing at all
//! (in-place mutation). Equivalence is defined per variant; mismatched
//! variants are never equivalent.

use std::fmt;

use super::table::{Column, Table};

/// A single value returned by a reduction
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl Scalar {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) => Some(*v),
            Scalar::Bool(_) | Scalar::Text(_) => None,
        }
    }

    /// Int and Float compare numerically; other kinds must match exactly
    pub fn equivalent(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            (Scalar::Int(_) | Scalar::Float(_), Scalar::Int(_) | Scalar::Float(_)) => {
                self.as_f64() == other.as_f64()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

/// Whatever a candidate function returns
#[derive(Debug, Clone)]
pub enum Outcome {
    Table(Table),
    Array(Column),
    Scalar(Scalar),
    Unit,
}

impl Outcome {
    /// Variant name, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Table(_) => "table",
            Outcome::Array(_) => "array",
            Outcome::Scalar(_) => "scalar",
            Outcome::Unit => "unit",
        }
    }

    /// Whether two results count as the same answer
    pub fn equivalent(&self, other: &Outcome) -> bool {
        match (self, other) {
            (Outcome::Table(a), Outcome::Table(b)) => a.equals(b),
            (Outcome::Array(a), Outcome::Array(b)) => a.numeric_eq(b),
            (Outcome::Scalar(a), Outcome::Scalar(b)) => a.equivalent(b),
            (Outcome::Unit, Outcome::Unit) => true,
            _ => false,
        }
    }
}

impl From<Table> for Outcome {
    fn from(table: Table) -> Self {
        Outcome::Table(table)
    }
}

impl From<Column> for Outcome {
    fn from(column: Column) -> Self {
        Outcome::Array(column)
    }
}

impl From<Scalar> for Outcome {
    fn from(scalar: Scalar) -> Self {
        Outcome::Scalar(scalar)
    }
}

impl From<i64> for Outcome {
    fn from(v: i64) -> Self {
        Outcome::Scalar(Scalar::Int(v))
    }
}

impl From<f64> for Outcome {
    fn from(v: f64) -> Self {
        Outcome::Scalar(Scalar::Float(v))
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Outcome::Unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: Vec<i64>) -> Table {
        Table::new(vec![("A".to_string(), Column::Int(values))]).unwrap()
    }

    #[test]
    fn test_tables_compare_structurally() {
        let a = Outcome::from(table(vec![1, 2, 3]));
        assert!(a.equivalent(&Outcome::from(table(vec![1, 2, 3]))));
        assert!(!a.equivalent(&Outcome::from(table(vec![1, 2, 4]))));
    }

    #[test]
    fn test_arrays_compare_numerically() {
        let ints = Outcome::from(Column::Int(vec![1, 2]));
        let floats = Outcome::from(Column::Float(vec![1.0, 2.0]));
        assert!(ints.equivalent(&floats));
        assert!(!ints.equivalent(&Outcome::from(Column::Int(vec![1, 2, 3]))));

        let nan = Outcome::from(Column::Float(vec![f64::NAN]));
        assert!(!nan.equivalent(&nan.clone()));
    }

    #[test]
    fn test_scalars() {
        assert!(Outcome::from(3i64).equivalent(&Outcome::from(3.0)));
        assert!(!Outcome::from(3i64).equivalent(&Outcome::from(3.5)));
        assert!(!Scalar::from("3").equivalent(&Scalar::Int(3)));
        assert!(Scalar::Bool(true).equivalent(&Scalar::Bool(true)));
    }

    #[test]
    fn test_mismatched_variants_are_not_equivalent() {
        let t = Outcome::from(table(vec![1]));
        let s = Outcome::from(1i64);
        let arr = Outcome::from(Column::Int(vec![1]));
        assert!(!t.equivalent(&s));
        assert!(!s.equivalent(&t));
        assert!(!arr.equivalent(&s));
        assert!(!Outcome::Unit.equivalent(&s));
        assert!(Outcome::Unit.equivalent(&Outcome::from(())));
    }
}

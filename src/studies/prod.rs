//! Product of column `A`
//!
//! Random columns overflow `i64` quickly, so every candidate multiplies with
//! wrapping semantics and they agree modulo 2^64.

use std::num::Wrapping;

use super::int_column;
use crate::benchmark::{BenchmarkParams, TableGenerator};
use crate::candidate;
use crate::models::{Outcome, Table};

pub const TITLE: &str = "Iterator Prod vs Chunked Prod";

const CHUNK: usize = 8;

pub fn iter_product(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    let product: Wrapping<i64> = a.iter().copied().map(Wrapping).product();
    Ok(Outcome::from(product.0))
}

/// Independent partial products per chunk, then combined
pub fn chunked_product(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    let product = a
        .chunks(CHUNK)
        .map(|chunk| chunk.iter().fold(1i64, |acc, v| acc.wrapping_mul(*v)))
        .fold(1i64, i64::wrapping_mul);
    Ok(Outcome::from(product))
}

pub fn wrapping_product(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = int_column(table, "A")?;
    Ok(Outcome::from(
        a.iter().fold(1i64, |acc, v| acc.wrapping_mul(*v)),
    ))
}

pub fn params(seed: Option<u64>) -> BenchmarkParams {
    BenchmarkParams::new(
        TITLE,
        TableGenerator::random_ints_with(&["A", "B"], seed),
        vec![
            candidate!(iter_product),
            candidate!(chunked_product),
            candidate!(wrapping_product),
        ],
    )
}

//! Table generators
//!
//! A generator is a plain closure from a row count to a fresh table. It is
//! invoked once per size, so every trial sees an independent random draw.

use std::cell::RefCell;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{BenchError, BenchResult};
use crate::models::Table;

/// Boxed generator callable
pub type GeneratorFn = Box<dyn Fn(usize) -> anyhow::Result<Table>>;

/// Produces the input table for a given size
pub struct TableGenerator {
    description: String,
    func: GeneratorFn,
}

impl TableGenerator {
    pub fn new<F>(description: impl Into<String>, func: F) -> Self
    where
        F: Fn(usize) -> anyhow::Result<Table> + 'static,
    {
        Self {
            description: description.into(),
            func: Box::new(func),
        }
    }

    /// Integer columns drawn from `[1, size)` with the thread RNG
    pub fn random_ints(columns: &[&str]) -> Self {
        let names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let description = describe(&names, None);

        Self::new(description, move |size| {
            Ok(Table::random_ints(size, names.as_slice(), &mut rand::rng()))
        })
    }

    /// Same as [`TableGenerator::random_ints`] but reproducible
    pub fn random_ints_seeded(columns: &[&str], seed: u64) -> Self {
        let names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let description = describe(&names, Some(seed));
        let rng = RefCell::new(StdRng::seed_from_u64(seed));

        Self::new(description, move |size| {
            let mut rng = rng.borrow_mut();
            Ok(Table::random_ints(size, names.as_slice(), &mut *rng))
        })
    }

    /// Seeded when a seed is given, thread RNG otherwise
    pub fn random_ints_with(columns: &[&str], seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::random_ints_seeded(columns, seed),
            None => Self::random_ints(columns),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Generate a fresh table with `size` rows
    pub fn generate(&self, size: usize) -> BenchResult<Table> {
        (self.func)(size).map_err(|e| BenchError::generator(size, e))
    }
}

impl fmt::Debug for TableGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableGenerator")
            .field("description", &self.description)
            .finish()
    }
}

fn describe(names: &[String], seed: Option<u64>) -> String {
    let mut description = format!("random ints in [1, size) over columns {}", names.join(","));
    if let Some(seed) = seed {
        description.push_str(&format!(" (seed {})", seed));
    }
    description
}

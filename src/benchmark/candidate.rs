//! Candidate functions under comparison

use std::fmt;

use serde::Serialize;

use crate::error::{BenchError, BenchResult};
use crate::models::{Outcome, Table};

/// Boxed candidate callable
pub type CandidateFn = Box<dyn Fn(&mut Table) -> anyhow::Result<Outcome>>;

/// One named implementation of the operation being benchmarked
#[derive(Serialize)]
pub struct Candidate {
    name: String,
    #[serde(skip)]
    func: CandidateFn,
}

impl Candidate {
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut Table) -> anyhow::Result<Outcome> + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the candidate, tagging any failure with its name
    pub fn call(&self, table: &mut Table) -> BenchResult<Outcome> {
        (self.func)(table).map_err(|e| BenchError::candidate(&self.name, e))
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate").field("name", &self.name).finish()
    }
}

/// Build a [`Candidate`] named after the function identifier.
///
/// ```ignore
/// let c = candidate!(iter_sum);
/// assert_eq!(c.name(), "iter_sum");
/// ```
#[macro_export]
macro_rules! candidate {
    ($func:ident) => {
        $crate::benchmark::Candidate::new(stringify!($func), $func)
    };
}

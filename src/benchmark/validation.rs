//! Equivalence probe between candidates
//!
//! Every candidate runs once on the same generated table and the results are
//! compared pairwise. Agreement is advisory: it is only checked at one size.

use super::Candidate;
use crate::error::BenchResult;
use crate::models::{Outcome, Table};

/// Run every candidate on its own copy of `table`.
///
/// Each candidate gets a clone so in-place mutations by one candidate
/// cannot leak into the next.
pub fn probe_candidates(table: &Table, candidates: &[Candidate]) -> BenchResult<Vec<Outcome>> {
    candidates
        .iter()
        .map(|candidate| {
            let mut input = table.clone();
            candidate.call(&mut input)
        })
        .collect()
}

/// Index pairs `(i, j)`, `i < j`, whose outcomes are not equivalent
pub fn disagreements(outcomes: &[Outcome]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..outcomes.len() {
        for j in (i + 1)..outcomes.len() {
            if !outcomes[i].equivalent(&outcomes[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// True only if every pair of outcomes agrees
pub fn outcomes_agree(outcomes: &[Outcome]) -> bool {
    disagreements(outcomes).is_empty()
}

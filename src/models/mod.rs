//! Domain models
//!
//! This module contains the data types shared by the harness: the tabular
//! input, candidate outcomes, schedules, and collected results.

pub mod benchmark;
pub mod outcome;
pub mod schedule;
pub mod table;

pub use benchmark::*;
pub use outcome::*;
pub use schedule::*;
pub use table::*;

//! Benchmark runner - Orchestrates one comparison study
//!
//! A `Benchmarker` moves through three phases: constructed (the equivalence
//! probe has already run), benchmarked (timings collected), and reported
//! (results printed or plotted). Phases only move forward.

use std::path::{Path, PathBuf};

use validator::Validate;

use super::{BenchmarkParams, Candidate, TableGenerator, timing, validation};
use crate::chart::{self, Chart, ChartRenderer};
use crate::error::{BenchError, BenchResult};
use crate::models::{BenchmarkResults, CandidateTimings, Schedule, Table};
use crate::report;
use crate::utils::time::format_seconds;

/// Lifecycle phase of a [`Benchmarker`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Constructed,
    Benchmarked,
    Reported,
}

/// Times a set of candidates across a size schedule
#[derive(Debug)]
pub struct Benchmarker {
    title: String,
    generator: TableGenerator,
    candidates: Vec<Candidate>,
    schedule: Schedule,
    valid: bool,
    results: Option<BenchmarkResults>,
    phase: Phase,
}

impl Benchmarker {
    /// Validate the parameters, derive the schedule and probe the candidates.
    ///
    /// Disagreeing candidates only produce a warning. A failing generator or
    /// candidate during the probe is fatal.
    pub fn new(params: BenchmarkParams) -> BenchResult<Self> {
        params.validate()?;

        let BenchmarkParams {
            generator,
            candidates,
            title,
            size_powers,
            loop_powers,
            largest_single_test,
        } = params;

        let schedule = Schedule::from_options(
            size_powers.as_deref(),
            loop_powers.as_deref(),
            largest_single_test,
        )?;

        tracing::debug!(
            "{}: {} candidates, tables of {}",
            title,
            candidates.len(),
            generator.description()
        );

        let mut benchmarker = Self {
            title,
            generator,
            candidates,
            schedule,
            valid: false,
            results: None,
            phase: Phase::Constructed,
        };

        benchmarker.valid = benchmarker.validate_functions()?;
        if !benchmarker.valid {
            tracing::warn!(
                "{}: evaluated functions return different results",
                benchmarker.title
            );
        }

        Ok(benchmarker)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether all candidates agreed at the smallest size
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Generate a fresh input table with `size` rows
    pub fn generate_table(&self, size: usize) -> BenchResult<Table> {
        self.generator.generate(size)
    }

    /// Run every candidate once at the smallest size and compare the results
    pub fn validate_functions(&self) -> BenchResult<bool> {
        let size = self.schedule.smallest_size();
        let table = self.generate_table(size)?;
        let outcomes = validation::probe_candidates(&table, &self.candidates)?;

        let pairs = validation::disagreements(&outcomes);
        for (i, j) in &pairs {
            tracing::debug!(
                "'{}' ({}) disagrees with '{}' ({}) at size {}",
                self.candidates[*i].name(),
                outcomes[*i].kind(),
                self.candidates[*j].name(),
                outcomes[*j].kind(),
                size
            );
        }

        Ok(pairs.is_empty())
    }

    /// Time one candidate at every schedule entry.
    ///
    /// Each size gets a freshly generated table; table construction happens
    /// outside the measured region.
    pub fn benchmark_time(&self, candidate: &Candidate) -> BenchResult<Vec<f64>> {
        let mut results = Vec::with_capacity(self.schedule.len());

        for entry in self.schedule.entries() {
            tracing::info!("Testing with a dataframe of size: {}", entry.size);
            let mut table = self.generate_table(entry.size)?;

            let elapsed = timing::time_invocations(candidate, &mut table, entry.invocations)?;
            let per_call = timing::per_call_seconds(elapsed, entry.invocations);

            tracing::info!(
                "Result (seconds): {} ({} x{})",
                per_call,
                format_seconds(per_call),
                entry.invocations
            );
            results.push(per_call);
        }

        Ok(results)
    }

    /// Benchmark every candidate in order and keep the results
    pub fn benchmark_all(&mut self) -> BenchResult<&BenchmarkResults> {
        if self.phase != Phase::Constructed {
            return Err(BenchError::AlreadyBenchmarked);
        }

        let mut timings = Vec::with_capacity(self.candidates.len());
        for candidate in &self.candidates {
            tracing::info!("Benchmarking function: {}", candidate.name());
            let per_call_seconds = self.benchmark_time(candidate)?;
            timings.push(CandidateTimings::new(candidate.name(), per_call_seconds));
        }

        self.results = Some(BenchmarkResults::new(
            &self.title,
            &self.schedule,
            self.valid,
            timings,
        ));
        self.phase = Phase::Benchmarked;
        self.results()
    }

    /// Collected results; errors before [`Benchmarker::benchmark_all`]
    pub fn results(&self) -> BenchResult<&BenchmarkResults> {
        self.results.as_ref().ok_or(BenchError::NotBenchmarked)
    }

    /// Print each candidate's raw per-call series to stdout
    pub fn print_results(&mut self) -> BenchResult<()> {
        let text = report::format_results(self.results()?);
        println!("{}", text);
        self.phase = Phase::Reported;
        Ok(())
    }

    /// Lay out the two-panel comparison chart
    pub fn chart(&self) -> BenchResult<Chart> {
        Chart::from_results(self.results()?)
    }

    /// Render the chart, write it under `dir`, and announce the file
    pub fn plot_results(
        &mut self,
        renderer: &dyn ChartRenderer,
        dir: &Path,
    ) -> BenchResult<PathBuf> {
        let chart = self.chart()?;
        let path = chart::export_chart(&chart, renderer, dir)?;
        tracing::info!("Chart for '{}' written to {}", self.title, path.display());
        self.phase = Phase::Reported;
        Ok(path)
    }
}

//! End-to-end runs through the public API

use framebench::{
    BenchError, BenchmarkParams, Benchmarker, Candidate, Outcome, Table, TableGenerator,
    benchmark::{Phase, metrics},
    candidate,
    chart::{self, Chart, JsonRenderer},
    models::Column,
    report,
};

fn col_sum_ops(table: &mut Table) -> anyhow::Result<Outcome> {
    let sum = table.require("col1")?.add(table.require("col2")?)?;
    Ok(Outcome::Array(sum))
}

fn col_sum_loop(table: &mut Table) -> anyhow::Result<Outcome> {
    let a = table.require("col1")?.as_ints().unwrap_or_default();
    let b = table.require("col2")?.as_ints().unwrap_or_default();
    let sum = a.iter().zip(b).map(|(x, y)| x + y).collect();
    Ok(Outcome::Array(Column::Int(sum)))
}

fn identity(table: &mut Table) -> anyhow::Result<Outcome> {
    Ok(Outcome::Table(table.clone()))
}

fn count_rows(table: &mut Table) -> anyhow::Result<Outcome> {
    Ok(Outcome::from(table.n_rows() as i64))
}

fn col_sum_params() -> BenchmarkParams {
    BenchmarkParams::new(
        "Column addition",
        TableGenerator::random_ints_seeded(&["col1", "col2"], 42),
        vec![candidate!(col_sum_ops), candidate!(col_sum_loop)],
    )
    .size_powers(&[2, 3])
    .loop_powers(&[1, 0])
}

#[test]
fn test_column_addition_scenario() {
    let mut benchmarker = Benchmarker::new(col_sum_params()).unwrap();
    assert!(benchmarker.is_valid());

    let results = benchmarker.benchmark_all().unwrap();
    assert!(results.valid);
    assert_eq!(results.len(), 2);
    for timings in &results.candidates {
        assert_eq!(timings.per_call_seconds.len(), 2);
        assert!(timings.per_call_seconds.iter().all(|t| *t >= 0.0));
    }
    assert_eq!(results.size_powers, vec![2, 3]);
    assert_eq!(results.loop_powers, vec![1, 0]);
}

#[test]
fn test_largest_size_forced_to_single_call() {
    let params = col_sum_params().size_powers(&[1, 2, 3]).loop_powers(&[3, 3, 3]);
    let benchmarker = Benchmarker::new(params).unwrap();
    assert_eq!(benchmarker.schedule().loop_powers(), vec![3, 3, 0]);
    assert_eq!(benchmarker.schedule().entries()[2].invocations, 1);

    let opted_out = col_sum_params()
        .size_powers(&[1, 2, 3])
        .loop_powers(&[3, 3, 3])
        .largest_single_test(false);
    let benchmarker = Benchmarker::new(opted_out).unwrap();
    assert_eq!(benchmarker.schedule().loop_powers(), vec![3, 3, 1]);
}

#[test]
fn test_identity_candidates_are_valid() {
    let params = BenchmarkParams::new(
        "Identity",
        TableGenerator::random_ints(&["A", "B"]),
        vec![
            Candidate::new("identity", identity),
            Candidate::new("identity_again", identity),
        ],
    )
    .size_powers(&[1])
    .loop_powers(&[0]);
    assert!(Benchmarker::new(params).unwrap().is_valid());
}

#[test]
fn test_incompatible_outputs_are_invalid_but_still_run() {
    let params = BenchmarkParams::new(
        "Mixed",
        TableGenerator::random_ints(&["A"]),
        vec![candidate!(identity), candidate!(count_rows)],
    )
    .size_powers(&[1, 2])
    .loop_powers(&[1, 0]);

    let mut benchmarker = Benchmarker::new(params).unwrap();
    assert!(!benchmarker.is_valid());

    let results = benchmarker.benchmark_all().unwrap();
    assert!(!results.valid);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_mismatched_schedules_are_rejected() {
    let params = col_sum_params().size_powers(&[2, 3, 4]).loop_powers(&[1, 0]);
    let err = Benchmarker::new(params).unwrap_err();
    assert!(matches!(
        err,
        BenchError::ScheduleMismatch {
            sizes: 3,
            repetitions: 2
        }
    ));
}

#[test]
fn test_empty_candidate_list_is_rejected() {
    let params = BenchmarkParams::new("Nothing", TableGenerator::random_ints(&["A"]), vec![]);
    let err = Benchmarker::new(params).unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}

#[test]
fn test_independent_draws_share_shape() {
    let benchmarker = Benchmarker::new(col_sum_params()).unwrap();
    let first = benchmarker.generate_table(1000).unwrap();
    let second = benchmarker.generate_table(1000).unwrap();
    assert_eq!(first.shape(), second.shape());
    assert!(!first.equals(&second));
}

#[test]
fn test_relative_chart_matches_absolute() {
    let mut benchmarker = Benchmarker::new(col_sum_params()).unwrap();
    let results = benchmarker.benchmark_all().unwrap().clone();

    let chart = Chart::from_results(&results).unwrap();
    let absolute = chart.absolute().unwrap();
    let relative = chart.relative().unwrap();
    let baseline = &absolute.series[0].values;

    for (abs, rel) in absolute.series.iter().zip(&relative.series) {
        assert_eq!(rel.values, metrics::relative_series(&abs.values, baseline));
    }
    assert!(
        relative.series[0]
            .values
            .iter()
            .all(|v| *v == 1.0 || !v.is_finite())
    );
}

#[test]
fn test_full_run_exports_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut benchmarker = Benchmarker::new(col_sum_params()).unwrap();
    benchmarker.benchmark_all().unwrap();
    benchmarker.print_results().unwrap();

    let chart_path = benchmarker.plot_results(&JsonRenderer, dir.path()).unwrap();
    let svg = chart::renderer_for("svg").unwrap();
    let svg_path = benchmarker.plot_results(svg.as_ref(), dir.path()).unwrap();
    let results_path = report::export_results(benchmarker.results().unwrap(), dir.path()).unwrap();

    assert_eq!(benchmarker.phase(), Phase::Reported);
    assert_eq!(chart_path, dir.path().join("Column addition.json"));
    assert_eq!(svg_path, dir.path().join("Column addition.svg"));
    assert_eq!(results_path, dir.path().join("Column addition.results.json"));
    for path in [chart_path, svg_path, results_path] {
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

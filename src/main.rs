//! framebench - Command line entry point
//!
//! Runs one bundled study (`BENCH_STUDY`) or all of them, printing the raw
//! timings and writing charts and results under `BENCH_EXPORT_DIR`.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use framebench::{
    Benchmarker,
    chart::{self, ChartRenderer},
    config::CONFIG,
    report,
    studies::{self, Study},
};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.harness.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let selected: Vec<&Study> = match &CONFIG.harness.study {
        Some(name) => vec![
            studies::by_name(name).with_context(|| format!("unknown study '{}'", name))?,
        ],
        None => studies::all().iter().collect(),
    };

    let renderer = chart::renderer_for(&CONFIG.export.chart_format)?;
    tracing::info!(
        "Running {} stud{} into {}",
        selected.len(),
        if selected.len() == 1 { "y" } else { "ies" },
        CONFIG.export.dir.display()
    );

    for study in selected {
        run_study(study, renderer.as_ref())
            .with_context(|| format!("study '{}' failed", study.name))?;
    }

    Ok(())
}

fn run_study(study: &Study, renderer: &dyn ChartRenderer) -> anyhow::Result<()> {
    tracing::info!("Starting study: {}", study.name);

    let mut benchmarker = Benchmarker::new(study.params(CONFIG.harness.seed))?;
    let results = benchmarker.benchmark_all()?;
    println!("{}", report::format_summary(results));

    benchmarker.print_results()?;
    benchmarker.plot_results(renderer, &CONFIG.export.dir)?;

    if CONFIG.export.write_results {
        let path = report::export_results(benchmarker.results()?, &CONFIG.export.dir)?;
        tracing::info!("Results written to {}", path.display());
    }

    Ok(())
}

//! Comparative charts
//!
//! Chart construction is pure: [`Chart::from_results`] turns results into a
//! two-panel description. Turning that description into bytes is the job of
//! a [`ChartRenderer`], and [`export_chart`] writes the rendered file.

pub mod svg;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::benchmark::metrics;
use crate::constants::{
    ABSOLUTE_Y_LABEL, RELATIVE_AXIS_FLOOR, SIZE_AXIS_LABEL, chart_formats,
};
use crate::error::{BenchError, BenchResult};
use crate::models::BenchmarkResults;
use crate::utils::validation::file_stem_for;

pub use svg::SvgRenderer;

/// Y-axis scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    Linear,
    Log,
}

/// One line on a panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    /// Non-finite values (a zero baseline time) are written as `null`
    /// and read back as NaN
    #[serde(with = "non_finite_as_null")]
    pub values: Vec<f64>,
}

mod non_finite_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        values
            .iter()
            .map(|v| v.is_finite().then_some(*v))
            .collect::<Vec<_>>()
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}

/// One plot area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub y_label: String,
    pub x_label: Option<String>,
    pub y_scale: AxisScale,
    /// Fixed upper bound of the y-axis, if any
    pub y_max: Option<f64>,
    /// Categorical x positions, one per size
    pub x_ticks: Vec<String>,
    pub series: Vec<Series>,
}

/// Two stacked panels: absolute time, then time relative to the baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Chart {
    /// Lay out the absolute and relative panels
    pub fn from_results(results: &BenchmarkResults) -> BenchResult<Self> {
        let baseline = results.baseline().ok_or_else(|| {
            BenchError::InvalidInput("cannot chart results without candidates".to_string())
        })?;

        let x_ticks: Vec<String> = results.size_powers.iter().map(|p| tick_label(*p)).collect();

        let absolute = Panel {
            title: results.title.clone(),
            y_label: ABSOLUTE_Y_LABEL.to_string(),
            x_label: None,
            y_scale: AxisScale::Log,
            y_max: None,
            x_ticks: x_ticks.clone(),
            series: results
                .candidates
                .iter()
                .map(|c| Series {
                    label: c.name.clone(),
                    values: c.per_call_seconds.clone(),
                })
                .collect(),
        };

        let relative = metrics::relative_results(results);
        let y_max = match metrics::max_ratio(&relative) {
            Some(max) if max >= RELATIVE_AXIS_FLOOR => None,
            _ => Some(RELATIVE_AXIS_FLOOR),
        };

        let relative = Panel {
            title: results.title.clone(),
            y_label: format!("w.r.t. '{}' time", baseline.name),
            x_label: Some(SIZE_AXIS_LABEL.to_string()),
            y_scale: AxisScale::Linear,
            y_max,
            x_ticks,
            series: relative
                .into_iter()
                .map(|c| Series {
                    label: c.name,
                    values: c.per_call_seconds,
                })
                .collect(),
        };

        Ok(Self {
            title: results.title.clone(),
            panels: vec![absolute, relative],
        })
    }

    pub fn absolute(&self) -> Option<&Panel> {
        self.panels.first()
    }

    pub fn relative(&self) -> Option<&Panel> {
        self.panels.get(1)
    }
}

/// Size tick label for a power of ten
pub fn tick_label(power: u32) -> String {
    format!("10^{}", power)
}

/// Turns a chart description into file contents
pub trait ChartRenderer {
    /// File extension without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, chart: &Chart) -> BenchResult<String>;
}

/// Writes the chart description itself as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        chart_formats::JSON
    }

    fn render(&self, chart: &Chart) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(chart)?)
    }
}

/// Renderer for a configured format name
pub fn renderer_for(format: &str) -> BenchResult<Box<dyn ChartRenderer>> {
    match format {
        chart_formats::SVG => Ok(Box::new(SvgRenderer::default())),
        chart_formats::JSON => Ok(Box::new(JsonRenderer)),
        other => Err(BenchError::Configuration(format!(
            "unsupported chart format '{}'",
            other
        ))),
    }
}

/// Render `chart` and write it to `<dir>/<title>.<ext>`.
///
/// `dir` must already exist.
pub fn export_chart(
    chart: &Chart,
    renderer: &dyn ChartRenderer,
    dir: &Path,
) -> BenchResult<PathBuf> {
    let contents = renderer.render(chart)?;
    let path = dir.join(format!(
        "{}.{}",
        file_stem_for(&chart.title),
        renderer.extension()
    ));
    fs::write(&path, contents)?;
    Ok(path)
}

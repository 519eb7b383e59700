//! Standalone SVG rendering of a [`Chart`]

use std::fmt::Write as _;

use super::{AxisScale, Chart, ChartRenderer, Panel};
use crate::constants::{CHART_HEIGHT, CHART_WIDTH, SERIES_COLORS, chart_formats};
use crate::error::{BenchError, BenchResult};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const LINEAR_TICKS: usize = 5;

/// Renders both panels stacked vertically on one canvas
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

/// Pixel rectangle of one panel's plot area
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    /// x pixel of category `i` out of `n`, evenly spaced
    fn x(&self, i: usize, n: usize) -> f64 {
        if n <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * i as f64 / (n - 1) as f64
    }
}

/// Value-to-pixel mapping for the y-axis
#[derive(Debug, Clone, Copy)]
enum YAxis {
    Linear { max: f64 },
    /// Decade bounds, as log10 exponents
    Log { lo: i32, hi: i32 },
}

impl YAxis {
    fn for_panel(panel: &Panel) -> Self {
        let values = panel.series.iter().flat_map(|s| s.values.iter().copied());

        match panel.y_scale {
            AxisScale::Linear => {
                let data_max = values
                    .filter(|v| v.is_finite())
                    .fold(0.0f64, f64::max);
                let max = panel.y_max.unwrap_or(data_max).max(data_max);
                YAxis::Linear {
                    max: if max > 0.0 { max } else { 1.0 },
                }
            }
            AxisScale::Log => {
                let (lo, hi) = values
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .map(f64::log10)
                    .fold(None, |acc: Option<(f64, f64)>, v| {
                        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
                    })
                    .unwrap_or((-6.0, 0.0));
                let lo = lo.floor() as i32;
                let hi = (hi.ceil() as i32).max(lo + 1);
                YAxis::Log { lo, hi }
            }
        }
    }

    /// Pixel y of `value`, or `None` if the value cannot be drawn
    fn y(&self, frame: &Frame, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let fraction = match *self {
            YAxis::Linear { max } => value / max,
            YAxis::Log { lo, hi } => {
                if value <= 0.0 {
                    return None;
                }
                (value.log10() - lo as f64) / (hi - lo) as f64
            }
        };
        Some(frame.bottom() - fraction * frame.height)
    }

    /// Tick positions paired with their labels
    fn ticks(&self) -> Vec<(f64, String)> {
        match *self {
            YAxis::Linear { max } => (0..=LINEAR_TICKS)
                .map(|i| {
                    let v = max * i as f64 / LINEAR_TICKS as f64;
                    (v, format!("{:.2}", v))
                })
                .collect(),
            YAxis::Log { lo, hi } => (lo..=hi)
                .map(|k| (10f64.powi(k), format!("1e{}", k)))
                .collect(),
        }
    }
}

/// Escape text for XML content and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn color(i: usize) -> &'static str {
    SERIES_COLORS[i % SERIES_COLORS.len()]
}

impl SvgRenderer {
    fn frame(&self, slot: usize, slots: usize) -> Frame {
        let slot_height = self.height as f64 / slots.max(1) as f64;
        Frame {
            left: MARGIN_LEFT,
            top: slot as f64 * slot_height + MARGIN_TOP,
            width: self.width as f64 - MARGIN_LEFT - MARGIN_RIGHT,
            height: slot_height - MARGIN_TOP - MARGIN_BOTTOM,
        }
    }

    fn render_panel(&self, svg: &mut String, panel: &Panel, frame: Frame) -> std::fmt::Result {
        let axis = YAxis::for_panel(panel);

        writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"16\">{}</text>",
            frame.left + frame.width / 2.0,
            frame.top - 20.0,
            escape(&panel.title)
        )?;

        // Axes
        writeln!(
            svg,
            "  <line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"#333\"/>",
            l = frame.left,
            t = frame.top,
            b = frame.bottom()
        )?;
        writeln!(
            svg,
            "  <line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"#333\"/>",
            l = frame.left,
            r = frame.right(),
            b = frame.bottom()
        )?;

        for (value, label) in axis.ticks() {
            let Some(y) = axis.y(&frame, value) else {
                continue;
            };
            writeln!(
                svg,
                "  <line x1=\"{:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#ddd\"/>",
                frame.left,
                frame.right()
            )?;
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\">{}</text>",
                frame.left - 6.0,
                y + 4.0,
                escape(&label)
            )?;
        }

        let n = panel.x_ticks.len();
        for (i, label) in panel.x_ticks.iter().enumerate() {
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\">{}</text>",
                frame.x(i, n),
                frame.bottom() + 18.0,
                escape(label)
            )?;
        }

        writeln!(
            svg,
            "  <text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"13\" transform=\"rotate(-90 {x:.1} {y:.1})\">{}</text>",
            escape(&panel.y_label),
            x = frame.left - 55.0,
            y = frame.top + frame.height / 2.0
        )?;
        if let Some(x_label) = &panel.x_label {
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\">{}</text>",
                frame.left + frame.width / 2.0,
                frame.bottom() + 40.0,
                escape(x_label)
            )?;
        }

        // Series
        for (i, series) in panel.series.iter().enumerate() {
            let points: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .filter_map(|(pos, v)| axis.y(&frame, *v).map(|y| (frame.x(pos, n), y)))
                .collect();

            let path = points
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                svg,
                "  <polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>",
                color(i),
                path
            )?;
            for (x, y) in &points {
                writeln!(
                    svg,
                    "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"3\" fill=\"{}\"/>",
                    x,
                    y,
                    color(i)
                )?;
            }
        }

        // Legend
        for (i, series) in panel.series.iter().enumerate() {
            let y = frame.top + 14.0 + i as f64 * 16.0;
            writeln!(
                svg,
                "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"10\" height=\"10\" fill=\"{}\"/>",
                frame.left + 10.0,
                y - 9.0,
                color(i)
            )?;
            writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">{}</text>",
                frame.left + 26.0,
                y,
                escape(&series.label)
            )?;
        }

        Ok(())
    }
}

impl ChartRenderer for SvgRenderer {
    fn extension(&self) -> &'static str {
        chart_formats::SVG
    }

    fn render(&self, chart: &Chart) -> BenchResult<String> {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = self.width,
            h = self.height
        ));
        svg.push_str(&format!("  <title>{}</title>\n", escape(&chart.title)));
        svg.push_str("  <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        for (slot, panel) in chart.panels.iter().enumerate() {
            let frame = self.frame(slot, chart.panels.len());
            self.render_panel(&mut svg, panel, frame)
                .map_err(|e| BenchError::Serialization(e.to_string()))?;
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

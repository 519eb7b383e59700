//! Harness-wide constants
//!
//! This module contains all constant values used throughout the harness.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SCHEDULE DEFAULTS
// =============================================================================

/// Default table sizes, as powers of ten (100 .. 100,000,000 rows)
pub const DEFAULT_SIZE_POWERS: &[u32] = &[2, 3, 4, 5, 6, 7, 8];

/// Default invocation counts per size, as powers of ten
pub const DEFAULT_LOOP_POWERS: &[u32] = &[4, 4, 3, 3, 2, 1, 1];

/// Last repetition power when the largest size is measured once
pub const SINGLE_TEST_LOOP_POWER: u32 = 0;

/// Last repetition power when the caller opts out of the single test
pub const OPT_OUT_LOOP_POWER: u32 = 1;

// =============================================================================
// EXPORT DEFAULTS
// =============================================================================

/// Default directory receiving charts and result files
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Default log filter for the binary
pub const DEFAULT_LOG_FILTER: &str = "framebench=info";

/// Chart output formats
pub mod chart_formats {
    pub const SVG: &str = "svg";
    pub const JSON: &str = "json";

    /// All supported chart formats
    pub const ALL: &[&str] = &[SVG, JSON];
}

// =============================================================================
// CHART LAYOUT
// =============================================================================

/// Relative panel y-axis is raised to at least this ratio
pub const RELATIVE_AXIS_FLOOR: f64 = 3.0;

/// Chart canvas width in pixels
pub const CHART_WIDTH: u32 = 700;

/// Chart canvas height in pixels (two stacked panels)
pub const CHART_HEIGHT: u32 = 1400;

/// Y-axis label of the absolute panel
pub const ABSOLUTE_Y_LABEL: &str = "Seconds";

/// X-axis label of the relative panel
pub const SIZE_AXIS_LABEL: &str = "Dataframe size";

/// Series colors, cycled in candidate order
pub const SERIES_COLORS: &[&str] = &[
    "#4c72b0", "#dd8452", "#55a868", "#c44e52", "#8172b3", "#937860", "#da8bc3", "#8c8c8c",
];

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum study title length
pub const MAX_TITLE_LENGTH: u64 = 200;

use crate::types::{Percentage, StepCount};

/// Constants used by line classification.
pub mod classify {
    use super::StepCount;

    /// Marker that opens a header/comment line.
    pub const COMMENT_MARKER: &str = "#";
    /// Marker that opens an energy-sample record.
    pub const ENERGY_RECORD_MARKER: &str = "FepEnergy:";
    /// Zero-based index of the whitespace-delimited step token in an energy record.
    pub const STEP_TOKEN_INDEX: usize = 1;
    /// Default step-count threshold separating equilibration from production.
    pub const DEFAULT_EQUIL_STEP_THRESHOLD: StepCount = 1_000_000;
}

/// Constants used by input-log discovery.
pub mod inputs {
    /// Filename prefix that marks a raw simulation log.
    pub const INPUT_FILE_PREFIX: &str = "forward_";
    /// Filename extension shared by raw logs and derivative logs.
    pub const FEPOUT_EXTENSION: &str = "fepout";
}

/// Constants used by the fan-out writer and its output artifacts.
pub mod outputs {
    use super::Percentage;

    /// Smallest percentile target emitted per batch.
    pub const PERCENT_MIN: Percentage = 1;
    /// Largest percentile target emitted per batch.
    pub const PERCENT_MAX: Percentage = 99;
    /// Default directory for derivative logs.
    pub const DEFAULT_OUTPUT_DIR: &str = "processed_runs";
    /// Filename prefix for derivative logs.
    pub const OUTPUT_FILE_PREFIX: &str = "simulation_";
    /// Filename suffix for derivative logs (follows the zero-padded percentage).
    pub const OUTPUT_FILE_SUFFIX: &str = "percent.fepout";
    /// Default per-sink write buffer size in bytes.
    pub const DEFAULT_SINK_BUFFER_BYTES: usize = 1024 * 1024;
}

/// Constants used by convergence-plot rendering.
pub mod plot {
    /// Default filename for the rendered convergence chart.
    pub const DEFAULT_PLOT_FILENAME: &str = "convergence_plot.png";
    /// Chart canvas width in pixels.
    pub const PLOT_WIDTH_PX: u32 = 1000;
    /// Chart canvas height in pixels.
    pub const PLOT_HEIGHT_PX: u32 = 600;
    /// Chart caption.
    pub const PLOT_CAPTION: &str = "Convergence of Free Energy (\u{0394}G) vs. Simulation Length";
    /// X-axis label.
    pub const X_AXIS_LABEL: &str = "Percentage of Production Run Used (%)";
    /// Y-axis label.
    pub const Y_AXIS_LABEL: &str = "Free Energy \u{0394}G (kcal/mol)";
}

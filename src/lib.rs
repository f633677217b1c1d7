#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reusable CLI runners shared by the binaries.
pub mod apps;
/// Raw log line classification.
pub mod classify;
/// Batch configuration types.
pub mod config;
/// Centralized constants used across classification, fan-out, and plotting.
pub mod constants;
/// Input-log discovery.
pub mod discover;
/// Free-energy extraction from derivative logs.
pub mod extract;
/// Percentile fan-out writer and output naming.
pub mod fanout;
/// Batch orchestration.
pub mod pipeline;
/// Convergence-chart rendering.
pub mod plot;
/// Convergence-series collection.
pub mod series;
/// Percentile slicing arithmetic.
pub mod slice;
/// Phase splitting of classified line streams.
pub mod split;
/// Shared type aliases.
pub mod types;

mod errors;

pub use classify::{LineClass, classify_line};
pub use config::{ParsePolicy, PrepConfig};
pub use discover::discover_input_logs;
pub use errors::PrepError;
pub use extract::last_free_energy;
pub use fanout::FanoutWriter;
pub use pipeline::{BatchSummary, process_simulations};
pub use plot::render_convergence_plot;
pub use series::{ConvergencePoint, collect_series};
pub use slice::{percent_targets, production_prefix_len};
pub use split::SplitResult;
pub use types::{FreeEnergy, LogLine, Percentage, StepCount};

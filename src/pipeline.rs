use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::config::{ParsePolicy, PrepConfig};
use crate::discover::discover_input_logs;
use crate::errors::PrepError;
use crate::fanout::FanoutWriter;
use crate::split::SplitResult;

/// Outcome counters for one completed batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Input logs that contributed to the sinks.
    pub processed_logs: usize,
    /// Input logs skipped under [`ParsePolicy::SkipFile`].
    pub skipped_logs: usize,
}

/// Run one full batch: discover raw logs under `input_dir`, split each, and
/// fan the results out to the 99 percentile sinks under `output_dir`.
///
/// Discovery runs before any output-side effect, so an empty input set aborts
/// with the output directory untouched. Each input log is split in full
/// before its first byte reaches any sink; under `SkipFile` a malformed log
/// therefore contributes nothing anywhere. Sinks are created once, appended
/// in input-file order, and flushed/closed once after the last log.
pub fn process_simulations(
    input_dir: &Path,
    output_dir: &Path,
    config: &PrepConfig,
) -> Result<BatchSummary, PrepError> {
    let inputs = discover_input_logs(input_dir)?;
    info!(count = inputs.len(), "processing input logs");

    let mut writer = FanoutWriter::create(output_dir, config.sink_buffer_bytes)?;
    let mut summary = BatchSummary::default();
    for path in &inputs {
        info!(path = %path.display(), "parsing input log");
        let raw =
            fs::read_to_string(path).map_err(|err| PrepError::from(err).in_log(path.display().to_string()))?;
        match SplitResult::from_lines(raw.split_inclusive('\n'), config.equil_step_threshold) {
            Ok(split) => {
                writer.append_log(&split)?;
                summary.processed_logs += 1;
            }
            Err(err @ PrepError::MalformedStep { .. })
                if config.parse_policy == ParsePolicy::SkipFile =>
            {
                warn!(path = %path.display(), error = %err, "skipping unparseable input log");
                summary.skipped_logs += 1;
            }
            Err(err) => return Err(err.in_log(path.display().to_string())),
        }
    }
    writer.finish()?;
    Ok(summary)
}

use crate::constants::classify::DEFAULT_EQUIL_STEP_THRESHOLD;
use crate::constants::outputs::DEFAULT_SINK_BUFFER_BYTES;
use crate::types::StepCount;

/// Policy applied when an energy record carries an unparseable step count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Abort the whole batch on the first malformed record (reference behavior).
    AbortBatch,
    /// Skip the affected input log entirely and continue the batch.
    ///
    /// The log is dropped before any of its lines reach any sink, so all 99
    /// sinks stay consistent with each other.
    SkipFile,
}

/// Top-level batch configuration.
#[derive(Clone, Debug)]
pub struct PrepConfig {
    /// Step-count threshold separating equilibration from production.
    ///
    /// Records with `step <= equil_step_threshold` belong to the
    /// equilibration phase and are retained in full in every derivative log.
    pub equil_step_threshold: StepCount,
    /// Policy for malformed step counts.
    pub parse_policy: ParsePolicy,
    /// Write buffer size per output sink, in bytes.
    pub sink_buffer_bytes: usize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            equil_step_threshold: DEFAULT_EQUIL_STEP_THRESHOLD,
            parse_policy: ParsePolicy::AbortBatch,
            sink_buffer_bytes: DEFAULT_SINK_BUFFER_BYTES,
        }
    }
}

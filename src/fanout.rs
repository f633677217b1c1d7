use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::outputs::{OUTPUT_FILE_PREFIX, OUTPUT_FILE_SUFFIX};
use crate::errors::PrepError;
use crate::slice::{percent_targets, production_prefix_len};
use crate::split::SplitResult;
use crate::types::Percentage;

/// Derivative-log filename for one percentile target.
/// Example: `simulation_07percent.fepout`
pub fn sink_filename(percent: Percentage) -> String {
    format!("{OUTPUT_FILE_PREFIX}{percent:02}{OUTPUT_FILE_SUFFIX}")
}

/// Owns the 99 percentile sinks for one batch.
///
/// Sinks are created (truncating) before any input is processed and stay open
/// across the whole batch; every input log appends to all of them. Handles are
/// released when the writer is dropped on any exit path; call [`finish`] on
/// the success path so flush failures surface instead of being swallowed by
/// `Drop`.
///
/// [`finish`]: FanoutWriter::finish
pub struct FanoutWriter {
    sinks: Vec<BufWriter<File>>,
}

impl FanoutWriter {
    /// Create `dir` if absent and open one truncated sink per percentile.
    pub fn create(dir: &Path, buffer_bytes: usize) -> Result<Self, PrepError> {
        fs::create_dir_all(dir)?;
        let mut sinks = Vec::with_capacity(percent_targets().count());
        for percent in percent_targets() {
            let file = File::create(Self::sink_path(dir, percent))?;
            sinks.push(BufWriter::with_capacity(buffer_bytes, file));
        }
        Ok(Self { sinks })
    }

    /// Full path of the sink for `percent` under `dir`.
    pub fn sink_path(dir: &Path, percent: Percentage) -> PathBuf {
        dir.join(sink_filename(percent))
    }

    /// Append one split input log to every sink: headers, then the full
    /// equilibration run, then the percentile-sliced production prefix.
    ///
    /// Any write failure is fatal for the batch; divergent partial output
    /// across sinks must never pass as success.
    pub fn append_log(&mut self, split: &SplitResult) -> Result<(), PrepError> {
        for (sink, percent) in self.sinks.iter_mut().zip(percent_targets()) {
            for line in &split.headers {
                sink.write_all(line.as_bytes())?;
            }
            for line in &split.equil {
                sink.write_all(line.as_bytes())?;
            }
            let prefix = production_prefix_len(split.prod.len(), percent);
            for line in &split.prod[..prefix] {
                sink.write_all(line.as_bytes())?;
            }
        }
        Ok(())
    }

    /// Flush and close every sink, surfacing the first failure.
    pub fn finish(mut self) -> Result<(), PrepError> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}

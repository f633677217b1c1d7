use std::io;

use thiserror::Error;

/// Error type for discovery, classification, fan-out, and rendering failures.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("no files matching '{pattern}' found under {dir}")]
    NoInputs { dir: String, pattern: String },
    #[error("malformed step count '{token}' in energy record")]
    MalformedStep { token: String },
    #[error("failed to process input log {path}: {source}")]
    InputLog {
        path: String,
        #[source]
        source: Box<PrepError>,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("plot rendering failed: {0}")]
    Render(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PrepError {
    /// Wrap an error with the input-log path it occurred in.
    pub fn in_log(self, path: impl Into<String>) -> Self {
        PrepError::InputLog {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

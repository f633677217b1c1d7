use crate::constants::classify::{COMMENT_MARKER, ENERGY_RECORD_MARKER, STEP_TOKEN_INDEX};
use crate::errors::PrepError;
use crate::types::StepCount;

/// Classification outcome for one raw log line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineClass {
    /// Comment/header line, retained verbatim in every derivative log.
    Header,
    /// Energy record at or below the equilibration threshold.
    EquilSample(StepCount),
    /// Energy record past the equilibration threshold.
    ProdSample(StepCount),
    /// Unrecognized line, dropped from every derivative log.
    Ignored,
}

/// Classify one raw line against `equil_step_threshold`.
///
/// Headers are matched on the leading comment marker without further parsing.
/// Energy records are matched on the leading record marker; their second
/// whitespace-delimited token is the step count. A record whose step token is
/// missing or non-integer is a malformed-step error, never silently ignored.
pub fn classify_line(line: &str, equil_step_threshold: StepCount) -> Result<LineClass, PrepError> {
    if line.starts_with(COMMENT_MARKER) {
        return Ok(LineClass::Header);
    }
    if !line.starts_with(ENERGY_RECORD_MARKER) {
        return Ok(LineClass::Ignored);
    }
    let token = line
        .split_whitespace()
        .nth(STEP_TOKEN_INDEX)
        .unwrap_or_default();
    let step: StepCount = token.parse().map_err(|_| PrepError::MalformedStep {
        token: token.to_string(),
    })?;
    if step <= equil_step_threshold {
        Ok(LineClass::EquilSample(step))
    } else {
        Ok(LineClass::ProdSample(step))
    }
}

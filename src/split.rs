use crate::classify::{LineClass, classify_line};
use crate::errors::PrepError;
use crate::types::{LogLine, StepCount};

/// Phase-separated view of one input log.
///
/// Each sequence preserves the relative order of its lines in the source, and
/// every retained line is byte-identical to the source, terminator included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitResult {
    /// Header/comment lines, in original order.
    pub headers: Vec<LogLine>,
    /// Equilibration-phase energy records, in original order.
    pub equil: Vec<LogLine>,
    /// Production-phase energy records, in original order.
    pub prod: Vec<LogLine>,
}

impl SplitResult {
    /// Partition an ordered line sequence into headers, equilibration, and
    /// production. Pure single forward pass; unrecognized lines are dropped.
    pub fn from_lines<'a, I>(lines: I, equil_step_threshold: StepCount) -> Result<Self, PrepError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut split = SplitResult::default();
        for line in lines {
            match classify_line(line, equil_step_threshold)? {
                LineClass::Header => split.headers.push(line.to_string()),
                LineClass::EquilSample(_) => split.equil.push(line.to_string()),
                LineClass::ProdSample(_) => split.prod.push(line.to_string()),
                LineClass::Ignored => {}
            }
        }
        Ok(split)
    }
}

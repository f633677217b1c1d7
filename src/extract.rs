use std::fs;
use std::path::Path;

use crate::constants::classify::COMMENT_MARKER;
use crate::errors::PrepError;
use crate::types::FreeEnergy;

/// Final reported free-energy estimate in a derivative log, if any.
///
/// Scans from the end for the last non-empty, non-comment line whose trailing
/// whitespace-delimited token parses as a float. Lines whose trailing token
/// does not parse are passed over and the scan continues; `None` means the
/// whole file has no extractable value.
pub fn last_free_energy(path: &Path) -> Result<Option<FreeEnergy>, PrepError> {
    let raw = fs::read_to_string(path)?;
    Ok(last_free_energy_in(&raw))
}

/// In-memory variant of [`last_free_energy`].
pub fn last_free_energy_in(raw: &str) -> Option<FreeEnergy> {
    for line in raw.lines().rev() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
            continue;
        }
        if let Some(value) = trimmed
            .split_whitespace()
            .next_back()
            .and_then(|token| token.parse::<FreeEnergy>().ok())
        {
            return Some(value);
        }
    }
    None
}

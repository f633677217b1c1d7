use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;
use walkdir::WalkDir;

use crate::constants::outputs::{OUTPUT_FILE_PREFIX, OUTPUT_FILE_SUFFIX};
use crate::errors::PrepError;
use crate::extract::last_free_energy;
use crate::types::{FreeEnergy, Percentage};

/// One point of the convergence series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConvergencePoint {
    /// Percentage of the production run included in the derivative log.
    pub percent: Percentage,
    /// Final free-energy estimate reported by that log.
    pub value: FreeEnergy,
}

/// Percentage encoded in a derivative-log filename, if it is one.
/// `simulation_07percent.fepout` -> `7`.
pub fn percent_from_filename(name: &str) -> Option<Percentage> {
    name.strip_prefix(OUTPUT_FILE_PREFIX)?
        .strip_suffix(OUTPUT_FILE_SUFFIX)?
        .parse()
        .ok()
}

/// Collect the convergence series from the derivative logs under `runs_dir`.
///
/// Points come back ordered by ascending percentage, which keeps the plot's
/// x-axis monotonic. Extraction is tolerant per file: a derivative log with no
/// extractable value is logged and left out, never a batch failure.
pub fn collect_series(runs_dir: &Path) -> Result<Vec<ConvergencePoint>, PrepError> {
    let mut derivatives: Vec<(Percentage, PathBuf)> = WalkDir::new(runs_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let percent = entry
                .file_name()
                .to_str()
                .and_then(percent_from_filename)?;
            Some((percent, entry.path().to_path_buf()))
        })
        .collect();
    if derivatives.is_empty() {
        return Err(PrepError::NoInputs {
            dir: runs_dir.display().to_string(),
            pattern: format!("{OUTPUT_FILE_PREFIX}*{OUTPUT_FILE_SUFFIX}"),
        });
    }
    derivatives.sort();

    let mut points = Vec::with_capacity(derivatives.len());
    for (percent, path) in derivatives {
        match last_free_energy(&path) {
            Ok(Some(value)) => points.push(ConvergencePoint { percent, value }),
            Ok(None) => {
                warn!(path = %path.display(), "no free-energy value found, point omitted");
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "extraction failed, point omitted");
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn filename_percent_round_trips() {
        assert_eq!(percent_from_filename("simulation_01percent.fepout"), Some(1));
        assert_eq!(percent_from_filename("simulation_99percent.fepout"), Some(99));
        assert_eq!(percent_from_filename("simulation_XXpercent.fepout"), None);
        assert_eq!(percent_from_filename("forward_01.fepout"), None);
    }

    #[test]
    fn series_is_ordered_and_tolerates_missing_values() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("simulation_02percent.fepout"),
            "#hdr\nFepEnergy: 2000000 1.0 -2.0\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("simulation_01percent.fepout"),
            "#hdr\nFepEnergy: 2000000 1.0 -1.0\n",
        )
        .unwrap();
        // No data lines at all: this percentage is simply missing.
        fs::write(dir.path().join("simulation_03percent.fepout"), "#hdr\n").unwrap();

        let series = collect_series(dir.path()).unwrap();
        assert_eq!(
            series,
            vec![
                ConvergencePoint {
                    percent: 1,
                    value: -1.0
                },
                ConvergencePoint {
                    percent: 2,
                    value: -2.0
                },
            ]
        );
    }

    #[test]
    fn empty_runs_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let err = collect_series(dir.path()).unwrap_err();
        assert!(matches!(err, PrepError::NoInputs { .. }));
    }
}

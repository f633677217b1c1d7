use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::constants::inputs::{FEPOUT_EXTENSION, INPUT_FILE_PREFIX};
use crate::errors::PrepError;

/// True if the path names a raw simulation log (`forward_*.fepout`).
pub fn is_input_log(path: &Path) -> bool {
    let has_prefix = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with(INPUT_FILE_PREFIX))
        .unwrap_or(false);
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(FEPOUT_EXTENSION))
        .unwrap_or(false);
    has_prefix && has_extension
}

/// Collect the raw simulation logs directly under `dir`, sorted by file name.
///
/// The sorted order fixes the batch processing order, which in turn fixes the
/// per-log concatenation order inside every output sink. An empty result is an
/// error: the batch must abort before any output-side effect.
pub fn discover_input_logs(dir: &Path) -> Result<Vec<PathBuf>, PrepError> {
    let mut logs: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| is_input_log(path))
        .collect();
    logs.sort();
    if logs.is_empty() {
        return Err(PrepError::NoInputs {
            dir: dir.display().to_string(),
            pattern: format!("{INPUT_FILE_PREFIX}*.{FEPOUT_EXTENSION}"),
        });
    }
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn matches_prefix_and_extension_only() {
        assert!(is_input_log(Path::new("forward_01.fepout")));
        assert!(is_input_log(Path::new("runs/forward_window3.FEPOUT")));
        assert!(!is_input_log(Path::new("backward_01.fepout")));
        assert!(!is_input_log(Path::new("forward_01.log")));
        assert!(!is_input_log(Path::new("forward_01")));
    }

    #[test]
    fn discovery_is_sorted_and_ignores_other_files() {
        let dir = tempdir().unwrap();
        for name in ["forward_02.fepout", "forward_01.fepout", "notes.txt"] {
            fs::write(dir.path().join(name), "#hdr\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/forward_03.fepout"), "#hdr\n").unwrap();

        let logs = discover_input_logs(dir.path()).unwrap();
        let names: Vec<String> = logs
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["forward_01.fepout", "forward_02.fepout"]);
    }

    #[test]
    fn empty_directory_reports_no_inputs() {
        let dir = tempdir().unwrap();
        let err = discover_input_logs(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            PrepError::NoInputs { ref pattern, .. } if pattern == "forward_*.fepout"
        ));
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Position;

/// # Errors
///
/// Will return `Err` if the path is not a readable directory
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The data directory '{dir}' is not readable."));
    }
    Ok(path)
}

/// Position source files that are absent from `data_dir`. Missing files only
/// disable their own panel, so this is reported rather than rejected.
#[must_use]
pub fn missing_source_files(data_dir: &Path) -> Vec<PathBuf> {
    Position::ALL
        .iter()
        .map(|p| data_dir.join(p.source_file_name()))
        .filter(|path| !path.is_file())
        .collect()
}

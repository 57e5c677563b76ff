use std::path::PathBuf;

use crate::PathsError;

/// Returns the CitizenFX data directory on Linux.
pub(crate) fn get_base_dir() -> Result<PathBuf, PathsError> {
    let home = home_dir()?;

    let dir = home.join(".local").join("share").join("CitizenFX");
    if dir.exists() {
        tracing::debug!(dir = %dir.display(), "CitizenFX data directory found");
        return Ok(dir);
    }

    Err(PathsError::NotFound)
}

fn home_dir() -> Result<PathBuf, PathsError> {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or(PathsError::NotFound)
}

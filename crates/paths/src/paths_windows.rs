use std::path::PathBuf;

use crate::PathsError;

/// Returns the FiveM application directory on Windows.
///
/// The client keeps its data under `%LocalAppData%\FiveM\FiveM.app`.
pub(crate) fn get_base_dir() -> Result<PathBuf, PathsError> {
    let local_app_data = std::env::var_os("LOCALAPPDATA")
        .map(PathBuf::from)
        .ok_or(PathsError::NotFound)?;

    let dir = local_app_data.join("FiveM").join("FiveM.app");
    if dir.exists() {
        tracing::debug!(dir = %dir.display(), "FiveM application directory found");
        return Ok(dir);
    }

    Err(PathsError::NotFound)
}

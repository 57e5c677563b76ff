use std::path::{Path, PathBuf};

use crate::PathsError;

/// Provides access to FiveM/CitizenFX directory paths.
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    /// Creates a new `Paths` instance with an auto-detected data directory.
    pub fn new() -> Result<Self, PathsError> {
        let base_dir = get_base_dir()?;
        Ok(Self { base_dir })
    }

    /// Creates a new `Paths` instance with a custom base directory.
    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Returns the client data directory.
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Returns the rotated-logs directory.
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Returns the path to the main CitizenFX log.
    pub fn citizen_log(&self) -> PathBuf {
        self.base_dir.join("CitizenFX.log")
    }

    /// Returns the path to the FiveM client log.
    pub fn client_log(&self) -> PathBuf {
        self.base_dir.join("FiveM.log")
    }

    /// Lists `*.log` files in the log directory, newest first.
    ///
    /// Log file names carry a timestamp, so descending name order is
    /// chronological. Returns an empty list if the directory is missing.
    pub fn log_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(self.log_dir()) else {
            return Vec::new();
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_log_file(path))
            .collect();

        files.sort_unstable_by(|a, b| b.cmp(a));
        files
    }

    /// Returns the most recent rotated log, falling back to the main
    /// CitizenFX log if it exists.
    pub fn latest_log(&self) -> Option<PathBuf> {
        if let Some(latest) = self.log_files().into_iter().next() {
            return Some(latest);
        }

        let main = self.citizen_log();
        if main.exists() { Some(main) } else { None }
    }
}

fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".log"))
}

// Platform-specific base directory detection.
#[cfg(target_os = "linux")]
fn get_base_dir() -> Result<PathBuf, PathsError> {
    crate::paths_linux::get_base_dir()
}

#[cfg(target_os = "macos")]
fn get_base_dir() -> Result<PathBuf, PathsError> {
    crate::paths_macos::get_base_dir()
}

#[cfg(target_os = "windows")]
fn get_base_dir() -> Result<PathBuf, PathsError> {
    crate::paths_windows::get_base_dir()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn get_base_dir() -> Result<PathBuf, PathsError> {
    Err(PathsError::NotFound)
}

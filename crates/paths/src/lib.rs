//! FiveM/CitizenFX path detection.
//!
//! Locates the client's data directory per platform and exposes the log
//! file locations inside it.

pub mod paths;
#[cfg(target_os = "linux")]
mod paths_linux;
#[cfg(target_os = "macos")]
mod paths_macos;
#[cfg(target_os = "windows")]
mod paths_windows;

pub use paths::Paths;

/// Errors for FiveM path operations.
#[derive(Debug, thiserror::Error)]
pub enum PathsError {
    #[error("FiveM installation not found")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(String),
}

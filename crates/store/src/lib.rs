//! On-disk token persistence.
//!
//! The store keeps two values: the token itself and the epoch-millisecond
//! timestamp it was saved at. A loaded token older than 24 hours is
//! treated as expired and discarded, never handed back to the caller.
//!
//! The file lives in the platform config directory:
//! - Linux/macOS: `~/.config/cfxtoken/token.toml`
//! - Windows: `%APPDATA%\cfxtoken\token.toml`

use std::path::{Path, PathBuf};

use cfxtoken_extract::Token;
use serde::{Deserialize, Serialize};

/// Maximum age before a stored token is considered expired.
pub const MAX_TOKEN_AGE_MS: i64 = 24 * 60 * 60 * 1000;

/// Returns the current time as epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Errors for token store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is corrupt: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to encode store file: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// A persisted token and its creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    pub saved_at_ms: i64,
}

impl StoredToken {
    /// Age of this entry relative to `now_ms`.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.saved_at_ms
    }

    /// Whether this entry has outlived the 24-hour validity window.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.age_ms(now_ms) > MAX_TOKEN_AGE_MS
    }
}

/// File-backed token store.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store at the platform default location.
    pub fn open_default() -> Self {
        Self {
            path: default_path(),
        }
    }

    /// Creates a store backed by the given file.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a token stamped with `now_ms`.
    pub fn save(&self, token: &Token, now_ms: i64) -> Result<(), StoreError> {
        let entry = StoredToken {
            token: token.as_str().to_string(),
            saved_at_ms: now_ms,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(&entry)?;
        std::fs::write(&self.path, content)?;

        // Restrict permissions on Unix; the file holds a credential.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    /// Loads the stored token, enforcing the validity window.
    ///
    /// Returns `Ok(None)` when no token is stored or the stored one has
    /// expired. An expired entry is deleted so the credential does not
    /// linger on disk.
    pub fn load(&self, now_ms: i64) -> Result<Option<StoredToken>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let entry: StoredToken = toml::from_str(&content)?;

        if entry.is_expired(now_ms) {
            tracing::info!(age_ms = entry.age_ms(now_ms), "stored token expired, discarding");
            self.clear()?;
            return Ok(None);
        }

        Ok(Some(entry))
    }

    /// Deletes the stored token, if any.
    pub fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
            tracing::debug!(path = %self.path.display(), "token cleared");
        }
        Ok(())
    }
}

/// Returns the platform-specific store file path.
fn default_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("cfxtoken").join("token.toml")
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("cfxtoken")
            .join("token.toml")
    }
}

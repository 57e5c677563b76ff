//! The seam between the extraction core and token acquisition backends.

use crate::Token;

/// Errors produced while acquiring a token from a source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The capability is not available in this build or on this platform.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    #[error("I/O error: {0}")]
    Io(String),
}

/// A backend that can yield a token or signal that it cannot.
///
/// Implementations either produce a token, fail with an I/O error, or
/// report themselves as unsupported. They must never fabricate a success
/// path for a capability they do not actually have.
pub trait TokenSource {
    /// Attempts to acquire a token from this source.
    fn acquire(&self) -> Result<Token, SourceError>;
}

//! Token extraction core for FiveM client logs.
//!
//! The only algorithmic piece of the system lives here: given arbitrary
//! log text, find a candidate authentication token using an ordered list
//! of labeled key patterns, falling back to a generic long-run heuristic.
//! Everything is pure computation over in-memory strings.

pub mod patterns;
pub mod source;

pub use patterns::extract;
pub use source::{SourceError, TokenSource};

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque FiveM authentication token.
///
/// The value is never parsed internally; it is carried around as-is and
/// handed to the display/persistence layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token(String);

impl Token {
    /// Wraps a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the token and returns the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the token length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the token is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

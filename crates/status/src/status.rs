/// The finder's current state, driving the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinderStatus {
    #[default]
    Idle,
    /// Watching a live log for a token.
    Monitoring,
    /// Scanning supplied log text.
    Scanning,
    /// A token is held.
    Found,
    /// A scan completed without a match.
    NotFound,
    /// The source text could not be read.
    Failed,
}

impl FinderStatus {
    /// Human-readable status line.
    pub fn label(&self) -> &'static str {
        match self {
            FinderStatus::Idle => "Waiting",
            FinderStatus::Monitoring => "Monitoring FiveM...",
            FinderStatus::Scanning => "Analyzing log...",
            FinderStatus::Found => "Token found",
            FinderStatus::NotFound => "No token found",
            FinderStatus::Failed => "Failed to read log",
        }
    }

    /// Whether the status indicator should show as active.
    ///
    /// Active only while a token is held, mirroring a lit status dot.
    pub fn active(&self) -> bool {
        matches!(self, FinderStatus::Found)
    }
}

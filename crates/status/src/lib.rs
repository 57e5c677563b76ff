//! User-facing state for the token finder.
//!
//! Holds the notification queue and the status-line state. Rendering is
//! the caller's concern; nothing here touches a terminal or a clock.

mod notice;
mod status;

pub use notice::{Notice, NoticeKind, NoticeQueue};
pub use status::FinderStatus;

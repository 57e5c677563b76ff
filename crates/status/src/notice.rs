/// The category of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A queued notification.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// In-memory notification queue with monotonic ID assignment.
///
/// The queue just collects notices in order; how and when they are shown
/// is up to the consumer.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notice and returns its assigned ID.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Pushes a success notice.
    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, text)
    }

    /// Pushes an error notice.
    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, text)
    }

    /// Pushes an info notice.
    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.push(NoticeKind::Info, text)
    }

    /// Removes and returns all queued notices, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Iterates over queued notices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Number of queued notices.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_monotonic_ids() {
        let mut q = NoticeQueue::new();
        assert_eq!(q.success("a"), 0);
        assert_eq!(q.error("b"), 1);
        assert_eq!(q.info("c"), 2);

        let texts: Vec<&str> = q.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn kinds_are_recorded() {
        let mut q = NoticeQueue::new();
        q.success("s");
        q.error("e");
        q.info("i");

        let kinds: Vec<NoticeKind> = q.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![NoticeKind::Success, NoticeKind::Error, NoticeKind::Info]
        );
    }

    #[test]
    fn drain_empties_queue_but_keeps_ids_monotonic() {
        let mut q = NoticeQueue::new();
        q.success("first");

        let drained = q.drain();
        assert_eq!(drained.len(), 1);
        assert!(q.is_empty());

        // IDs keep counting after a drain.
        assert_eq!(q.info("second"), 1);
    }

    #[test]
    fn len_and_is_empty() {
        let mut q = NoticeQueue::new();
        assert!(q.is_empty());
        q.info("x");
        assert_eq!(q.len(), 1);
        assert!(!q.is_empty());
    }
}

//! Live log tailer.
//!
//! Follows a FiveM log file and reports the first token that shows up in
//! newly appended content. Existing content is skipped; the token is
//! expected to appear while the client is running.

use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cfxtoken_extract::{Token, extract};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Callback invoked with the first extracted token.
pub type OnTokenFn = Box<dyn Fn(Token) + Send + Sync + 'static>;

/// Interval between polls for appended log content.
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);

/// Follows a log file and reports the first token found in new content.
pub struct LogTailer {
    inner: Arc<Mutex<TailerState>>,
}

struct TailerState {
    /// The active tail, if any.
    active: Option<ActiveTail>,
    /// Monotonic id so a finished tail only clears its own slot.
    next_id: u64,
    /// Callback for the first extracted token.
    on_token: Arc<OnTokenFn>,
}

struct ActiveTail {
    id: u64,
    cancel: CancellationToken,
}

impl LogTailer {
    /// Creates a new tailer with the given token callback.
    pub fn new(on_token: OnTokenFn) -> Self {
        Self {
            inner: Arc::new(Mutex::new(TailerState {
                active: None,
                next_id: 0,
                on_token: Arc::new(on_token),
            })),
        }
    }

    /// Starts tailing the given log file.
    ///
    /// If a tail is already running, it is stopped first. The tail ends
    /// on its own once a token has been reported.
    pub async fn start(&self, log_path: PathBuf) {
        let mut state = self.inner.lock().await;

        if let Some(prev) = state.active.take() {
            prev.cancel.cancel();
            tracing::debug!("stopped previous tail");
        }

        let id = state.next_id;
        state.next_id += 1;

        let cancel = CancellationToken::new();
        state.active = Some(ActiveTail {
            id,
            cancel: cancel.clone(),
        });

        let inner = Arc::clone(&self.inner);
        let on_token = Arc::clone(&state.on_token);

        let spawn_path = log_path.clone();
        tokio::spawn(async move {
            tail_file(&spawn_path, cancel, on_token).await;

            let mut state = inner.lock().await;
            if state.active.as_ref().is_some_and(|a| a.id == id) {
                state.active = None;
            }
        });

        tracing::info!(file = %log_path.display(), "started tailing log file");
    }

    /// Stops the active tail, if any.
    pub async fn stop(&self) {
        let mut state = self.inner.lock().await;
        if let Some(prev) = state.active.take() {
            prev.cancel.cancel();
            tracing::info!("stopped tailing log file");
        }
    }

    /// Returns whether a tail is currently running.
    pub async fn is_running(&self) -> bool {
        self.inner.lock().await.active.is_some()
    }
}

/// Watches a single log file and reports the first token in new lines.
async fn tail_file(path: &Path, cancel: CancellationToken, on_token: Arc<OnTokenFn>) {
    // Wait for the file to appear (the client may not have started
    // writing yet).
    let file = loop {
        if cancel.is_cancelled() {
            return;
        }
        match std::fs::File::open(path) {
            Ok(f) => break f,
            Err(_) => {
                tokio::select! {
                    _ = cancel.cancelled() => return,
                    _ = tokio::time::sleep(std::time::Duration::from_secs(1)) => {}
                }
            }
        }
    };

    let mut reader = BufReader::new(file);

    // Seek to end — we only want new content.
    if reader.seek(SeekFrom::End(0)).is_err() {
        tracing::warn!("failed to seek to end of log file");
    }

    let mut poll_interval = tokio::time::interval(POLL_INTERVAL);
    poll_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = poll_interval.tick() => {
                let batch = read_new_lines(&mut reader);
                if batch.is_empty() {
                    continue;
                }

                // The key and value may sit on adjacent lines, so the
                // batch is matched as one block.
                if let Some(value) = extract(&batch.join("\n")) {
                    tracing::info!("token found in log stream");
                    (*on_token)(Token::from(value));
                    break;
                }
            }
        }
    }
}

/// Reads all complete new lines since the last read position.
fn read_new_lines(reader: &mut BufReader<std::fs::File>) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF — no more data.
            Ok(_) => {
                let text = line.trim_end().to_string();
                if !text.is_empty() {
                    lines.push(text);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "error reading log file");
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TOKEN_44: &str = "aA1bB2cC3dD4eE5fF6gG7hH8iI9jJ0kK1lL2mM3nN4aa";

    #[tokio::test]
    async fn tailer_start_stop() {
        let tailer = LogTailer::new(Box::new(|_| {}));
        assert!(!tailer.is_running().await);

        let tmp = tempfile::NamedTempFile::new().unwrap();
        tailer.start(tmp.path().to_path_buf()).await;
        assert!(tailer.is_running().await);

        tailer.stop().await;
        // Give the spawned task time to clean up.
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(!tailer.is_running().await);
    }

    #[tokio::test]
    async fn tailer_reports_token_from_new_lines() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);
        let seen = Arc::new(std::sync::Mutex::new(None));
        let seen2 = Arc::clone(&seen);

        let tailer = LogTailer::new(Box::new(move |token| {
            hits2.fetch_add(1, Ordering::SeqCst);
            *seen2.lock().unwrap() = Some(token.into_inner());
        }));

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();

        // Existing content must be skipped.
        std::fs::write(&path, format!("token: {TOKEN_44}\n")).unwrap();

        tailer.start(path.clone()).await;
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;

        {
            let mut file = std::fs::OpenOptions::new()
                .append(true)
                .open(&path)
                .unwrap();
            writeln!(file, "connecting...").unwrap();
            writeln!(file, "auth_token: {TOKEN_44}").unwrap();
        }

        tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(seen.lock().unwrap().as_deref(), Some(TOKEN_44));
        // The tail ends itself after the first token.
        assert!(!tailer.is_running().await);
    }

    #[tokio::test]
    async fn tailer_ignores_tokenless_lines() {
        let hits = Arc::new(AtomicUsize::new(0));
        let hits2 = Arc::clone(&hits);

        let tailer = LogTailer::new(Box::new(move |_| {
            hits2.fetch_add(1, Ordering::SeqCst);
        }));

        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        tailer.start(path.clone()).await;
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;

        {
            let mut file = std::fs::OpenOptions::new()
                .append(true)
                .open(&path)
                .unwrap();
            writeln!(file, "loading resources").unwrap();
            writeln!(file, "connected, ping 31ms").unwrap();
        }

        tokio::time::sleep(std::time::Duration::from_millis(1200)).await;

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(tailer.is_running().await);
        tailer.stop().await;
    }

    #[tokio::test]
    async fn tailer_waits_for_missing_file() {
        let tailer = LogTailer::new(Box::new(|_| {}));
        let tmp = tempfile::tempdir().unwrap();

        tailer.start(tmp.path().join("not-yet.log")).await;
        assert!(tailer.is_running().await);

        tailer.stop().await;
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(!tailer.is_running().await);
    }

    #[tokio::test]
    async fn restart_replaces_previous_tail() {
        let tailer = LogTailer::new(Box::new(|_| {}));
        let tmp1 = tempfile::NamedTempFile::new().unwrap();
        let tmp2 = tempfile::NamedTempFile::new().unwrap();

        tailer.start(tmp1.path().to_path_buf()).await;
        tailer.start(tmp2.path().to_path_buf()).await;
        assert!(tailer.is_running().await);

        tailer.stop().await;
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        assert!(!tailer.is_running().await);
    }
}

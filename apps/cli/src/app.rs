//! Command dispatch — wires scanning, watching, and storage together.

use std::path::{Path, PathBuf};
use std::time::Duration;

use cfxtoken_extract::{SourceError, Token, TokenSource};
use cfxtoken_logwatch::{DemoSource, LogTailer, ProcessMonitor, scan_dir, scan_file};
use cfxtoken_paths::Paths;
use cfxtoken_status::{FinderStatus, NoticeKind, NoticeQueue};
use cfxtoken_store::{StoreError, TokenStore, now_ms};

use crate::Commands;
use crate::config::Config;

/// Delay before the demo source fabricates its token.
const DEMO_DELAY: Duration = Duration::from_secs(5);

/// Runs a single CLI command to completion.
pub async fn run(command: Commands, config: Config) -> anyhow::Result<()> {
    let store = token_store(&config);
    let mut notices = NoticeQueue::new();

    let result = match command {
        Commands::Scan { file } => cmd_scan(&store, &mut notices, &file),
        Commands::ScanDir { dir } => cmd_scan_dir(&store, &mut notices, &config, dir),
        Commands::Watch { demo, timeout_secs } => {
            cmd_watch(&store, &mut notices, &config, demo, timeout_secs).await
        }
        Commands::Show => cmd_show(&store, &mut notices),
        Commands::Clear => cmd_clear(&store, &mut notices),
    };

    flush_notices(&mut notices);
    result
}

fn cmd_scan(store: &TokenStore, notices: &mut NoticeQueue, file: &Path) -> anyhow::Result<()> {
    set_status(FinderStatus::Scanning);

    match scan_file(file) {
        Ok(Some(token)) => token_found(store, notices, &token),
        Ok(None) => {
            set_status(FinderStatus::NotFound);
            notices.error("No token found in the file. Check that it is a FiveM client log.");
            Ok(())
        }
        Err(e) => {
            set_status(FinderStatus::Failed);
            notices.error("Failed to read the file");
            Err(e.into())
        }
    }
}

fn cmd_scan_dir(
    store: &TokenStore,
    notices: &mut NoticeQueue,
    config: &Config,
    dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => resolve_paths(config)?.log_dir(),
    };

    set_status(FinderStatus::Scanning);
    tracing::info!(dir = %dir.display(), "scanning log directory");

    match scan_dir(&dir) {
        Ok(Some(token)) => token_found(store, notices, &token),
        Ok(None) => {
            set_status(FinderStatus::NotFound);
            notices.error("No token found in the log directory.");
            Ok(())
        }
        Err(e) => {
            set_status(FinderStatus::Failed);
            notices.error("Failed to read the log directory");
            Err(e.into())
        }
    }
}

async fn cmd_watch(
    store: &TokenStore,
    notices: &mut NoticeQueue,
    config: &Config,
    demo: bool,
    timeout_secs: Option<u64>,
) -> anyhow::Result<()> {
    if demo {
        set_status(FinderStatus::Monitoring);
        tracing::info!("demo mode: fabricating a token after a short delay");
        tokio::time::sleep(DEMO_DELAY).await;

        let token = DemoSource.acquire()?;
        set_status(FinderStatus::Found);
        println!("{token}");
        notices.info("Simulated token (demo mode) — not saved");
        return Ok(());
    }

    // Probe the live-monitoring capability before falling back to the
    // log file.
    match ProcessMonitor.acquire() {
        Ok(token) => return token_found(store, notices, &token),
        Err(SourceError::Unsupported(reason)) => {
            tracing::debug!(reason, "process monitoring unavailable, tailing log instead");
        }
        Err(e) => return Err(e.into()),
    }

    let paths = resolve_paths(config)?;
    let log_path = paths.latest_log().unwrap_or_else(|| paths.citizen_log());

    let (tx, mut rx) = tokio::sync::mpsc::channel::<Token>(1);
    let tailer = LogTailer::new(Box::new(move |token| {
        let _ = tx.try_send(token);
    }));

    tailer.start(log_path).await;
    set_status(FinderStatus::Monitoring);

    let token = tokio::select! {
        t = rx.recv() => t,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            None
        }
        _ = wait_or_forever(timeout_secs) => {
            tracing::info!("watch timed out");
            None
        }
    };
    tailer.stop().await;

    match token {
        Some(token) => token_found(store, notices, &token),
        None => {
            set_status(FinderStatus::NotFound);
            notices.error("No token observed in the client log.");
            Ok(())
        }
    }
}

fn cmd_show(store: &TokenStore, notices: &mut NoticeQueue) -> anyhow::Result<()> {
    match store.load(now_ms()) {
        Ok(Some(entry)) => {
            set_status(FinderStatus::Found);
            println!("{}", entry.token);
            Ok(())
        }
        Ok(None) => {
            notices.info("No stored token (missing or older than 24 hours).");
            Ok(())
        }
        Err(StoreError::Parse(e)) => {
            // A damaged store file means no usable token, not a crash.
            tracing::warn!(error = %e, "stored token is unreadable");
            notices.error("Stored token is unreadable; run `cfxtoken clear` to reset it.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_clear(store: &TokenStore, notices: &mut NoticeQueue) -> anyhow::Result<()> {
    store.clear()?;
    notices.info("Stored token cleared.");
    Ok(())
}

/// Saves and prints a freshly found token.
fn token_found(store: &TokenStore, notices: &mut NoticeQueue, token: &Token) -> anyhow::Result<()> {
    set_status(FinderStatus::Found);
    println!("{token}");

    store.save(token, now_ms())?;
    notices.success("Token extracted and saved.");
    Ok(())
}

fn token_store(config: &Config) -> TokenStore {
    match &config.store_path {
        Some(path) => TokenStore::at(path),
        None => TokenStore::open_default(),
    }
}

fn resolve_paths(config: &Config) -> anyhow::Result<Paths> {
    match &config.data_dir {
        Some(dir) => Ok(Paths::with_base(dir)),
        None => Ok(Paths::new()?),
    }
}

fn set_status(status: FinderStatus) {
    tracing::info!(active = status.active(), "{}", status.label());
}

fn flush_notices(notices: &mut NoticeQueue) {
    for notice in notices.drain() {
        match notice.kind {
            NoticeKind::Error => tracing::error!("{}", notice.text),
            NoticeKind::Success | NoticeKind::Info => tracing::info!("{}", notice.text),
        }
    }
}

async fn wait_or_forever(timeout_secs: Option<u64>) {
    match timeout_secs {
        Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
        None => std::future::pending().await,
    }
}

//! cfxtoken entry point.

mod app;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cfxtoken", version)]
#[command(about = "Locate a FiveM authentication token in client logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a single log file for a token
    Scan {
        /// Log file to scan
        file: PathBuf,
    },
    /// Scan a directory of log files, first match wins
    ScanDir {
        /// Directory to scan (defaults to the detected FiveM log directory)
        dir: Option<PathBuf>,
    },
    /// Watch the live client log until a token appears
    Watch {
        /// Fabricate a token after a short delay instead of watching
        #[arg(long)]
        demo: bool,

        /// Give up after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
    /// Print the stored token if it is still valid
    Show,
    /// Delete the stored token
    Clear,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(app::run(cli.command, config))
}

//! CareerPilot CLI - AI career roadmaps and daily learning plans.
//!
//! Generates roadmaps and daily plans through the CareerPilot backend and
//! tracks completed days locally, keeping that progress in step with the
//! plans that still exist on the server.

mod app;
mod cli;
mod render;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::App;
use cli::Cli;

/// Prefix for rolling log files
const LOG_FILE_PREFIX: &str = "careerpilot.log";

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr unless a log directory is given, in which case they
/// roll daily into that directory. The returned guard must live until exit
/// so buffered lines are flushed.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .with(filter)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr))
                .with(filter)
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref());
    info!("CareerPilot starting");

    let mut app = App::new()?;
    app.run(cli.command).await
}

//! Contact Book Assistant - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr so
//! they never mix with the dialogue.

use anyhow::Result;
use contact_book_assistant::{run_session, Config};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        today = ?config.today,
        window_days = config.birthday_window_days,
        "Starting contact book assistant"
    );

    let book = run_session(BufReader::new(stdin()), stdout(), config).await?;

    info!(contacts = book.len(), "Contact book assistant shutdown complete");
    Ok(())
}

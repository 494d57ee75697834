//! Headless script driver for the item/inventory core.
//!
//! Reads commands from `INVENTORY_SCRIPT` (or stdin), applies them to a session
//! built from `CONTENT_DATA_DIR` (or the bundled sample level) and prints the
//! results to stdout. Logs go to stderr.
mod command;
mod config;
mod format;
mod session;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use config::CliConfig;
use game_content::ContentFactory;
use session::Session;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    tracing::info!(data_dir = %factory.data_dir().display(), "loading content");
    let engine = factory.build_engine()?;

    let mut session = Session::new(engine, config.verbose_events);
    let mut stdout = io::stdout().lock();
    match &config.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            session.run_script(BufReader::new(file), &mut stdout)?;
        }
        None => session.run_script(io::stdin().lock(), &mut stdout)?,
    }

    let progress = session.engine().progress();
    tracing::info!(
        collected = progress.collected(),
        total = progress.total(),
        won = progress.has_won(),
        "script finished"
    );
    Ok(())
}

/// Logs to stderr, and additionally to `<log_dir>/inventory.log` when set.
///
/// The returned guard flushes the file writer on drop.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(log_dir, "inventory.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}/inventory.log", log_dir.display());
    Ok(Some(guard))
}

//! CLI runtime configuration.
use std::env;
use std::path::PathBuf;

/// Settings read from the process environment (and `.env`, if present).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Content directory; the bundled sample level when unset.
    pub data_dir: Option<PathBuf>,
    /// Script file to run; stdin when unset.
    pub script: Option<PathBuf>,
    /// Directory for the log file. Without it, logs only go to stderr.
    pub log_dir: Option<PathBuf>,
    /// Print every published event, not only the command results.
    pub verbose_events: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `CONTENT_DATA_DIR`
    /// - `INVENTORY_SCRIPT`
    /// - `INVENTORY_LOG_DIR`
    /// - `INVENTORY_VERBOSE_EVENTS` (default: true)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_path("CONTENT_DATA_DIR"),
            script: read_path("INVENTORY_SCRIPT"),
            log_dir: read_path("INVENTORY_LOG_DIR"),
            verbose_events: read_env::<bool>("INVENTORY_VERBOSE_EVENTS").unwrap_or(true),
        }
    }
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

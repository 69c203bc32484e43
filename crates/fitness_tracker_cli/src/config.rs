use crate::CliError;
use crate::OutputFormat;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Reads configuration through `get` so tests never touch the process
    /// environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, CliError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let log_level = get("FITNESS_TRACKER_LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());
        let format = match get("FITNESS_TRACKER_FORMAT") {
            Some(raw) => raw.parse().map_err(|_| {
                CliError::Config(format!("FITNESS_TRACKER_FORMAT invalid: {raw}"))
            })?,
            None => OutputFormat::Text,
        };
        Ok(Self { log_level, format })
    }
}

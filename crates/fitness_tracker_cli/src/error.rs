//! Error types for the console driver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("workout error: {0}")]
    Workout(#[from] fitness_tracker::WorkoutError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed package: {0}")]
    Package(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

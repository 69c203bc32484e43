//! Workout calculations: distance, mean speed and calories for swimming,
//! running and sports walking sessions, plus the summary report rendered
//! for each session.

use thiserror::Error;

pub mod batch;
pub mod factory;
pub mod observability;
pub mod report;
pub mod training;
pub mod workouts;

pub use batch::{Package, process_batch, process_package, sample_packages};
pub use factory::{WorkoutCode, read_package};
pub use report::{SessionReport, build_report};
pub use training::{SessionBase, Training};
pub use workouts::{Running, Swimming, Walking, WorkoutSession};

#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),
    #[error("calories_kcal is not implemented for {0}")]
    UnimplementedVariant(&'static str),
    #[error("invalid duration: {0} h (must be greater than zero)")]
    InvalidDuration(f64),
    #[error("invalid height: {0} cm (must be non-zero)")]
    InvalidHeight(f64),
    #[error("{code} expects {expected} parameters, got {actual}")]
    ParameterCount {
        code: WorkoutCode,
        expected: usize,
        actual: usize,
    },
    #[error("invalid {name}: {value} (expected a whole non-negative number)")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type WorkoutResult<T> = Result<T, WorkoutError>;

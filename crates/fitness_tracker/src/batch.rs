//! Processing of sensor packages, one report per package.

use serde::Deserialize;

use crate::WorkoutResult;
use crate::factory::read_package;
use crate::observability;
use crate::report::{SessionReport, build_report};

/// Raw readings for one workout as received from the tracker.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub parameters: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, parameters: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            parameters,
        }
    }
}

/// The demo batch: one swim, one run, one walk.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build the report for one package, recording a success or failure metric.
pub fn process_package(package: &Package) -> WorkoutResult<SessionReport> {
    let result = read_package(&package.code, &package.parameters)
        .and_then(|session| build_report(&session));
    match &result {
        Ok(report) => {
            tracing::debug!(
                code = %package.code,
                calories = report.calories_kcal,
                "session report built"
            );
            observability::record_session(&package.code);
        }
        Err(_) => observability::record_failure(&package.code),
    }
    result
}

/// Process every package in order. A failing package yields its error in
/// place and does not stop the rest of the batch.
pub fn process_batch(packages: &[Package]) -> Vec<WorkoutResult<SessionReport>> {
    packages
        .iter()
        .map(|package| {
            process_package(package).inspect_err(|e| {
                tracing::warn!(code = %package.code, error = %e, "package skipped");
            })
        })
        .collect()
}

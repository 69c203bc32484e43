//! Maps a sensor package (workout code plus positional readings) to a session.

use std::fmt;
use std::str::FromStr;

use crate::workouts::{Running, Swimming, Walking, WorkoutSession};
use crate::{WorkoutError, WorkoutResult};

/// Three-letter workout code sent by the tracker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    Swimming,
    Running,
    Walking,
}

impl WorkoutCode {
    pub const ALL: [WorkoutCode; 3] = [Self::Swimming, Self::Running, Self::Walking];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::Walking => "WLK",
        }
    }

    /// Number of positional readings the code expects.
    pub fn parameter_count(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(s.to_string()))
    }
}

/// Build a session from a raw code and readings.
///
/// Readings are bound positionally: action count, duration (h), weight (kg),
/// then height (cm) for walking, or pool length (m) and pool lengths swum for
/// swimming.
pub fn read_package(workout_type: &str, data: &[f64]) -> WorkoutResult<WorkoutSession> {
    let code: WorkoutCode = workout_type.parse()?;
    build_session(code, data)
}

pub fn build_session(code: WorkoutCode, data: &[f64]) -> WorkoutResult<WorkoutSession> {
    let expected = code.parameter_count();
    if data.len() != expected {
        return Err(WorkoutError::ParameterCount {
            code,
            expected,
            actual: data.len(),
        });
    }

    let action = whole_number("action count", data[0])?;
    let (duration, weight) = (data[1], data[2]);
    let session: WorkoutSession = match code {
        WorkoutCode::Running => Running::new(action, duration, weight).into(),
        WorkoutCode::Walking => Walking::new(action, duration, weight, data[3]).into(),
        WorkoutCode::Swimming => {
            let lengths = whole_number("pool lengths count", data[4])?;
            Swimming::new(action, duration, weight, data[3], lengths).into()
        }
    };
    Ok(session)
}

fn whole_number(name: &'static str, value: f64) -> WorkoutResult<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(WorkoutError::InvalidParameter { name, value })
    }
}

//! Shared session state and the default formulas every workout builds on.

use crate::{WorkoutError, WorkoutResult};

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;
/// Step length for running and walking, in metres.
pub const LEN_STEP_M: f64 = 0.65;

/// Readings every workout carries, regardless of kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionBase {
    /// Steps or strokes.
    pub action_count: u64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl SessionBase {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }

    /// Session duration, rejecting anything that would make speed undefined.
    pub fn checked_duration(&self) -> WorkoutResult<f64> {
        if self.duration_hours > 0.0 {
            Ok(self.duration_hours)
        } else {
            Err(WorkoutError::InvalidDuration(self.duration_hours))
        }
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * MIN_IN_HOUR
    }
}

/// A completed workout session.
///
/// Implementors provide their shared readings and a label; distance and
/// mean speed default to the step-based formulas, calories have no sensible
/// default and fail until overridden.
pub trait Training {
    /// Display label used in reports.
    const LABEL: &'static str;
    /// Distance covered by one step or stroke, in metres.
    const LEN_STEP_M: f64 = LEN_STEP_M;

    fn base(&self) -> &SessionBase;

    fn distance_km(&self) -> f64 {
        self.base().action_count as f64 * Self::LEN_STEP_M / M_IN_KM
    }

    fn mean_speed_km_per_hour(&self) -> WorkoutResult<f64> {
        let duration = self.base().checked_duration()?;
        Ok(self.distance_km() / duration)
    }

    fn calories_kcal(&self) -> WorkoutResult<f64> {
        Err(WorkoutError::UnimplementedVariant(Self::LABEL))
    }
}

use crate::WorkoutResult;
use crate::training::{M_IN_KM, SessionBase, Training};

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// Running session, measured in steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    base: SessionBase,
}

impl Running {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            base: SessionBase::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    const LABEL: &'static str = "Running";

    fn base(&self) -> &SessionBase {
        &self.base
    }

    fn calories_kcal(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed_km_per_hour()?;
        Ok(
            (CALORIES_SPEED_MULTIPLIER * speed - CALORIES_SPEED_SHIFT) * self.base.weight_kg
                / M_IN_KM
                * self.base.duration_minutes(),
        )
    }
}

use crate::training::{SessionBase, Training};
use crate::{WorkoutError, WorkoutResult};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const SPEED_EXPONENT: i32 = 2;

/// Sports walking session, measured in steps.
#[derive(Clone, Debug, PartialEq)]
pub struct Walking {
    base: SessionBase,
    pub height_cm: f64,
}

impl Walking {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: SessionBase::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl Training for Walking {
    const LABEL: &'static str = "Walking";

    fn base(&self) -> &SessionBase {
        &self.base
    }

    fn calories_kcal(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed_km_per_hour()?;
        if self.height_cm == 0.0 {
            return Err(WorkoutError::InvalidHeight(self.height_cm));
        }
        // Floored, not true, division: small speeds contribute nothing.
        let speed_height = floor_div(speed.powi(SPEED_EXPONENT), self.height_cm);
        let weight = self.base.weight_kg;
        Ok((CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * self.base.duration_minutes())
    }
}

/// Floor of `a / b`, computed from the remainder so that a quotient sitting
/// just below an integer is not rounded up by the division itself.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }
    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

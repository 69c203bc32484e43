use crate::WorkoutResult;
use crate::training::{M_IN_KM, SessionBase, Training};

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming session, measured in strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    base: SessionBase,
    pub pool_length_m: f64,
    pub pool_lengths_count: u64,
}

impl Swimming {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: u64,
    ) -> Self {
        Self {
            base: SessionBase::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_lengths_count,
        }
    }
}

impl Training for Swimming {
    const LABEL: &'static str = "Swimming";
    const LEN_STEP_M: f64 = 1.38;

    fn base(&self) -> &SessionBase {
        &self.base
    }

    /// Speed comes from the pool lengths swum, not from the stroke count.
    fn mean_speed_km_per_hour(&self) -> WorkoutResult<f64> {
        let duration = self.base.checked_duration()?;
        Ok(self.pool_length_m * self.pool_lengths_count as f64 / M_IN_KM / duration)
    }

    fn calories_kcal(&self) -> WorkoutResult<f64> {
        let speed = self.mean_speed_km_per_hour()?;
        Ok((speed + CALORIES_SPEED_SHIFT) * CALORIES_WEIGHT_MULTIPLIER * self.base.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkoutError;

    #[test]
    fn sample_swim() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        assert!((swim.distance_km() - 0.9936).abs() < 1e-9);
        assert!((swim.mean_speed_km_per_hour().unwrap() - 1.0).abs() < 1e-12);
        assert!((swim.calories_kcal().unwrap() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn speed_ignores_stroke_count() {
        let few = Swimming::new(10, 2.0, 80.0, 50.0, 20);
        let many = Swimming::new(10_000, 2.0, 80.0, 50.0, 20);
        assert_eq!(
            few.mean_speed_km_per_hour().unwrap(),
            many.mean_speed_km_per_hour().unwrap()
        );
        assert!((few.mean_speed_km_per_hour().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let swim = Swimming::new(720, 0.0, 80.0, 25.0, 40);
        assert_eq!(swim.calories_kcal(), Err(WorkoutError::InvalidDuration(0.0)));
    }
}

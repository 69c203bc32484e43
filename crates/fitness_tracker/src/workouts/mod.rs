//! The three supported workouts and the closed enum dispatching over them.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::Walking;

use crate::WorkoutResult;
use crate::training::{SessionBase, Training};

/// One completed session of a supported workout kind.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkoutSession {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl WorkoutSession {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Running(_) => Running::LABEL,
            Self::Walking(_) => Walking::LABEL,
            Self::Swimming(_) => Swimming::LABEL,
        }
    }

    pub fn base(&self) -> &SessionBase {
        match self {
            Self::Running(w) => w.base(),
            Self::Walking(w) => w.base(),
            Self::Swimming(w) => w.base(),
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.base().duration_hours
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running(w) => w.distance_km(),
            Self::Walking(w) => w.distance_km(),
            Self::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_km_per_hour(&self) -> WorkoutResult<f64> {
        match self {
            Self::Running(w) => w.mean_speed_km_per_hour(),
            Self::Walking(w) => w.mean_speed_km_per_hour(),
            Self::Swimming(w) => w.mean_speed_km_per_hour(),
        }
    }

    pub fn calories_kcal(&self) -> WorkoutResult<f64> {
        match self {
            Self::Running(w) => w.calories_kcal(),
            Self::Walking(w) => w.calories_kcal(),
            Self::Swimming(w) => w.calories_kcal(),
        }
    }
}

impl From<Running> for WorkoutSession {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<Walking> for WorkoutSession {
    fn from(value: Walking) -> Self {
        Self::Walking(value)
    }
}

impl From<Swimming> for WorkoutSession {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_variant_names() {
        let run: WorkoutSession = Running::new(1, 1.0, 1.0).into();
        let walk: WorkoutSession = Walking::new(1, 1.0, 1.0, 170.0).into();
        let swim: WorkoutSession = Swimming::new(1, 1.0, 1.0, 25.0, 1).into();
        assert_eq!(run.label(), "Running");
        assert_eq!(walk.label(), "Walking");
        assert_eq!(swim.label(), "Swimming");
    }

    #[test]
    fn accessors_are_idempotent() {
        let sessions: Vec<WorkoutSession> = vec![
            Running::new(15000, 1.0, 75.0).into(),
            Walking::new(9000, 1.0, 75.0, 180.0).into(),
            Swimming::new(720, 1.0, 80.0, 25.0, 40).into(),
        ];
        for s in &sessions {
            assert_eq!(s.distance_km().to_bits(), s.distance_km().to_bits());
            assert_eq!(
                s.mean_speed_km_per_hour().unwrap().to_bits(),
                s.mean_speed_km_per_hour().unwrap().to_bits()
            );
            assert_eq!(
                s.calories_kcal().unwrap().to_bits(),
                s.calories_kcal().unwrap().to_bits()
            );
        }
    }

    #[test]
    fn distance_uses_each_variant_step_length() {
        let run: WorkoutSession = Running::new(1000, 1.0, 70.0).into();
        let walk: WorkoutSession = Walking::new(1000, 1.0, 70.0, 170.0).into();
        let swim: WorkoutSession = Swimming::new(1000, 1.0, 70.0, 25.0, 10).into();
        assert_eq!(run.distance_km(), 1000.0 * 0.65 / 1000.0);
        assert_eq!(walk.distance_km(), 1000.0 * 0.65 / 1000.0);
        assert_eq!(swim.distance_km(), 1000.0 * 1.38 / 1000.0);
    }
}

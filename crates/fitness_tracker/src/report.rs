use std::fmt;

use serde::Serialize;

use crate::WorkoutResult;
use crate::workouts::WorkoutSession;

/// Summary of one completed workout.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionReport {
    pub workout_type_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl SessionReport {
    /// Human-readable summary line, every number at three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type_label,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

pub fn build_report(session: &WorkoutSession) -> WorkoutResult<SessionReport> {
    Ok(SessionReport {
        workout_type_label: session.label().to_string(),
        duration_hours: session.duration_hours(),
        distance_km: session.distance_km(),
        mean_speed_kmh: session.mean_speed_km_per_hour()?,
        calories_kcal: session.calories_kcal()?,
    })
}

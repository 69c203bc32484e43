//! Metric names recorded by the library. Without an installed recorder the
//! counters are no-ops.

use crate::factory::WorkoutCode;

pub const SESSIONS_TOTAL: &str = "fitness_tracker_sessions_total";
pub const SESSION_FAILURES_TOTAL: &str = "fitness_tracker_session_failures_total";

/// Label value for codes outside the supported set.
pub const UNKNOWN_WORKOUT: &str = "unknown";

/// Register descriptions with whatever recorder the host installed.
pub fn describe_metrics() {
    metrics::describe_counter!(SESSIONS_TOTAL, "Workout packages turned into a report");
    metrics::describe_counter!(
        SESSION_FAILURES_TOTAL,
        "Workout packages that failed to produce a report"
    );
}

/// Bounded `workout` label: a known code, or [`UNKNOWN_WORKOUT`].
pub fn workout_label(code: &str) -> &'static str {
    code.parse::<WorkoutCode>()
        .map(WorkoutCode::as_str)
        .unwrap_or(UNKNOWN_WORKOUT)
}

pub(crate) fn record_session(code: &str) {
    metrics::counter!(SESSIONS_TOTAL, "workout" => workout_label(code)).increment(1);
}

pub(crate) fn record_failure(code: &str) {
    metrics::counter!(SESSION_FAILURES_TOTAL, "workout" => workout_label(code)).increment(1);
}

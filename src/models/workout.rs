use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One completed or in-progress training session.
///
/// The engine treats every record it receives as a finished snapshot: `date`
/// is immutable and `exercises` are never mutated. Only `completed == true`
/// sessions count toward derived metrics; in-progress sessions are excluded
/// everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
  pub id: String,
  pub user_id: String,
  /// Calendar date the session is attributed to (no time component).
  pub date: NaiveDate,
  pub name: String,
  /// Order is significant for display, not for aggregation.
  pub exercises: Vec<ExerciseEntry>,
  pub completed: bool,
  pub duration_minutes: Option<u32>,
}

/// One exercise performed within a session.
///
/// `exercise_name` is a case-insensitive identity key across sessions; every
/// comparison goes through `catalog::normalize_exercise_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseEntry {
  pub exercise_name: String,
  pub sets: Vec<SetEntry>,
}

/// One set. A weight of 0 means bodyweight / no external load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetEntry {
  pub weight: f64,
  pub reps: u32,
  /// Only completed sets contribute to progression volume/1RM. The heatmap
  /// counts all sets of a completed workout; the workout-level flag is the
  /// authoritative filter there.
  pub completed: bool,
}

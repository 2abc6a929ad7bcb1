//! Derived-metrics engine for strength training logs
//!
//! Pure, deterministic aggregation over an in-memory log of workouts and
//! daily metrics:
//! - consecutive-day streaks ([`StreakResult`])
//! - per-week totals and week-over-week comparison ([`WeeklyStats`],
//!   [`WeekComparison`])
//! - rolling-window muscle-group heatmap ([`MuscleGroupHeatmap`])
//! - per-exercise strength progression with estimated 1RM
//!   ([`ExerciseProgression`])
//! - ranked what-to-train-next suggestions ([`WorkoutSuggestions`])
//!
//! The engine performs no I/O and keeps no state between calls: every entry
//! point takes the caller's already-loaded collections, an injected
//! [`ExerciseCatalog`], and an explicit `today` for testability, and returns
//! a freshly built summary. Repeated calls over the same input are
//! idempotent and safe to run concurrently.

pub mod catalog;
pub mod dates;
pub mod error;
pub mod heatmap;
pub mod models;
pub mod policy;
pub mod progression;
pub mod streak;
pub mod suggestions;
pub mod weekly;

#[cfg(test)]
mod test_utils;

pub use catalog::{normalize_exercise_name, ExerciseCatalog, MuscleGroup};
pub use error::EngineError;
pub use heatmap::{Intensity, MuscleGroupHeatmap, MuscleGroupScore};
pub use models::{
  CalorieEntry, ExerciseEntry, SetEntry, StepEntry, WeightEntry, WeightUnit, WorkoutRecord,
};
pub use policy::EnginePolicy;
pub use progression::{estimate_one_rm, ExerciseProgression, ProgressionPoint};
pub use streak::StreakResult;
pub use suggestions::{Suggestion, SuggestionPriority, WorkoutSuggestions};
pub use weekly::{WeekComparison, WeeklyStats, WeeklyTargets};

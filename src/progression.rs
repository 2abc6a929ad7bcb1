//! Per-exercise strength progression
//!
//! Extracts one data point per qualifying workout for a single exercise:
//! the best completed set (highest weight, ties broken by reps), an Epley
//! estimated 1RM, and the workout's total volume. Summary stats compare the
//! first and last chronological points.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::normalize_exercise_name;
use crate::dates::percent_change;
use crate::models::{SetEntry, WorkoutRecord};

/// Estimated one-rep max via the Epley formula.
///
/// A single rep is the 1RM by definition; otherwise
/// `round(weight * (1 + reps / 30))`. Non-positive weight or zero reps
/// yield 0.
pub fn estimate_one_rm(weight: f64, reps: u32) -> f64 {
  if weight <= 0.0 || reps == 0 {
    0.0
  } else if reps == 1 {
    weight
  } else {
    (weight * (1.0 + reps as f64 / 30.0)).round()
  }
}

/// One workout's performance for the tracked exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionPoint {
  pub date: NaiveDate,
  pub best_weight: f64,
  pub best_reps: u32,
  pub estimated_one_rm: f64,
  /// Sum of weight x reps over every completed set, not just the best one.
  pub total_volume: f64,
  pub total_sets: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseProgression {
  pub exercise_name: String,
  pub data_points: Vec<ProgressionPoint>,
  pub starting_one_rm: f64,
  pub current_one_rm: f64,
  pub improvement_one_rm: f64,
  pub improvement_one_rm_percent: i64,
  pub total_workouts: u32,
  pub first_date: NaiveDate,
  pub last_date: NaiveDate,
}

impl ExerciseProgression {
  /// Build the progression curve for one exercise, matched
  /// case-insensitively. Returns `None` when no workout qualifies so
  /// callers can render an empty state distinctly from a flat trend.
  pub fn compute(workouts: &[WorkoutRecord], exercise_name: &str) -> Option<Self> {
    let target = normalize_exercise_name(exercise_name);

    let mut points: Vec<ProgressionPoint> = workouts
      .iter()
      .filter(|w| w.completed)
      .filter_map(|w| Self::point_for_workout(w, &target))
      .collect();
    points.sort_by_key(|p| p.date);

    let first = points.first()?;
    let last = points.last()?;

    let starting_one_rm = first.estimated_one_rm;
    let current_one_rm = last.estimated_one_rm;
    let first_date = first.date;
    let last_date = last.date;

    debug!(
      exercise = %exercise_name,
      points = points.len(),
      "computed exercise progression"
    );

    Some(Self {
      exercise_name: exercise_name.to_string(),
      starting_one_rm,
      current_one_rm,
      improvement_one_rm: current_one_rm - starting_one_rm,
      improvement_one_rm_percent: percent_change(current_one_rm, starting_one_rm),
      total_workouts: points.len() as u32,
      first_date,
      last_date,
      data_points: points,
    })
  }

  /// Extract one data point from a workout, or `None` if the workout has no
  /// completed weighted set for the exercise. Workouts where every set is
  /// bodyweight-only carry no 1RM signal and are skipped.
  fn point_for_workout(workout: &WorkoutRecord, target: &str) -> Option<ProgressionPoint> {
    let completed_sets: Vec<&SetEntry> = workout
      .exercises
      .iter()
      .filter(|e| normalize_exercise_name(&e.exercise_name) == target)
      .flat_map(|e| e.sets.iter())
      .filter(|s| s.completed)
      .collect();

    // Best set: highest weight, ties broken by reps, drawn from weighted
    // sets only.
    let best = completed_sets
      .iter()
      .filter(|s| s.weight > 0.0)
      .fold(None::<&&SetEntry>, |best, s| match best {
        Some(b) if (b.weight, b.reps) >= (s.weight, s.reps) => Some(b),
        _ => Some(s),
      })?;

    let total_volume: f64 = completed_sets.iter().map(|s| s.weight * s.reps as f64).sum();

    Some(ProgressionPoint {
      date: workout.date,
      best_weight: best.weight,
      best_reps: best.reps,
      estimated_one_rm: estimate_one_rm(best.weight, best.reps),
      total_volume,
      total_sets: completed_sets.len() as u32,
    })
  }

  /// Serialize for the rendering layer.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

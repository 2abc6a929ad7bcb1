//! Shared test fixtures
//!
//! Builders for workout records and a small six-group catalog used across
//! the module test suites.

use crate::catalog::{ExerciseCatalog, MuscleGroup};
use crate::models::{ExerciseEntry, SetEntry, WorkoutRecord};

/// A completed workout on the given ISO date.
pub fn make_workout(date: &str, exercises: Vec<ExerciseEntry>) -> WorkoutRecord {
  WorkoutRecord {
    id: format!("workout-{}", date),
    user_id: "user-1".to_string(),
    date: date.parse().expect("valid ISO date"),
    name: "Session".to_string(),
    exercises,
    completed: true,
    duration_minutes: None,
  }
}

pub fn make_exercise(name: &str, sets: Vec<SetEntry>) -> ExerciseEntry {
  ExerciseEntry {
    exercise_name: name.to_string(),
    sets,
  }
}

/// A completed set.
pub fn make_set(weight: f64, reps: u32) -> SetEntry {
  SetEntry {
    weight,
    reps,
    completed: true,
  }
}

/// Six-group catalog with a handful of common lifts mapped.
pub fn make_catalog() -> ExerciseCatalog {
  let mut catalog = ExerciseCatalog::new();
  let groups = [
    ("Chest", "chest", "#e74c3c"),
    ("Back", "back", "#3498db"),
    ("Legs", "legs", "#2ecc71"),
    ("Shoulders", "shoulders", "#f39c12"),
    ("Arms", "arms", "#9b59b6"),
    ("Core", "core", "#1abc9c"),
  ];
  for (name, icon, color) in groups {
    catalog.add_group(MuscleGroup {
      name: name.to_string(),
      icon: icon.to_string(),
      color: color.to_string(),
    });
  }

  catalog.map_exercise("Bench Press", "Chest");
  catalog.map_exercise("Incline Dumbbell Press", "Chest");
  catalog.map_exercise("Barbell Row", "Back");
  catalog.map_exercise("Lat Pulldown", "Back");
  catalog.map_exercise("Squat", "Legs");
  catalog.map_exercise("Romanian Deadlift", "Legs");
  catalog.map_exercise("Overhead Press", "Shoulders");
  catalog.map_exercise("Bicep Curl", "Arms");
  catalog.map_exercise("Plank", "Core");
  catalog
}

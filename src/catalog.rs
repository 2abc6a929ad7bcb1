//! Exercise -> muscle group lookup
//!
//! The catalog is a read-only collaborator supplied by the caller. It maps
//! exercise names (case-insensitive) to muscle groups and preserves group
//! declaration order, which is the tie-break for "most trained". Icon and
//! color are carried for the presentation layer and never influence scoring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Normalize an exercise name for matching: trim + lowercase.
///
/// Every comparison site in the crate goes through this function so that
/// "Bench Press", " bench press " and "BENCH PRESS" are the same exercise.
pub fn normalize_exercise_name(name: &str) -> String {
  name.trim().to_lowercase()
}

/// One muscle group as declared by the exercise catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroup {
  pub name: String,
  /// Display icon, passed through to the presentation layer.
  pub icon: String,
  /// Display color, passed through to the presentation layer.
  pub color: String,
}

/// Exercise -> muscle group lookup table.
///
/// Groups keep their declaration order; exercises are indexed by normalized
/// name for O(1) resolution instead of array scanning.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
  groups: Vec<MuscleGroup>,
  exercise_index: HashMap<String, usize>,
}

impl ExerciseCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Declare a muscle group. Declaration order is significant: it breaks
  /// ties when two groups have the same set count.
  pub fn add_group(&mut self, group: MuscleGroup) {
    self.groups.push(group);
  }

  /// Map an exercise name to a previously declared group. Returns false if
  /// the group is unknown (the mapping is dropped, not errored).
  pub fn map_exercise(&mut self, exercise_name: &str, group_name: &str) -> bool {
    match self.groups.iter().position(|g| g.name == group_name) {
      Some(idx) => {
        self
          .exercise_index
          .insert(normalize_exercise_name(exercise_name), idx);
        true
      }
      None => false,
    }
  }

  /// Resolve an exercise to its muscle group, case-insensitively.
  pub fn group_for(&self, exercise_name: &str) -> Option<&MuscleGroup> {
    self
      .group_index_for(exercise_name)
      .map(|idx| &self.groups[idx])
  }

  /// Resolve an exercise to its group's declaration index.
  pub fn group_index_for(&self, exercise_name: &str) -> Option<usize> {
    self
      .exercise_index
      .get(&normalize_exercise_name(exercise_name))
      .copied()
  }

  /// All declared groups, in declaration order.
  pub fn groups(&self) -> &[MuscleGroup] {
    &self.groups
  }

  /// True when no muscle groups have been declared. Invoking the heatmap or
  /// suggestion engine against an empty catalog is a programmer error.
  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

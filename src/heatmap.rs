//! Muscle-group heatmap engine
//!
//! Rolling-window set-volume aggregation per muscle group. Every set of
//! every resolvable exercise in a completed in-window workout counts; the
//! workout-level completed flag is the authoritative filter here, so sets
//! are not individually checked. Intensity buckets and the needs-attention
//! rule come from `EnginePolicy`.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::dates::in_range;
use crate::error::EngineError;
use crate::models::WorkoutRecord;
use crate::policy::EnginePolicy;

/// ---------------------------------------------------------------------------
/// Intensity buckets
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
  None,
  Low,
  Medium,
  High,
}

impl Intensity {
  /// Classify a window's set count. Boundary-exact with the default policy:
  /// 0 -> none, 1-4 -> low, 5-9 -> medium, >= 10 -> high.
  pub fn from_sets(sets: u32, policy: &EnginePolicy) -> Self {
    if sets == 0 {
      Intensity::None
    } else if sets <= policy.low_max_sets {
      Intensity::Low
    } else if sets <= policy.medium_max_sets {
      Intensity::Medium
    } else {
      Intensity::High
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Intensity::None => "none",
      Intensity::Low => "low",
      Intensity::Medium => "medium",
      Intensity::High => "high",
    }
  }
}

impl std::fmt::Display for Intensity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Heatmap output
/// ---------------------------------------------------------------------------

/// One muscle group's training volume inside the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroupScore {
  pub name: String,
  pub sets: u32,
  pub days_trained: u32,
  pub last_trained: Option<NaiveDate>,
  pub intensity: Intensity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGroupHeatmap {
  /// One score per catalog group, in declaration order, zeroed when
  /// untrained.
  pub scores: Vec<MuscleGroupScore>,
  pub total_sets: u32,
  /// Group with the highest set count; declaration order breaks ties.
  /// `None` when nothing was trained in the window.
  pub most_trained: Option<String>,
  /// Distinct calendar dates with at least one completed workout in the
  /// window.
  pub days_active: u32,
  /// Groups at none/low intensity while another group is high - a relative
  /// imbalance signal, not an absolute volume threshold.
  pub needs_attention: Vec<String>,
}

impl MuscleGroupHeatmap {
  /// Aggregate set volume per muscle group over the trailing window
  /// `[today - window_days + 1, today]`.
  ///
  /// Fails fast on an empty catalog or a zero-day window (programmer
  /// errors); an empty or all-in-progress workout collection is a defined
  /// zeroed state.
  pub fn compute(
    workouts: &[WorkoutRecord],
    catalog: &ExerciseCatalog,
    window_days: u32,
    today: NaiveDate,
    policy: &EnginePolicy,
  ) -> Result<Self, EngineError> {
    if catalog.is_empty() {
      return Err(EngineError::EmptyCatalog);
    }
    if window_days == 0 {
      return Err(EngineError::InvalidWindow(window_days));
    }

    let window_start = today - Duration::days(window_days as i64 - 1);

    let mut sets_per_group = vec![0u32; catalog.groups().len()];
    let mut days_per_group: Vec<BTreeSet<NaiveDate>> =
      vec![BTreeSet::new(); catalog.groups().len()];
    let mut active_days: BTreeSet<NaiveDate> = BTreeSet::new();

    for w in workouts {
      if !w.completed || !in_range(w.date, window_start, today) {
        continue;
      }
      active_days.insert(w.date);
      for exercise in &w.exercises {
        // Unresolved exercises are excluded from scoring, not errored.
        let Some(idx) = catalog.group_index_for(&exercise.exercise_name) else {
          continue;
        };
        sets_per_group[idx] += exercise.sets.len() as u32;
        if !exercise.sets.is_empty() {
          days_per_group[idx].insert(w.date);
        }
      }
    }

    let scores: Vec<MuscleGroupScore> = catalog
      .groups()
      .iter()
      .enumerate()
      .map(|(idx, group)| MuscleGroupScore {
        name: group.name.clone(),
        sets: sets_per_group[idx],
        days_trained: days_per_group[idx].len() as u32,
        last_trained: days_per_group[idx].iter().next_back().copied(),
        intensity: Intensity::from_sets(sets_per_group[idx], policy),
      })
      .collect();

    let total_sets: u32 = sets_per_group.iter().sum();

    // Highest set count wins; scanning in declaration order with a strict
    // comparison makes the first declared group win ties.
    let most_trained = scores
      .iter()
      .filter(|s| s.sets > 0)
      .fold(None::<&MuscleGroupScore>, |best, s| match best {
        Some(b) if b.sets >= s.sets => Some(b),
        _ => Some(s),
      })
      .map(|s| s.name.clone());

    let any_high = scores.iter().any(|s| s.intensity == Intensity::High);
    let needs_attention: Vec<String> = if any_high || !policy.attention_requires_high {
      scores
        .iter()
        .filter(|s| matches!(s.intensity, Intensity::None | Intensity::Low))
        .map(|s| s.name.clone())
        .collect()
    } else {
      Vec::new()
    };

    debug!(
      window_days,
      total_sets,
      days_active = active_days.len(),
      "computed muscle group heatmap"
    );

    Ok(Self {
      scores,
      total_sets,
      most_trained,
      days_active: active_days.len() as u32,
      needs_attention,
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

//! What-to-train-next suggestions
//!
//! Consumes the heatmap over the longer window and turns relative imbalance
//! into a ranked, reasoned list: untrained groups come out at high priority,
//! undertrained ones at medium. Below the minimum-history threshold no
//! advice is produced at all, preventing premature suggestions from sparse
//! data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::dates::relative_day_label;
use crate::error::EngineError;
use crate::heatmap::{Intensity, MuscleGroupHeatmap};
use crate::models::WorkoutRecord;
use crate::policy::EnginePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPriority {
  High,
  Medium,
}

impl std::fmt::Display for SuggestionPriority {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::High => write!(f, "high"),
      Self::Medium => write!(f, "medium"),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
  pub muscle_group: String,
  pub priority: SuggestionPriority,
  /// Human-readable explanation referencing the group's last-trained date
  /// or its set count relative to the leader.
  pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSuggestions {
  /// False below the minimum-history threshold; the suggestion list is
  /// always empty in that state.
  pub has_enough_data: bool,
  pub suggestions: Vec<Suggestion>,
  pub most_trained: Option<String>,
  pub most_trained_sets: u32,
}

impl WorkoutSuggestions {
  /// Rank muscle groups to prioritize, based on the heatmap over
  /// `policy.suggestion_window_days`.
  ///
  /// An empty suggestion list with `has_enough_data == true` means training
  /// is balanced; callers render that state distinctly from "not enough
  /// history".
  pub fn compute(
    workouts: &[WorkoutRecord],
    catalog: &ExerciseCatalog,
    today: NaiveDate,
    policy: &EnginePolicy,
  ) -> Result<Self, EngineError> {
    if catalog.is_empty() {
      return Err(EngineError::EmptyCatalog);
    }

    let history = workouts.iter().filter(|w| w.completed).count();
    if history < policy.min_workouts_for_suggestions {
      debug!(
        history,
        required = policy.min_workouts_for_suggestions,
        "not enough history for suggestions"
      );
      return Ok(Self {
        has_enough_data: false,
        suggestions: Vec::new(),
        most_trained: None,
        most_trained_sets: 0,
      });
    }

    let heatmap = MuscleGroupHeatmap::compute(
      workouts,
      catalog,
      policy.suggestion_window_days,
      today,
      policy,
    )?;

    let any_high = heatmap
      .scores
      .iter()
      .any(|s| s.intensity == Intensity::High);

    let most_trained_sets = heatmap
      .most_trained
      .as_ref()
      .and_then(|name| heatmap.scores.iter().find(|s| &s.name == name))
      .map(|s| s.sets)
      .unwrap_or(0);

    let mut suggestions = Vec::new();
    if any_high {
      for score in &heatmap.scores {
        let (priority, reason) = match score.intensity {
          Intensity::None => (
            SuggestionPriority::High,
            format!(
              "No {} sets in the last {} days",
              score.name, policy.suggestion_window_days
            ),
          ),
          Intensity::Low => {
            let trained = match score.last_trained {
              Some(date) => format!("last trained {}", relative_day_label(date, today)),
              None => "not trained recently".to_string(),
            };
            (
              SuggestionPriority::Medium,
              format!(
                "Only {} {} sets vs {} for {} ({})",
                score.sets,
                score.name,
                most_trained_sets,
                heatmap.most_trained.as_deref().unwrap_or("the leader"),
                trained
              ),
            )
          }
          _ => continue,
        };
        suggestions.push(Suggestion {
          muscle_group: score.name.clone(),
          priority,
          reason,
        });
      }
      // High priority first; within a priority, catalog order is kept.
      suggestions.sort_by_key(|s| s.priority != SuggestionPriority::High);
    }

    debug!(count = suggestions.len(), "computed workout suggestions");

    Ok(Self {
      has_enough_data: true,
      suggestions,
      most_trained: heatmap.most_trained,
      most_trained_sets,
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

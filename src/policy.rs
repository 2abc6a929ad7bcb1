//! Engine policy knobs
//!
//! Every product-policy number in the engine lives here as a named,
//! overridable field rather than a hard-coded literal: the streak grace
//! window, the intensity buckets, the rolling-window lengths, and the
//! minimum history required before suggesting. The defaults reproduce the
//! shipped behavior exactly; callers that want a different interpretation
//! (e.g. an absolute needs-attention rule) override a field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnginePolicy {
  /// A streak is not broken by not yet having logged today: the most recent
  /// workout may lag "today" by up to this many days and still anchor the
  /// current streak.
  pub streak_grace_days: i64,

  /// Upper bound of the "low" intensity bucket (1..=low_max_sets -> low).
  pub low_max_sets: u32,

  /// Upper bound of the "medium" intensity bucket. Anything above is "high".
  pub medium_max_sets: u32,

  /// Rolling window for the muscle-group heatmap.
  pub heatmap_window_days: u32,

  /// Longer rolling window consumed by the suggestion engine.
  pub suggestion_window_days: u32,

  /// Completed workouts required before suggestions are produced at all.
  pub min_workouts_for_suggestions: usize,

  /// When true (shipped behavior), a none/low muscle group is only flagged
  /// as needing attention if some *other* group is high in the same window:
  /// the signal is relative imbalance, not absolute undertraining.
  pub attention_requires_high: bool,
}

impl Default for EnginePolicy {
  fn default() -> Self {
    Self {
      streak_grace_days: 1,
      low_max_sets: 4,
      medium_max_sets: 9,
      heatmap_window_days: 7,
      suggestion_window_days: 14,
      min_workouts_for_suggestions: 3,
      attention_requires_high: true,
    }
  }
}

//! Consecutive-day streak detection
//!
//! A streak is a run of calendar-consecutive days each containing at least
//! one completed workout. The current streak tolerates not yet having logged
//! today: the most recent workout may lag "today" by `streak_grace_days`
//! (default 1) and still anchor the count.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::WorkoutRecord;
use crate::policy::EnginePolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
  pub current: u32,
  pub longest: u32,
}

impl StreakResult {
  /// Compute streaks over the set of dates with at least one completed
  /// workout. Duplicate dates are harmless; `today` is explicit for
  /// testability.
  pub fn compute(dates: &[NaiveDate], today: NaiveDate, policy: &EnginePolicy) -> Self {
    // Dedupe and sort ascending in one pass.
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    if days.is_empty() {
      return Self {
        current: 0,
        longest: 0,
      };
    }

    // Longest: single ascending pass. A gap of exactly one day extends the
    // run; anything larger closes it and opens a new run of length 1.
    let mut longest = 1u32;
    let mut run = 1u32;
    let mut prev: Option<NaiveDate> = None;
    for &day in &days {
      if let Some(p) = prev {
        if (day - p).num_days() == 1 {
          run += 1;
        } else {
          run = 1;
        }
      }
      longest = longest.max(run);
      prev = Some(day);
    }

    // Current: walk backward from the most recent date, but only if it is
    // within the grace window of today.
    let mut current = 0u32;
    let descending: Vec<NaiveDate> = days.iter().rev().copied().collect();
    let latest = descending[0];
    let lag = (today - latest).num_days();
    if (0..=policy.streak_grace_days).contains(&lag) {
      current = 1;
      for pair in descending.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
          current += 1;
        } else {
          break;
        }
      }
    }

    debug!(current, longest, days = days.len(), "computed streaks");
    Self { current, longest }
  }

  /// Convenience wrapper that extracts the dates of completed workouts.
  pub fn from_workouts(
    workouts: &[WorkoutRecord],
    today: NaiveDate,
    policy: &EnginePolicy,
  ) -> Self {
    let dates: Vec<NaiveDate> = workouts
      .iter()
      .filter(|w| w.completed)
      .map(|w| w.date)
      .collect();
    Self::compute(&dates, today, policy)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

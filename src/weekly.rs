//! Per-week totals and week-over-week comparison
//!
//! Totals are summed over an inclusive Monday..Sunday window; daily averages
//! divide by 7 (the full week length, not days active) so a partial week
//! still reports a meaningful per-day number.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::{difference, in_range, percent_change};
use crate::models::{CalorieEntry, StepEntry, WorkoutRecord};

/// Daily targets carried into the stats for progress-ratio display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeeklyTargets {
  pub calorie_target: i64,
  pub step_goal: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStats {
  pub week_start: NaiveDate,
  pub week_end: NaiveDate,
  pub total_workouts: u32,
  pub total_calories: i64,
  pub total_steps: i64,
  /// Total completed-workout duration, where recorded.
  pub total_duration_minutes: u32,
  pub avg_calories: i64,
  pub avg_steps: i64,
  /// Distinct dates with a completed workout or a non-zero calorie/step
  /// entry.
  pub days_active: u32,
  pub calorie_target: i64,
  pub step_goal: i64,
}

impl WeeklyStats {
  /// Aggregate one calendar week of workouts and daily metrics.
  pub fn compute(
    workouts: &[WorkoutRecord],
    calories: &[CalorieEntry],
    steps: &[StepEntry],
    week_start: NaiveDate,
    week_end: NaiveDate,
    targets: &WeeklyTargets,
  ) -> Self {
    let mut active_days: BTreeSet<NaiveDate> = BTreeSet::new();

    let mut total_workouts = 0u32;
    let mut total_duration_minutes = 0u32;
    for w in workouts {
      if w.completed && in_range(w.date, week_start, week_end) {
        total_workouts += 1;
        total_duration_minutes += w.duration_minutes.unwrap_or(0);
        active_days.insert(w.date);
      }
    }

    let mut total_calories = 0i64;
    for c in calories {
      if in_range(c.date, week_start, week_end) {
        total_calories += c.consumed;
        if c.consumed > 0 {
          active_days.insert(c.date);
        }
      }
    }

    let mut total_steps = 0i64;
    for s in steps {
      if in_range(s.date, week_start, week_end) {
        total_steps += s.steps;
        if s.steps > 0 {
          active_days.insert(s.date);
        }
      }
    }

    debug!(
      %week_start,
      total_workouts,
      days_active = active_days.len(),
      "aggregated weekly stats"
    );

    Self {
      week_start,
      week_end,
      total_workouts,
      total_calories,
      total_steps,
      total_duration_minutes,
      avg_calories: (total_calories as f64 / 7.0).round() as i64,
      avg_steps: (total_steps as f64 / 7.0).round() as i64,
      days_active: active_days.len() as u32,
      calorie_target: targets.calorie_target,
      step_goal: targets.step_goal,
    }
  }
}

/// Week-over-week deltas. Zero deltas are reported, not suppressed: whether
/// to render a "no change" indicator is a presentation decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekComparison {
  pub workouts: i64,
  pub calories: i64,
  pub steps: i64,
  pub workouts_percent: i64,
  pub calories_percent: i64,
  pub steps_percent: i64,
}

impl WeekComparison {
  pub fn compute(current: &WeeklyStats, previous: &WeeklyStats) -> Self {
    Self {
      workouts: difference(current.total_workouts as i64, previous.total_workouts as i64),
      calories: difference(current.total_calories, previous.total_calories),
      steps: difference(current.total_steps, previous.total_steps),
      workouts_percent: percent_change(
        current.total_workouts as f64,
        previous.total_workouts as f64,
      ),
      calories_percent: percent_change(
        current.total_calories as f64,
        previous.total_calories as f64,
      ),
      steps_percent: percent_change(current.total_steps as f64, previous.total_steps as f64),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{make_exercise, make_set, make_workout};
  use pretty_assertions::assert_eq;

  fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  fn targets() -> WeeklyTargets {
    WeeklyTargets {
      calorie_target: 2000,
      step_goal: 10000,
    }
  }

  fn calories(entries: &[(&str, i64)]) -> Vec<CalorieEntry> {
    entries
      .iter()
      .map(|&(date, consumed)| CalorieEntry {
        date: d(date),
        consumed,
        target: 2000,
      })
      .collect()
  }

  fn steps(entries: &[(&str, i64)]) -> Vec<StepEntry> {
    entries
      .iter()
      .map(|&(date, count)| StepEntry {
        date: d(date),
        steps: count,
        goal: 10000,
      })
      .collect()
  }

  #[test]
  fn test_totals_round_trip() {
    // Arrange: two workouts, three calorie entries, two step entries, all
    // inside the week; one of each outside.
    let mut outside = make_workout(
      "2024-01-08",
      vec![make_exercise("Bench Press", vec![make_set(100.0, 5)])],
    );
    outside.duration_minutes = Some(45);
    let mut w1 = make_workout("2024-01-01", vec![]);
    w1.duration_minutes = Some(60);
    let mut w2 = make_workout("2024-01-03", vec![]);
    w2.duration_minutes = Some(30);
    let workouts = vec![w1, w2, outside];

    let cals = calories(&[
      ("2024-01-01", 1800),
      ("2024-01-02", 2200),
      ("2024-01-05", 2000),
      ("2024-01-09", 9999), // outside the week
    ]);
    let step_entries = steps(&[
      ("2024-01-02", 8000),
      ("2024-01-04", 12000),
      ("2023-12-31", 5000), // outside the week
    ]);

    // Act
    let stats = WeeklyStats::compute(
      &workouts,
      &cals,
      &step_entries,
      d("2024-01-01"),
      d("2024-01-07"),
      &targets(),
    );

    // Assert: in-window sums only
    assert_eq!(stats.total_workouts, 2);
    assert_eq!(stats.total_calories, 6000);
    assert_eq!(stats.total_steps, 20000);
    assert_eq!(stats.total_duration_minutes, 90);
    assert_eq!(stats.avg_calories, 857); // 6000 / 7 = 857.14 -> 857
    assert_eq!(stats.avg_steps, 2857);
    // Active days: Jan 1 (workout+cal), 2 (cal+steps), 3 (workout), 4, 5
    assert_eq!(stats.days_active, 5);
    assert_eq!(stats.calorie_target, 2000);
    assert_eq!(stats.step_goal, 10000);
  }

  #[test]
  fn test_incomplete_workouts_are_excluded() {
    let mut w = make_workout("2024-01-02", vec![]);
    w.completed = false;
    let stats = WeeklyStats::compute(
      &[w],
      &[],
      &[],
      d("2024-01-01"),
      d("2024-01-07"),
      &targets(),
    );
    assert_eq!(stats.total_workouts, 0);
    assert_eq!(stats.days_active, 0);
  }

  #[test]
  fn test_zero_entries_do_not_count_as_active() {
    let stats = WeeklyStats::compute(
      &[],
      &calories(&[("2024-01-02", 0)]),
      &steps(&[("2024-01-03", 0)]),
      d("2024-01-01"),
      d("2024-01-07"),
      &targets(),
    );
    assert_eq!(stats.days_active, 0);
    assert_eq!(stats.total_calories, 0);
  }

  #[test]
  fn test_empty_week_is_zeroed_not_an_error() {
    let stats =
      WeeklyStats::compute(&[], &[], &[], d("2024-01-01"), d("2024-01-07"), &targets());
    assert_eq!(stats.total_workouts, 0);
    assert_eq!(stats.avg_calories, 0);
    assert_eq!(stats.days_active, 0);
  }

  #[test]
  fn test_comparison_against_zero_calorie_week() {
    // Current week has no calories, previous logged 1500: delta is the full
    // -1500 and the percentage bottoms out at -100.
    let current = WeeklyStats::compute(
      &[],
      &[],
      &[],
      d("2024-01-08"),
      d("2024-01-14"),
      &targets(),
    );
    let previous = WeeklyStats::compute(
      &[],
      &calories(&[("2024-01-03", 1500)]),
      &[],
      d("2024-01-01"),
      d("2024-01-07"),
      &targets(),
    );

    let cmp = WeekComparison::compute(&current, &previous);
    assert_eq!(cmp.calories, -1500);
    assert_eq!(cmp.calories_percent, -100);
  }

  #[test]
  fn test_comparison_reports_zero_deltas() {
    let week = WeeklyStats::compute(
      &[make_workout("2024-01-02", vec![])],
      &[],
      &[],
      d("2024-01-01"),
      d("2024-01-07"),
      &targets(),
    );
    let cmp = WeekComparison::compute(&week, &week);
    assert_eq!(cmp.workouts, 0);
    assert_eq!(cmp.workouts_percent, 0);
    assert_eq!(cmp.steps, 0);
  }

  #[test]
  fn test_comparison_zero_baseline_saturates() {
    let current = WeeklyStats::compute(
      &[make_workout("2024-01-08", vec![])],
      &[],
      &[],
      d("2024-01-08"),
      d("2024-01-14"),
      &targets(),
    );
    let previous =
      WeeklyStats::compute(&[], &[], &[], d("2024-01-01"), d("2024-01-07"), &targets());

    let cmp = WeekComparison::compute(&current, &previous);
    assert_eq!(cmp.workouts, 1);
    assert_eq!(cmp.workouts_percent, 100);
  }
}

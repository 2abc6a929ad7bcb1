//! Calendar arithmetic and delta helpers
//!
//! Weeks start on Monday. All percentage math in the crate goes through
//! `percent_change` so the zero-baseline policy is identical everywhere a
//! ratio is computed.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Week boundaries
/// ---------------------------------------------------------------------------

/// Monday-through-Sunday bounds of the ISO week containing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBounds {
  pub start: NaiveDate,
  pub end: NaiveDate,
}

/// Bounds of the ISO week containing `date`, Monday first.
pub fn week_bounds(date: NaiveDate) -> WeekBounds {
  let start = date - Duration::days(date.weekday().num_days_from_monday() as i64);
  WeekBounds {
    start,
    end: start + Duration::days(6),
  }
}

/// Bounds of the week before the one containing `date`.
pub fn previous_week_bounds(date: NaiveDate) -> WeekBounds {
  week_bounds(date - Duration::days(7))
}

/// Inclusive containment: `start <= date <= end`.
pub fn in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
  start <= date && date <= end
}

/// ---------------------------------------------------------------------------
/// Delta helpers
/// ---------------------------------------------------------------------------

/// Signed percentage change from `previous` to `current`, rounded.
///
/// Zero-baseline policy: a previous value of 0 saturates to 100 when the
/// current value is positive and 0 otherwise, so week-one data reads as
/// "+100%" instead of dividing by zero.
pub fn percent_change(current: f64, previous: f64) -> i64 {
  if previous == 0.0 {
    if current > 0.0 {
      100
    } else {
      0
    }
  } else {
    ((current - previous) / previous * 100.0).round() as i64
  }
}

/// Signed delta, `current - previous`.
pub fn difference(current: i64, previous: i64) -> i64 {
  current - previous
}

/// ---------------------------------------------------------------------------
/// Relative formatting
/// ---------------------------------------------------------------------------

/// Human-readable label for a past date relative to `today`:
/// "today", "yesterday", "N days ago". Future dates fall back to ISO.
pub fn relative_day_label(date: NaiveDate, today: NaiveDate) -> String {
  match (today - date).num_days() {
    0 => "today".to_string(),
    1 => "yesterday".to_string(),
    n if n > 1 => format!("{} days ago", n),
    _ => date.format("%Y-%m-%d").to_string(),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use proptest::prelude::*;

  fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
  }

  #[test]
  fn test_week_bounds_mid_week() {
    // 2024-01-03 is a Wednesday
    let bounds = week_bounds(d("2024-01-03"));
    assert_eq!(bounds.start, d("2024-01-01"));
    assert_eq!(bounds.end, d("2024-01-07"));
  }

  #[test]
  fn test_week_bounds_on_monday_and_sunday() {
    let monday = week_bounds(d("2024-01-01"));
    assert_eq!(monday.start, d("2024-01-01"));
    assert_eq!(monday.end, d("2024-01-07"));

    // Sunday belongs to the week that started the previous Monday
    let sunday = week_bounds(d("2024-01-07"));
    assert_eq!(sunday.start, d("2024-01-01"));
    assert_eq!(sunday.end, d("2024-01-07"));
  }

  #[test]
  fn test_previous_week_bounds() {
    let bounds = previous_week_bounds(d("2024-01-10"));
    assert_eq!(bounds.start, d("2024-01-01"));
    assert_eq!(bounds.end, d("2024-01-07"));
  }

  #[test]
  fn test_in_range_is_inclusive() {
    let start = d("2024-01-01");
    let end = d("2024-01-07");
    assert!(in_range(start, start, end));
    assert!(in_range(end, start, end));
    assert!(in_range(d("2024-01-04"), start, end));
    assert!(!in_range(d("2023-12-31"), start, end));
    assert!(!in_range(d("2024-01-08"), start, end));
  }

  #[test]
  fn test_percent_change_zero_baseline() {
    assert_eq!(percent_change(500.0, 0.0), 100);
    assert_eq!(percent_change(0.0, 0.0), 0);
  }

  #[test]
  fn test_percent_change_rounds() {
    assert_eq!(percent_change(3.0, 2.0), 50);
    assert_eq!(percent_change(1.0, 3.0), -67); // -66.67 rounds to -67
    assert_eq!(percent_change(0.0, 1500.0), -100);
  }

  #[test]
  fn test_difference_is_signed() {
    assert_eq!(difference(3, 5), -2);
    assert_eq!(difference(5, 3), 2);
    assert_eq!(difference(4, 4), 0);
  }

  #[test]
  fn test_relative_day_label() {
    let today = d("2024-06-10");
    assert_eq!(relative_day_label(today, today), "today");
    assert_eq!(relative_day_label(d("2024-06-09"), today), "yesterday");
    assert_eq!(relative_day_label(d("2024-06-05"), today), "5 days ago");
    assert_eq!(relative_day_label(d("2024-06-11"), today), "2024-06-11");
  }

  proptest! {
    #[test]
    fn prop_week_bounds_span_seven_days(days in 0i64..20000) {
      let date = d("1990-01-01") + Duration::days(days);
      let bounds = week_bounds(date);
      prop_assert_eq!((bounds.end - bounds.start).num_days(), 6);
      prop_assert!(in_range(date, bounds.start, bounds.end));
      prop_assert_eq!(bounds.start.weekday(), chrono::Weekday::Mon);
    }

    #[test]
    fn prop_percent_change_zero_baseline(current in 0.0f64..1e6) {
      let expected = if current > 0.0 { 100 } else { 0 };
      prop_assert_eq!(percent_change(current, 0.0), expected);
    }
  }
}

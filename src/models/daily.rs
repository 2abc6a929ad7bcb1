use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calories consumed on one date, with the user's daily target for
/// progress-ratio display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieEntry {
  pub date: NaiveDate,
  pub consumed: i64,
  pub target: i64,
}

/// Steps taken on one date, with the user's daily goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepEntry {
  pub date: NaiveDate,
  pub steps: i64,
  pub goal: i64,
}

/// Body weight measured on one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightEntry {
  pub date: NaiveDate,
  pub weight: f64,
  pub unit: WeightUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
  Kg,
  Lbs,
}

impl std::fmt::Display for WeightUnit {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Kg => write!(f, "kg"),
      Self::Lbs => write!(f, "lbs"),
    }
  }
}

impl std::str::FromStr for WeightUnit {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "kg" => Ok(Self::Kg),
      "lbs" => Ok(Self::Lbs),
      _ => Err(format!("Unknown weight unit: {}", s)),
    }
  }
}

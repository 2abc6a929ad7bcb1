pub mod daily;
pub mod workout;

pub use daily::{CalorieEntry, StepEntry, WeightEntry, WeightUnit};
pub use workout::{ExerciseEntry, SetEntry, WorkoutRecord};

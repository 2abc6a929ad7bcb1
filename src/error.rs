use serde::Serialize;

/// Programmer errors that fail fast instead of producing misleading output.
///
/// Data-shaped problems (empty collections, unresolved exercises, zero
/// baselines) resolve to documented empty/zero results and never reach this
/// enum.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
  /// The exercise catalog has no muscle groups declared. The heatmap and
  /// suggestion engines cannot score anything without one.
  #[error("exercise catalog has no muscle groups")]
  EmptyCatalog,

  /// Rolling windows must cover at least one day.
  #[error("rolling window must be at least 1 day, got {0}")]
  InvalidWindow(u32),
}

impl Serialize for EngineError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

//! Error types for tin operations.

/// Contract violations on a [`Tin`](crate::Tin).
///
/// The reducer never produces these: its loop guard keeps every helper
/// within its preconditions. They surface when the helpers are driven
/// directly, or when a tin is parsed from text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TinError {
    /// A bean was requested from a tin with no beans left.
    #[error("cannot take a bean from an empty tin")]
    Empty,

    /// A bean was put into a tin with every slot occupied.
    #[error("no vacant slot in tin of capacity {capacity}")]
    NoVacantSlot { capacity: usize },

    /// A character in a bean string is neither a bean nor a vacant marker.
    #[error("invalid bean '{ch}' at position {position} (expected 'B', 'G' or '-')")]
    InvalidBean { ch: char, position: usize },

    /// A single bean code was expected.
    #[error("expected a single bean 'B' or 'G', got \"{input}\"")]
    NotABean { input: String },
}

//! Error types for sequence operations.
//!
//! Only terminal operations whose contract demands at least one element can
//! fail; everything else degrades gracefully on empty input.

/// Error type for terminal sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A value was demanded from an empty or exhausted sequence.
    #[error("No such element")]
    NoSuchElement,

    /// `single` found more than one element.
    #[error("Sequence contains more than one element")]
    TooManyElements,
}

/// Result type for terminal sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

//! Domain error types.
//!
//! These errors represent invariant violations when assembling domain
//! values. They are distinct from network construction and planning errors.

use super::LocationId;

/// Domain-level errors for path construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Path has no segments
    #[error("path must have at least one segment")]
    EmptyPath,

    /// A segment does not start where the previous one ended
    #[error("segment {index} does not start where the previous segment ends")]
    Disconnected { index: usize },

    /// Path visits the same location twice
    #[error("location {0} appears more than once in path")]
    RepeatedLocation(LocationId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyPath;
        assert_eq!(err.to_string(), "path must have at least one segment");

        let err = DomainError::Disconnected { index: 2 };
        assert_eq!(
            err.to_string(),
            "segment 2 does not start where the previous segment ends"
        );

        let err = DomainError::RepeatedLocation(LocationId(4));
        assert_eq!(err.to_string(), "location #4 appears more than once in path");
    }
}

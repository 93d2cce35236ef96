//! Error types for the arena engine.
//!
//! Configuration errors are raised only while building an arena. Everything
//! else is a precondition violation by the caller and is never retryable.

use thiserror::Error;

/// Main error type for arena operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// Breed count outside the supported range
    #[error("Number of breeds must be in [{min}, {max}], got {actual}")]
    BreedCount {
        actual: usize,
        min: usize,
        max: usize,
    },

    /// Arena side length outside the supported range
    #[error("Arena size must be in [1, {max}], got {actual}")]
    ArenaSize { actual: usize, max: usize },

    /// Dominance band wider than half the breed cycle, or empty
    #[error("Dominance radius must be in [1, {max}], got {actual}")]
    DominanceRadius { actual: usize, max: usize },

    /// Snapshot buffer whose cell count differs from the arena's
    #[error("Snapshot buffer holds {actual} cells but the arena has {expected}")]
    BufferMismatch { expected: usize, actual: usize },

    /// Cell coordinates outside the grid
    #[error("Cell ({row}, {col}) is outside a {size}x{size} arena")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Terrain read or stepped before `init`
    #[error("Arena has not been initialized")]
    Uninitialized,
}

/// Result type alias for arena operations.
pub type Result<T> = std::result::Result<T, ArenaError>;

impl ArenaError {
    /// True for errors raised while validating construction parameters.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::BreedCount { .. } | Self::ArenaSize { .. } | Self::DominanceRadius { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArenaError::BufferMismatch {
            expected: 100,
            actual: 16,
        };
        assert_eq!(
            err.to_string(),
            "Snapshot buffer holds 16 cells but the arena has 100"
        );
    }

    #[test]
    fn test_configuration_classification() {
        assert!(ArenaError::ArenaSize { actual: 0, max: 8 }.is_configuration());
        assert!(!ArenaError::Uninitialized.is_configuration());
        assert!(!ArenaError::OutOfBounds {
            row: 3,
            col: 0,
            size: 2
        }
        .is_configuration());
    }
}

use thiserror::Error as ThisError;

///
/// TupleError
///
/// Failures of the fallible tuple operations. Out-of-range access through
/// `Index`/`IndexMut` panics instead.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum TupleError {
    #[error("index {index} is out of bounds for a tuple of {dimensions} dimensions")]
    IndexOutOfBounds { index: usize, dimensions: usize },

    #[error("expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("destination holds {actual} components but {needed} are needed")]
    DestinationTooSmall { needed: usize, actual: usize },

    #[error("tolerance must be non-negative")]
    InvalidTolerance,
}

//! Error types shared by the routing core.

use thiserror::Error;

/// Why a cost matrix was rejected at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixDefect {
    #[error("matrix has no rows")]
    Empty,

    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("flat buffer holds {len} entries, expected {expected}")]
    BadLength { len: usize, expected: usize },

    #[error("entry ({from}, {to}) is negative: {value}")]
    Negative { from: usize, to: usize, value: f64 },

    #[error("entry ({from}, {to}) is not finite")]
    NotFinite { from: usize, to: usize },

    #[error("self-loop ({index}, {index}) costs {value}, expected 0")]
    NonZeroDiagonal { index: usize, value: f64 },

    #[error("matrix covers {actual} locations but {expected} were supplied")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Errors produced while building, improving or scoring routes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("malformed cost matrix: {0}")]
    MalformedMatrix(#[from] MatrixDefect),

    #[error("vehicle count must be at least 1, got {count}")]
    InvalidVehicleCount { count: usize },

    #[error("location index {index} is outside a matrix of size {size}")]
    OutOfRange { index: usize, size: usize },
}

pub type Result<T, E = RoutingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defect_converts_into_routing_error() {
        let err: RoutingError = MatrixDefect::Empty.into();
        assert_eq!(err, RoutingError::MalformedMatrix(MatrixDefect::Empty));
    }

    #[test]
    fn test_messages_name_the_position() {
        let err = RoutingError::from(MatrixDefect::Negative {
            from: 2,
            to: 3,
            value: -1.5,
        });
        assert_eq!(
            err.to_string(),
            "malformed cost matrix: entry (2, 3) is negative: -1.5"
        );
        let err = RoutingError::OutOfRange { index: 9, size: 5 };
        assert_eq!(
            err.to_string(),
            "location index 9 is outside a matrix of size 5"
        );
    }
}

//! Error types for shape sphere transforms
//!
//! Every transform returns a [`ShapeError`] instead of a magic value, so a
//! legitimate result can never be confused with a failure.

use thiserror::Error;

/// Why a configuration could not be mapped to or from the sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// All three bodies coincide, so the shape has no direction
    ZeroNormalization,
    /// 1 + ξ1 <= 0: the binary collision point where the gauge cannot be fixed
    SouthPole,
    /// The reconstructed triangle collapsed to a point
    ZeroExtent,
    /// The requested target scale is not a positive finite number
    InvalidScale,
}

impl std::fmt::Display for DegenerateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            DegenerateKind::ZeroNormalization => "normalization length is zero or not finite",
            DegenerateKind::SouthPole => "sphere point lies on the gauge singularity (1 + xi1 <= 0)",
            DegenerateKind::ZeroExtent => "reconstructed triangle has no extent",
            DegenerateKind::InvalidScale => "target scale must be positive and finite",
        };
        f.write_str(text)
    }
}

/// Errors produced at the transform boundary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    /// A list of points or masses did not hold exactly three entries
    #[error("expected {expected} {what}, found {found}")]
    InputCardinality {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A mass is zero, negative, NaN or infinite
    #[error("invalid mass m{} = {value}", .index + 1)]
    InvalidMass { index: usize, value: f64 },

    /// Mass text could not be parsed as a number
    #[error("mass m{} is not a number", .index + 1)]
    UnparsableMass { index: usize },

    /// The configuration sits on a singularity of the map
    #[error("degenerate configuration: {0}")]
    Degenerate(DegenerateKind),

    /// NaN or infinity appeared while computing `stage`
    #[error("non-finite value while computing {stage}")]
    NumericOverflow { stage: &'static str },
}

/// Convenience alias used throughout the crate
pub type ShapeResult<T> = Result<T, ShapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_body() {
        let err = ShapeError::InvalidMass { index: 2, value: -1.0 };
        assert_eq!(err.to_string(), "invalid mass m3 = -1");

        let err = ShapeError::InputCardinality {
            what: "points",
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "expected 3 points, found 2");
    }

    #[test]
    fn test_degenerate_message() {
        let err = ShapeError::Degenerate(DegenerateKind::SouthPole);
        assert!(err.to_string().starts_with("degenerate configuration: sphere point"));
    }
}

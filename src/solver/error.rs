//! Error types for the triangle solver

use thiserror::Error;

use super::types::Side;

/// Error returned when a side length cannot be accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LengthError {
    /// NaN or infinite input
    #[error("side length must be a finite number (received {0})")]
    NotFinite(f64),

    /// Input smaller than the accepted minimum
    #[error("side length must be at least {min} (received {value})")]
    BelowMinimum { value: f64, min: f64 },

    /// Input whose square, or the sum of two such squares, overflows `f64`
    #[error("side length is too large to square (received {0})")]
    TooLarge(f64),
}

/// Error returned when the known sides cannot form a right triangle
///
/// Only the leg-solving modes can fail: the supplied hypotenuse must be
/// strictly longer than the supplied leg.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    #[error(
        "the hypotenuse (c) must be greater than leg ({leg}) to form a valid right triangle \
         (c = {hypotenuse}, {leg} = {leg_value})"
    )]
    InvalidTriangle {
        /// The leg the hypotenuse was compared against
        leg: Side,
        leg_value: f64,
        hypotenuse: f64,
    },
}

impl SolveError {
    pub fn invalid_triangle(leg: Side, leg_value: f64, hypotenuse: f64) -> Self {
        Self::InvalidTriangle {
            leg,
            leg_value,
            hypotenuse,
        }
    }
}

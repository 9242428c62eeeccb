//! Core types for the triangle solver

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::error::LengthError;

/// Smallest side length accepted as input
pub const MIN_LENGTH: f64 = 0.1;

/// One side of a right triangle with legs `a`, `b` and hypotenuse `c`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
    C,
}

impl Side {
    pub const ALL: [Side; 3] = [Side::A, Side::B, Side::C];

    /// Single-letter name used in formulas and labels
    pub fn symbol(self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
            Side::C => "c",
        }
    }

    pub fn is_hypotenuse(self) -> bool {
        self == Side::C
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which side is unknown for a solve request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMode {
    SolveC,
    SolveA,
    SolveB,
}

impl SolveMode {
    /// All modes, in the order they are offered to the user
    pub const ALL: [SolveMode; 3] = [SolveMode::SolveC, SolveMode::SolveA, SolveMode::SolveB];

    /// The mode that treats `side` as unknown
    pub fn for_unknown(side: Side) -> Self {
        match side {
            Side::A => SolveMode::SolveA,
            Side::B => SolveMode::SolveB,
            Side::C => SolveMode::SolveC,
        }
    }

    pub fn unknown(self) -> Side {
        match self {
            SolveMode::SolveC => Side::C,
            SolveMode::SolveA => Side::A,
            SolveMode::SolveB => Side::B,
        }
    }

    /// The two sides that must be supplied, in input order
    pub fn inputs(self) -> (Side, Side) {
        match self {
            SolveMode::SolveC => (Side::A, Side::B),
            SolveMode::SolveA => (Side::B, Side::C),
            SolveMode::SolveB => (Side::A, Side::C),
        }
    }

    /// Input values pre-filled for this mode, in input order
    pub fn defaults(self) -> (f64, f64) {
        match self {
            SolveMode::SolveC => (3.0, 4.0),
            SolveMode::SolveA => (4.0, 5.0),
            SolveMode::SolveB => (3.0, 5.0),
        }
    }

    /// Text shown on the mode selector
    pub fn label(self) -> &'static str {
        match self {
            SolveMode::SolveC => "Hypotenuse (c)",
            SolveMode::SolveA => "Leg (a)",
            SolveMode::SolveB => "Leg (b)",
        }
    }
}

impl fmt::Display for SolveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a mode name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown solve mode '{0}' (expected one of: c, a, b, \"Hypotenuse (c)\", \"Leg (a)\", \"Leg (b)\")")]
pub struct UnknownModeError(pub String);

impl FromStr for SolveMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "c" | "hypotenuse" => return Ok(SolveMode::SolveC),
            "a" => return Ok(SolveMode::SolveA),
            "b" => return Ok(SolveMode::SolveB),
            _ => {}
        }
        SolveMode::ALL
            .into_iter()
            .find(|mode| mode.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownModeError(s.to_string()))
    }
}

/// A side length accepted as input: finite, at least [`MIN_LENGTH`], and
/// small enough that the sum of two squared lengths stays finite
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Length(f64);

impl Length {
    pub fn new(value: f64) -> Result<Self, LengthError> {
        if !value.is_finite() {
            return Err(LengthError::NotFinite(value));
        }
        if value < MIN_LENGTH {
            return Err(LengthError::BelowMinimum {
                value,
                min: MIN_LENGTH,
            });
        }
        if !(2.0 * value * value).is_finite() {
            return Err(LengthError::TooLarge(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Length {
    type Error = LengthError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A fully populated right triangle with legs `a`, `b` and hypotenuse `c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriangleSpec {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TriangleSpec {
    /// The 3-4-5 triangle drawn when the inputs do not form a triangle
    pub const FALLBACK: TriangleSpec = TriangleSpec {
        a: 3.0,
        b: 4.0,
        c: 5.0,
    };

    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
            Side::C => self.c,
        }
    }

    /// Copy of this triangle with one side replaced
    pub fn with_side(mut self, side: Side, value: f64) -> Self {
        match side {
            Side::A => self.a = value,
            Side::B => self.b = value,
            Side::C => self.c = value,
        }
        self
    }

    /// Whether `a² + b² = c²` holds within a relative tolerance
    pub fn is_right(&self, rel_tol: f64) -> bool {
        let legs = self.a * self.a + self.b * self.b;
        let hyp = self.c * self.c;
        (legs - hyp).abs() <= rel_tol * hyp.max(legs)
    }
}

/// A mode together with its two input lengths, in [`SolveMode::inputs`] order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveRequest {
    pub mode: SolveMode,
    pub first: Length,
    pub second: Length,
}

impl SolveRequest {
    pub fn new(mode: SolveMode, first: Length, second: Length) -> Self {
        Self {
            mode,
            first,
            second,
        }
    }

    /// Build a request from raw values, checking each against the input minimum
    pub fn from_values(mode: SolveMode, first: f64, second: f64) -> Result<Self, LengthError> {
        Ok(Self::new(mode, Length::new(first)?, Length::new(second)?))
    }

    /// The request pre-filled with the mode's default inputs
    pub fn with_defaults(mode: SolveMode) -> Self {
        let (first, second) = mode.defaults();
        Self {
            mode,
            first: Length(first),
            second: Length(second),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_inputs_exclude_unknown() {
        for mode in SolveMode::ALL {
            let (first, second) = mode.inputs();
            assert_ne!(first, mode.unknown());
            assert_ne!(second, mode.unknown());
            assert_ne!(first, second);
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("c".parse::<SolveMode>(), Ok(SolveMode::SolveC));
        assert_eq!("A".parse::<SolveMode>(), Ok(SolveMode::SolveA));
        assert_eq!("Leg (b)".parse::<SolveMode>(), Ok(SolveMode::SolveB));
        assert_eq!("hypotenuse (C)".parse::<SolveMode>(), Ok(SolveMode::SolveC));
        assert!("d".parse::<SolveMode>().is_err());
    }

    #[test]
    fn test_mode_round_trips_through_unknown() {
        for side in Side::ALL {
            assert_eq!(SolveMode::for_unknown(side).unknown(), side);
        }
    }

    #[test]
    fn test_length_minimum() {
        assert!(Length::new(0.1).is_ok());
        assert_eq!(
            Length::new(0.0),
            Err(LengthError::BelowMinimum {
                value: 0.0,
                min: MIN_LENGTH
            })
        );
        assert!(matches!(
            Length::new(f64::NAN),
            Err(LengthError::NotFinite(_))
        ));
        assert!(Length::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_length_too_large_to_square() {
        assert_eq!(Length::new(1e200), Err(LengthError::TooLarge(1e200)));
        assert!(Length::new(1e150).is_ok());
        assert!(matches!(
            SolveRequest::from_values(SolveMode::SolveA, 1e200, 2e200),
            Err(LengthError::TooLarge(_))
        ));
    }

    #[test]
    fn test_largest_lengths_square_and_sum_finitely() {
        let max = (f64::MAX / 2.0).sqrt() * (1.0 - 1e-12);
        let length = Length::new(max).expect("within range").get();
        assert!((length * length + length * length).is_finite());
    }

    #[test]
    fn test_defaults_are_valid_lengths() {
        for mode in SolveMode::ALL {
            let (first, second) = mode.defaults();
            assert!(SolveRequest::from_values(mode, first, second).is_ok());
            assert_eq!(
                SolveRequest::with_defaults(mode),
                SolveRequest::from_values(mode, first, second).unwrap()
            );
        }
    }

    #[test]
    fn test_triangle_with_side() {
        let t = TriangleSpec::new(1.0, 1.0, 1.0).with_side(Side::C, 2.0);
        assert_eq!(t.side(Side::C), 2.0);
        assert_eq!(t.side(Side::A), 1.0);
    }

    #[test]
    fn test_fallback_is_right_triangle() {
        assert!(TriangleSpec::FALLBACK.is_right(1e-12));
        assert!(!TriangleSpec::new(1.0, 1.0, 1.0).is_right(1e-9));
    }
}

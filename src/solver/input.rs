//! Input resolution: which side is unknown, and are the known sides usable

use tracing::debug;

use super::error::SolveError;
use super::types::{Length, Side, SolveMode, SolveRequest};

/// The two known sides of a solve request, checked against the triangle inequality
///
/// Only produced by [`resolve`], so holding one means the formula for its mode
/// can be applied without further checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownSides {
    mode: SolveMode,
    first: Length,
    second: Length,
}

impl KnownSides {
    pub fn mode(&self) -> SolveMode {
        self.mode
    }

    /// Value of a known side, or `None` for the unknown one
    pub fn get(&self, side: Side) -> Option<f64> {
        let (first_side, second_side) = self.mode.inputs();
        if side == first_side {
            Some(self.first.get())
        } else if side == second_side {
            Some(self.second.get())
        } else {
            None
        }
    }

    /// Known sides as `(side, value)` pairs, in input order
    pub fn entries(&self) -> [(Side, f64); 2] {
        let (first_side, second_side) = self.mode.inputs();
        [(first_side, self.first.get()), (second_side, self.second.get())]
    }

    /// Operands of the mode's formula: `(a, b)` for the hypotenuse, `(c, leg)` otherwise
    pub(crate) fn operands(&self) -> (f64, f64) {
        match self.mode {
            SolveMode::SolveC => (self.first.get(), self.second.get()),
            SolveMode::SolveA | SolveMode::SolveB => (self.second.get(), self.first.get()),
        }
    }
}

/// Collect the known sides for `request`
///
/// For the leg modes the hypotenuse must be strictly longer than the given
/// leg. Solving for the hypotenuse needs no cross-field check.
pub fn resolve(request: &SolveRequest) -> Result<KnownSides, SolveError> {
    let known = KnownSides {
        mode: request.mode,
        first: request.first,
        second: request.second,
    };

    if request.mode != SolveMode::SolveC {
        let (leg, _) = request.mode.inputs();
        let leg_value = request.first.get();
        let hypotenuse = request.second.get();
        if hypotenuse <= leg_value {
            debug!(%leg, leg_value, hypotenuse, "hypotenuse not longer than leg");
            return Err(SolveError::invalid_triangle(leg, leg_value, hypotenuse));
        }
    }

    debug!(mode = %request.mode, ?known, "resolved known sides");
    Ok(known)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(mode: SolveMode, first: f64, second: f64) -> SolveRequest {
        SolveRequest::from_values(mode, first, second).unwrap()
    }

    #[test]
    fn test_resolve_hypotenuse_mode() {
        let known = resolve(&request(SolveMode::SolveC, 3.0, 4.0)).unwrap();
        assert_eq!(known.get(Side::A), Some(3.0));
        assert_eq!(known.get(Side::B), Some(4.0));
        assert_eq!(known.get(Side::C), None);
    }

    #[test]
    fn test_resolve_hypotenuse_mode_accepts_any_positive_pair() {
        assert!(resolve(&request(SolveMode::SolveC, 10.0, 0.1)).is_ok());
    }

    #[test]
    fn test_resolve_leg_a_mode() {
        let known = resolve(&request(SolveMode::SolveA, 4.0, 5.0)).unwrap();
        assert_eq!(known.get(Side::B), Some(4.0));
        assert_eq!(known.get(Side::C), Some(5.0));
        assert_eq!(known.get(Side::A), None);
        assert_eq!(known.operands(), (5.0, 4.0));
    }

    #[test]
    fn test_resolve_rejects_short_hypotenuse() {
        let err = resolve(&request(SolveMode::SolveA, 5.0, 3.0)).unwrap_err();
        assert_eq!(err, SolveError::invalid_triangle(Side::B, 5.0, 3.0));

        let err = resolve(&request(SolveMode::SolveB, 5.0, 3.0)).unwrap_err();
        assert_eq!(err, SolveError::invalid_triangle(Side::A, 5.0, 3.0));
    }

    #[test]
    fn test_resolve_rejects_equal_hypotenuse() {
        assert!(resolve(&request(SolveMode::SolveA, 4.0, 4.0)).is_err());
        assert!(resolve(&request(SolveMode::SolveB, 3.0, 3.0)).is_err());
    }

    #[test]
    fn test_entries_follow_input_order() {
        let known = resolve(&request(SolveMode::SolveB, 3.0, 5.0)).unwrap();
        assert_eq!(known.entries(), [(Side::A, 3.0), (Side::C, 5.0)]);
    }
}

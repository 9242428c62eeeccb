//! Formula evaluation and derivation steps
//!
//! All three modes share one step structure; the differences between them
//! live in a single table ([`Formula::for_mode`]) so the formulas and their
//! derivations cannot drift apart.

use serde::Serialize;
use tracing::debug;

use super::input::KnownSides;
use super::types::{Side, SolveMode, TriangleSpec};

/// How the two squared operands are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    Add,
    Subtract,
}

impl Combine {
    pub fn apply(self, x: f64, y: f64) -> f64 {
        match self {
            Combine::Add => x + y,
            Combine::Subtract => x - y,
        }
    }

    pub fn operator(self) -> &'static str {
        match self {
            Combine::Add => "+",
            Combine::Subtract => "-",
        }
    }
}

/// One row of the formula table: `unknown² = first² (+|-) second²`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Formula {
    pub unknown: Side,
    pub first: Side,
    pub second: Side,
    pub combine: Combine,
}

impl Formula {
    pub const fn for_mode(mode: SolveMode) -> Formula {
        match mode {
            SolveMode::SolveC => Formula {
                unknown: Side::C,
                first: Side::A,
                second: Side::B,
                combine: Combine::Add,
            },
            SolveMode::SolveA => Formula {
                unknown: Side::A,
                first: Side::C,
                second: Side::B,
                combine: Combine::Subtract,
            },
            SolveMode::SolveB => Formula {
                unknown: Side::B,
                first: Side::C,
                second: Side::A,
                combine: Combine::Subtract,
            },
        }
    }

    /// Leg formulas rearrange the theorem before substituting
    pub fn needs_isolation(&self) -> bool {
        self.combine == Combine::Subtract
    }
}

/// What a derivation step shows, with the raw numbers it needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepKind {
    /// State the Pythagorean relation
    Theorem,
    /// Rearrange for the unknown leg's square
    Isolate,
    /// Plug in the known side lengths
    Substitute { first: f64, second: f64 },
    /// Square each known side
    Squares { first: f64, second: f64 },
    /// Add or subtract the squares
    Combine { value: f64 },
    /// Take the square root of both sides
    SquareRoot { radicand: f64 },
    /// The unknown side's length
    Result { value: f64 },
}

/// A numbered step of a derivation, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivationStep {
    pub index: usize,
    #[serde(flatten)]
    pub kind: StepKind,
}

/// The ordered steps that solve one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    pub mode: SolveMode,
    pub formula: Formula,
    pub steps: Vec<DerivationStep>,
}

/// A solved triangle and the derivation that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub triangle: TriangleSpec,
    pub derivation: Derivation,
}

impl Solution {
    /// The computed length of the side that was unknown
    pub fn value(&self) -> f64 {
        self.triangle.side(self.derivation.formula.unknown)
    }
}

/// Compute the unknown side from validated known sides
pub fn solve(known: &KnownSides) -> Solution {
    let mode = known.mode();
    let formula = Formula::for_mode(mode);
    let (first, second) = known.operands();

    let first_sq = first * first;
    let second_sq = second * second;
    let radicand = formula.combine.apply(first_sq, second_sq);
    let value = radicand.sqrt();

    let mut steps = Vec::with_capacity(7);
    let mut push = |kind: StepKind| {
        let index = steps.len() + 1;
        steps.push(DerivationStep { index, kind });
    };
    push(StepKind::Theorem);
    if formula.needs_isolation() {
        push(StepKind::Isolate);
    }
    push(StepKind::Substitute { first, second });
    push(StepKind::Squares {
        first: first_sq,
        second: second_sq,
    });
    push(StepKind::Combine { value: radicand });
    push(StepKind::SquareRoot { radicand });
    push(StepKind::Result { value });

    let triangle = TriangleSpec::new(0.0, 0.0, 0.0)
        .with_side(formula.first, first)
        .with_side(formula.second, second)
        .with_side(formula.unknown, value);

    debug!(%mode, ?triangle, steps = steps.len(), "solved");

    Solution {
        triangle,
        derivation: Derivation {
            mode,
            formula,
            steps,
        },
    }
}

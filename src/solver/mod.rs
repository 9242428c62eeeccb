//! Right-triangle solver
//!
//! Resolution checks the known sides ([`input::resolve`]), then the formula
//! engine computes the unknown side and its derivation ([`formula::solve`]).

pub mod error;
pub mod formula;
pub mod input;
pub mod types;

pub use error::{LengthError, SolveError};
pub use formula::{solve, Combine, Derivation, DerivationStep, Formula, Solution, StepKind};
pub use input::{resolve, KnownSides};
pub use types::*;

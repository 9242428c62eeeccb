//! Markdown rendering of derivation steps
//!
//! Steps carry raw numbers; this module turns them into the numbered
//! explanation shown next to the diagram, with inline `$...$` math.

use std::fmt::Write;

use crate::numfmt::{fixed2, raw};
use crate::solver::{Combine, Derivation, Formula, SolveMode, StepKind};

/// Heading line for a derivation in `mode`
pub fn heading(mode: SolveMode) -> String {
    match mode {
        SolveMode::SolveC => "### Solve for the hypotenuse (c):".to_string(),
        SolveMode::SolveA | SolveMode::SolveB => {
            format!("### Solve for leg ({}):", mode.unknown())
        }
    }
}

/// Text of a single step, without its number
pub fn step_text(formula: &Formula, kind: &StepKind) -> String {
    let x = formula.unknown;
    let p = formula.first;
    let q = formula.second;
    let op = formula.combine.operator();

    match kind {
        StepKind::Theorem => {
            if formula.needs_isolation() {
                "By the Pythagorean theorem: $a^2 + b^2 = c^2$".to_string()
            } else {
                "By the Pythagorean theorem: $c^2 = a^2 + b^2$".to_string()
            }
        }
        StepKind::Isolate => format!("Isolate ${x}^2$: ${x}^2 = {p}^2 {op} {q}^2$"),
        StepKind::Substitute { first, second } => format!(
            "Substitute the known values: ${x}^2 = {}^2 {op} {}^2$",
            raw(*first),
            raw(*second)
        ),
        StepKind::Squares { first, second } => format!(
            "Compute the squares: ${x}^2 = {} {op} {}$",
            raw(*first),
            raw(*second)
        ),
        StepKind::Combine { value } => {
            let verb = match formula.combine {
                Combine::Add => "Add",
                Combine::Subtract => "Subtract",
            };
            format!("{verb}: ${x}^2 = {}$", raw(*value))
        }
        StepKind::SquareRoot { radicand } => format!(
            "Take the square root of both sides: ${x} = \\sqrt{{{}}}$",
            raw(*radicand)
        ),
        StepKind::Result { value } => format!("Result: ${x} = {}$", fixed2(*value)),
    }
}

/// Render a derivation as a Markdown block: heading, then one numbered line per step
pub fn to_markdown(derivation: &Derivation) -> String {
    let mut out = String::new();
    writeln!(out, "{}", heading(derivation.mode)).expect("writing to string cannot fail");
    for step in &derivation.steps {
        writeln!(
            out,
            "{}. {}",
            step.index,
            step_text(&derivation.formula, &step.kind)
        )
        .expect("writing to string cannot fail");
    }
    out
}

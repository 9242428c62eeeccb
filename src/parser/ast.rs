//! Syntax tree for problem statements

use crate::error::ParseError;
use crate::solver::{Length, Side, SolveMode, SolveRequest};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// AST node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Right-hand side of an assignment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SideValue {
    Known(f64),
    /// `?`: the side to solve for
    Unknown,
}

/// `side = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub side: Spanned<Side>,
    pub value: Spanned<SideValue>,
}

/// A parsed problem statement such as `a = 3, b = 4, c = ?`
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub assignments: Vec<Spanned<Assignment>>,
}

impl Problem {
    fn find(&self, side: Side) -> Option<&Spanned<Assignment>> {
        self.assignments.iter().find(|a| a.node.side.node == side)
    }

    /// Check the statement describes exactly one solvable request
    ///
    /// Every problem found is reported, not just the first.
    pub fn to_request(&self) -> Result<SolveRequest, Vec<ParseError>> {
        let mut errors = Vec::new();

        for (i, assignment) in self.assignments.iter().enumerate() {
            let side = assignment.node.side.node;
            let earlier = self.assignments[..i]
                .iter()
                .any(|a| a.node.side.node == side);
            if earlier {
                errors.push(ParseError::invalid(
                    assignment.span.clone(),
                    format!("side '{}' is given more than once", side),
                ));
            }
            if let SideValue::Known(value) = assignment.node.value.node {
                if let Err(e) = Length::new(value) {
                    errors.push(ParseError::invalid(
                        assignment.node.value.span.clone(),
                        e.to_string(),
                    ));
                }
            }
        }

        let unknowns: Vec<_> = self
            .assignments
            .iter()
            .filter(|a| a.node.value.node == SideValue::Unknown)
            .collect();
        let mode = match unknowns.as_slice() {
            [only] => Some(SolveMode::for_unknown(only.node.side.node)),
            [] => {
                errors.push(ParseError::invalid(
                    self.span(),
                    "no side is marked unknown; write e.g. 'c = ?'",
                ));
                None
            }
            [_, rest @ ..] => {
                for extra in rest {
                    errors.push(ParseError::invalid(
                        extra.span.clone(),
                        "only one side can be unknown",
                    ));
                }
                None
            }
        };

        let mut inputs = [None, None];
        if let Some(mode) = mode {
            let (first_side, second_side) = mode.inputs();
            for (slot, side) in inputs.iter_mut().zip([first_side, second_side]) {
                match self.find(side) {
                    Some(assignment) => *slot = known_length(&assignment.node.value.node),
                    None => errors.push(ParseError::invalid(
                        self.span(),
                        format!("missing a value for side '{}'", side),
                    )),
                }
            }
        }

        match (mode, inputs) {
            (Some(mode), [Some(first), Some(second)]) if errors.is_empty() => {
                Ok(SolveRequest::new(mode, first, second))
            }
            _ => Err(errors),
        }
    }

    /// Span covering the whole statement
    pub fn span(&self) -> Span {
        match (self.assignments.first(), self.assignments.last()) {
            (Some(first), Some(last)) => first.span.start..last.span.end,
            _ => 0..0,
        }
    }
}

fn known_length(value: &SideValue) -> Option<Length> {
    match *value {
        SideValue::Known(value) => Length::new(value).ok(),
        SideValue::Unknown => None,
    }
}

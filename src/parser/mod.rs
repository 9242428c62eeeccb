//! Parser for problem statements such as `a = 3, b = 4, c = ?`

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;

use crate::solver::SolveRequest;

/// Parse a problem statement and validate it into a solve request
pub fn parse_request(input: &str) -> Result<SolveRequest, Vec<crate::ParseError>> {
    parse(input)?.to_request()
}

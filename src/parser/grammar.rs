//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::solver::Side;

/// Parse a problem statement into an AST
///
/// Only the shape of the statement is checked here; see
/// [`Problem::to_request`] for the semantic checks.
pub fn parse(input: &str) -> Result<Problem, Vec<crate::ParseError>> {
    let len = input.len();

    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Split (Token, SimpleSpan) into token and span parts
    let token_stream =
        Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    problem_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn problem_parser<'a, I>() -> impl Parser<'a, I, Problem, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let side = select! {
        Token::SideA => Side::A,
        Token::SideB => Side::B,
        Token::SideC => Side::C,
    }
    .map_with(|side, e| Spanned::new(side, span_range(&e.span())));

    let value = choice((
        select! { Token::Number(n) => SideValue::Known(n) },
        just(Token::Question).to(SideValue::Unknown),
    ))
    .map_with(|value, e| Spanned::new(value, span_range(&e.span())));

    let assignment = side
        .then_ignore(just(Token::Equals))
        .then(value)
        .map_with(|(side, value), e| {
            Spanned::new(Assignment { side, value }, span_range(&e.span()))
        });

    assignment
        .then_ignore(just(Token::Comma).or_not())
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
        .map(|assignments| Problem { assignments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_parse_full_problem() {
        let problem = parse("a = 3, b = 4, c = ?").expect("Should parse");
        assert_eq!(problem.assignments.len(), 3);
        let last = &problem.assignments[2].node;
        assert_eq!(last.side.node, Side::C);
        assert_eq!(last.value.node, SideValue::Unknown);
        assert_eq!(problem.assignments[0].node.value.node, SideValue::Known(3.0));
    }

    #[test]
    fn test_parse_spans() {
        let problem = parse("b = 12.5").expect("Should parse");
        let assignment = &problem.assignments[0];
        assert_eq!(assignment.span, 0..8);
        assert_eq!(assignment.node.side.span, 0..1);
        assert_eq!(assignment.node.value.span, 4..8);
    }

    #[test]
    fn test_commas_and_newlines_are_optional() {
        let problem = parse("c = 13\nb = 5\na = ?").expect("Should parse");
        assert_eq!(problem.assignments.len(), 3);
    }

    #[test]
    fn test_empty_input_parses_to_empty_problem() {
        let problem = parse("").expect("Should parse");
        assert!(problem.assignments.is_empty());
    }

    #[test]
    fn test_missing_value_is_syntax_error() {
        let errors = parse("a = , c = ?").expect_err("Should fail");
        assert!(matches!(errors[0], ParseError::Syntax { .. }));
    }

    #[test]
    fn test_unknown_side_name_is_syntax_error() {
        let errors = parse("d = 4").expect_err("Should fail");
        match &errors[0] {
            ParseError::Syntax { message, .. } => assert!(message.contains("'d'")),
            other => panic!("Expected syntax error, got {other:?}"),
        }
    }
}

//! Integration tests for problem statements

use pythagoras_tutor::{
    parse, parse_request, solve_problem, solve_values, ParseError, SolveMode, TutorConfig,
    TutorError,
};

#[test]
fn test_statement_with_comments_and_newlines() {
    let input = r#"
        // classic 5-12-13 triangle
        a = 5
        c = 13
        b = ?
    "#;

    let request = parse_request(input).expect("Should validate");
    assert_eq!(request.mode, SolveMode::SolveB);
    assert_eq!(request.first.get(), 5.0);
    assert_eq!(request.second.get(), 13.0);
}

#[test]
fn test_solve_statement() {
    let report = solve_problem("c = ?, a = 5, b = 12").expect("Should solve");
    assert_eq!(report.triangle.c, 13.0);
    assert!(report.to_markdown().contains("Result: $c = 13.00$"));
}

#[test]
fn test_impossible_statement_is_not_an_error() {
    let report = solve_problem("a = ?, b = 5, c = 3").expect("Should parse");
    assert!(!report.is_solved());
    assert!(report.warning.is_some());
}

#[test]
fn test_syntax_error_is_reported_with_source() {
    let source = "a = 3; b = 4";
    let errors = parse(source).expect_err("Should fail");
    assert!(matches!(errors[0], ParseError::Syntax { .. }));

    let report = errors[0].format(source, "problem");
    assert!(report.contains("a = 3; b = 4"));
}

#[test]
fn test_length_below_minimum() {
    let source = "a = 0.05, b = 4, c = ?";
    let result = solve_problem(source);
    match result {
        Err(TutorError::Parse(errors)) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].span(), &(4..8));
            assert!(errors[0].to_string().contains("0.1"));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_negative_length() {
    let errors = parse_request("a = -3, b = 4, c = ?").expect_err("Should fail");
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], ParseError::Invalid { .. }));
}

#[test]
fn test_lengths_too_large_to_square() {
    // 1e200: squaring it overflows
    let huge = format!("1{}", "0".repeat(200));
    let source = format!("b = {huge}, c = {huge}0, a = ?");
    match solve_problem(&source) {
        Err(TutorError::Parse(errors)) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].span(), &(4..205));
            assert!(errors[0].to_string().contains("too large"));
        }
        other => panic!("Expected parse error, got {other:?}"),
    }

    let result = solve_values(SolveMode::SolveC, 1e200, 1.0, &TutorConfig::default());
    assert!(matches!(result, Err(TutorError::Length(_))));
}

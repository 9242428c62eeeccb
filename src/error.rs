//! Error types for parsing and validating problem statements

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    /// Well-formed statement that does not describe a solvable problem
    #[error("Invalid problem at {span:?}: {message}")]
    Invalid { span: Span, message: String },
}

impl ParseError {
    pub fn invalid(span: Span, message: impl Into<String>) -> Self {
        Self::Invalid {
            span,
            message: message.into(),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } | ParseError::Invalid { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message, note) = match self {
            ParseError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };
                (span, message, format!("{}{}", message, expected_str))
            }
            ParseError::Invalid { span, message } => (span, message, message.clone()),
        };

        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(note)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of input".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                _ => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::SideA => "side 'a'".to_string(),
        Token::SideB => "side 'b'".to_string(),
        Token::SideC => "side 'c'".to_string(),
        Token::Equals => "'='".to_string(),
        Token::Question => "'?'".to_string(),
        Token::Comma => "','".to_string(),
        Token::Ident(s) => format!("name '{}' (sides are a, b and c)", s),
        Token::Number(n) => format!("number {}", n),
        Token::LineComment => "comment".to_string(),
        Token::Error => "character".to_string(),
    }
}

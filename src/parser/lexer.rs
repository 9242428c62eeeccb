//! Lexer for problem statements using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Side names
    #[token("a")]
    SideA,
    #[token("b")]
    SideB,
    #[token("c")]
    SideC,

    #[token("=")]
    Equals,
    #[token("?")]
    Question,
    #[token(",")]
    Comma,

    // Any other word, so misspelt side names get a proper error
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    /// Input the lexer could not recognise
    Error,
}

/// Lex input string into tokens with spans
///
/// Unrecognised input becomes [`Token::Error`] so the parser reports it.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Error), span))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_tokens() {
        let tokens: Vec<_> = lex("a = 3, c = ?").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::SideA,
                Token::Equals,
                Token::Number(3.0),
                Token::Comma,
                Token::SideC,
                Token::Equals,
                Token::Question,
            ]
        );
    }

    #[test]
    fn test_decimal_and_negative_numbers() {
        let tokens: Vec<_> = lex("4.25 -1").map(|(t, _)| t).collect();
        assert_eq!(tokens, vec![Token::Number(4.25), Token::Number(-1.0)]);
    }

    #[test]
    fn test_identifiers_are_not_sides() {
        let tokens: Vec<_> = lex("ab d").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![Token::Ident("ab".to_string()), Token::Ident("d".to_string())]
        );
    }

    #[test]
    fn test_comments_skipped() {
        let tokens: Vec<_> = lex("b = 4 // leg\nc = ?").map(|(t, _)| t).collect();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[3], Token::SideC);
    }

    #[test]
    fn test_unknown_characters_become_errors() {
        let tokens: Vec<(Token, Span)> = lex("a = $").collect();
        assert_eq!(tokens[2], (Token::Error, 4..5));
    }
}

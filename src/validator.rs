//! Structural pre-pass over the token stream.
//!
//! Runs before tree construction and checks token adjacency rules: what
//! may open a document, where commas and colons may sit, and that every
//! container is closed by the matching closer. It is a shallow check by
//! design; the parser still enforces the attachment rules while building
//! the tree.

use crate::ast::Token;

/// Reasons a token stream can fail validation. The first violation wins;
/// there is no partial-error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Document does not start with `{` or `[`
    UnexpectedFirstToken,

    /// A closer without a matching opener, a cross-matched `{...]` pair,
    /// or an unclosed container at end of input
    UnbalancedContainers,

    /// A comma with no value on one side of it: trailing before `}`/`]`,
    /// leading after `{`/`[`, doubled, or directly after a colon
    MisplacedComma,

    /// A colon not preceded by a member name
    MisplacedColon,

    /// `{` followed by something other than a member name or `}`
    InvalidObjectKey,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnexpectedFirstToken => {
                write!(f, "expected '{{' or '[' as first token")
            }
            ValidationError::UnbalancedContainers => {
                write!(f, "unbalanced or mismatched braces/brackets")
            }
            ValidationError::MisplacedComma => write!(f, "misplaced ',' in json data"),
            ValidationError::MisplacedColon => write!(f, "expected string before ':'"),
            ValidationError::InvalidObjectKey => {
                write!(f, "expected string or '}}' after '{{'")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    Brace,
    Bracket,
}

/// Validate a token stream against the structural rules.
///
/// Containers are tracked with a single stack of expected closers, so
/// cross-matched pairs like `{"a":[1}]` fail here. (The historical
/// behavior was two independent counters that let those through.)
pub fn validate(tokens: &[Token]) -> Result<(), ValidationError> {
    match tokens.first() {
        Some(Token::ObjectBegin) | Some(Token::ArrayBegin) => {}
        _ => return Err(ValidationError::UnexpectedFirstToken),
    }

    let mut closers: Vec<Closer> = Vec::new();

    for (i, curr) in tokens.iter().enumerate() {
        let prev = if i > 0 { tokens.get(i - 1) } else { None };
        let next = tokens.get(i + 1);

        match curr {
            Token::ObjectBegin => {
                match next {
                    Some(Token::String(_)) | Some(Token::ObjectEnd) => {}
                    _ => return Err(ValidationError::InvalidObjectKey),
                }
                closers.push(Closer::Brace);
            }

            Token::ArrayBegin => {
                closers.push(Closer::Bracket);
            }

            Token::ObjectEnd => {
                if matches!(prev, Some(Token::Comma)) {
                    return Err(ValidationError::MisplacedComma);
                }
                if closers.pop() != Some(Closer::Brace) {
                    return Err(ValidationError::UnbalancedContainers);
                }
            }

            Token::ArrayEnd => {
                if matches!(prev, Some(Token::Comma)) {
                    return Err(ValidationError::MisplacedComma);
                }
                if closers.pop() != Some(Closer::Bracket) {
                    return Err(ValidationError::UnbalancedContainers);
                }
            }

            Token::Comma => {
                // A comma separates two values; directly after an opener
                // or another comma there is nothing on its left.
                if matches!(
                    prev,
                    None | Some(Token::ObjectBegin) | Some(Token::ArrayBegin) | Some(Token::Comma)
                ) {
                    return Err(ValidationError::MisplacedComma);
                }
            }

            Token::Colon => {
                if !matches!(prev, Some(Token::String(_))) {
                    return Err(ValidationError::MisplacedColon);
                }
                if matches!(next, Some(Token::Comma)) {
                    return Err(ValidationError::MisplacedComma);
                }
            }

            _ => {}
        }
    }

    if !closers.is_empty() {
        return Err(ValidationError::UnbalancedContainers);
    }

    Ok(())
}

#[test]
fn test_cross_matched_pair_rejected() {
    let tokens = crate::lexer::tokenize("{\"a\":[1}]").unwrap();
    assert_eq!(
        validate(&tokens),
        Err(ValidationError::UnbalancedContainers)
    );
}

pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod query;
pub mod validator;

pub use ast::{Kind, NodeId, Token, TokenList, Tree, Value, ValueRef};
pub use lexer::{LexError, Lexer, Position};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};
pub use query::{QueryError, query};
pub use validator::{ValidationError, validate};

/// Any failure of the full parse pipeline: lexing, validation, or tree
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Lex(LexError),
    Validation(ValidationError),
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "Lex error: {}", e),
            Error::Validation(e) => write!(f, "Invalid JSON: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Validation(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Error::Lex(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

/// Parse JSON text into a [`Tree`]: tokenize, validate the token stream,
/// then build the tree.
///
/// On any failure everything built so far is dropped; a partial tree is
/// never returned.
///
/// # Examples
///
/// ```
/// use jacq::parse_json;
///
/// let tree = parse_json(r#"{"arr": [{"msg": "hi"}], "status": 200}"#).unwrap();
/// let msg = tree.query("arr.[0].msg").unwrap().unwrap();
/// assert_eq!(msg.as_str(), Some("hi"));
/// ```
pub fn parse_json(text: &str) -> Result<Tree, Error> {
    let tokens = lexer::tokenize(text)?;
    validator::validate(&tokens)?;
    let tree = parser::parse(tokens)?;
    Ok(tree)
}

use crate::ast::{Token, TokenList};

/// Line/column location of a lexer event, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors detected while scanning raw JSON text.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that cannot start any JSON token
    UnexpectedCharacter(char, Position),

    /// Input ended inside a string literal
    UnterminatedString(Position),

    /// A literal that does not match `null`, `true` or `false` exactly
    InvalidLiteral(Position),

    /// A backslash escape outside the recognized set
    InvalidEscape(char, Position),

    /// A number with a misplaced or dangling decimal point
    MalformedNumber(Position),

    /// A number too large for an i64, or a real that is not finite
    NumberOverflow(Position),
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::UnexpectedCharacter(ch, pos) => {
                write!(f, "unexpected character '{}' at {}", ch, pos)
            }
            LexError::UnterminatedString(pos) => {
                write!(f, "unterminated string starting at {}", pos)
            }
            LexError::InvalidLiteral(pos) => {
                write!(f, "invalid literal at {} (expected null, true or false)", pos)
            }
            LexError::InvalidEscape(ch, pos) => {
                write!(f, "invalid escape sequence '\\{}' at {}", ch, pos)
            }
            LexError::MalformedNumber(pos) => write!(f, "malformed number at {}", pos),
            LexError::NumberOverflow(pos) => write!(f, "number out of range at {}", pos),
        }
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        if self.current_char() == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.position += 1;
    }

    fn pos(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let start = self.pos();
        let mut result = String::new();
        self.advance(); // consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    let escape_pos = self.pos();
                    self.advance(); // consume backslash
                    match self.current_char() {
                        Some('"') => result.push('"'),
                        Some('\\') => result.push('\\'),
                        Some('/') => result.push('/'),
                        Some('b') => result.push('\u{0008}'),
                        Some('n') => result.push('\n'),
                        Some('r') => result.push('\r'),
                        Some('t') => result.push('\t'),
                        Some('f') => result.push('\u{000C}'),
                        Some(ch) => return Err(LexError::InvalidEscape(ch, escape_pos)),
                        None => return Err(LexError::UnterminatedString(start)),
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString(start))
    }

    /// Exact match against `null`, `true` or `false`.
    fn read_literal(&mut self, word: &str, token: Token) -> Result<Token, LexError> {
        let start = self.pos();
        for expected in word.chars() {
            if self.current_char() != Some(expected) {
                return Err(LexError::InvalidLiteral(start));
            }
            self.advance();
        }
        Ok(token)
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos();
        let mut number = String::new();
        let mut is_real = false;

        match self.current_char() {
            Some('-') => {
                number.push('-');
                self.advance();
            }
            Some('+') => {
                self.advance();
            }
            _ => {}
        }

        if !self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            return Err(LexError::MalformedNumber(start));
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' {
                if is_real || !self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    return Err(LexError::MalformedNumber(start));
                }
                is_real = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if is_real {
            let n = number
                .parse::<f64>()
                .map_err(|_| LexError::MalformedNumber(start))?;
            if !n.is_finite() {
                return Err(LexError::NumberOverflow(start));
            }
            Ok(Token::Real(n))
        } else {
            number
                .parse::<i64>()
                .map(Token::Integer)
                .map_err(|_| LexError::NumberOverflow(start))
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        match self.current_char() {
            None => Ok(Token::Eof),
            Some('{') => {
                self.advance();
                Ok(Token::ObjectBegin)
            }
            Some('}') => {
                self.advance();
                Ok(Token::ObjectEnd)
            }
            Some('[') => {
                self.advance();
                Ok(Token::ArrayBegin)
            }
            Some(']') => {
                self.advance();
                Ok(Token::ArrayEnd)
            }
            Some(':') => {
                self.advance();
                Ok(Token::Colon)
            }
            Some(',') => {
                self.advance();
                Ok(Token::Comma)
            }
            Some('"') => self.read_string().map(Token::String),
            Some('n') => self.read_literal("null", Token::Null),
            Some('t') => self.read_literal("true", Token::Bool(true)),
            Some('f') => self.read_literal("false", Token::Bool(false)),
            Some(ch) if ch == '+' || ch == '-' || ch.is_ascii_digit() => self.read_number(),
            Some(ch) => Err(LexError::UnexpectedCharacter(ch, self.pos())),
        }
    }
}

/// Scan a whole document into a token list.
///
/// On any lexer error all tokens produced so far are dropped; nothing
/// partial escapes.
pub fn tokenize(input: &str) -> Result<TokenList, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = TokenList::new();

    loop {
        match lexer.next_token()? {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }

    Ok(tokens)
}

#[test]
fn test_scalars() {
    let mut lexer = Lexer::new("null true false 42 -90 224.123");
    assert_eq!(lexer.next_token(), Ok(Token::Null));
    assert_eq!(lexer.next_token(), Ok(Token::Bool(true)));
    assert_eq!(lexer.next_token(), Ok(Token::Bool(false)));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(42)));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(-90)));
    assert_eq!(lexer.next_token(), Ok(Token::Real(224.123)));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_structural() {
    let mut lexer = Lexer::new("{ \"a\" : [ 1 , 2 ] }");
    assert_eq!(lexer.next_token(), Ok(Token::ObjectBegin));
    assert_eq!(lexer.next_token(), Ok(Token::String("a".to_string())));
    assert_eq!(lexer.next_token(), Ok(Token::Colon));
    assert_eq!(lexer.next_token(), Ok(Token::ArrayBegin));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(1)));
    assert_eq!(lexer.next_token(), Ok(Token::Comma));
    assert_eq!(lexer.next_token(), Ok(Token::Integer(2)));
    assert_eq!(lexer.next_token(), Ok(Token::ArrayEnd));
    assert_eq!(lexer.next_token(), Ok(Token::ObjectEnd));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

/// A lexical token produced by scanning raw JSON text.
///
/// Structural tokens carry no payload; literal tokens own their decoded
/// value. String payloads are moved into the tree by the parser rather
/// than copied, so a `TokenList` is consumed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `{`, opens a JSON object
    ObjectBegin,

    /// `}`, closes the innermost open object
    ObjectEnd,

    /// `[`, opens a JSON array
    ArrayBegin,

    /// `]`, closes the innermost open array
    ArrayEnd,

    /// `:`, separates a member name from its value
    Colon,

    /// `,`, separates members or elements
    Comma,

    /// String literal with escape sequences already decoded
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// "line\nbreak"
    /// ```
    String(String),

    /// Integer number (no decimal point seen)
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -90
    /// ```
    Integer(i64),

    /// Floating-point number (decimal point seen)
    ///
    /// # Examples
    /// ```text
    /// 224.123
    /// -0.5
    /// ```
    Real(f64),

    /// `true` or `false`
    Bool(bool),

    /// `null`
    Null,

    /// End of input
    ///
    /// Only produced by the streaming [`next_token`](crate::lexer::Lexer::next_token)
    /// API; never stored in a [`TokenList`].
    Eof,
}

/// An ordered token stream, as handed from the lexer to the validator and
/// parser. Source order is preserved.
pub type TokenList = Vec<Token>;

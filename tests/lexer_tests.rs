// tests/lexer_tests.rs

use jacq::ast::Token;
use jacq::lexer::{tokenize, LexError, Lexer, Position};

fn pos(line: usize, column: usize) -> Position {
    Position { line, column }
}

// ============================================================================
// Structural Tokens
// ============================================================================

#[test]
fn test_structural_tokens() {
    let test_cases = vec![
        ("{", Token::ObjectBegin),
        ("}", Token::ObjectEnd),
        ("[", Token::ArrayBegin),
        ("]", Token::ArrayEnd),
        (":", Token::Colon),
        (",", Token::Comma),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_whitespace_is_skipped() {
    let mut lexer = Lexer::new(" \t\r\n  {  \n }");
    assert_eq!(lexer.next_token().unwrap(), Token::ObjectBegin);
    assert_eq!(lexer.next_token().unwrap(), Token::ObjectEnd);
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

// ============================================================================
// Strings and Escapes
// ============================================================================

#[test]
fn test_plain_string() {
    let mut lexer = Lexer::new(r#""hello world""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::String("hello world".to_string())
    );
}

#[test]
fn test_empty_string() {
    let mut lexer = Lexer::new(r#""""#);
    assert_eq!(lexer.next_token().unwrap(), Token::String(String::new()));
}

#[test]
fn test_recognized_escapes() {
    let test_cases = vec![
        (r#""\"""#, "\""),
        (r#""\\""#, "\\"),
        (r#""\/""#, "/"),
        (r#""\b""#, "\u{0008}"),
        (r#""\n""#, "\n"),
        (r#""\r""#, "\r"),
        (r#""\t""#, "\t"),
        (r#""\f""#, "\u{000C}"),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::String(expected.to_string()),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_escapes_embedded_in_text() {
    let mut lexer = Lexer::new(r#""line one\nline two""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::String("line one\nline two".to_string())
    );
}

#[test]
fn test_invalid_escape() {
    let mut lexer = Lexer::new(r#""a\x""#);
    assert_eq!(
        lexer.next_token(),
        Err(LexError::InvalidEscape('x', pos(1, 3)))
    );
}

#[test]
fn test_unicode_escape_is_not_recognized() {
    let mut lexer = Lexer::new("\"\\u0041\"");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::InvalidEscape('u', pos(1, 2)))
    );
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new(r#""no closing quote"#);
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnterminatedString(pos(1, 1)))
    );
}

#[test]
fn test_unterminated_string_after_backslash() {
    let mut lexer = Lexer::new(r#""ends with \"#);
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnterminatedString(pos(1, 1)))
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_keyword_literals() {
    let mut lexer = Lexer::new("null true false");
    assert_eq!(lexer.next_token().unwrap(), Token::Null);
    assert_eq!(lexer.next_token().unwrap(), Token::Bool(true));
    assert_eq!(lexer.next_token().unwrap(), Token::Bool(false));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_misspelled_literals() {
    for input in ["nul", "nill", "ture", "tru", "fals", "folse"] {
        let mut lexer = Lexer::new(input);
        assert!(
            matches!(lexer.next_token(), Err(LexError::InvalidLiteral(_))),
            "Expected InvalidLiteral for input: {}",
            input
        );
    }
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_integers() {
    let test_cases = vec![
        ("0", 0),
        ("42", 42),
        ("-90", -90),
        ("+17", 17),
        ("9007199254740993", 9007199254740993),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Integer(expected),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_reals() {
    let test_cases = vec![
        ("224.123", 224.123),
        ("-0.5", -0.5),
        ("3.0", 3.0),
        ("+1.25", 1.25),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Real(expected),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_malformed_numbers() {
    for input in ["1.", "1.2.3", "-", "+", "-.5"] {
        let mut lexer = Lexer::new(input);
        assert!(
            matches!(lexer.next_token(), Err(LexError::MalformedNumber(_))),
            "Expected MalformedNumber for input: {}",
            input
        );
    }
}

#[test]
fn test_integer_overflow() {
    let mut lexer = Lexer::new("99999999999999999999");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::NumberOverflow(pos(1, 1)))
    );
}

// ============================================================================
// Error Positions
// ============================================================================

#[test]
fn test_unexpected_character_with_position() {
    let mut lexer = Lexer::new("  @");
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter('@', pos(1, 3)))
    );
}

#[test]
fn test_position_tracks_lines() {
    let mut lexer = Lexer::new("[\n  #");
    assert_eq!(lexer.next_token().unwrap(), Token::ArrayBegin);
    assert_eq!(
        lexer.next_token(),
        Err(LexError::UnexpectedCharacter('#', pos(2, 3)))
    );
}

// ============================================================================
// Whole-Document Tokenize
// ============================================================================

#[test]
fn test_tokenize_document() {
    let tokens =
        tokenize(r#"{ "msg": "Hello World!", "status": 200, "ok": true, "pi": 3.14 }"#).unwrap();

    assert_eq!(
        tokens,
        vec![
            Token::ObjectBegin,
            Token::String("msg".to_string()),
            Token::Colon,
            Token::String("Hello World!".to_string()),
            Token::Comma,
            Token::String("status".to_string()),
            Token::Colon,
            Token::Integer(200),
            Token::Comma,
            Token::String("ok".to_string()),
            Token::Colon,
            Token::Bool(true),
            Token::Comma,
            Token::String("pi".to_string()),
            Token::Colon,
            Token::Real(3.14),
            Token::ObjectEnd,
        ]
    );
}

#[test]
fn test_tokenize_empty_input() {
    assert_eq!(tokenize("").unwrap(), Vec::<Token>::new());
    assert_eq!(tokenize("   \n\t ").unwrap(), Vec::<Token>::new());
}

#[test]
fn test_tokenize_fails_on_first_error() {
    // `ture` starts like a literal and goes wrong inside it.
    let result = tokenize(r#"{ "a": 1, "b": ture }"#);
    assert!(matches!(result, Err(LexError::InvalidLiteral(_))));

    // `bogus` never enters literal scanning at all.
    let result = tokenize(r#"{ "a": 1, "b": bogus }"#);
    assert!(matches!(
        result,
        Err(LexError::UnexpectedCharacter('b', _))
    ));
}

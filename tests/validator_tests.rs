// tests/validator_tests.rs

use jacq::lexer::tokenize;
use jacq::validator::{validate, ValidationError};

fn check(input: &str) -> Result<(), ValidationError> {
    validate(&tokenize(input).unwrap())
}

// ============================================================================
// Accepted Streams
// ============================================================================

#[test]
fn test_valid_documents() {
    let inputs = vec![
        "{}",
        "[]",
        r#"{"a": 1}"#,
        r#"{"a": 1, "b": [true, null]}"#,
        r#"[1, 2, 3]"#,
        r#"[{"x": "y"}, []]"#,
        r#"{"nested": {"deeper": {"deepest": []}}}"#,
    ];

    for input in inputs {
        assert_eq!(check(input), Ok(()), "Should accept: {}", input);
    }
}

// ============================================================================
// First Token
// ============================================================================

#[test]
fn test_document_must_open_with_container() {
    for input in ["1", r#""bare string""#, "true", "null", "3.14", ""] {
        assert_eq!(
            check(input),
            Err(ValidationError::UnexpectedFirstToken),
            "Should reject: {}",
            input
        );
    }
}

// ============================================================================
// Comma Placement
// ============================================================================

#[test]
fn test_trailing_comma_rejected() {
    for input in ["[1,]", r#"{"a": 1,}"#, "[[],]"] {
        assert_eq!(
            check(input),
            Err(ValidationError::MisplacedComma),
            "Should reject: {}",
            input
        );
    }
}

#[test]
fn test_leading_and_doubled_commas_rejected() {
    for input in ["[,1]", "[1,,2]"] {
        assert_eq!(
            check(input),
            Err(ValidationError::MisplacedComma),
            "Should reject: {}",
            input
        );
    }
}

#[test]
fn test_comma_directly_after_colon_rejected() {
    assert_eq!(
        check(r#"{"a":,1}"#),
        Err(ValidationError::MisplacedComma)
    );
}

// ============================================================================
// Colon Placement
// ============================================================================

#[test]
fn test_colon_must_follow_string() {
    for input in ["[1:2]", r#"{"a"::1}"#] {
        assert_eq!(
            check(input),
            Err(ValidationError::MisplacedColon),
            "Should reject: {}",
            input
        );
    }
}

// ============================================================================
// Object Keys
// ============================================================================

#[test]
fn test_object_must_open_with_name_or_close() {
    for input in ["{1: 2}", "{true}", "{[]}", "{:1}"] {
        assert_eq!(
            check(input),
            Err(ValidationError::InvalidObjectKey),
            "Should reject: {}",
            input
        );
    }
}

#[test]
fn test_empty_object_allowed() {
    assert_eq!(check("{}"), Ok(()));
}

// ============================================================================
// Container Balance
// ============================================================================

#[test]
fn test_unclosed_containers_rejected() {
    for input in ["[", "[[1]", r#"{"a": 1"#] {
        assert_eq!(
            check(input),
            Err(ValidationError::UnbalancedContainers),
            "Should reject: {}",
            input
        );
    }
}

#[test]
fn test_extra_closers_rejected() {
    for input in ["[]]", "{}}"] {
        assert_eq!(
            check(input),
            Err(ValidationError::UnbalancedContainers),
            "Should reject: {}",
            input
        );
    }
}

#[test]
fn test_cross_matched_containers_rejected() {
    // The closer stack catches pairs that independent counters miss.
    for input in [r#"{"a": [1}]"#, r#"[{"a": 1]}"#] {
        assert_eq!(
            check(input),
            Err(ValidationError::UnbalancedContainers),
            "Should reject: {}",
            input
        );
    }
}

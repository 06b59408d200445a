// tests/query_tests.rs

use jacq::query::QueryError;
use jacq::{parse_json, Tree};

fn sample() -> Tree {
    parse_json(r#"{"arr": [{"msg": "hi"}], "status": 200}"#).unwrap()
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn test_name_step() {
    let tree = sample();
    let status = tree.query("status").unwrap().unwrap();
    assert_eq!(status.as_int(), Some(200));
}

#[test]
fn test_mixed_name_and_index_steps() {
    let tree = sample();
    let msg = tree.query("arr.[0].msg").unwrap().unwrap();
    assert_eq!(msg.as_str(), Some("hi"));
}

#[test]
fn test_step_resolving_to_container() {
    let tree = sample();
    let arr = tree.query("arr").unwrap().unwrap();
    assert_eq!(arr.len(), Some(1));

    let obj = tree.query("arr.[0]").unwrap().unwrap();
    assert_eq!(obj.get("msg").unwrap().as_str(), Some("hi"));
}

#[test]
fn test_root_array_document() {
    let tree = parse_json(r#"[10, [20, 30]]"#).unwrap();
    assert_eq!(tree.query("[0]").unwrap().unwrap().as_int(), Some(10));
    assert_eq!(tree.query("[1].[1]").unwrap().unwrap().as_int(), Some(30));
}

#[test]
fn test_deep_path() {
    let tree = parse_json(r#"{"a": {"b": {"c": [null, {"d": true}]}}}"#).unwrap();
    let d = tree.query("a.b.c.[1].d").unwrap().unwrap();
    assert_eq!(d.as_bool(), Some(true));
}

// ============================================================================
// Not Found
// ============================================================================

#[test]
fn test_missing_name_is_not_found() {
    let tree = sample();
    assert!(tree.query("missing").unwrap().is_none());
}

#[test]
fn test_index_out_of_range_is_not_found() {
    let tree = sample();
    assert!(tree.query("arr.[5]").unwrap().is_none());
}

#[test]
fn test_index_step_on_object_is_not_found() {
    let tree = sample();
    assert!(tree.query("[0]").unwrap().is_none());
}

#[test]
fn test_scalar_dead_end_is_not_found() {
    // "status" resolves to an integer; it cannot scope a further step.
    let tree = sample();
    assert!(tree.query("status.anything").unwrap().is_none());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_path() {
    let tree = sample();
    assert_eq!(tree.query("").unwrap_err(), QueryError::EmptyPath);
    assert_eq!(tree.query("...").unwrap_err(), QueryError::EmptyPath);
}

#[test]
fn test_name_step_on_array_is_type_mismatch() {
    let tree = sample();
    assert_eq!(
        tree.query("arr.msg").unwrap_err(),
        QueryError::TypeMismatch
    );
}

#[test]
fn test_malformed_index_steps() {
    let tree = sample();
    for path in ["arr.[x]", "arr.[]", "arr.[1", "arr.[-1]", "arr.[1.5]"] {
        assert_eq!(
            tree.query(path).unwrap_err(),
            QueryError::MalformedIndexStep,
            "Expected MalformedIndexStep for path: {}",
            path
        );
    }
}

// ============================================================================
// Path Quirks
// ============================================================================

#[test]
fn test_empty_segments_are_skipped() {
    let tree = sample();
    let msg = tree.query("arr..[0]..msg").unwrap().unwrap();
    assert_eq!(msg.as_str(), Some("hi"));

    let status = tree.query(".status.").unwrap().unwrap();
    assert_eq!(status.as_int(), Some(200));
}

#[test]
fn test_duplicate_keys_query_first_occurrence() {
    let tree = parse_json(r#"{"a": 1, "a": 2}"#).unwrap();
    assert_eq!(tree.query("a").unwrap().unwrap().as_int(), Some(1));
}

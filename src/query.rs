//! Dotted-path queries against a parsed tree.
//!
//! A path is a `.`-separated list of steps. A plain step is a member name
//! looked up in an object; a `[n]` step is an index into an array:
//!
//! ```text
//! servers.[2].host
//! status
//! ```
//!
//! Resolution failures (missing name, index out of range, dead end at a
//! scalar) are "not found" and come back as `Ok(None)`; only a malformed
//! path or a name step against an array is an error.

use crate::ast::{Tree, Value, ValueRef};

/// Errors for malformed or type-incompatible query paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// Path contains no steps
    EmptyPath,

    /// A `[...]` step whose body is not a bare non-negative integer
    MalformedIndexStep,

    /// A name step applied to an array scope
    TypeMismatch,
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::EmptyPath => write!(f, "query path is empty"),
            QueryError::MalformedIndexStep => {
                write!(f, "index step must be a bracketed non-negative integer")
            }
            QueryError::TypeMismatch => {
                write!(f, "cannot query an array with a name step")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// One segment of a query path. Scoped to a single query call.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step<'a> {
    /// Member name for object scopes
    Name(&'a str),

    /// `[n]` element index for array scopes
    Index(usize),
}

/// Split a path on `.` and classify each step. Empty segments (leading,
/// trailing, or doubled dots) are skipped.
fn tokenize_path(path: &str) -> Result<Vec<Step<'_>>, QueryError> {
    let mut steps = Vec::new();

    for segment in path.split('.').filter(|s| !s.is_empty()) {
        if let Some(rest) = segment.strip_prefix('[') {
            let digits = rest
                .strip_suffix(']')
                .ok_or(QueryError::MalformedIndexStep)?;
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(QueryError::MalformedIndexStep);
            }
            let index = digits
                .parse::<usize>()
                .map_err(|_| QueryError::MalformedIndexStep)?;
            steps.push(Step::Index(index));
        } else {
            steps.push(Step::Name(segment));
        }
    }

    if steps.is_empty() {
        return Err(QueryError::EmptyPath);
    }

    Ok(steps)
}

/// Resolve one step against a container scope. `None` is "not found":
/// a missing name, an out-of-range index, or an index step against an
/// object.
fn resolve<'a>(scope: ValueRef<'a>, step: Step<'_>) -> Option<ValueRef<'a>> {
    match (scope.value(), step) {
        (Value::Array(_), Step::Index(i)) => scope.index(i),
        (Value::Object(_), Step::Name(name)) => scope.get(name),
        _ => None,
    }
}

/// Walk the tree from the root following each step of `path`.
///
/// Returns `Ok(None)` when any step fails to resolve. A resolved scalar is
/// only valid as the final step's result; reaching one earlier is a dead
/// end and also `Ok(None)`.
pub fn query<'a>(tree: &'a Tree, path: &str) -> Result<Option<ValueRef<'a>>, QueryError> {
    let steps = tokenize_path(path)?;
    let last = steps.len() - 1;
    let mut scope = tree.root();

    for (i, step) in steps.into_iter().enumerate() {
        if matches!(scope.value(), Value::Array(_)) && matches!(step, Step::Name(_)) {
            return Err(QueryError::TypeMismatch);
        }

        let result = match resolve(scope, step) {
            Some(v) => v,
            None => return Ok(None),
        };

        if i == last {
            return Ok(Some(result));
        }

        if result.value().is_container() {
            scope = result;
        } else {
            return Ok(None);
        }
    }

    unreachable!("steps is never empty")
}

impl Tree {
    /// Convenience for [`query`] starting at this tree's root.
    pub fn query(&self, path: &str) -> Result<Option<ValueRef<'_>>, QueryError> {
        query(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_steps() {
        assert_eq!(
            tokenize_path("arr.[0].msg"),
            Ok(vec![Step::Name("arr"), Step::Index(0), Step::Name("msg")])
        );
    }

    #[test]
    fn test_malformed_index_steps() {
        for path in ["[", "[]", "[x]", "[1x]", "[1", "a.[-1]"] {
            assert_eq!(tokenize_path(path), Err(QueryError::MalformedIndexStep));
        }
    }

    #[test]
    fn test_empty_paths() {
        assert_eq!(tokenize_path("").unwrap_err(), QueryError::EmptyPath);
        assert_eq!(tokenize_path("...").unwrap_err(), QueryError::EmptyPath);
    }
}

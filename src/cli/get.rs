//! Execute path queries against JSON input

use super::CliError;
use crate::output;
use crate::parse_json;

/// Options for the get command
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// Dotted query path, e.g. `servers.[0].host`
    pub path: String,
    /// JSON input text
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Result of a check (parse-only) operation
#[derive(Debug)]
pub struct CheckReport {
    /// Containers opened while parsing
    pub depth: u64,
}

/// Parse the input, resolve a query path against it, and serialize the
/// resolved value.
///
/// Output goes through the crate's own serializer, so object member order
/// and duplicate keys come out exactly as the document had them.
pub fn execute_get(options: &GetOptions) -> Result<String, CliError> {
    let text = options.input.as_ref().ok_or(CliError::NoInput)?;

    let tree = parse_json(text)?;
    let value = tree
        .query(&options.path)?
        .ok_or_else(|| CliError::NotFound(options.path.clone()))?;

    Ok(if options.pretty {
        output::to_json_pretty(&value)
    } else {
        output::to_json(&value)
    })
}

/// Parse the input without querying, reporting the tree depth.
pub fn execute_check(input: Option<&str>) -> Result<CheckReport, CliError> {
    let text = input.ok_or(CliError::NoInput)?;
    let tree = parse_json(text)?;
    Ok(CheckReport { depth: tree.depth() })
}

//! CLI support for jacq
//!
//! Provides programmatic access to the jacq CLI commands for embedding in
//! other tools. The binary in `main.rs` is a thin wrapper over this.

mod get;

pub use get::{execute_check, execute_get, CheckReport, GetOptions};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// JSON parsing error (lexer, validator, or parser)
    Parse(crate::Error),
    /// Malformed query path
    Query(crate::QueryError),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Query path resolved to nothing
    NotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "{}", e),
            CliError::Query(e) => write!(f, "Query error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
            CliError::NotFound(path) => write!(f, "Path '{}' not found in document", path),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Query(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::QueryError> for CliError {
    fn from(e: crate::QueryError) -> Self {
        CliError::Query(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

//! # jacq - tokens and the parsed tree
//!
//! Data types shared by the pipeline stages:
//!
//! - **[tokens]** - lexical tokens produced by the lexer and consumed by
//!   the validator and parser
//! - **[tree]** - the arena-backed JSON tree the parser builds and the
//!   query engine walks
//!
//! The pipeline itself lives in [`lexer`](crate::lexer),
//! [`validator`](crate::validator), [`parser`](crate::parser) and
//! [`query`](crate::query).

pub mod tokens;
pub mod tree;

pub use tokens::{Token, TokenList};
pub use tree::{ArrayBody, Kind, Node, NodeId, ObjectBody, Tree, Value, ValueRef};

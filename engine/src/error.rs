//! FILENAME: engine/src/error.rs

use expr_parser::ParseError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A node whose flattened children do not fit its fold rule.
    /// Only reachable for trees not built by the parser (e.g. deserialized ones).
    #[error("Incomplete subtree under {node}: found {found} item(s)")]
    IncompleteSubtree { node: String, found: usize },

    #[error("Division by zero")]
    DivisionByZero,
}

pub type EngineResult<T> = Result<T, EngineError>;

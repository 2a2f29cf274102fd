//! Error types for parsing, indexing, and inlining programs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IrError {
    #[error("parse error: {0}")]
    Parse(String),

    /// A qubit identifier was not found in the qubit index: a bad offset,
    /// an undeclared register, or a formal referenced outside its gate.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("inlining error: {0}")]
    Inline(String),
}

pub type Result<T> = std::result::Result<T, IrError>;

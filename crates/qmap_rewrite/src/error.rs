//! Error types for solution implementation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error(transparent)]
    Ir(#[from] qmap_ir::IrError),

    /// The implementer visited a two-qubit statement that does not match
    /// the next expected dependency's source statement — the AST was
    /// mutated out from under the solution between allocation and
    /// implementation.
    #[error("solution mismatch at statement {stmt_idx}: expected dependency {expected_dep_idx}")]
    SolutionMismatch {
        stmt_idx: usize,
        expected_dep_idx: usize,
    },
}

pub type Result<T> = std::result::Result<T, RewriteError>;

//! Error types for architecture graph construction and queries.

use thiserror::Error;

/// Errors raised while building or querying an [`crate::ArchGraph`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArchError {
    /// The architecture description failed to parse (non-integer counts,
    /// malformed lines).
    #[error("architecture description malformed: {0}")]
    Malformed(String),

    /// An edge or register referenced a qubit index outside `[0, size)`.
    #[error("architecture description malformed: qubit index {0} out of range [0, {1})")]
    OutOfRange(usize, usize),

    /// The same directed edge was declared twice.
    #[error("architecture description malformed: duplicate edge {0}->{1}")]
    DuplicateEdge(usize, usize),

    /// Register declarations' sizes do not sum to the declared qubit count.
    #[error("architecture description malformed: registers sum to {0}, expected {1}")]
    RegisterSizeMismatch(usize, usize),

    /// A named device was requested that isn't in the built-in table.
    #[error("unknown architecture device '{0}'")]
    UnknownDevice(String),
}

pub type Result<T> = std::result::Result<T, ArchError>;

//! Error types for dependency extraction and allocation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    #[error(transparent)]
    Ir(#[from] qmap_ir::IrError),

    #[error(transparent)]
    Arch(#[from] qmap_arch::ArchError),

    /// The strategy exceeded the per-dependency swap bound, or no
    /// remediation could satisfy the edge precondition for dependency
    /// `dep_idx`.
    #[error("allocator could not satisfy dependency {dep_idx} within a bound of {bound} swaps")]
    AllocatorInfeasible { dep_idx: usize, bound: usize },

    /// The architecture has fewer physical qubits than the program
    /// declares, so no injective initial mapping exists.
    #[error("architecture has {q_arch} qubits, program requires {q_prog}")]
    InsufficientQubits { q_prog: usize, q_arch: usize },
}

pub type Result<T> = std::result::Result<T, AllocError>;

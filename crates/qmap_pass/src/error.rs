//! Driver-level error type (§7): wraps every collaborator's error and
//! assigns each the coded exit status and diagnostic taxonomy §6/§7
//! describe.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassError {
    #[error(transparent)]
    Arch(#[from] qmap_arch::ArchError),

    #[error(transparent)]
    Ir(#[from] qmap_ir::IrError),

    #[error(transparent)]
    Alloc(#[from] qmap_alloc::AllocError),

    #[error(transparent)]
    Rewrite(#[from] qmap_rewrite::RewriteError),
}

pub type Result<T> = std::result::Result<T, PassError>;

impl PassError {
    /// The fatal-error taxonomy name from §7, for the diagnostic stream.
    pub fn kind(&self) -> &'static str {
        match self {
            PassError::Ir(qmap_ir::IrError::UnknownResource(_)) => "UnknownResource",
            PassError::Ir(qmap_ir::IrError::Parse(_)) | PassError::Ir(qmap_ir::IrError::Inline(_)) => {
                "ArchitectureMalformed"
            },
            PassError::Arch(_) => "ArchitectureMalformed",
            PassError::Alloc(qmap_alloc::AllocError::AllocatorInfeasible { .. })
            | PassError::Alloc(qmap_alloc::AllocError::InsufficientQubits { .. }) => {
                "AllocatorInfeasible"
            },
            PassError::Alloc(qmap_alloc::AllocError::Arch(_)) => "ArchitectureMalformed",
            PassError::Alloc(qmap_alloc::AllocError::Ir(qmap_ir::IrError::UnknownResource(_))) => {
                "UnknownResource"
            },
            PassError::Alloc(qmap_alloc::AllocError::Ir(_)) => "ArchitectureMalformed",
            PassError::Rewrite(qmap_rewrite::RewriteError::SolutionMismatch { .. }) => "SolutionMismatch",
            PassError::Rewrite(qmap_rewrite::RewriteError::Ir(_)) => "UnknownResource",
        }
    }

    /// The coded process exit status §6's failure surface calls for.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            "UnknownResource" => 1,
            "AllocatorInfeasible" => 2,
            "SolutionMismatch" => 3,
            "ArchitectureMalformed" => 4,
            _ => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_infeasible_maps_to_its_own_code() {
        let err = PassError::Alloc(qmap_alloc::AllocError::AllocatorInfeasible {
            dep_idx: 2,
            bound: 3,
        });
        assert_eq!(err.kind(), "AllocatorInfeasible");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unknown_resource_maps_to_its_own_code() {
        let err = PassError::Ir(qmap_ir::IrError::UnknownResource("q[9]".to_string()));
        assert_eq!(err.kind(), "UnknownResource");
        assert_eq!(err.exit_code(), 1);
    }
}

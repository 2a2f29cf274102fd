//! The trivial allocator strategy: identity initial mapping, no SWAP search.
//!
//! Grounded on the original `efd::QbitterDepSolver` baseline, which assumes
//! the initial mapping already places every dependency within reach and
//! only ever emits `REV` or `LCNOT` for a pair that is already adjacent or
//! one hop away. It never performs a swap search. A dependency it cannot
//! satisfy in its current position is an [`AllocError::AllocatorInfeasible`]
//! fatal error, not a cue to look for a path.

use crate::dependency::DependencyStream;
use crate::error::{AllocError, Result};
use crate::solution::{CostConfig, Operation, Solution};
use crate::strategy::{identity_mapping, reverse_remediation, long_cnot_remediation, AllocState, AllocatorStrategy};
use qmap_arch::ArchGraph;
use qmap_ir::QubitIndex;

pub struct TrivialAllocator;

impl AllocatorStrategy for TrivialAllocator {
    fn name(&self) -> &'static str {
        "trivial"
    }

    fn allocate(
        &self,
        arch: &ArchGraph,
        index: &QubitIndex,
        deps: &DependencyStream,
        costs: &CostConfig,
    ) -> Result<Solution> {
        let q_prog = index.size();
        if q_prog > arch.size() {
            return Err(AllocError::InsufficientQubits {
                q_prog,
                q_arch: arch.size(),
            });
        }

        let initial = identity_mapping(q_prog);
        let state = AllocState::new(initial.clone(), arch.size());

        let mut ops = Vec::with_capacity(deps.len());
        let mut cost = 0u32;

        for dep in deps.iter() {
            let u = state.phys(dep.from);
            let v = state.phys(dep.to);

            let op = if arch.is_generic() || arch.has_edge(u, v) {
                Operation::Cnot(u, v)
            } else if let Some(op) = reverse_remediation(arch, u, v) {
                op
            } else if let Some(op) = long_cnot_remediation(arch, u, v) {
                op
            } else {
                return Err(AllocError::AllocatorInfeasible {
                    dep_idx: dep.source_stmt,
                    bound: 0,
                });
            };

            cost += op.cost(costs);
            ops.push((dep.source_stmt, vec![op]));
        }

        Ok(Solution {
            initial,
            ops,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::extract_dependencies;
    use qmap_arch::ArchGraphBuilder;
    use qmap_ir::{parse_program, QubitIndex};

    #[test]
    fn triangle_reverse_dependency_costs_rev() {
        let arch = ArchGraphBuilder::new(3)
            .edges([(0, 1), (1, 2), (2, 0)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[3];\nCX q[0], q[2];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let solution = TrivialAllocator.allocate(&arch, &index, &deps, &CostConfig::default()).unwrap();
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.ops[0].1, vec![Operation::Rev(0, 2)]);
    }

    #[test]
    fn two_hop_dependency_costs_lcnot() {
        let arch = ArchGraphBuilder::new(3)
            .edges([(0, 1), (1, 2)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[3];\nCX q[0], q[2];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let solution = TrivialAllocator.allocate(&arch, &index, &deps, &CostConfig::default()).unwrap();
        assert_eq!(solution.cost, 10);
        assert_eq!(solution.ops[0].1, vec![Operation::Lcnot(0, 1, 2)]);
    }

    #[test]
    fn unreachable_dependency_is_infeasible() {
        let arch = ArchGraphBuilder::new(4)
            .edges([(0, 1), (2, 3)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[4];\nCX q[0], q[3];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let err = TrivialAllocator.allocate(&arch, &index, &deps, &CostConfig::default());
        assert!(matches!(err, Err(AllocError::AllocatorInfeasible { .. })));
    }

    #[test]
    fn generic_architecture_costs_nothing() {
        let arch = ArchGraphBuilder::new(3).generic().build().unwrap();
        let program = parse_program("qreg q[3];\nCX q[0], q[2];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let solution = TrivialAllocator.allocate(&arch, &index, &deps, &CostConfig::default()).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.ops[0].1, vec![Operation::Cnot(0, 2)]);
    }
}

//! The greedy allocator strategy: the full §4.4 state machine, performing a
//! swap search along the architecture's shortest undirected path when a
//! dependency's physical endpoints are neither adjacent, reverse-adjacent,
//! nor two hops apart.
//!
//! Grounded on `qns_rewire::router::basic::BasicRouter`'s lookahead-swap
//! search: like that router, this strategy walks the dependency stream
//! once, inserting swaps to bring a gate's operands into range before
//! emitting it. It trades away `BasicRouter`'s multi-gate lookahead cost
//! function for the deterministic shortest-undirected-path choice §4.4
//! prescribes, since determinism (not best-effort fidelity) is the
//! contract here.

use crate::dependency::DependencyStream;
use crate::error::{AllocError, Result};
use crate::solution::{CostConfig, Operation, Solution};
use crate::strategy::{
    identity_mapping, long_cnot_remediation, reverse_remediation, AllocState, AllocatorStrategy,
};
use qmap_arch::ArchGraph;
use qmap_ir::QubitIndex;

pub struct GreedyAllocator;

impl AllocatorStrategy for GreedyAllocator {
    fn name(&self) -> &'static str {
        "greedy"
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
        let mut state = AllocState::new(initial.clone(), arch.size());
        let bound = arch.diameter().max(1);

        let mut ops = Vec::with_capacity(deps.len());
        let mut cost = 0u32;

        for dep in deps.iter() {
            let mut emitted = Vec::new();
            let mut swaps_tried = 0usize;

            let op = loop {
                let u = state.phys(dep.from);
                let v = state.phys(dep.to);

                if arch.is_generic() || arch.has_edge(u, v) {
                    break Operation::Cnot(u, v);
                }
                if let Some(op) = reverse_remediation(arch, u, v) {
                    break op;
                }
                if let Some(op) = long_cnot_remediation(arch, u, v) {
                    break op;
                }

                if swaps_tried >= bound {
                    return Err(AllocError::AllocatorInfeasible {
                        dep_idx: dep.source_stmt,
                        bound,
                    });
                }

                let path = arch.shortest_path(u, v).ok_or(AllocError::AllocatorInfeasible {
                    dep_idx: dep.source_stmt,
                    bound,
                })?;
                if path.len() < 2 {
                    return Err(AllocError::AllocatorInfeasible {
                        dep_idx: dep.source_stmt,
                        bound,
                    });
                }
                // Advance `from`'s physical qubit one step along the shortest
                // path towards `to`; ties in path choice already resolved by
                // ArchGraph::shortest_path's lowest-physical-ID BFS order.
                let (a, b) = (path[0], path[1]);
                state.apply_swap(a, b);
                let swap = Operation::Swap(a, b);
                cost += swap.cost(costs);
                emitted.push(swap);
                swaps_tried += 1;
            };

            cost += op.cost(costs);
            emitted.push(op);
            ops.push((dep.source_stmt, emitted));
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
    fn distant_pair_on_a_line_is_swapped_into_range() {
        let arch = ArchGraphBuilder::new(4)
            .edges([(0, 1), (1, 2), (2, 3)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[4];\nCX q[0], q[3];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let solution = GreedyAllocator
            .allocate(&arch, &index, &deps, &CostConfig::default())
            .unwrap();

        assert_eq!(solution.cost, 14); // two swaps then a cnot: 2*7
        let (_, ops) = &solution.ops[0];
        assert_eq!(
            ops.iter().filter(|op| matches!(op, Operation::Swap(..))).count(),
            2
        );
        assert!(matches!(ops.last().unwrap(), Operation::Cnot(..)));
    }

    #[test]
    fn adjacent_pair_needs_no_remediation() {
        let arch = ArchGraphBuilder::new(2).edges([(0, 1)]).build().unwrap();
        let program = parse_program("qreg q[2];\nCX q[0], q[1];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let solution = GreedyAllocator
            .allocate(&arch, &index, &deps, &CostConfig::default())
            .unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.ops[0].1, vec![Operation::Cnot(0, 1)]);
    }

    #[test]
    fn generic_architecture_never_swaps() {
        let arch = ArchGraphBuilder::new(4).generic().build().unwrap();
        let program = parse_program("qreg q[4];\nCX q[0], q[3];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let solution = GreedyAllocator
            .allocate(&arch, &index, &deps, &CostConfig::default())
            .unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.ops[0].1, vec![Operation::Cnot(0, 3)]);
    }

    #[test]
    fn disconnected_architecture_is_infeasible() {
        let arch = ArchGraphBuilder::new(4)
            .edges([(0, 1), (2, 3)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[4];\nCX q[0], q[3];\n").unwrap();
        let index = QubitIndex::build(&program);
        let deps = extract_dependencies(&program, &index).unwrap();

        let err = GreedyAllocator.allocate(&arch, &index, &deps, &CostConfig::default());
        assert!(matches!(err, Err(AllocError::AllocatorInfeasible { .. })));
    }
}

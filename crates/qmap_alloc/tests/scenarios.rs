//! End-to-end scenarios straight out of the allocator's testable
//! properties: a reverse-edge triangle, a distant pair on a line of four,
//! and a two-hop long-CNOT.

use qmap_alloc::{extract_dependencies, AllocatorStrategy, CostConfig, GreedyAllocator, Operation, TrivialAllocator};
use qmap_arch::ArchGraphBuilder;
use qmap_ir::{parse_program, QubitIndex};

#[test]
fn triangle_uses_a_single_reverse_edge() {
    // Arch: 3 nodes, edges {0->1, 1->2, 2->0}.
    let arch = ArchGraphBuilder::new(3)
        .edges([(0, 1), (1, 2), (2, 0)])
        .build()
        .unwrap();
    let program = parse_program("qreg q[3];\nCX q[0], q[2];\n").unwrap();
    let index = QubitIndex::build(&program);
    let deps = extract_dependencies(&program, &index).unwrap();

    let solution = TrivialAllocator
        .allocate(&arch, &index, &deps, &CostConfig::default())
        .unwrap();

    assert_eq!(solution.cost, 4); // one REV, no swaps
    let (_, ops) = &solution.ops[0];
    assert_eq!(ops, &vec![Operation::Rev(0, 2)]);
}

#[test]
fn line_of_four_distant_pair_costs_two_swaps_plus_cnot() {
    // Arch: a line 0->1->2->3.
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

    // GreedyAllocator's documented policy: walk the shortest path one swap
    // at a time, never reaching for a long-CNOT shortcut. Cost = 2*7 = 14.
    assert_eq!(solution.cost, 14);
    let (_, ops) = &solution.ops[0];
    let swap_count = ops.iter().filter(|op| matches!(op, Operation::Swap(..))).count();
    assert_eq!(swap_count, 2);

    // Invariant 2: every emitted two-qubit operation acts on a coupled pair.
    let mut u = 0usize;
    for op in ops {
        match *op {
            Operation::Swap(a, b) => {
                assert!(arch.is_coupled(a, b));
                u = b;
            },
            Operation::Cnot(a, b) => {
                assert!(arch.has_edge(a, b));
                assert_eq!(a, u);
            },
            other => panic!("unexpected remediation {other:?} on a line topology"),
        }
    }
}

#[test]
fn two_hop_dependency_prefers_a_long_cnot() {
    // Arch: 0->1, 1->2.
    let arch = ArchGraphBuilder::new(3)
        .edges([(0, 1), (1, 2)])
        .build()
        .unwrap();
    let program = parse_program("qreg q[3];\nCX q[0], q[2];\n").unwrap();
    let index = QubitIndex::build(&program);
    let deps = extract_dependencies(&program, &index).unwrap();

    let solution = TrivialAllocator
        .allocate(&arch, &index, &deps, &CostConfig::default())
        .unwrap();

    assert_eq!(solution.cost, 10);
    assert_eq!(solution.ops[0].1, vec![Operation::Lcnot(0, 1, 2)]);
}

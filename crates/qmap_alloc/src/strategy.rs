//! The allocator strategy contract (component D, §4.4) and the sanctioned
//! helpers strategies use to synthesize [`Operation`] values. No other
//! mechanism is permitted to emit an `Operation`.

use crate::dependency::DependencyStream;
use crate::error::Result;
use crate::solution::{gen_assignment, CostConfig, Mapping, Operation, Solution};
use qmap_arch::ArchGraph;
use qmap_ir::QubitIndex;

/// Given the architecture, the qubit index, and the dependency stream,
/// produces a [`Solution`] satisfying the invariants of §3. Implementers
/// must be deterministic functions of their inputs.
pub trait AllocatorStrategy {
    fn name(&self) -> &'static str;

    fn allocate(
        &self,
        arch: &ArchGraph,
        index: &QubitIndex,
        deps: &DependencyStream,
        costs: &CostConfig,
    ) -> Result<Solution>;
}

/// Tracks the mapping (program qubit -> physical qubit) and its inverse
/// (physical qubit -> logical qubit, extended to a full permutation) as a
/// strategy processes the dependency stream. A SWAP is the only operation
/// that mutates this state.
pub struct AllocState {
    map: Mapping,
    inverse: Vec<usize>,
}

impl AllocState {
    pub fn new(initial: Mapping, q_arch: usize) -> Self {
        let inverse = gen_assignment(q_arch, &initial);
        Self {
            map: initial,
            inverse,
        }
    }

    /// The physical qubit currently holding program qubit `prog_id`.
    pub fn phys(&self, prog_id: usize) -> usize {
        self.map[prog_id]
    }

    pub fn mapping(&self) -> &Mapping {
        &self.map
    }

    /// The logical ID (program qubit, or a padding ID from
    /// [`gen_assignment`] beyond `Q_prog`) currently occupying physical
    /// qubit `phys`.
    pub fn logical_at(&self, phys: usize) -> usize {
        self.inverse[phys]
    }

    /// Number of program qubits this state was constructed over.
    pub fn q_prog(&self) -> usize {
        self.map.len()
    }

    /// *Swap insertion*, the only sanctioned way to mutate the mapping:
    /// the logical qubits occupying physical `u` and `v` trade places.
    pub fn apply_swap(&mut self, u: usize, v: usize) {
        self.inverse.swap(u, v);
        let lu = self.inverse[u];
        if lu < self.map.len() {
            self.map[lu] = u;
        }
        let lv = self.inverse[v];
        if lv < self.map.len() {
            self.map[lv] = v;
        }
    }
}

/// The identity initial mapping `M[i] = i`, valid whenever
/// `Q_prog <= Q_arch`. Every strategy in this crate starts from it; ties
/// in swap-path selection are broken by lowest physical ID, consistent
/// with §4.4's determinism requirement.
pub fn identity_mapping(q_prog: usize) -> Mapping {
    (0..q_prog).collect()
}

/// *Reverse remediation*: a single `REV(u,v)` when `isReverseEdge(u,v)`.
pub fn reverse_remediation(arch: &ArchGraph, u: usize, v: usize) -> Option<Operation> {
    arch.is_reverse_edge(u, v).then_some(Operation::Rev(u, v))
}

/// *Long-CNOT remediation*: a single `LCNOT(u,w,v)` when a three-qubit
/// path `u -> w -> v` exists with both legs forward edges. Ties among
/// candidate `w` broken by lowest physical ID.
pub fn long_cnot_remediation(arch: &ArchGraph, u: usize, v: usize) -> Option<Operation> {
    arch.neighbors(u)
        .into_iter()
        .find(|&w| w != v && arch.has_edge(u, w) && arch.has_edge(w, v))
        .map(|w| Operation::Lcnot(u, w, v))
}

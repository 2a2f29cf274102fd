//! The solution type (component E): the initial mapping, a per-dependency
//! operation plan, and the accumulated cost.

/// Injective function from program qubits to architecture qubits,
/// `M: [0, Q_prog) -> [0, Q_arch)`.
pub type Mapping = Vec<usize>;

/// Default remediation costs (§6), in the absence of a caller override.
pub const DEFAULT_SWAP_COST: u32 = 7;
pub const DEFAULT_REV_COST: u32 = 4;
pub const DEFAULT_LCX_COST: u32 = 10;

/// The cost knobs a strategy charges against each remediation it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostConfig {
    pub swap_cost: u32,
    pub rev_cost: u32,
    pub lcx_cost: u32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            swap_cost: DEFAULT_SWAP_COST,
            rev_cost: DEFAULT_REV_COST,
            lcx_cost: DEFAULT_LCX_COST,
        }
    }
}

/// A single remediation or satisfied-dependency operation, addressed by
/// physical (architecture) qubit IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A satisfied dependency: reuses the original two-qubit statement,
    /// retargeted to `(u, v)`.
    Cnot(usize, usize),
    /// Reorders the mapping: the logical qubits occupying `u` and `v`
    /// trade places.
    Swap(usize, usize),
    /// Reverse-edge CNOT, emitted when only `v -> u` is a coupling edge.
    Rev(usize, usize),
    /// Long CNOT via intermediate physical qubit `w`.
    Lcnot(usize, usize, usize),
}

impl Operation {
    /// The cost this operation contributes under `costs`.
    pub fn cost(&self, costs: &CostConfig) -> u32 {
        match self {
            Operation::Cnot(..) => 0,
            Operation::Swap(..) => costs.swap_cost,
            Operation::Rev(..) => costs.rev_cost,
            Operation::Lcnot(..) => costs.lcx_cost,
        }
    }
}

/// The allocator's output (§3): an initial mapping, one operation list per
/// dependency (aligned one-to-one with the dependency stream, tagged with
/// the dependency's `source_stmt`), and the total accumulated cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub initial: Mapping,
    pub ops: Vec<(usize, Vec<Operation>)>,
    pub cost: u32,
}

/// Extends an injective mapping `M` of size `Q_prog` into `[0, Q_arch)` to
/// a total permutation of `[0, Q_arch)` by assigning fresh logical IDs
/// `Q_prog, Q_prog+1, ...` to the physical qubits `M` does not cover, in
/// ascending physical order.
///
/// The result is `M⁻¹` extended: `assignment[M[i]] == i` for every program
/// qubit `i`, and a permutation overall.
pub fn gen_assignment(q_arch: usize, mapping: &Mapping) -> Vec<usize> {
    let q_prog = mapping.len();
    let mut assignment = vec![usize::MAX; q_arch];
    for (prog_id, &arch_id) in mapping.iter().enumerate() {
        assignment[arch_id] = prog_id;
    }
    let mut next = q_prog;
    for slot in assignment.iter_mut() {
        if *slot == usize::MAX {
            *slot = next;
            next += 1;
        }
    }
    assignment
}

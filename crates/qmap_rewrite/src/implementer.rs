//! The solution implementer (component F, §4.6): walks a program's
//! statement stream in order, renames qubit arguments through the running
//! mapping, and splices in the remediation operations an allocator
//! strategy planned.
//!
//! The walk maintains [`qmap_alloc::AllocState`] — the same mapping state
//! a strategy uses — so that a `SWAP` operation's effect on later
//! statements is applied exactly once, in the order the strategy assumed
//! when it planned the solution.
//!
//! Remediation is rendered as an invocation of one of three reserved
//! intrinsic gates, following the source allocator's `CreateISwap`/
//! `CreateIRevCX`/`CreateILongCX` constructors: the rewritten program
//! still parses under the grammar of §6, with these names standing in for
//! the macros a later lowering pass (out of scope here) would expand.
//!
//! A physical qubit is always named through [`QubitIndex::arg_for`] — the
//! program's own canonical reference for whichever program qubit currently
//! occupies it (`AllocState::logical_at`), never through the architecture
//! graph's own register layout directly. By the time this runs, register
//! substitution (if the architecture called for it) has already renamed
//! the program onto the architecture's registers, so `index` already
//! reflects that naming; the implementer itself stays agnostic to whether
//! substitution happened.

use qmap_alloc::{AllocState, DependencyStream, Operation, Solution};
use qmap_arch::ArchGraph;
use qmap_ir::{Argument, Program, QubitIndex, Statement};

use crate::error::{Result, RewriteError};

/// Reserved gate name for an inserted SWAP.
pub const SWAP_INTRINSIC: &str = "intrinsic_swap__";
/// Reserved gate name for a reverse-edge CNOT.
pub const REV_INTRINSIC: &str = "intrinsic_rev_cx__";
/// Reserved gate name for a long-CNOT via an intermediate qubit.
pub const LCNOT_INTRINSIC: &str = "intrinsic_lcx__";

/// Names whichever program qubit currently occupies physical position
/// `phys`, via the qubit index's own canonical reference for it — never
/// via the architecture graph's register layout.
///
/// `owner` can fall outside `index`'s declared range only if a solution
/// addresses hardware no declared program qubit was ever assigned to
/// (possible only for an unsubstituted, non-generic architecture with
/// `Q_prog < Q_arch`, a combination the pass driver never produces);
/// falls back to a synthetic reference rather than panic mid-rewrite.
fn wire_arg(index: &QubitIndex, state: &AllocState, phys: usize) -> Argument {
    let owner = state.logical_at(phys);
    index
        .arg_for(owner)
        .unwrap_or_else(|| Argument::Indexed("q".to_string(), phys))
}

/// Rewrites `program` to reflect `solution`, per §4.6. `deps` must be the
/// exact dependency stream `solution` was computed against — the walk
/// asserts this at every two-qubit statement it visits.
pub fn implement_solution(
    program: &Program,
    arch: &ArchGraph,
    index: &QubitIndex,
    deps: &DependencyStream,
    solution: &Solution,
) -> Result<Program> {
    let q_prog = index.size();
    let mut state = AllocState::new(solution.initial.clone(), arch.size());
    let mut current: Vec<Argument> = (0..q_prog).map(|i| wire_arg(index, &state, state.phys(i))).collect();

    let mut dep_idx = 0usize;
    let mut out = Vec::with_capacity(program.statements.len());

    for (stmt_idx, stmt) in program.statements.iter().enumerate() {
        match stmt {
            Statement::If { creg, value, body } => {
                if body.is_two_qubit_op() {
                    let emitted = consume_dependency(
                        stmt_idx, body, deps, solution, index, &mut state, &mut current, &mut dep_idx,
                    )?;
                    for s in emitted {
                        out.push(Statement::If {
                            creg: creg.clone(),
                            value: *value,
                            body: Box::new(s),
                        });
                    }
                } else {
                    let renamed = rename_qubit_args(body, index, &current)?;
                    out.push(Statement::If {
                        creg: creg.clone(),
                        value: *value,
                        body: Box::new(renamed),
                    });
                }
            },
            other if other.is_two_qubit_op() => {
                let emitted = consume_dependency(
                    stmt_idx, other, deps, solution, index, &mut state, &mut current, &mut dep_idx,
                )?;
                out.extend(emitted);
            },
            other => out.push(rename_qubit_args(other, index, &current)?),
        }
    }

    Ok(Program {
        version: program.version.clone(),
        statements: out,
    })
}

/// Consumes the next entry of both `deps` and `solution.ops`, asserting
/// they're for the statement at `stmt_idx` (§4.6's mismatch check), and
/// returns the sequence of statements that stands in for it.
#[allow(clippy::too_many_arguments)]
fn consume_dependency(
    stmt_idx: usize,
    original: &Statement,
    deps: &DependencyStream,
    solution: &Solution,
    index: &QubitIndex,
    state: &mut AllocState,
    current: &mut [Argument],
    dep_idx: &mut usize,
) -> Result<Vec<Statement>> {
    let dep = deps.0.get(*dep_idx).ok_or(RewriteError::SolutionMismatch {
        stmt_idx,
        expected_dep_idx: *dep_idx,
    })?;
    if dep.source_stmt != stmt_idx {
        return Err(RewriteError::SolutionMismatch {
            stmt_idx,
            expected_dep_idx: *dep_idx,
        });
    }
    let (_, ops) = &solution.ops[*dep_idx];

    let mut emitted = Vec::with_capacity(ops.len());
    for op in ops {
        let stmt = match *op {
            Operation::Cnot(u, v) => {
                clone_two_qubit(original, wire_arg(index, state, u), wire_arg(index, state, v))
            },
            Operation::Swap(u, v) => {
                let owner_u = state.logical_at(u);
                let owner_v = state.logical_at(v);
                let swap_stmt = Statement::GateCall {
                    name: SWAP_INTRINSIC.to_string(),
                    params: Vec::new(),
                    args: vec![wire_arg(index, state, u), wire_arg(index, state, v)],
                };
                state.apply_swap(u, v);
                if owner_u < state.q_prog() {
                    current[owner_u] = wire_arg(index, state, state.phys(owner_u));
                }
                if owner_v < state.q_prog() {
                    current[owner_v] = wire_arg(index, state, state.phys(owner_v));
                }
                swap_stmt
            },
            Operation::Rev(u, v) => Statement::GateCall {
                name: REV_INTRINSIC.to_string(),
                params: Vec::new(),
                args: vec![wire_arg(index, state, u), wire_arg(index, state, v)],
            },
            Operation::Lcnot(u, w, v) => Statement::GateCall {
                name: LCNOT_INTRINSIC.to_string(),
                params: Vec::new(),
                args: vec![
                    wire_arg(index, state, u),
                    wire_arg(index, state, w),
                    wire_arg(index, state, v),
                ],
            },
        };
        emitted.push(stmt);
    }

    *dep_idx += 1;
    Ok(emitted)
}

fn clone_two_qubit(original: &Statement, u: Argument, v: Argument) -> Statement {
    match original {
        Statement::CX { .. } => Statement::CX {
            control: u,
            target: v,
        },
        Statement::GateCall { name, params, .. } => Statement::GateCall {
            name: name.clone(),
            params: params.clone(),
            args: vec![u, v],
        },
        other => other.clone(),
    }
}

fn rename_qubit_args(stmt: &Statement, index: &QubitIndex, current: &[Argument]) -> Result<Statement> {
    qmap_ir::map_qubit_args(stmt, &mut |arg| {
        let id = index.qid(arg)?;
        Ok(current[id].clone())
    })
    .map_err(RewriteError::from)
}

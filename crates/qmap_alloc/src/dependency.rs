//! Dependency extraction (component C): a linear walk collecting every
//! two-qubit operation's program-qubit pair, in source order.

use crate::error::Result;
use qmap_ir::{Program, QubitIndex, Statement};

/// A single two-qubit dependency, tagged with the index of the statement
/// that produced it in the program's flat top-level list. For a
/// classically guarded operation, `source_stmt` names the guarding `If`
/// statement itself, not the wrapped operation — the dialect has no
/// nested conditionals, so the `If`'s position is a stable enough handle
/// for remediation to be re-wrapped around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub from: usize,
    pub to: usize,
    pub source_stmt: usize,
}

/// Ordered dependency stream, one entry per two-qubit gate invocation.
#[derive(Debug, Clone, Default)]
pub struct DependencyStream(pub Vec<Dependency>);

impl DependencyStream {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dependency> {
        self.0.iter()
    }
}

/// Walks `program`'s top-level statements, collecting one [`Dependency`]
/// per two-qubit gate invocation, including those guarded by an `if`.
/// Single-qubit operations, measurements, resets, barriers, and
/// declarations contribute nothing.
pub fn extract_dependencies(program: &Program, index: &QubitIndex) -> Result<DependencyStream> {
    let mut deps = Vec::new();
    for (stmt_idx, stmt) in program.statements.iter().enumerate() {
        let op = match stmt {
            Statement::If { body, .. } => body.as_ref(),
            other => other,
        };
        if let Some((control, target)) = op.two_qubit_args() {
            deps.push(Dependency {
                from: index.qid(control)?,
                to: index.qid(target)?,
                source_stmt: stmt_idx,
            });
        }
    }
    Ok(DependencyStream(deps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmap_ir::parse_program;

    #[test]
    fn extracts_in_source_order() {
        let src = "qreg q[3];\nCX q[0], q[1];\nCX q[1], q[2];\n";
        let p = parse_program(src).unwrap();
        let idx = QubitIndex::build(&p);
        let deps = extract_dependencies(&p, &idx).unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps.iter().next().unwrap().source_stmt, 1);
    }

    #[test]
    fn guarded_op_tags_the_if_statement() {
        let src = "qreg q[2];\ncreg c[1];\nif (c==1) CX q[0], q[1];\n";
        let p = parse_program(src).unwrap();
        let idx = QubitIndex::build(&p);
        let deps = extract_dependencies(&p, &idx).unwrap();
        assert_eq!(deps.len(), 1);
        let dep = &deps.0[0];
        assert_eq!(dep.source_stmt, 2);
        assert!(matches!(p.statements[dep.source_stmt], Statement::If { .. }));
    }

    #[test]
    fn single_qubit_ops_contribute_nothing() {
        let src = "qreg q[2];\nU(0.1, 0.2, 0.3) q[0];\nbarrier q[0], q[1];\n";
        let p = parse_program(src).unwrap();
        let idx = QubitIndex::build(&p);
        let deps = extract_dependencies(&p, &idx).unwrap();
        assert!(deps.is_empty());
    }
}

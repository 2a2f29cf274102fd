//! Register substitution (§4.7 step 2, scenario 6): renames a program's
//! declared qubit registers onto the architecture's own register names.
//! [`crate::driver::PassDriver::prepare`] runs this immediately after
//! inlining and unconditionally whenever the architecture is non-generic —
//! before the qubit index and dependency stream are (re)built — so the
//! output parses against a device whose registers aren't named `q` well
//! before allocation or implementation ever sees the program.
//!
//! Grounded in the same statement-rewriting shape as
//! `qmap_rewrite::implementer::rename_qubit_args`, factored through the
//! shared [`qmap_ir::map_qubit_args`] helper so both passes walk
//! `Statement::If` bodies identically.

use qmap_arch::ArchGraph;
use qmap_ir::{Argument, Program, QubitIndex, Statement};

use crate::error::Result;

/// Rewrites every qubit-register declaration in `program` to the
/// architecture's own registers, and every qubit argument to the matching
/// architecture reference, positionally by program qubit ID.
///
/// Requires `index.size() <= arch.size()`; the allocator strategy already
/// enforces this (`AllocError::InsufficientQubits`), so this step assumes
/// it holds.
pub fn substitute_registers(program: &Program, arch: &ArchGraph, index: &QubitIndex) -> Result<Program> {
    let targets: Vec<Argument> = (0..index.size())
        .map(|id| arch_arg(arch, id))
        .collect();

    let mut statements = Vec::with_capacity(program.statements.len());
    let mut declared = false;

    for stmt in &program.statements {
        match stmt {
            Statement::QRegDecl { .. } => {
                if !declared {
                    for reg in arch.registers() {
                        statements.push(Statement::QRegDecl {
                            name: reg.name.clone(),
                            size: reg.size,
                        });
                    }
                    declared = true;
                }
            },
            other => statements.push(rename(other, index, &targets)?),
        }
    }

    Ok(Program {
        version: program.version.clone(),
        statements,
    })
}

fn arch_arg(arch: &ArchGraph, id: usize) -> Argument {
    match arch.qubit_ref(id) {
        Some((name, offset)) => Argument::Indexed(name.to_string(), offset),
        None => Argument::Indexed("q".to_string(), id),
    }
}

fn rename(stmt: &Statement, index: &QubitIndex, targets: &[Argument]) -> Result<Statement> {
    Ok(qmap_ir::map_qubit_args(stmt, &mut |arg| {
        let id = index.qid(arg)?;
        Ok(targets[id].clone())
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmap_arch::ArchGraphBuilder;
    use qmap_ir::parse_program;

    #[test]
    fn renames_declaration_and_uses_onto_architecture_registers() {
        let arch = ArchGraphBuilder::new(3)
            .register("Q", 3)
            .edges([(0, 1), (1, 2)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[3];\nCX q[0], q[1];\n").unwrap();
        let index = QubitIndex::build(&program);

        let rewritten = substitute_registers(&program, &arch, &index).unwrap();
        assert!(matches!(
            &rewritten.statements[0],
            Statement::QRegDecl { name, size } if name == "Q" && *size == 3
        ));
        match &rewritten.statements[1] {
            Statement::CX { control, target } => {
                assert_eq!(control, &Argument::Indexed("Q".to_string(), 0));
                assert_eq!(target, &Argument::Indexed("Q".to_string(), 1));
            },
            other => panic!("expected renamed CX, got {other:?}"),
        }
    }

    #[test]
    fn multiple_architecture_registers_are_all_declared_once() {
        let arch = ArchGraphBuilder::new(4)
            .register("A", 2)
            .register("B", 2)
            .edges([(0, 1), (1, 2), (2, 3)])
            .build()
            .unwrap();
        let program = parse_program("qreg q[4];\nCX q[0], q[3];\n").unwrap();
        let index = QubitIndex::build(&program);

        let rewritten = substitute_registers(&program, &arch, &index).unwrap();
        let decls: Vec<&Statement> = rewritten
            .statements
            .iter()
            .filter(|s| matches!(s, Statement::QRegDecl { .. }))
            .collect();
        assert_eq!(decls.len(), 2);
    }
}

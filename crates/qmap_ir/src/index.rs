//! The qubit index (component B): a bijection between declared-register
//! qubit identifiers and contiguous program qubit IDs, plus a scoped lookup
//! for formal parameters inside gate bodies.

use crate::ast::{Argument, Program, Statement};
use crate::error::{IrError, Result};
use std::collections::HashMap;

/// Built by a single walk over the program's top-level `QRegDecl`
/// statements (in source order) and its `GateDecl`/`Opaque` formal
/// parameter lists.
///
/// Resolving a plain register name without an offset, or a formal outside
/// its gate, fails with [`IrError::UnknownResource`].
#[derive(Debug, Clone, Default)]
pub struct QubitIndex {
    registers: HashMap<String, (usize, usize)>, // name -> (start, size)
    by_id: Vec<(String, usize)>,                 // id -> (name, offset)
    gate_formals: HashMap<String, HashMap<String, usize>>, // gate -> formal -> local id
}

impl QubitIndex {
    /// Walks `program`'s top-level statements, assigning contiguous IDs to
    /// each declared qubit register in declaration order, and records the
    /// formal-parameter scope of every gate definition.
    pub fn build(program: &Program) -> Self {
        let mut registers = HashMap::new();
        let mut by_id = Vec::new();
        let mut gate_formals = HashMap::new();

        for stmt in &program.statements {
            match stmt {
                Statement::QRegDecl { name, size } => {
                    let start = by_id.len();
                    registers.insert(name.clone(), (start, *size));
                    for offset in 0..*size {
                        by_id.push((name.clone(), offset));
                    }
                },
                Statement::GateDecl { name, formals, .. } => {
                    let scope: HashMap<String, usize> = formals
                        .iter()
                        .enumerate()
                        .map(|(i, f)| (f.clone(), i))
                        .collect();
                    gate_formals.insert(name.clone(), scope);
                },
                Statement::Opaque { name, formals, .. } => {
                    let scope: HashMap<String, usize> = formals
                        .iter()
                        .enumerate()
                        .map(|(i, f)| (f.clone(), i))
                        .collect();
                    gate_formals.insert(name.clone(), scope);
                },
                _ => {},
            }
        }

        Self {
            registers,
            by_id,
            gate_formals,
        }
    }

    /// Total number of declared program qubits (`Q_prog`).
    pub fn size(&self) -> usize {
        self.by_id.len()
    }

    /// Resolves a register-qualified argument to its contiguous program
    /// qubit ID.
    pub fn qid(&self, arg: &Argument) -> Result<usize> {
        match arg {
            Argument::Indexed(name, offset) => {
                let (start, size) = self.registers.get(name).ok_or_else(|| {
                    IrError::UnknownResource(format!("undeclared register '{name}'"))
                })?;
                if offset >= size {
                    return Err(IrError::UnknownResource(format!(
                        "offset {offset} out of bounds for register '{name}' of size {size}"
                    )));
                }
                Ok(start + offset)
            },
            Argument::Id(name) => {
                let (start, size) = self.registers.get(name).ok_or_else(|| {
                    IrError::UnknownResource(format!("undeclared register '{name}'"))
                })?;
                if *size != 1 {
                    return Err(IrError::UnknownResource(format!(
                        "register '{name}' used without offset but has size {size}"
                    )));
                }
                Ok(*start)
            },
        }
    }

    /// Resolves a formal parameter name within a gate body to its local
    /// index `[0, arity)`.
    pub fn qid_scoped(&self, formal: &str, gate: &str) -> Result<usize> {
        self.gate_formals
            .get(gate)
            .and_then(|scope| scope.get(formal))
            .copied()
            .ok_or_else(|| {
                IrError::UnknownResource(format!("formal '{formal}' outside gate '{gate}'"))
            })
    }

    /// The canonical argument reference for a program qubit ID — used as a
    /// rename target by the solution implementer.
    pub fn arg_for(&self, id: usize) -> Option<Argument> {
        self.by_id
            .get(id)
            .map(|(name, offset)| Argument::Indexed(name.clone(), *offset))
    }

    /// Registers in declaration order, as `(name, size)` pairs.
    pub fn registers(&self) -> Vec<(&str, usize)> {
        let mut regs: Vec<(&str, usize)> = self
            .registers
            .iter()
            .map(|(name, (_start, size))| (name.as_str(), *size))
            .collect();
        regs.sort_by_key(|(name, _)| {
            self.registers
                .get(*name)
                .map(|(start, _)| *start)
                .unwrap_or(0)
        });
        regs
    }
}

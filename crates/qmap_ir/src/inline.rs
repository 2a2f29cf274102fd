//! The inliner: expands calls to user-defined gates into the built-in
//! primitives (`U`, `CX`) and any gates named in a caller-supplied basis,
//! per the first step of the pass pipeline.
//!
//! A gate call is left untouched when its name is in the basis set; it is
//! expanded otherwise, recursively, until only basis gates and built-ins
//! remain. Passing an empty basis inlines everything down to `U`/`CX` —
//! the "inline all" mode; passing every declared gate name as the basis
//! inlines nothing — "don't inline".

use crate::ast::{Argument, GateOp, Program, Statement};
use crate::error::{IrError, Result};
use std::collections::{HashMap, HashSet};

/// Expands gate calls in `program` against its own `GateDecl`/`Opaque`
/// definitions, keeping any call whose name appears in `basis` intact.
pub fn inline_program(program: &Program, basis: &[String]) -> Result<Program> {
    let basis: HashSet<&str> = basis.iter().map(|s| s.as_str()).collect();
    let mut defs: HashMap<&str, (&[String], &[GateOp])> = HashMap::new();
    for stmt in &program.statements {
        if let Statement::GateDecl { name, formals, body, .. } = stmt {
            defs.insert(name.as_str(), (formals.as_slice(), body.as_slice()));
        }
    }

    let mut out = Vec::with_capacity(program.statements.len());
    for stmt in &program.statements {
        match stmt {
            Statement::GateDecl { .. } | Statement::Opaque { .. } => {
                // Definitions themselves carry no runtime effect once their
                // calls are expanded or retained verbatim.
            },
            Statement::If { creg, value, body } => {
                let expanded = inline_statement(body, &defs, &basis, 0)?;
                for s in expanded {
                    out.push(Statement::If {
                        creg: creg.clone(),
                        value: *value,
                        body: Box::new(s),
                    });
                }
            },
            other => out.extend(inline_statement(other, &defs, &basis, 0)?),
        }
    }

    Ok(Program {
        version: program.version.clone(),
        statements: out,
    })
}

const MAX_INLINE_DEPTH: usize = 64;

fn inline_statement(
    stmt: &Statement,
    defs: &HashMap<&str, (&[String], &[GateOp])>,
    basis: &HashSet<&str>,
    depth: usize,
) -> Result<Vec<Statement>> {
    let Statement::GateCall { name, params, args } = stmt else {
        return Ok(vec![stmt.clone()]);
    };

    if basis.contains(name.as_str()) || !defs.contains_key(name.as_str()) {
        return Ok(vec![stmt.clone()]);
    }

    if depth >= MAX_INLINE_DEPTH {
        return Err(IrError::Inline(format!(
            "gate '{name}' did not terminate within {MAX_INLINE_DEPTH} levels of inlining"
        )));
    }

    let (formals, body) = defs[name.as_str()];
    if formals.len() != args.len() {
        return Err(IrError::Inline(format!(
            "gate '{name}' called with {} args, declared with {}",
            args.len(),
            formals.len()
        )));
    }
    let bind: HashMap<&str, &Argument> =
        formals.iter().map(|f| f.as_str()).zip(args.iter()).collect();

    let mut out = Vec::new();
    for op in body {
        let resolved = resolve_op(op, &bind)?;
        out.extend(inline_statement(&resolved, defs, basis, depth + 1)?);
    }
    let _ = params;
    Ok(out)
}

fn resolve_op(op: &GateOp, bind: &HashMap<&str, &Argument>) -> Result<Statement> {
    let mut resolved_args = Vec::with_capacity(op.args.len());
    for formal in &op.args {
        let actual = bind.get(formal.as_str()).ok_or_else(|| {
            IrError::UnknownResource(format!("formal '{formal}' outside its gate"))
        })?;
        resolved_args.push((*actual).clone());
    }

    if op.name.eq_ignore_ascii_case("cx") && resolved_args.len() == 2 {
        return Ok(Statement::CX {
            control: resolved_args[0].clone(),
            target: resolved_args[1].clone(),
        });
    }
    if op.name.eq_ignore_ascii_case("u") && resolved_args.len() == 1 {
        let mut p = [0.0; 3];
        for (i, v) in op.params.iter().take(3).enumerate() {
            p[i] = *v;
        }
        return Ok(Statement::U {
            params: p,
            arg: resolved_args[0].clone(),
        });
    }

    Ok(Statement::GateCall {
        name: op.name.clone(),
        params: op.params.clone(),
        args: resolved_args,
    })
}

//! Generic statement-level qubit-argument renaming.
//!
//! Both the pass driver's register-substitution step (§4.7) and the
//! solution implementer's statement walk (§4.6) need to replace every
//! qubit argument of a statement with something derived from the old one,
//! while leaving everything else about the statement untouched. Factored
//! out here so both callers share one match over [`Statement`]'s shape.

use crate::ast::{Argument, Statement};
use crate::error::Result;

/// Rebuilds `stmt` with every qubit argument replaced by `f(arg)`.
/// Classical targets, parameters, and declarations pass through
/// unchanged; `If` recurses into its guarded body.
pub fn map_qubit_args(
    stmt: &Statement,
    f: &mut impl FnMut(&Argument) -> Result<Argument>,
) -> Result<Statement> {
    Ok(match stmt {
        Statement::U { params, arg } => Statement::U {
            params: *params,
            arg: f(arg)?,
        },
        Statement::CX { control, target } => Statement::CX {
            control: f(control)?,
            target: f(target)?,
        },
        Statement::Reset { qubit } => Statement::Reset { qubit: f(qubit)? },
        Statement::Measure { qubit, target } => Statement::Measure {
            qubit: f(qubit)?,
            target: target.clone(),
        },
        Statement::Barrier { args } => {
            let mut out = Vec::with_capacity(args.len());
            for a in args {
                out.push(f(a)?);
            }
            Statement::Barrier { args: out }
        },
        Statement::GateCall { name, params, args } => {
            let mut out = Vec::with_capacity(args.len());
            for a in args {
                out.push(f(a)?);
            }
            Statement::GateCall {
                name: name.clone(),
                params: params.clone(),
                args: out,
            }
        },
        Statement::If { creg, value, body } => Statement::If {
            creg: creg.clone(),
            value: *value,
            body: Box::new(map_qubit_args(body, f)?),
        },
        other => other.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_program;

    #[test]
    fn renames_every_qubit_argument() {
        let program = parse_program("qreg q[2];\nCX q[0], q[1];\n").unwrap();
        let renamed = map_qubit_args(&program.statements[1], &mut |arg| {
            Ok(Argument::Indexed(format!("Q_{}", arg.name()), 0))
        })
        .unwrap();
        match renamed {
            Statement::CX { control, target } => {
                assert_eq!(control, Argument::Indexed("Q_q".to_string(), 0));
                assert_eq!(target, Argument::Indexed("Q_q".to_string(), 0));
            },
            other => panic!("expected CX, got {other:?}"),
        }
    }

    #[test]
    fn recurses_into_conditional_body() {
        let program = parse_program("qreg q[2];\ncreg c[1];\nif (c==1) reset q[0];\n").unwrap();
        let renamed = map_qubit_args(&program.statements[2], &mut |_| {
            Ok(Argument::Indexed("Q".to_string(), 9))
        })
        .unwrap();
        match renamed {
            Statement::If { body, .. } => {
                assert!(matches!(*body, Statement::Reset { qubit: Argument::Indexed(ref n, 9) } if n == "Q"));
            },
            other => panic!("expected If, got {other:?}"),
        }
    }
}

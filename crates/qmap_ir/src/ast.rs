//! Abstract syntax tree for the QASM-like dialect described in §6.
//!
//! `Program::statements` is always a flat, top-level list. A classically
//! guarded quantum operation is represented as `Statement::If` wrapping the
//! single guarded operation — the dialect has no nested conditionals, so a
//! statement's position in this list doubles as the stable identity later
//! passes use to splice in replacements (see `qmap_alloc::Dependency`).

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub version: Option<String>,
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            version: None,
            statements,
        }
    }
}

/// A quantum or classical argument: a bare register name (valid only for
/// size-1 registers) or an indexed register element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    Id(String),
    Indexed(String, usize),
}

impl Argument {
    pub fn name(&self) -> &str {
        match self {
            Argument::Id(n) | Argument::Indexed(n, _) => n,
        }
    }
}

/// One gate invocation inside a `GateDecl` body. Its `args` name the
/// enclosing gate's formal parameters, not program qubits.
#[derive(Debug, Clone, PartialEq)]
pub struct GateOp {
    pub name: String,
    pub params: Vec<f64>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    QRegDecl {
        name: String,
        size: usize,
    },
    CRegDecl {
        name: String,
        size: usize,
    },
    /// A parameterized gate definition with a body expressed over formal
    /// qubit parameters.
    GateDecl {
        name: String,
        params: Vec<String>,
        formals: Vec<String>,
        body: Vec<GateOp>,
    },
    /// A gate declared without a body (an opaque/black-box unitary).
    Opaque {
        name: String,
        params: Vec<String>,
        formals: Vec<String>,
    },
    /// The built-in single-qubit unitary `U(theta, phi, lambda) q;`.
    U {
        params: [f64; 3],
        arg: Argument,
    },
    /// The built-in two-qubit `CX a, b;`.
    CX {
        control: Argument,
        target: Argument,
    },
    Measure {
        qubit: Argument,
        target: Argument,
    },
    Reset {
        qubit: Argument,
    },
    Barrier {
        args: Vec<Argument>,
    },
    /// Invocation of a user-defined gate (via `GateDecl`/`Opaque`).
    GateCall {
        name: String,
        params: Vec<f64>,
        args: Vec<Argument>,
    },
    /// A classically guarded quantum operation: `if (creg == val) <body>;`.
    If {
        creg: String,
        value: usize,
        body: Box<Statement>,
    },
}

impl Statement {
    /// The qubit arguments this statement directly acts on (not descending
    /// into an `If`'s body).
    pub fn qubit_args(&self) -> Vec<&Argument> {
        match self {
            Statement::U { arg, .. } | Statement::Reset { qubit: arg } => vec![arg],
            Statement::CX { control, target } => vec![control, target],
            Statement::Measure { qubit, .. } => vec![qubit],
            Statement::Barrier { args } => args.iter().collect(),
            Statement::GateCall { args, .. } => args.iter().collect(),
            Statement::QRegDecl { .. }
            | Statement::CRegDecl { .. }
            | Statement::GateDecl { .. }
            | Statement::Opaque { .. }
            | Statement::If { .. } => vec![],
        }
    }

    /// True if this statement is a two-qubit operation (`CX` or a
    /// two-argument generic gate call) eligible to generate a dependency.
    pub fn is_two_qubit_op(&self) -> bool {
        match self {
            Statement::CX { .. } => true,
            Statement::GateCall { args, .. } => args.len() == 2,
            _ => false,
        }
    }

    /// The `(control, target)` qubit arguments of a two-qubit operation.
    pub fn two_qubit_args(&self) -> Option<(&Argument, &Argument)> {
        match self {
            Statement::CX { control, target } => Some((control, target)),
            Statement::GateCall { args, .. } if args.len() == 2 => Some((&args[0], &args[1])),
            _ => None,
        }
    }
}

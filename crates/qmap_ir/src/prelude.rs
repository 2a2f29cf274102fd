//! Convenience re-exports for downstream crates.

pub use crate::ast::{Argument, GateOp, Program, Statement};
pub use crate::error::{IrError, Result};
pub use crate::index::QubitIndex;
pub use crate::inline::inline_program;
pub use crate::parser::parse_program;
pub use crate::printer::print_program;
pub use crate::transform::map_qubit_args;

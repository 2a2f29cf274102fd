//! # qmap_rewrite
//!
//! The solution implementer (component F): the single consumer of a
//! [`qmap_alloc::Solution`], rewriting a program's statement stream to
//! reflect it exactly once before the solution is discarded.

pub mod error;
pub mod implementer;
pub mod prelude;

pub use error::{Result, RewriteError};
pub use implementer::{implement_solution, LCNOT_INTRINSIC, REV_INTRINSIC, SWAP_INTRINSIC};

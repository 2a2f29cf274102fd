//! Convenient re-exports.
//!
//! ```rust
//! use qmap_rewrite::prelude::*;
//! ```

pub use crate::error::{Result, RewriteError};
pub use crate::implementer::{implement_solution, LCNOT_INTRINSIC, REV_INTRINSIC, SWAP_INTRINSIC};

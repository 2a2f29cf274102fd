//! Convenient re-exports.
//!
//! ```rust
//! use qmap_arch::prelude::*;
//! ```

pub use crate::error::{ArchError, Result};
pub use crate::graph::{ArchGraph, ArchGraphBuilder, RegisterDecl};
pub use crate::loader::{named_device, parse_description};

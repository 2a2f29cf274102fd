//! Convenient re-exports.
//!
//! ```rust
//! use qmap_pass::prelude::*;
//! ```

pub use crate::cache::PassCache;
pub use crate::config::PassConfig;
pub use crate::driver::{PassDriver, PreparedRun};
pub use crate::error::{PassError, Result};
pub use crate::stats::Statistics;
pub use crate::substitute::substitute_registers;

//! Convenient re-exports.
//!
//! ```rust
//! use qmap_alloc::prelude::*;
//! ```

pub use crate::dependency::{extract_dependencies, Dependency, DependencyStream};
pub use crate::error::{AllocError, Result};
pub use crate::solution::{gen_assignment, CostConfig, Mapping, Operation, Solution};
pub use crate::strategy::{identity_mapping, AllocState, AllocatorStrategy};
pub use crate::strategy_greedy::GreedyAllocator;
pub use crate::strategy_trivial::TrivialAllocator;

//! # qmap_alloc
//!
//! Dependency extraction (component C), the pluggable allocator strategy
//! contract (component D, §4.4), and the [`Solution`] value (component E)
//! produced by an allocator strategy and consumed once by the solution
//! implementer.

pub mod dependency;
pub mod error;
pub mod solution;
pub mod strategy;
pub mod strategy_greedy;
pub mod strategy_trivial;
pub mod prelude;

pub use dependency::{extract_dependencies, Dependency, DependencyStream};
pub use error::{AllocError, Result};
pub use solution::{gen_assignment, CostConfig, Mapping, Operation, Solution};
pub use strategy::{identity_mapping, AllocState, AllocatorStrategy};
pub use strategy_greedy::GreedyAllocator;
pub use strategy_trivial::TrivialAllocator;

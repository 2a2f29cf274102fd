//! # qmap_arch
//!
//! Directed architecture coupling graph for the qubit allocation pipeline.
//!
//! An [`ArchGraph`] models the physical qubits of a target device and the
//! directed edges its native two-qubit gate supports. It distinguishes
//! forward edges from reverse edges (an edge usable only against its native
//! direction, remedied with a surrounding Hadamard pair) and can be flagged
//! [`ArchGraph::is_generic`] to model an idealized fully-connected register,
//! which collapses all remediation to the identity.

pub mod error;
pub mod graph;
pub mod loader;
pub mod prelude;

pub use error::{ArchError, Result};
pub use graph::{ArchGraph, ArchGraphBuilder, RegisterDecl};
pub use loader::{named_device, parse_description};

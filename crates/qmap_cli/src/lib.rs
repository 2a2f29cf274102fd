//! # qmap_cli
//!
//! Command-line interface and integration library for the qubit
//! allocation pass.
//!
//! This crate provides:
//! - [`pipeline`]: architecture loading and the file-to-file run that
//!   backs the `qmap run` subcommand, usable as a library independent of
//!   argument parsing.
//!
//! ## Library usage
//!
//! ```no_run
//! use qmap_cli::pipeline::{load_architecture, run_file, Strategy};
//! use qmap_pass::PassConfig;
//! use std::path::Path;
//!
//! let arch = load_architecture(Some("ibmqx2"), None).unwrap();
//! let outcome = run_file(
//!     Path::new("circuit.qasm"),
//!     &arch,
//!     PassConfig::default(),
//!     Strategy::Greedy,
//!     false,
//! ).unwrap();
//! println!("{}", outcome.rewritten_program);
//! ```

pub mod pipeline;

pub use pipeline::{load_architecture, run_file, RunOutcome, Strategy};

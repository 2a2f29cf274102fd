//! The library half of the CLI: loads an architecture and a program, runs
//! them through [`qmap_pass::PassDriver`], and packages the result for
//! either text or JSON presentation. Kept separate from `main.rs` so the
//! pipeline is exercisable without going through argument parsing, the
//! way `qns_cli::pipeline::QnsSystem` separates orchestration from the
//! `clap` entry point.

use std::path::Path;

use anyhow::{Context, Result};
use qmap_alloc::{AllocatorStrategy, GreedyAllocator, TrivialAllocator};
use qmap_arch::{named_device, parse_description, ArchGraph};
use qmap_ir::{parse_program, print_program};
use qmap_pass::{PassConfig, PassDriver, Statistics};
use serde::Serialize;

/// Which allocator strategy to run, named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    Trivial,
    Greedy,
}

impl Strategy {
    fn as_dyn(self) -> Box<dyn AllocatorStrategy> {
        match self {
            Strategy::Trivial => Box::new(TrivialAllocator),
            Strategy::Greedy => Box::new(GreedyAllocator),
        }
    }
}

/// Resolves an architecture either from the built-in device table or from
/// a description file on disk.
pub fn load_architecture(device: Option<&str>, arch_file: Option<&Path>) -> Result<ArchGraph> {
    match (device, arch_file) {
        (Some(name), None) => named_device(name).with_context(|| format!("unknown device '{name}'")),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read architecture file: {}", path.display()))?;
            parse_description(&text).with_context(|| "failed to parse architecture description")
        },
        (Some(_), Some(_)) => {
            anyhow::bail!("pass exactly one of --device or --arch-file, not both")
        },
        (None, None) => anyhow::bail!("pass one of --device or --arch-file"),
    }
}

/// The outcome of one driver run, suitable for either text or JSON
/// presentation.
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    pub input_file: String,
    pub strategy: String,
    pub rewritten_program: String,
    pub statistics: Statistics,
}

/// Runs the full pipeline against the QASM-like source at `input_path`.
pub fn run_file(
    input_path: &Path,
    arch: &ArchGraph,
    config: PassConfig,
    strategy: Strategy,
) -> Result<RunOutcome> {
    let source = std::fs::read_to_string(input_path)
        .with_context(|| format!("failed to read program file: {}", input_path.display()))?;
    let program = parse_program(&source).with_context(|| "failed to parse program")?;

    let strategy_name = match strategy {
        Strategy::Trivial => "trivial",
        Strategy::Greedy => "greedy",
    };
    let strategy_impl = strategy.as_dyn();

    let mut driver = PassDriver::new(arch, config);
    let (rewritten, statistics) = driver
        .run(&program, strategy_impl.as_ref())
        .with_context(|| "allocation pass failed")?;

    Ok(RunOutcome {
        input_file: input_path.display().to_string(),
        strategy: strategy_name.to_string(),
        rewritten_program: print_program(&rewritten),
        statistics,
    })
}

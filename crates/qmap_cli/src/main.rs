//! qmap CLI - qubit allocation pass driver.
//!
//! Loads an architecture (either a built-in device or a description
//! file), runs a program through the allocation pipeline, and prints the
//! rewritten program and run statistics.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use qmap_cli::pipeline::{load_architecture, run_file, Strategy};
use qmap_pass::{PassConfig, PassError};

/// qmap - a qubit allocation pass for NISQ-constrained circuits.
#[derive(Parser)]
#[command(name = "qmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a program through the allocation pass
    Run {
        /// Path to the program file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Built-in device name (e.g. ibmqx2, ibmqx4)
        #[arg(long, conflicts_with = "arch_file")]
        device: Option<String>,

        /// Path to an architecture description file
        #[arg(long, conflicts_with = "device")]
        arch_file: Option<PathBuf>,

        /// Allocator strategy
        #[arg(long, value_enum, default_value = "trivial")]
        strategy: Strategy,

        /// Cost added per SWAP
        #[arg(long)]
        swap_cost: Option<u32>,

        /// Cost added per reverse-edge CNOT
        #[arg(long)]
        rev_cost: Option<u32>,

        /// Cost added per long CNOT
        #[arg(long)]
        lcx_cost: Option<u32>,

        /// Skip inlining user-defined gates before allocation
        #[arg(long)]
        no_inline: bool,

        /// Gate names to keep intact when inlining (repeatable)
        #[arg(long = "basis")]
        basis: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let _ = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();

    match cli.command {
        Commands::Run {
            input,
            device,
            arch_file,
            strategy,
            swap_cost,
            rev_cost,
            lcx_cost,
            no_inline,
            basis,
        } => cmd_run(
            &input,
            device.as_deref(),
            arch_file.as_deref(),
            strategy,
            swap_cost,
            rev_cost,
            lcx_cost,
            no_inline,
            basis,
            cli.format,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_run(
    input: &std::path::Path,
    device: Option<&str>,
    arch_file: Option<&std::path::Path>,
    strategy: Strategy,
    swap_cost: Option<u32>,
    rev_cost: Option<u32>,
    lcx_cost: Option<u32>,
    no_inline: bool,
    basis: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let arch = load_architecture(device, arch_file)?;

    let mut config = PassConfig::default();
    if let Some(c) = swap_cost {
        config.swap_cost = c;
    }
    if let Some(c) = rev_cost {
        config.rev_cost = c;
    }
    if let Some(c) = lcx_cost {
        config.lcx_cost = c;
    }
    config.inline = !no_inline;
    config.basis = basis;

    let outcome = match run_file(input, &arch, config, strategy) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(pass_err) = err.chain().find_map(|e| e.downcast_ref::<PassError>()) {
                eprintln!("error [{}]: {}", pass_err.kind(), pass_err);
                std::process::exit(pass_err.exit_code());
            }
            return Err(err);
        },
    };

    match format {
        OutputFormat::Text => {
            println!("=== qmap run ===");
            println!("Input:      {}", outcome.input_file);
            println!("Strategy:   {}", outcome.strategy);
            println!();
            println!("Dependencies: {}", outcome.statistics.dependencies);
            println!("Total cost:   {}", outcome.statistics.total_cost);
            println!(
                "Timing (s):   inline={:.6} alloc={:.6} replace={:.6} rename={:.6}",
                outcome.statistics.inline_time,
                outcome.statistics.alloc_time,
                outcome.statistics.replace_time,
                outcome.statistics.rename_time
            );
            println!();
            println!("{}", outcome.rewritten_program);
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        },
    }

    Ok(())
}

//! Integration tests for the qmap CLI's pipeline, exercising the full
//! parse -> allocate -> rewrite path the way `qns_cli`'s integration
//! suite exercises its own pipeline end to end.

use qmap_arch::ArchGraphBuilder;
use qmap_cli::pipeline::{load_architecture, run_file, Strategy};
use qmap_pass::PassConfig;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn write_temp(contents: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!("qmap_cli_integration_{}_{n}.qasm", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn full_pipeline_on_a_known_device_resolves_without_swaps_when_adjacent() {
    let arch = load_architecture(Some("ibmqx2"), None).unwrap();
    let path = write_temp("qreg q[5];\nCX q[0], q[1];\n");

    let outcome = run_file(
        &path,
        &arch,
        PassConfig { inline: false, ..PassConfig::default() },
        Strategy::Trivial,
    )
    .unwrap();

    assert_eq!(outcome.statistics.total_cost, 0);
    assert!(outcome.rewritten_program.contains("CX"));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn greedy_strategy_routes_a_distant_pair_on_a_line() {
    let arch = ArchGraphBuilder::new(4)
        .edges([(0, 1), (1, 2), (2, 3)])
        .build()
        .unwrap();
    let path = write_temp("qreg q[4];\nCX q[0], q[3];\n");

    let outcome = run_file(
        &path,
        &arch,
        PassConfig { inline: false, ..PassConfig::default() },
        Strategy::Greedy,
    )
    .unwrap();

    assert_eq!(outcome.statistics.total_cost, 14);
    assert_eq!(outcome.statistics.dependencies, 1);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn trivial_strategy_fails_fatally_on_an_unreachable_pair() {
    let arch = ArchGraphBuilder::new(4)
        .edges([(0, 1), (2, 3)])
        .build()
        .unwrap();
    let path = write_temp("qreg q[4];\nCX q[0], q[3];\n");

    let err = run_file(
        &path,
        &arch,
        PassConfig { inline: false, ..PassConfig::default() },
        Strategy::Trivial,
    )
    .unwrap_err();

    assert!(err.chain().any(|e| e
        .downcast_ref::<qmap_pass::PassError>()
        .is_some()));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn register_substitution_renames_qreg_onto_the_device_register() {
    let arch = ArchGraphBuilder::new(5).register("Q", 5).edges([(0, 1)]).build().unwrap();
    let path = write_temp("qreg q[2];\nCX q[0], q[1];\n");

    let outcome = run_file(
        &path,
        &arch,
        PassConfig { inline: false, ..PassConfig::default() },
        Strategy::Trivial,
    )
    .unwrap();

    assert!(outcome.rewritten_program.contains("qreg Q[5]"));
    std::fs::remove_file(&path).unwrap();
}

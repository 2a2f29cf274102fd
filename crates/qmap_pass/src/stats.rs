//! Statistics (§6): the per-run numbers the pass driver reports once a
//! program has been rewritten, mirroring the timing fields
//! `qns_profiler` attaches to a simulation run.

use serde::{Deserialize, Serialize};

/// Timing and sizing figures for one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of two-qubit dependencies extracted from the program.
    pub dependencies: usize,
    /// Total emitted cost (SWAP/REV/LCNOT costs summed), per §4.5.
    pub total_cost: u32,
    /// Wall time, in seconds, spent in each pipeline step.
    pub inline_time: f64,
    pub alloc_time: f64,
    pub replace_time: f64,
    pub rename_time: f64,
}

impl Statistics {
    /// Sum of every timed step, for a quick end-to-end figure.
    pub fn total_time(&self) -> f64 {
        self.inline_time + self.alloc_time + self.replace_time + self.rename_time
    }
}

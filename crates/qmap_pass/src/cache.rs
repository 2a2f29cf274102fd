//! The pass cache: an explicit, caller-owned store for the intermediate
//! products of a run ([`qmap_ir::QubitIndex`] and
//! [`qmap_alloc::DependencyStream`]) keyed by a generation counter.
//!
//! Unlike a process-wide memoization table keyed by program identity, this
//! cache is threaded explicitly through [`crate::driver::PassDriver`] and
//! invalidated by incrementing its generation whenever the program the
//! index/dependencies describe is rewritten — between allocation (step 3)
//! and solution implementation (step 4) the cache is stale by
//! construction, since the rewritten program's statement positions no
//! longer match the dependency stream's `source_stmt` indices.
//!
//! [`PassDriver::prepare`](crate::driver::PassDriver::prepare) is the one
//! real consumer: a caller that calls `prepare` more than once against the
//! same driver before anything invalidates it (inspecting the dependency
//! stream before deciding whether to run allocation, say) gets the second
//! call back without rebuilding the index or dependency stream. The cache
//! has no way to tell the program changed underneath it between calls —
//! that's the caller's responsibility, exactly as the generation-bump
//! contract above describes.

use qmap_alloc::DependencyStream;
use qmap_ir::QubitIndex;

/// Caches the qubit index and dependency stream computed for one
/// generation of a program. A generation bump (`invalidate`) drops both;
/// the driver bumps it immediately after a program is rewritten.
#[derive(Debug, Default)]
pub struct PassCache {
    generation: u64,
    entry: Option<(u64, QubitIndex, DependencyStream)>,
    hits: u64,
}

impl PassCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generation a lookup or store would target.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of `get` calls that returned a cached entry, for callers
    /// wanting to confirm reuse is actually happening.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Drops any cached entry and advances the generation, so a later
    /// `get` against the old generation (were one kept around) would miss.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.entry = None;
    }

    /// Returns the cached index/dependencies if they were stored at the
    /// current generation.
    pub fn get(&mut self) -> Option<(&QubitIndex, &DependencyStream)> {
        let generation = self.generation;
        let hit = self.entry.as_ref().is_some_and(|(gen, ..)| *gen == generation);
        if hit {
            self.hits += 1;
        }
        self.entry
            .as_ref()
            .filter(|(gen, ..)| *gen == generation)
            .map(|(_, index, deps)| (index, deps))
    }

    /// Stores `index`/`deps` at the current generation, replacing whatever
    /// was there.
    pub fn put(&mut self, index: QubitIndex, deps: DependencyStream) {
        self.entry = Some((self.generation, index, deps));
    }
}

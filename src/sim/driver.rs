use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::driver::Dispatcher;
use crate::core::process::{Batch, ProcId, SortKey, Ticks};
use crate::policy::Policy;

/// Outcome of one algorithm run.
#[derive(Debug, Clone)]
pub struct AlgoResult {
    pub label: &'static str,
    pub avg_wait: f64,
    pub waits: FxHashMap<ProcId, i64>,
}

/// Owns the canonical batch and runs each algorithm over a fresh deep copy,
/// so no run can observe another run's mutations.
pub struct Sim {
    batch: Batch,
    quantum: Ticks,
}

impl Sim {
    pub fn new(mut batch: Batch, quantum: Ticks) -> Self {
        batch.sort(SortKey::Arrival);
        Self { batch, quantum }
    }

    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    pub fn run(&self, policy: Policy) -> AlgoResult {
        let mut dispatcher = Dispatcher::new(&self.batch, policy);
        let events = dispatcher.run();
        debug!(
            policy = policy.label(),
            events = events.len(),
            "run complete"
        );
        AlgoResult {
            label: policy.label(),
            avg_wait: dispatcher.average_wait(),
            waits: dispatcher.wait_times(),
        }
        // The working copy is dropped with the dispatcher here.
    }

    /// All six variants in the fixed reporting order.
    pub fn run_all(&self) -> Vec<AlgoResult> {
        Policy::all(self.quantum)
            .into_iter()
            .map(|policy| self.run(policy))
            .collect()
    }
}

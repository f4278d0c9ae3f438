use std::cmp::Ordering;
use std::fmt;

pub type ProcId = u64;
pub type Ticks = u64;

/// Total orders over process entities. `Priority` and `RemainingBurst`
/// break ties by ascending id, so two processes sharing a policy key are
/// always ordered deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Arrival,
    Priority,
    RemainingBurst,
}

impl SortKey {
    pub fn compare(self, a: &Process, b: &Process) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Arrival => a.arrival.cmp(&b.arrival).then(a.id.cmp(&b.id)),
            SortKey::Priority => a.priority.cmp(&b.priority).then(a.id.cmp(&b.id)),
            SortKey::RemainingBurst => a.remaining.cmp(&b.remaining).then(a.id.cmp(&b.id)),
        }
    }
}

/// One schedulable entity. `remaining` starts at `burst` and is decremented
/// once per simulated tick while the process holds the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcId,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Lower value means higher precedence.
    pub priority: u64,
    /// Execution folded in at preemption time, not wall-clock elapsed time.
    pub runtime: Ticks,
    /// Simulated clock value at the most recent dispatch.
    pub last_dispatch: Ticks,
    pub remaining: Ticks,
}

impl Process {
    pub fn new(id: ProcId, arrival: Ticks, burst: Ticks, priority: u64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority,
            runtime: 0,
            last_dispatch: 0,
            remaining: burst,
        }
    }

    /// Time spent eligible but not executing. Only meaningful once the
    /// process has completed and its runtime has been folded in.
    pub fn wait_time(&self) -> i64 {
        self.last_dispatch as i64 - self.arrival as i64 - self.runtime as i64
    }
}

/// The full collection of processes scheduled together in one run.
/// Deep copy is `Clone`; destruction is `Drop`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub procs: Vec<Process>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fresh entity with zeroed bookkeeping fields.
    pub fn create(&mut self, id: ProcId, arrival: Ticks, burst: Ticks, priority: u64) {
        self.procs.push(Process::new(id, arrival, burst, priority));
    }

    /// Stable sort under the given key.
    pub fn sort(&mut self, key: SortKey) {
        self.procs.sort_by(|a, b| key.compare(a, b));
    }

    pub fn find(&self, id: ProcId) -> Option<&Process> {
        self.procs.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }
}

/// Diagnostic dump, one process per line.
impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.procs {
            writeln!(
                f,
                "{} {} {} {} {} {} {}",
                p.id, p.arrival, p.burst, p.priority, p.runtime, p.last_dispatch, p.remaining
            )?;
        }
        Ok(())
    }
}

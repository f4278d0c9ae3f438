use super::process::{ProcId, Ticks};

/// Observable scheduling transitions, traced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    Dispatched { id: ProcId, at: Ticks },
    Preempted { id: ProcId, at: Ticks },
    Completed { id: ProcId, at: Ticks },
}

use crate::core::process::{SortKey, Ticks};

/// Which key orders the ready queue for the selection-based policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    Priority,
    ShortestRemaining,
}

impl SelectKey {
    pub fn sort_key(self) -> SortKey {
        match self {
            SelectKey::Priority => SortKey::Priority,
            SelectKey::ShortestRemaining => SortKey::RemainingBurst,
        }
    }
}

/// One of the four scheduling policies; the selection-based families carry
/// their key, giving six algorithm variants in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    FirstCome,
    NonPreemptive(SelectKey),
    Preemptive(SelectKey),
    RoundRobin { quantum: Ticks },
}

impl Policy {
    pub fn label(&self) -> &'static str {
        match self {
            Policy::FirstCome => "FCFS",
            Policy::NonPreemptive(SelectKey::Priority) => "NonPreemptive Priority",
            Policy::NonPreemptive(SelectKey::ShortestRemaining) => "NonPreemptive SJF",
            Policy::Preemptive(SelectKey::Priority) => "Preemptive Priority",
            Policy::Preemptive(SelectKey::ShortestRemaining) => "Preemptive SJF",
            Policy::RoundRobin { .. } => "Round Robin",
        }
    }

    /// The six variants in their fixed reporting order.
    pub fn all(quantum: Ticks) -> [Policy; 6] {
        [
            Policy::FirstCome,
            Policy::NonPreemptive(SelectKey::Priority),
            Policy::NonPreemptive(SelectKey::ShortestRemaining),
            Policy::Preemptive(SelectKey::Priority),
            Policy::Preemptive(SelectKey::ShortestRemaining),
            Policy::RoundRobin { quantum },
        ]
    }
}

use std::collections::VecDeque;

use super::process::{Process, SortKey, Ticks};

/// Arrived, unfinished processes not currently holding the CPU, addressed
/// by index into the run's working batch.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    slots: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, idx: usize) {
        self.slots.push_back(idx);
    }

    pub fn pop_front(&mut self) -> Option<usize> {
        self.slots.pop_front()
    }

    pub fn front(&self) -> Option<usize> {
        self.slots.front().copied()
    }

    /// Stable re-sort of the whole queue under a policy key. Round-robin
    /// never calls this; it only rotates.
    pub fn resort(&mut self, procs: &[Process], key: SortKey) {
        self.slots
            .make_contiguous()
            .sort_by(|&a, &b| key.compare(&procs[a], &procs[b]));
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.slots.contains(&idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Explicit per-run simulation state. The clock advances one unit per tick
/// for the iterative policies; FCFS resolves in closed form.
#[derive(Debug, Clone, Default)]
pub struct SimState {
    pub clock: Ticks,
    /// Index of the process currently holding the CPU.
    pub running: Option<usize>,
    /// Ticks the running process has held the CPU since its last dispatch.
    pub stint: Ticks,
    pub ready: ReadyQueue,
    /// Next not-yet-queued slot in the arrival-sorted batch.
    pub cursor: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::process::Batch;

    #[test]
    fn resort_orders_by_key_with_id_tiebreak() {
        let mut batch = Batch::new();
        batch.create(1, 0, 4, 2);
        batch.create(2, 0, 4, 1);
        batch.create(3, 0, 4, 1);
        let mut queue = ReadyQueue::new();
        for idx in [0, 2, 1] {
            queue.push_back(idx);
        }
        queue.resort(&batch.procs, SortKey::Priority);
        let order: Vec<_> = queue.iter().collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn rotation_preserves_fifo_order() {
        let mut queue = ReadyQueue::new();
        queue.push_back(0);
        queue.push_back(1);
        let head = queue.pop_front().unwrap();
        queue.push_back(head);
        assert_eq!(queue.front(), Some(1));
        assert_eq!(queue.len(), 2);
    }
}

use super::process::Process;
use super::state::SimState;

/// Per-tick invariant checker. All checks are `debug_assert!`, so release
/// builds pay nothing.
#[derive(Debug, Default)]
pub struct Observer {
    ticks_seen: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks_seen(&self) -> u64 {
        self.ticks_seen
    }

    pub fn observe(&mut self, procs: &[Process], state: &SimState) {
        self.ticks_seen += 1;

        if let Some(idx) = state.running {
            let p = &procs[idx];
            debug_assert!(
                !state.ready.contains(idx),
                "running process {} must not sit in the ready queue",
                p.id
            );
            debug_assert!(
                p.remaining <= p.burst,
                "process {} remaining {} exceeds burst {}",
                p.id,
                p.remaining,
                p.burst
            );
            debug_assert_eq!(
                p.runtime + state.stint,
                p.burst - p.remaining,
                "process {} runtime accounting out of sync with dispatch history",
                p.id
            );
        }

        for idx in state.ready.iter() {
            let p = &procs[idx];
            debug_assert!(
                p.arrival <= state.clock,
                "process {} queued before its arrival",
                p.id
            );
            debug_assert!(
                p.remaining > 0,
                "completed process {} still present in the ready queue",
                p.id
            );
            debug_assert_eq!(
                p.runtime,
                p.burst - p.remaining,
                "queued process {} has unfolded runtime",
                p.id
            );
        }
    }
}

use std::cmp::Ordering;

use average::{Estimate, Mean};
use rustc_hash::FxHashMap;
use tracing::debug;

use super::event::SchedEvent;
use super::observer::Observer;
use super::process::{Batch, ProcId, SortKey};
use super::state::SimState;
use crate::policy::Policy;

/// One algorithm run over an exclusively owned deep copy of the canonical
/// batch. The copy lives exactly as long as the dispatcher and is dropped
/// with it once the wait-time result has been extracted.
pub struct Dispatcher {
    procs: Batch,
    state: SimState,
    policy: Policy,
    observer: Observer,
}

impl Dispatcher {
    /// Deep-copies the canonical batch. The batch must already be sorted by
    /// arrival time (ties by id); well-formedness is the caller's contract.
    pub fn new(batch: &Batch, policy: Policy) -> Self {
        Self {
            procs: batch.clone(),
            state: SimState::default(),
            policy,
            observer: Observer::new(),
        }
    }

    pub fn finished(&self) -> bool {
        self.state.completed == self.procs.len()
    }

    pub fn procs(&self) -> &Batch {
        &self.procs
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Drives the run to completion and returns the full event trace.
    pub fn run(&mut self) -> Vec<SchedEvent> {
        let mut events = Vec::new();
        while !self.finished() {
            self.step(&mut events);
        }
        events
    }

    /// Advances the simulation by one tick. FCFS has no clock stepping and
    /// resolves the whole batch on its first step.
    pub fn step(&mut self, events: &mut Vec<SchedEvent>) {
        match self.policy {
            Policy::FirstCome => self.step_first_come(events),
            Policy::NonPreemptive(key) => self.step_non_preemptive(key.sort_key(), events),
            Policy::Preemptive(key) => self.step_preemptive(key.sort_key(), events),
            Policy::RoundRobin { quantum } => self.step_round_robin(quantum, events),
        }
        self.observer.observe(&self.procs.procs, &self.state);
    }

    pub fn average_wait(&self) -> f64 {
        self.procs
            .procs
            .iter()
            .map(|p| p.wait_time() as f64)
            .collect::<Mean>()
            .estimate()
    }

    pub fn wait_times(&self) -> FxHashMap<ProcId, i64> {
        self.procs
            .procs
            .iter()
            .map(|p| (p.id, p.wait_time()))
            .collect()
    }

    /// Closed form: the batch is arrival-sorted and runs back to back, so
    /// each dispatch lands at the cumulative burst of everything before it.
    fn step_first_come(&mut self, events: &mut Vec<SchedEvent>) {
        for p in &mut self.procs.procs {
            p.last_dispatch = self.state.clock;
            events.push(SchedEvent::Dispatched {
                id: p.id,
                at: self.state.clock,
            });
            self.state.clock += p.burst;
            p.remaining = 0;
            events.push(SchedEvent::Completed {
                id: p.id,
                at: self.state.clock,
            });
            self.state.completed += 1;
        }
    }

    fn step_non_preemptive(&mut self, key: SortKey, events: &mut Vec<SchedEvent>) {
        self.intake();
        self.state.ready.resort(&self.procs.procs, key);

        // A running process is never interrupted mid-burst; it only leaves
        // the CPU once it has executed its full burst since dispatch.
        if let Some(idx) = self.state.running {
            let p = &self.procs.procs[idx];
            if self.state.clock - p.last_dispatch == p.burst {
                self.retire(idx, events);
            }
        }
        if self.state.running.is_none() {
            if let Some(next) = self.state.ready.pop_front() {
                self.dispatch(next, events);
            }
        }

        self.burn_tick();
    }

    fn step_preemptive(&mut self, key: SortKey, events: &mut Vec<SchedEvent>) {
        if let Some(idx) = self.state.running {
            if self.procs.procs[idx].remaining == 0 {
                self.retire(idx, events);
                if let Some(next) = self.state.ready.pop_front() {
                    self.dispatch(next, events);
                }
            }
        }

        self.intake();
        self.state.ready.resort(&self.procs.procs, key);

        // Preempt whenever the queue head strictly precedes the running
        // process under the policy order; ties keep the incumbent since the
        // id tie-break makes the order total.
        if let Some(head) = self.state.ready.front() {
            let take = match self.state.running {
                None => true,
                Some(cur) => {
                    key.compare(&self.procs.procs[head], &self.procs.procs[cur]) == Ordering::Less
                }
            };
            if take {
                if let Some(cur) = self.state.running {
                    self.preempt(cur, events);
                    self.state.ready.resort(&self.procs.procs, key);
                }
                if let Some(next) = self.state.ready.pop_front() {
                    self.dispatch(next, events);
                }
            }
        }

        self.burn_tick();
    }

    fn step_round_robin(&mut self, quantum: u64, events: &mut Vec<SchedEvent>) {
        if let Some(idx) = self.state.running {
            if self.procs.procs[idx].remaining == 0 {
                self.retire(idx, events);
                if let Some(next) = self.state.ready.pop_front() {
                    self.dispatch(next, events);
                }
            }
        }

        // The quantum is the only preemption trigger; with an otherwise
        // empty queue the process rotates back onto itself.
        if let Some(idx) = self.state.running {
            if self.state.stint == quantum {
                self.preempt(idx, events);
                if let Some(next) = self.state.ready.pop_front() {
                    self.dispatch(next, events);
                }
            }
        }

        self.intake();
        if self.state.running.is_none() {
            if let Some(next) = self.state.ready.pop_front() {
                self.dispatch(next, events);
            }
        }

        self.burn_tick();
    }

    /// Queues every not-yet-queued process whose arrival equals the current
    /// clock, in canonical (arrival-then-id) order. Equal arrivals are
    /// contiguous in the sorted batch.
    fn intake(&mut self) {
        while self.state.cursor < self.procs.len()
            && self.procs.procs[self.state.cursor].arrival == self.state.clock
        {
            self.state.ready.push_back(self.state.cursor);
            self.state.cursor += 1;
        }
    }

    fn dispatch(&mut self, idx: usize, events: &mut Vec<SchedEvent>) {
        let clock = self.state.clock;
        let p = &mut self.procs.procs[idx];
        p.last_dispatch = clock;
        debug!(id = p.id, clock, "dispatch");
        events.push(SchedEvent::Dispatched { id: p.id, at: clock });
        self.state.running = Some(idx);
        self.state.stint = 0;
    }

    fn retire(&mut self, idx: usize, events: &mut Vec<SchedEvent>) {
        let clock = self.state.clock;
        let p = &mut self.procs.procs[idx];
        p.remaining = 0;
        debug!(id = p.id, clock, "complete");
        events.push(SchedEvent::Completed { id: p.id, at: clock });
        self.state.running = None;
        self.state.completed += 1;
    }

    /// Folds the elapsed stint into accumulated runtime and hands the
    /// process back to the ready queue.
    fn preempt(&mut self, idx: usize, events: &mut Vec<SchedEvent>) {
        let clock = self.state.clock;
        let stint = self.state.stint;
        let p = &mut self.procs.procs[idx];
        p.runtime += stint;
        debug!(id = p.id, clock, ran = stint, "preempt");
        events.push(SchedEvent::Preempted { id: p.id, at: clock });
        self.state.ready.push_back(idx);
        self.state.running = None;
    }

    fn burn_tick(&mut self) {
        if let Some(idx) = self.state.running {
            self.procs.procs[idx].remaining -= 1;
            self.state.stint += 1;
        }
        self.state.clock += 1;
    }
}

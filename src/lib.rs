//! Batch CPU-scheduling simulator.
//!
//! A fixed batch of process descriptors is run through six scheduling
//! algorithm variants (FCFS, non-preemptive and preemptive priority/SJF,
//! round-robin) and each run reports the average time its processes spent
//! waiting for the CPU. Every run owns a fresh deep copy of the canonical
//! batch, so runs are independent and the caller's batch is never mutated.

pub mod core;
pub mod input;
pub mod policy;
pub mod sim;

pub use crate::core::{Batch, Dispatcher, ProcId, Process, SchedEvent, SortKey, Ticks};
pub use crate::policy::{Policy, SelectKey};
pub use crate::sim::{AlgoResult, Sim};

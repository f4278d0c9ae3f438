pub mod driver;
pub mod event;
pub mod observer;
pub mod process;
pub mod state;

pub use driver::Dispatcher;
pub use event::SchedEvent;
pub use process::{Batch, ProcId, Process, SortKey, Ticks};
pub use state::{ReadyQueue, SimState};

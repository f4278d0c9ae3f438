pub mod driver;
pub mod workload;

pub use driver::{AlgoResult, Sim};
pub use workload::bernoulli_batch;

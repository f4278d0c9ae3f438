use std::path::Path;

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use schedsim::{input, sim::bernoulli_batch, Batch, Sim, Ticks};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (quantum, batch) = match args.as_slice() {
        [path] => input::load_workload(Path::new(path))
            .with_context(|| format!("reading workload {path}"))?,
        [flag, seed, quantum] if flag.as_str() == "--random" => {
            let seed: u64 = seed.parse().context("seed must be an integer")?;
            let quantum: Ticks = quantum.parse().context("quantum must be an integer")?;
            (quantum, random_workload(seed))
        }
        _ => bail!("usage: schedsim <workload-file> | schedsim --random <seed> <quantum>"),
    };

    if batch.is_empty() {
        bail!("workload contains no process descriptors");
    }
    tracing::debug!(processes = batch.len(), quantum, "canonical batch built");

    let sim = Sim::new(batch, quantum);
    for result in sim.run_all() {
        println!(
            "Average wait time for {} Algorithm : {:.6}",
            result.label, result.avg_wait
        );
    }
    Ok(())
}

/// Dense arrivals so even the FCFS closed form sees a gap-free schedule.
fn random_workload(seed: u64) -> Batch {
    bernoulli_batch(100, 0.5, 0.4, 2, 6, 4, seed)
}

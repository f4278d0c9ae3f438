use rand::prelude::*;

use crate::core::process::{Batch, ProcId, Ticks};

/// Synthesizes a reproducible batch: each tick flips a biased coin for an
/// arrival, each arrival flips another for a short or long burst, and
/// priorities are drawn uniformly. Ids are assigned sequentially from 1, so
/// arrival order and id order coincide.
pub fn bernoulli_batch(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_burst: Ticks,
    long_burst: Ticks,
    priority_levels: u64,
    seed: u64,
) -> Batch {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut batch = Batch::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };
            let priority = rng.random_range(0..priority_levels);
            let id = batch.len() as ProcId + 1;
            batch.create(id, t, burst, priority);
        }
    }

    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_batch() {
        let a = bernoulli_batch(100, 0.4, 0.5, 2, 6, 4, 42);
        let b = bernoulli_batch(100, 0.4, 0.5, 2, 6, 4, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn generated_ids_are_unique_and_sequential() {
        let batch = bernoulli_batch(100, 0.5, 0.5, 2, 6, 4, 1);
        for (i, p) in batch.procs.iter().enumerate() {
            assert_eq!(p.id, i as ProcId + 1);
            assert!(p.burst == 2 || p.burst == 6);
        }
    }
}

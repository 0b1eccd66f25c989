//! Deterministic workload construction.

use rand::prelude::*;

use crate::core::state::{Pid, Process, Ticks};

/// Four-process fixture small enough to trace by hand.
pub fn small_synthetic() -> Vec<Process> {
    vec![
        Process::new(1, 0, 8),
        Process::new(2, 1, 4),
        Process::new(3, 2, 9),
        Process::new(4, 3, 5),
    ]
}

/// Pseudo-random workload, identical for a given seed.
pub fn large_synthetic(count: usize, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arrival: Ticks = 0;
    (0..count)
        .map(|i| {
            arrival += rng.random_range(0..=4);
            Process::new(i as Pid + 1, arrival, rng.random_range(1..=12))
        })
        .collect()
}

/// Named workloads that probe the simulator's boundary behavior.
pub fn edge_cases() -> Vec<(&'static str, Vec<Process>)> {
    vec![
        ("single process", vec![Process::new(1, 0, 5)]),
        (
            "simultaneous arrivals",
            vec![
                Process::new(1, 0, 3),
                Process::new(2, 0, 3),
                Process::new(3, 0, 3),
            ],
        ),
        ("zero burst", vec![Process::new(1, 0, 0)]),
        (
            "arrival gap",
            vec![Process::new(1, 0, 2), Process::new(2, 10, 2)],
        ),
    ]
}

//! Summary statistics over a completed schedule.

use average::{Estimate, Mean};
use serde::Serialize;

use super::error::SimError;
use super::state::{Process, Ticks};

/// The five statistics reported for a policy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub response: f64,
    pub throughput: f64,
    pub cpu_util: f64,
}

impl Metrics {
    /// Fixed report labels paired with their values.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("AWT", self.avg_waiting),
            ("ATT", self.avg_turnaround),
            ("RT", self.response),
            ("Throughput", self.throughput),
            ("CPU_Util", self.cpu_util),
        ]
    }
}

/// Compute summary statistics for a completed schedule.
///
/// Every process must carry a start and a finish. A schedule whose makespan
/// is zero has no defined rates and is rejected rather than yielding
/// infinities.
pub fn compute(schedule: &[Process]) -> Result<Metrics, SimError> {
    if schedule.is_empty() {
        return Err(SimError::EmptyWorkload);
    }

    let mut waits = Mean::new();
    let mut turnarounds = Mean::new();
    let mut earliest_arrival = Ticks::MAX;
    let mut latest_finish: Ticks = 0;
    let mut total_burst: Ticks = 0;

    for proc in schedule {
        let (Some(start), Some(finish)) = (proc.start, proc.finish) else {
            return Err(SimError::Unfinished(proc.pid));
        };
        waits.add((start - proc.arrival) as f64);
        turnarounds.add((finish - proc.arrival) as f64);
        earliest_arrival = earliest_arrival.min(proc.arrival);
        latest_finish = latest_finish.max(finish);
        total_burst += proc.burst;
    }

    let makespan = latest_finish - earliest_arrival;
    if makespan == 0 {
        return Err(SimError::ZeroMakespan);
    }

    let avg_waiting = waits.estimate();
    Ok(Metrics {
        avg_waiting,
        avg_turnaround: turnarounds.estimate(),
        // Only first-dispatch latency is tracked, so response equals waiting.
        response: avg_waiting,
        throughput: schedule.len() as f64 / makespan as f64,
        cpu_util: 100.0 * total_burst as f64 / makespan as f64,
    })
}

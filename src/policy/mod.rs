pub mod fcfs;
pub mod mlfq;
pub mod sjf;
pub mod srtf;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::SimError;
use crate::core::driver::SimCore;
use crate::core::state::{ProcId, Process, Schedule, Ticks};

/// The closed set of scheduling disciplines the simulator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    Fcfs,
    Sjf,
    Srtf,
    Mlfq,
}

impl Policy {
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sjf, Policy::Srtf, Policy::Mlfq];

    /// Run this discipline over its own copy of `workload`.
    pub fn run(self, workload: &[Process]) -> Result<Schedule, SimError> {
        match self {
            Policy::Fcfs => fcfs::run(workload),
            Policy::Sjf => sjf::run(workload),
            Policy::Srtf => srtf::run(workload),
            Policy::Mlfq => mlfq::run(workload),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::Srtf => write!(f, "SRTF"),
            Policy::Mlfq => write!(f, "MLFQ"),
        }
    }
}

/// Selection key for work-ordered ready queues: least work first, ties by
/// arrival and then input position, which matches the order processes were
/// admitted in.
// KeyedPriorityQueue is a max-heap, so the Ord here is flipped.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct LeastWork {
    work: Ticks,
    arrival: Ticks,
    slot: ProcId,
}

impl LeastWork {
    pub(crate) fn for_proc(core: &SimCore, id: ProcId) -> Self {
        let proc = core.proc(id);
        Self {
            work: proc.remaining,
            arrival: proc.arrival,
            slot: id,
        }
    }
}

impl PartialOrd for LeastWork {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LeastWork {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .work
            .cmp(&self.work)
            .then_with(|| other.arrival.cmp(&self.arrival))
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_are_fixed() {
        let names: Vec<String> = Policy::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["FCFS", "SJF", "SRTF", "MLFQ"]);
    }

    #[test]
    fn run_tags_the_schedule_with_its_policy() {
        let workload = [Process::new(1, 0, 3)];
        for policy in Policy::ALL {
            let schedule = policy.run(&workload).unwrap();
            assert_eq!(schedule.policy, policy);
        }
    }

    #[test]
    fn least_work_orders_smallest_first() {
        let shorter = LeastWork {
            work: 2,
            arrival: 9,
            slot: 9,
        };
        let longer = LeastWork {
            work: 5,
            arrival: 0,
            slot: 0,
        };
        // Max-heap key: the shorter job must compare greater.
        assert!(shorter > longer);

        let earlier = LeastWork {
            work: 2,
            arrival: 1,
            slot: 3,
        };
        let later = LeastWork {
            work: 2,
            arrival: 4,
            slot: 1,
        };
        assert!(earlier > later);
    }
}

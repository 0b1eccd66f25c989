//! Two-level feedback queue: fixed quanta, one-way demotion.

use std::collections::VecDeque;

use super::Policy;
use crate::core::SimError;
use crate::core::driver::SimCore;
use crate::core::state::{ProcId, Process, Schedule, Ticks};

/// Quantum of the high-priority entry queue.
pub const Q1: Ticks = 4;
/// Quantum of the demoted queue.
pub const Q2: Ticks = 8;

pub fn run(workload: &[Process]) -> Result<Schedule, SimError> {
    run_with_quanta(workload, Q1, Q2)
}

/// Arrivals enter the first queue, which always dispatches ahead of the
/// second. A slice that does not finish its process sends it to the back of
/// the second queue, wherever it ran from; there is no promotion path back.
pub fn run_with_quanta(workload: &[Process], q1: Ticks, q2: Ticks) -> Result<Schedule, SimError> {
    assert!(q1 > 0 && q2 > 0, "quanta must be positive");

    let mut core = SimCore::new(workload)?;
    let mut high: VecDeque<ProcId> = VecDeque::new();
    let mut low: VecDeque<ProcId> = VecDeque::new();

    while !core.all_completed() {
        high.extend(core.admit());
        let (id, quantum) = match high.pop_front() {
            Some(id) => (id, q1),
            None => match low.pop_front() {
                Some(id) => (id, q2),
                None => {
                    let jumped = core.jump_to_next_arrival();
                    debug_assert!(jumped, "both queues empty with no pending arrivals");
                    continue;
                }
            },
        };
        let slice = quantum.min(core.proc(id).remaining);
        core.run_for(id, slice);
        if !core.try_finish(id) {
            low.push_back(id);
        }
    }

    Ok(core.into_schedule(Policy::Mlfq))
}

//! Shortest remaining time first: the preemptive variant of SJF, re-evaluated
//! at every tick.

use keyed_priority_queue::KeyedPriorityQueue;

use super::{LeastWork, Policy};
use crate::core::SimError;
use crate::core::driver::SimCore;
use crate::core::state::{ProcId, Process, Schedule};

pub fn run(workload: &[Process]) -> Result<Schedule, SimError> {
    let mut core = SimCore::new(workload)?;
    let mut ready: KeyedPriorityQueue<ProcId, LeastWork> = KeyedPriorityQueue::new();

    while !core.all_completed() {
        for id in core.admit() {
            ready.push(id, LeastWork::for_proc(&core, id));
        }
        let Some((id, _)) = ready.pop() else {
            let jumped = core.jump_to_next_arrival();
            debug_assert!(jumped, "ready queue empty with no pending arrivals");
            continue;
        };
        // One tick at a time, so a shorter arrival takes over at the next
        // decision point. Zero-burst work falls straight through to finish.
        let slice = core.proc(id).remaining.min(1);
        core.run_for(id, slice);
        if !core.try_finish(id) {
            ready.push(id, LeastWork::for_proc(&core, id));
        }
    }

    Ok(core.into_schedule(Policy::Srtf))
}

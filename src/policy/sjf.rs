//! Shortest job first, non-preemptive.
//!
//! Long jobs can starve while shorter work keeps arriving; that is the
//! discipline's documented behavior, not a defect.

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
        let burst = core.proc(id).remaining;
        core.run_for(id, burst);
        core.try_finish(id);
    }

    Ok(core.into_schedule(Policy::Sjf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Pid;
    use crate::sim::workload;

    fn pids(schedule: &Schedule) -> Vec<Pid> {
        schedule.procs.iter().map(|p| p.pid).collect()
    }

    #[test]
    fn shortest_ready_job_runs_next() {
        // P1 is alone at t=0 and runs out its burst; by then everything else
        // is ready and goes shortest-first.
        let schedule = run(&workload::small_synthetic()).unwrap();
        assert_eq!(pids(&schedule), [1, 2, 4, 3]);

        let finishes: Vec<_> = schedule.procs.iter().map(|p| p.finish.unwrap()).collect();
        assert_eq!(finishes, [8, 12, 17, 26]);
    }

    #[test]
    fn back_to_back_work_has_no_idle_gaps() {
        let schedule = run(&workload::small_synthetic()).unwrap();
        let total: u64 = schedule.procs.iter().map(|p| p.burst).sum();
        assert_eq!(schedule.procs.last().unwrap().finish, Some(total));
    }

    #[test]
    fn running_job_is_never_preempted() {
        let workload = [Process::new(1, 0, 10), Process::new(2, 1, 1)];
        let schedule = run(&workload).unwrap();
        assert_eq!(pids(&schedule), [1, 2]);
        assert_eq!(schedule.procs[0].finish, Some(10));
    }

    #[test]
    fn burst_ties_fall_back_to_arrival() {
        let workload = [
            Process::new(1, 0, 6),
            Process::new(2, 2, 3),
            Process::new(3, 1, 3),
        ];
        let schedule = run(&workload).unwrap();
        // P3 and P2 tie on burst; P3 arrived first.
        assert_eq!(pids(&schedule), [1, 3, 2]);
    }

    #[test]
    fn clock_jumps_when_nothing_is_ready() {
        let workload = [Process::new(1, 0, 1), Process::new(2, 100, 1)];
        let schedule = run(&workload).unwrap();
        assert_eq!(schedule.procs[1].start, Some(100));
        assert_eq!(schedule.procs[1].finish, Some(101));
    }
}

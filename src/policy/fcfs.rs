//! First-come, first-served: run-to-completion in arrival order.

use std::collections::VecDeque;

use super::Policy;
use crate::core::SimError;
use crate::core::driver::SimCore;
use crate::core::state::{ProcId, Process, Schedule};

pub fn run(workload: &[Process]) -> Result<Schedule, SimError> {
    let mut core = SimCore::new(workload)?;
    let mut ready: VecDeque<ProcId> = VecDeque::new();

    while !core.all_completed() {
        ready.extend(core.admit());
        let Some(id) = ready.pop_front() else {
            let jumped = core.jump_to_next_arrival();
            debug_assert!(jumped, "ready queue empty with no pending arrivals");
            continue;
        };
        let burst = core.proc(id).remaining;
        core.run_for(id, burst);
        core.try_finish(id);
    }

    Ok(core.into_schedule(Policy::Fcfs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Pid;

    fn pids(schedule: &Schedule) -> Vec<Pid> {
        schedule.procs.iter().map(|p| p.pid).collect()
    }

    #[test]
    fn completion_follows_arrival_order() {
        let workload = [
            Process::new(1, 2, 3),
            Process::new(2, 0, 3),
            Process::new(3, 1, 3),
        ];
        let schedule = run(&workload).unwrap();
        assert_eq!(pids(&schedule), [2, 3, 1]);
    }

    #[test]
    fn arrival_ties_keep_input_order() {
        let workload = [
            Process::new(5, 0, 2),
            Process::new(6, 0, 2),
            Process::new(7, 0, 2),
        ];
        let schedule = run(&workload).unwrap();
        assert_eq!(pids(&schedule), [5, 6, 7]);
    }

    #[test]
    fn later_short_job_never_preempts() {
        let workload = [Process::new(1, 0, 8), Process::new(2, 1, 1)];
        let schedule = run(&workload).unwrap();
        assert_eq!(pids(&schedule), [1, 2]);
        assert_eq!(schedule.procs[1].start, Some(8));
        assert_eq!(schedule.procs[1].finish, Some(9));
    }

    #[test]
    fn runs_are_uninterrupted() {
        let workload = [
            Process::new(1, 0, 4),
            Process::new(2, 1, 6),
            Process::new(3, 2, 2),
        ];
        let schedule = run(&workload).unwrap();
        for proc in &schedule.procs {
            assert_eq!(proc.finish.unwrap() - proc.start.unwrap(), proc.burst);
        }
    }
}

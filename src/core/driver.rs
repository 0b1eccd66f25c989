use tracing::debug;

use super::error::SimError;
use super::observer;
use super::state::{ProcId, Process, Schedule, Ticks, validate};
use crate::policy::Policy;

/// Shared virtual-clock engine. A policy decides who runs and for how long;
/// the engine owns the process table, admission, time, and completion
/// bookkeeping.
pub struct SimCore {
    now: Ticks,
    procs: Vec<Process>,
    /// Process ids ordered by (arrival, input position); `cursor` marks the
    /// admission frontier.
    arrivals: Vec<ProcId>,
    cursor: usize,
    completed: Vec<ProcId>,
}

impl SimCore {
    /// Clones the workload into a private table, so concurrent policy runs
    /// never share mutable state.
    pub fn new(workload: &[Process]) -> Result<Self, SimError> {
        validate(workload)?;
        let procs = workload.to_vec();
        let mut arrivals: Vec<ProcId> = (0..procs.len()).collect();
        // Stable: equal arrivals keep input order.
        arrivals.sort_by_key(|&id| procs[id].arrival);
        Ok(Self {
            now: 0,
            procs,
            arrivals,
            cursor: 0,
            completed: Vec::new(),
        })
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn proc(&self, id: ProcId) -> &Process {
        &self.procs[id]
    }

    /// Admit every process that has arrived by `now`, in admission order.
    pub fn admit(&mut self) -> Vec<ProcId> {
        let count = self.arrivals[self.cursor..]
            .iter()
            .take_while(|&&id| self.procs[id].arrival <= self.now)
            .count();
        let admitted = self.arrivals[self.cursor..self.cursor + count].to_vec();
        self.cursor += count;
        admitted
    }

    /// Jump the clock to the next pending arrival. Idle time is charged to
    /// no process. Returns false when nothing is pending.
    pub fn jump_to_next_arrival(&mut self) -> bool {
        match self.arrivals.get(self.cursor) {
            Some(&id) => {
                let arrival = self.procs[id].arrival;
                debug_assert!(arrival > self.now, "jump requested while work was ready");
                self.now = arrival;
                true
            }
            None => false,
        }
    }

    /// Run `id` for `dur` ticks: fix `start` on first dispatch, consume
    /// `remaining`, advance the clock. A zero-length dispatch of a process
    /// with no work left lets `try_finish` finalize it at the current tick.
    pub fn run_for(&mut self, id: ProcId, dur: Ticks) {
        let now = self.now;
        let proc = &mut self.procs[id];
        debug_assert!(
            dur <= proc.remaining,
            "process {} dispatched past its remaining work",
            proc.pid
        );
        if proc.start.is_none() {
            proc.start = Some(now);
        }
        proc.remaining -= dur;
        debug!(pid = proc.pid, at = now, dur, left = proc.remaining, "dispatch");
        self.now += dur;
    }

    /// Finalize `id` if it has no work left, recording completion at the
    /// current tick. Returns whether the process finished.
    pub fn try_finish(&mut self, id: ProcId) -> bool {
        if self.procs[id].remaining > 0 {
            return false;
        }
        let now = self.now;
        let proc = &mut self.procs[id];
        proc.finish = Some(now);
        observer::check_completed(proc);
        debug!(pid = proc.pid, at = now, "finish");
        self.completed.push(id);
        true
    }

    pub fn all_completed(&self) -> bool {
        self.completed.len() == self.procs.len()
    }

    /// Consume the engine, yielding processes in completion order.
    pub fn into_schedule(self, policy: Policy) -> Schedule {
        debug_assert!(
            self.all_completed(),
            "schedule requested before the run drained"
        );
        let procs = self
            .completed
            .iter()
            .map(|&id| self.procs[id].clone())
            .collect();
        Schedule { policy, procs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admission_keeps_input_order_on_equal_arrivals() {
        let workload = [
            Process::new(10, 5, 1),
            Process::new(20, 5, 1),
            Process::new(30, 0, 1),
        ];
        let mut core = SimCore::new(&workload).unwrap();

        assert_eq!(core.admit(), vec![2]);
        assert!(core.jump_to_next_arrival());
        assert_eq!(core.now(), 5);
        assert_eq!(core.admit(), vec![0, 1]);
    }

    #[test]
    fn clock_jumps_over_idle_gaps() {
        let workload = [Process::new(1, 0, 1), Process::new(2, 10, 1)];
        let mut core = SimCore::new(&workload).unwrap();

        let first = core.admit()[0];
        core.run_for(first, 1);
        assert!(core.try_finish(first));

        assert!(core.admit().is_empty());
        assert!(core.jump_to_next_arrival());
        assert_eq!(core.now(), 10);
        assert_eq!(core.admit(), vec![1]);
    }

    #[test]
    fn jump_reports_exhausted_arrivals() {
        let workload = [Process::new(1, 0, 1)];
        let mut core = SimCore::new(&workload).unwrap();
        core.admit();
        assert!(!core.jump_to_next_arrival());
    }

    #[test]
    fn zero_length_dispatch_finishes_instantly() {
        let workload = [Process::new(1, 0, 0)];
        let mut core = SimCore::new(&workload).unwrap();

        let id = core.admit()[0];
        core.run_for(id, 0);
        assert!(core.try_finish(id));

        let proc = core.proc(id);
        assert_eq!(proc.start, Some(0));
        assert_eq!(proc.finish, Some(0));
    }

    #[test]
    fn start_is_fixed_at_first_dispatch() {
        let workload = [Process::new(1, 0, 4)];
        let mut core = SimCore::new(&workload).unwrap();

        let id = core.admit()[0];
        core.run_for(id, 1);
        assert_eq!(core.proc(id).start, Some(0));

        core.run_for(id, 3);
        assert_eq!(core.proc(id).start, Some(0));
        assert!(core.try_finish(id));
        assert_eq!(core.proc(id).finish, Some(4));
    }
}

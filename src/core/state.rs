use rustc_hash::FxHashSet;
use serde::Serialize;

use super::error::SimError;
use super::metrics::Metrics;
use crate::policy::Policy;

pub type Ticks = u64;
pub type Pid = u32;

// Index into the engine's process table. Table order is input order, so the
// index doubles as the tie-breaking rank of last resort.
pub type ProcId = usize;

/// One schedulable unit of work: immutable demand plus the outcome fields a
/// simulation run fills in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Reserved; no selection rule consults it yet.
    pub priority: i8,
    /// CPU time still owed. Starts at `burst`, only the engine decrements it.
    pub remaining: Ticks,
    /// Tick of first dispatch. Set exactly once.
    pub start: Option<Ticks>,
    /// Tick of completion. Set exactly once, when `remaining` hits zero.
    pub finish: Option<Ticks>,
}

impl Process {
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
            remaining: burst,
            start: None,
            finish: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    /// Ticks spent between arrival and first dispatch.
    pub fn waiting(&self) -> Option<Ticks> {
        self.start.map(|start| start - self.arrival)
    }

    /// Ticks between arrival and completion.
    pub fn turnaround(&self) -> Option<Ticks> {
        self.finish.map(|finish| finish - self.arrival)
    }
}

/// A finished policy run: the input processes in completion order, every one
/// carrying a start and finish.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub policy: Policy,
    pub procs: Vec<Process>,
}

impl Schedule {
    pub fn metrics(&self) -> Result<Metrics, SimError> {
        super::metrics::compute(&self.procs)
    }
}

/// Reject workloads the simulation cannot produce meaningful results for.
/// Arrival and burst are unsigned, so negative demand is unrepresentable;
/// what is left to check is emptiness and identifier hygiene.
pub fn validate(workload: &[Process]) -> Result<(), SimError> {
    if workload.is_empty() {
        return Err(SimError::EmptyWorkload);
    }
    let mut seen = FxHashSet::default();
    for proc in workload {
        if proc.pid == 0 {
            return Err(SimError::InvalidPid(proc.pid));
        }
        if !seen.insert(proc.pid) {
            return Err(SimError::DuplicatePid(proc.pid));
        }
    }
    Ok(())
}

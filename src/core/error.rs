use std::error::Error;
use std::fmt;

use super::state::Pid;

/// Failure modes of the simulation core. The core computes or fails; it
/// never logs-and-continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// The input collection has no processes.
    EmptyWorkload,
    /// Process identifiers must be positive.
    InvalidPid(Pid),
    /// Two processes share the same identifier.
    DuplicatePid(Pid),
    /// Metrics were requested over a schedule with an unfinished process.
    Unfinished(Pid),
    /// All arrivals and finishes coincide, so rates are undefined.
    ZeroMakespan,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorkload => write!(f, "workload contains no processes"),
            Self::InvalidPid(pid) => write!(f, "pid {pid} is not a positive identifier"),
            Self::DuplicatePid(pid) => write!(f, "pid {pid} appears more than once"),
            Self::Unfinished(pid) => write!(f, "process {pid} has not completed"),
            Self::ZeroMakespan => {
                write!(f, "schedule spans zero ticks, rates are undefined")
            }
        }
    }
}

impl Error for SimError {}

//! Debug-build invariant checks on the process table.

use super::state::Process;

/// Sanity-check a process at the moment it is finalized.
pub(crate) fn check_completed(proc: &Process) {
    debug_assert_eq!(
        proc.remaining, 0,
        "process {} finalized with work left",
        proc.pid
    );
    debug_assert!(
        proc.start.is_some(),
        "process {} finalized without a first dispatch",
        proc.pid
    );
    if let (Some(start), Some(finish)) = (proc.start, proc.finish) {
        debug_assert!(
            proc.arrival <= start,
            "process {} started before it arrived",
            proc.pid
        );
        debug_assert!(
            start <= finish,
            "process {} finished before it started",
            proc.pid
        );
        debug_assert!(
            finish - start >= proc.burst,
            "process {} held the CPU for less than its burst",
            proc.pid
        );
    }
}

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::state::{Process, Schedule};
use crate::core::{Metrics, SimError};
use crate::policy::Policy;

/// One policy's completed run over a workload.
#[derive(Debug, Clone)]
pub struct PolicyRun {
    pub schedule: Schedule,
    pub metrics: Metrics,
}

/// Run every policy over its own copy of `workload` and collect the results.
/// Any failure aborts the comparison; presentation is the caller's concern.
pub fn run_all(workload: &[Process]) -> Result<FxHashMap<Policy, PolicyRun>, SimError> {
    let mut runs = FxHashMap::default();
    for policy in Policy::ALL {
        let schedule = policy.run(workload)?;
        let metrics = schedule.metrics()?;
        info!(%policy, procs = schedule.procs.len(), "run complete");
        runs.insert(policy, PolicyRun { schedule, metrics });
    }
    Ok(runs)
}

pub mod driver;
pub mod error;
pub mod metrics;
mod observer;
pub mod state;

pub use driver::SimCore;
pub use error::SimError;
pub use metrics::Metrics;
pub use state::{Pid, ProcId, Process, Schedule, Ticks};

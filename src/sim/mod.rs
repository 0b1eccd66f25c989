pub mod driver;
pub mod workload;

pub use driver::{PolicyRun, run_all};

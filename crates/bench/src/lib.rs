//! Drives every accumulator scheme through create/update/prove/verify and
//! reports timing and proof-size metrics.

mod config;
mod logging;
mod metrics;
mod runner;
mod state;

pub use config::BenchConfig;
pub use logging::init_logging;
pub use metrics::{BenchmarkResult, ExperimentResults};
pub use runner::run_benchmark;
pub use state::generate_random_state;

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The four timing metrics plus proof size for one scheme at one state
/// size, averaged over a config's `num_runs`. Creation time and
/// proof-generation time are reported independently — never conflated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkResult {
    pub scheme_name: String,
    pub state_size: usize,
    pub mean_create_time: Duration,
    pub mean_update_time_per_op: Duration,
    pub mean_prove_time: Duration,
    pub mean_verify_time: Duration,
    pub mean_proof_size: f64,
}

/// All results from a benchmark run, keyed by scheme display name.
pub type ExperimentResults = HashMap<String, Vec<BenchmarkResult>>;

pub(crate) fn mean_duration(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = samples.iter().sum();
    total / samples.len() as u32
}

pub(crate) fn mean_usize(samples: &[usize]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<usize>() as f64 / samples.len() as f64
}

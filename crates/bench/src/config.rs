use serde::{Deserialize, Serialize};

fn default_num_runs() -> usize {
    5
}

fn default_fixed_updates() -> usize {
    100
}

fn default_state_sizes() -> Vec<usize> {
    vec![100, 500, 1000]
}

/// Parameters for a benchmark sweep. The RSA modulus width, prime-search
/// bit length, and hybrid segment count are not configurable here — the
/// spec treats them as fixed properties of the schemes themselves (see
/// `setacc_core::{RSA_MODULUS_BITS, PRIME_BITS, DEFAULT_HYBRID_SEGMENTS}`),
/// not knobs a benchmark run turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_state_sizes")]
    pub state_sizes: Vec<usize>,
    #[serde(default = "default_num_runs")]
    pub num_runs: usize,
    #[serde(default = "default_fixed_updates")]
    pub fixed_updates: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            state_sizes: default_state_sizes(),
            num_runs: default_num_runs(),
            fixed_updates: default_fixed_updates(),
        }
    }
}

impl BenchConfig {
    /// The small, fast profile suitable for local iteration.
    pub fn quick() -> Self {
        BenchConfig::default()
    }

    /// The larger profile approximating the original paper's state-size
    /// sweep.
    pub fn paper() -> Self {
        BenchConfig {
            state_sizes: vec![100, 1000, 5000, 10000, 50000],
            ..BenchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_quick_profile() {
        assert_eq!(BenchConfig::default().state_sizes, BenchConfig::quick().state_sizes);
    }

    #[test]
    fn paper_profile_has_five_sizes() {
        assert_eq!(BenchConfig::paper().state_sizes.len(), 5);
    }

    #[test]
    fn default_num_runs_is_five() {
        assert_eq!(BenchConfig::default().num_runs, 5);
    }

    #[test]
    fn deserializing_empty_object_fills_in_defaults() {
        let config: BenchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.num_runs, 5);
        assert_eq!(config.fixed_updates, 100);
    }

    #[test]
    fn deserializing_can_override_a_single_field() {
        let config: BenchConfig = serde_json::from_str(r#"{"num_runs": 1}"#).unwrap();
        assert_eq!(config.num_runs, 1);
        assert_eq!(config.state_sizes, default_state_sizes());
    }
}

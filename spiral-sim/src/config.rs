//! Run configuration, fixed for the lifetime of an engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{SpiralError, SpiralResult};

/// Parameters of one simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of concentric rings (Nr). Must be positive.
    pub ring_count: usize,

    /// Probability that an "on" cell activates one specific neighbor per step.
    pub spread_probability: f64,

    /// Probability that a cell starts "on".
    pub initial_on_probability: f64,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Create a config with the default initial-on probability and no seed.
    pub fn new(ring_count: usize, spread_probability: f64) -> Self {
        Self {
            ring_count,
            spread_probability,
            ..Self::default()
        }
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initial-on probability.
    pub fn with_initial_on_probability(mut self, p: f64) -> Self {
        self.initial_on_probability = p;
        self
    }

    /// Reject ring counts of zero and probabilities outside [0, 1] (NaN included).
    pub fn validate(&self) -> SpiralResult<()> {
        if self.ring_count == 0 {
            return Err(SpiralError::config("ring_count must be positive"));
        }
        check_probability("spread_probability", self.spread_probability)?;
        check_probability("initial_on_probability", self.initial_on_probability)?;
        Ok(())
    }

    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> SpiralResult<Self> {
        let config: SimConfig = serde_json::from_str(json)
            .map_err(|e| SpiralError::config(format!("malformed config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SpiralResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SpiralError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ring_count: DEFAULT_RING_COUNT,
            spread_probability: DEFAULT_SPREAD_PROBABILITY,
            initial_on_probability: DEFAULT_INITIAL_ON_PROBABILITY,
            seed: None,
        }
    }
}

fn check_probability(name: &str, p: f64) -> SpiralResult<()> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(SpiralError::config(format!("{} must be in [0, 1], got {}", name, p)))
    }
}

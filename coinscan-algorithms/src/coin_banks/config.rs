use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    SinglePass,
    MultiStart,
    Lookahead,
    Static,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub strategy: Strategy,
    pub runs: usize,
    pub seed: u64,
    pub lookahead_depth: usize,
    pub lookahead_width: Option<usize>,
    pub epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::MultiStart,
            runs: 10,
            seed: 42,
            lookahead_depth: 2,
            lookahead_width: None,
            epsilon: 1e-8,
        }
    }
}

impl Config {
    /// Overlays user hyperparameters on the defaults. Unknown keys and ill-typed values
    /// are rejected.
    pub fn initialize(hyperparameters: &Option<Map<String, Value>>) -> Result<Self> {
        let mut merged_params = serde_json::to_value(Self::default())?;
        if let (Value::Object(ref mut obj), Some(map)) = (&mut merged_params, hyperparameters) {
            for (k, v) in map {
                if !obj.contains_key(k) {
                    return Err(anyhow!("Unknown hyperparameter '{}'", k));
                }
                obj.insert(k.clone(), v.clone());
            }
        }

        let config: Self = serde_json::from_value(merged_params)
            .map_err(|e| anyhow!("Invalid hyperparameters: {}", e))?;
        if config.epsilon.is_nan() || config.epsilon < 0.0 {
            return Err(anyhow!(
                "Invalid hyperparameters: epsilon ({}) must be non-negative",
                config.epsilon
            ));
        }
        if config.lookahead_width == Some(0) {
            return Err(anyhow!(
                "Invalid hyperparameters: lookahead_width must be at least 1"
            ));
        }
        Ok(config)
    }
}

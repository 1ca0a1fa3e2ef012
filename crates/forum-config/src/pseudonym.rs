//! Pseudonym generator configuration.

use serde::{Deserialize, Serialize};

const fn default_max_attempts() -> u32 {
    1000
}

const fn default_sweep() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PseudonymConfig {
    /// Random draws before giving up on a fresh name.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Scan the whole combination space once the random draws are spent.
    #[serde(default = "default_sweep")]
    pub sweep_on_exhaustion: bool,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PseudonymConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            sweep_on_exhaustion: default_sweep(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = PseudonymConfig::default();
        assert_eq!(config.max_attempts, 1000);
        assert!(config.sweep_on_exhaustion);
        assert!(config.seed.is_none());
    }
}

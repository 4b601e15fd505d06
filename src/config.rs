//! Engine configuration

use std::{fs, path::Path};

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, tictactoe::MINIMAX_DEPTH};

/// Configuration for the CPU player.
///
/// # Examples
///
/// ```
/// use tictactoe_minimax::config::EngineConfig;
///
/// let config = EngineConfig::new().with_seed(42).with_max_depth(4);
/// assert_eq!(config.max_depth, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Depth searched on turn 0; each later turn searches one ply less
    pub max_depth: u32,
    /// Random seed for move ordering; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// Full-depth search with a random seed
    pub fn new() -> Self {
        Self {
            max_depth: MINIMAX_DEPTH,
            seed: None,
        }
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the depth searched on the first turn.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load a configuration from a JSON file and validate it.
    ///
    /// Missing fields fall back to [`EngineConfig::new`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the depth is within what a 3x3 board can use.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MINIMAX_DEPTH).contains(&self.max_depth) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "max_depth must be between 1 and {MINIMAX_DEPTH}, got {}",
                    self.max_depth
                ),
            });
        }
        Ok(())
    }

    /// Random generator for move ordering, seeded if a seed is set
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(random()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

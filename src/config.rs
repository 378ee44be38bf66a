//! Tree configuration.
//!
//! # Environment Variables
//!
//! - `BST_DELETE_SEED`: seed for the random source that picks the successor
//!   side when deleting a node with two children (default: seeded from OS
//!   entropy)

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Fixed seed for side selection. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl TreeConfig {
    pub const SEED_ENV_VAR: &'static str = "BST_DELETE_SEED";

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `BST_DELETE_SEED` is set but is not a `u64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seed = match lookup(Self::SEED_ENV_VAR) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidSeed {
                    name: Self::SEED_ENV_VAR.to_string(),
                    value,
                }
            })?),
            None => None,
        };
        Ok(Self { seed })
    }

    /// Builds the random source described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

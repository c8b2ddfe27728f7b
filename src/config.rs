//! Simulation configuration loaded from TOML
//!
//! Values come from an optional file and are then overridden by command line
//! flags. `validate` runs before any fleet is built.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::simulation::{LoadTieBreak, NUM_ELEVATORS, NUM_FLOORS};

/// Largest building the simulation accepts
pub const MAX_FLOORS: usize = 1000;

/// Largest fleet the simulation accepts
pub const MAX_ELEVATORS: usize = 100;

/// Fleet dimensions and dispatch policy
///
/// Every field is optional in the TOML file and falls back to the defaults:
///
/// ```toml
/// num_floors = 30
/// num_elevators = 5
/// tie_break = "last"
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub num_floors: usize,
    pub num_elevators: usize,
    pub tie_break: LoadTieBreak,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_floors: NUM_FLOORS,
            num_elevators: NUM_ELEVATORS,
            tie_break: LoadTieBreak::default(),
        }
    }
}

impl SimConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: SimConfig =
            toml::from_str(config_str).context("Failed to parse configuration file")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_toml_str(&config_str)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Reject fleets the simulation cannot represent
    pub fn validate(&self) -> Result<()> {
        if self.num_floors < 2 {
            bail!("num_floors must be at least 2, got {}", self.num_floors);
        }
        if self.num_floors > MAX_FLOORS {
            bail!("num_floors must be at most {}, got {}", MAX_FLOORS, self.num_floors);
        }
        if self.num_elevators == 0 {
            bail!("num_elevators must be at least 1");
        }
        if self.num_elevators > MAX_ELEVATORS {
            bail!(
                "num_elevators must be at most {}, got {}",
                MAX_ELEVATORS,
                self.num_elevators
            );
        }
        Ok(())
    }
}

//! Milestone seed configuration loaded from config.toml
//!
//! The milestones defined here are inserted into an empty database on first startup.
//! When no config file exists, or it has no `[[milestones]]` section, the built-in
//! savings ladder toward the BWP 2,000,000 goal is used.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Milestones to seed; empty means "use the defaults"
    #[serde(default)]
    pub milestones: Vec<MilestoneConfig>,
}

impl Config {
    /// Returns the configured seed list, or the defaults when none were given.
    #[must_use]
    pub fn milestones_or_default(self) -> Vec<MilestoneConfig> {
        if self.milestones.is_empty() {
            default_milestones()
        } else {
            self.milestones
        }
    }
}

/// Configuration for a single seeded milestone
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MilestoneConfig {
    /// Net savings threshold in BWP
    pub target_amount: f64,
    /// Display title
    pub title: String,
    /// Optional longer text
    #[serde(default)]
    pub description: Option<String>,
}

impl MilestoneConfig {
    fn new(target_amount: f64, title: &str, description: &str) -> Self {
        Self {
            target_amount,
            title: title.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// The five milestones seeded when nothing else is configured.
#[must_use]
pub fn default_milestones() -> Vec<MilestoneConfig> {
    vec![
        MilestoneConfig::new(100_000.0, "First P100k", "Quarter way to the goal!"),
        MilestoneConfig::new(500_000.0, "Tuition Secured", "Enough for UCT tuition!"),
        MilestoneConfig::new(1_000_000.0, "First Million", "Halfway there!"),
        MilestoneConfig::new(1_500_000.0, "P1.5M Milestone", "Three quarters done!"),
        MilestoneConfig::new(
            2_000_000.0,
            "Mission Complete",
            "Full P2M achieved - UCT here we come!",
        ),
    ]
}

/// Loads milestone configuration from a TOML file
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed milestones from `path` if it exists, otherwise returns the defaults.
///
/// A missing file is not an error; a present but malformed one is.
pub fn load_seed_milestones<P: AsRef<Path>>(path: P) -> Result<Vec<MilestoneConfig>> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("No config file at {:?}, using default milestones", path);
        return Ok(default_milestones());
    }
    Ok(load_config(path)?.milestones_or_default())
}

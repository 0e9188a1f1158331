//! Static configuration for the environment plugin.
//!
//! The host may hand `EnvironmentPlugin` a config built in code, parsed from a
//! JSON string, or loaded from a file. Every field is optional in JSON; missing
//! fields take the defaults from `config.rs`.
//!
//! ```json
//! {
//!   "wind": { "wind_strength": 0.6, "heading": 1.57 },
//!   "baseline_saturation": 10.0,
//!   "region": { "target_saturation": -60.0, "effect_duration": 1.5 },
//!   "debug": { "visualize_vectors": false }
//! }
//! ```

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SATURATION;
use crate::error::EnvironmentError;
use crate::region::EffectRegion;
use crate::wind::WindSettings;
use crate::wind_debug::WindDebugOverlay;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub wind: WindSettings,
    /// Post-process saturation the scene starts at.
    pub baseline_saturation: f32,
    /// Tuning for effect regions spawned from this config.
    pub region: EffectRegion,
    pub debug: WindDebugOverlay,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            wind: WindSettings::default(),
            baseline_saturation: DEFAULT_SATURATION,
            region: EffectRegion::default(),
            debug: WindDebugOverlay::default(),
        }
    }
}

impl EnvironmentConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EnvironmentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvironmentError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Load from `path`, logging a warning and returning defaults on failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded environment config from {}", path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Environment config {}: {}, falling back to defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

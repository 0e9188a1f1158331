use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_TRUNK_WIND_SPEED, DEFAULT_TRUNK_WIND_SWINGING, DEFAULT_TRUNK_WIND_WEIGHT,
    DEFAULT_WIND_AMPLITUDE, DEFAULT_WIND_SPEED, DEFAULT_WIND_STRENGTH,
};
use crate::parameters::{ParameterId, ParameterValues};

// =============================================================================
// Wind Settings
// =============================================================================

/// Wind animation tuning shared by every wind-enabled shader.
///
/// Changing this resource re-applies all wind globals on the next frame. It is
/// the configured baseline: effect regions blend the live store values away
/// from it and back, they never write here.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindSettings {
    /// Scroll speed of the wind vector texture. Advisory range [0, 1].
    pub wind_speed: f32,
    /// Overall bend strength. Advisory range [0, 3].
    pub wind_strength: f32,
    /// Size of wind gust patterns. Advisory range [0, 5].
    pub wind_amplitude: f32,
    /// Trunk sway frequency. Advisory range [0, 150].
    pub trunk_wind_speed: f32,
    /// How far trunks lean with the wind. Advisory range [0, 5].
    pub trunk_wind_weight: f32,
    /// Back-and-forth trunk motion. Advisory range [0, 0.99].
    pub trunk_wind_swinging: f32,
    /// Yaw of the wind source in radians around +Y.
    pub heading: f32,
}

impl Default for WindSettings {
    fn default() -> Self {
        Self {
            wind_speed: DEFAULT_WIND_SPEED,
            wind_strength: DEFAULT_WIND_STRENGTH,
            wind_amplitude: DEFAULT_WIND_AMPLITUDE,
            trunk_wind_speed: DEFAULT_TRUNK_WIND_SPEED,
            trunk_wind_weight: DEFAULT_TRUNK_WIND_WEIGHT,
            trunk_wind_swinging: DEFAULT_TRUNK_WIND_SWINGING,
            heading: 0.0,
        }
    }
}

impl WindSettings {
    /// The six wind parameters as a value set.
    pub fn values(&self) -> ParameterValues {
        ParameterValues::new()
            .with(ParameterId::WindSpeed, self.wind_speed)
            .with(ParameterId::WindStrength, self.wind_strength)
            .with(ParameterId::WindAmplitude, self.wind_amplitude)
            .with(ParameterId::TrunkWindSpeed, self.trunk_wind_speed)
            .with(ParameterId::TrunkWeight, self.trunk_wind_weight)
            .with(ParameterId::TrunkSwing, self.trunk_wind_swinging)
    }

    /// Unit vector the wind blows along: the source's back vector rotated by
    /// `heading`. Heading 0 blows toward -Z.
    pub fn direction_vector(&self) -> Vec3 {
        Quat::from_rotation_y(self.heading) * Vec3::NEG_Z
    }

    /// Parameters whose configured value lies outside the advisory range.
    pub fn out_of_range(&self) -> Vec<ParameterId> {
        self.values()
            .iter()
            .filter(|(id, value)| !id.range().contains(*value))
            .map(|(id, _)| id)
            .collect()
    }
}

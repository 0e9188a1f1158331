//! Default values for wind and post-effect tuning.
//!
//! These mirror the values a freshly placed wind controller and effect region
//! start with. Everything here can be overridden through `EnvironmentConfig`.

pub const DEFAULT_WIND_SPEED: f32 = 0.33;
pub const DEFAULT_WIND_STRENGTH: f32 = 0.46;
pub const DEFAULT_WIND_AMPLITUDE: f32 = 14.0;
pub const DEFAULT_TRUNK_WIND_SPEED: f32 = 10.0;
pub const DEFAULT_TRUNK_WIND_WEIGHT: f32 = 0.5;
pub const DEFAULT_TRUNK_WIND_SWINGING: f32 = 0.2;

/// Post-process saturation before any region effect is applied.
pub const DEFAULT_SATURATION: f32 = 0.0;

/// Saturation an effect region blends toward on enter.
pub const DEFAULT_TARGET_SATURATION: f32 = 0.0;
pub const DEFAULT_WIND_STRENGTH_INCREASE: f32 = 0.5;
pub const DEFAULT_WIND_WEIGHT_INCREASE: f32 = 1.0;
pub const DEFAULT_WIND_SWING_INCREASE: f32 = 0.3;

/// Seconds an enter/exit blend takes.
pub const DEFAULT_EFFECT_DURATION: f32 = 2.0;

/// Actor tag effect regions react to.
pub const DEFAULT_ACTOR_TAG: &str = "Player";

/// Host property for the wind direction vector.
pub const WIND_DIRECTION_PROPERTY: &str = "_WindDirection";

/// Host property toggling wind-vector visualisation in wind shaders.
pub const WIND_DEBUG_PROPERTY: &str = "_WindDebug";

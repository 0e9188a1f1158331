//! Wind vector visualisation toggle.
//!
//! Wind shaders can render their sampled wind vectors instead of shading
//! normally. The toggle is a single global float (`_WindDebug`, 1.0 = on) that
//! is independent of the parameter blends; it only reaches the host sink when
//! the flag changes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::WIND_DEBUG_PROPERTY;
use crate::environment_sets::EnvironmentSet;
use crate::parameters::ParameterStore;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindDebugOverlay {
    pub visualize_vectors: bool,
}

impl WindDebugOverlay {
    pub fn shader_value(self) -> f32 {
        if self.visualize_vectors {
            1.0
        } else {
            0.0
        }
    }
}

/// Pushes the overlay flag to the host whenever it changes.
pub fn apply_wind_debug(overlay: Res<WindDebugOverlay>, mut store: ResMut<ParameterStore>) {
    debug!(
        "Wind vector visualisation {}",
        if overlay.visualize_vectors { "on" } else { "off" }
    );
    store.push_float(WIND_DEBUG_PROPERTY, overlay.shader_value());
}

pub struct WindDebugPlugin;

impl Plugin for WindDebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindDebugOverlay>().add_systems(
            Update,
            apply_wind_debug
                .run_if(resource_changed::<WindDebugOverlay>)
                .in_set(EnvironmentSet::Configure),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debug_value(app: &App) -> Option<f32> {
        app.world()
            .resource::<ParameterStore>()
            .globals()
            .and_then(|g| g.float(WIND_DEBUG_PROPERTY))
    }

    #[test]
    fn test_shader_value() {
        assert_eq!(WindDebugOverlay::default().shader_value(), 0.0);
        let on = WindDebugOverlay {
            visualize_vectors: true,
        };
        assert_eq!(on.shader_value(), 1.0);
    }

    #[test]
    fn test_toggle_reaches_sink() {
        let mut app = App::new();
        app.init_resource::<ParameterStore>()
            .add_plugins(WindDebugPlugin);

        app.update();
        assert_eq!(debug_value(&app), Some(0.0));

        app.world_mut()
            .resource_mut::<WindDebugOverlay>()
            .visualize_vectors = true;
        app.update();
        assert_eq!(debug_value(&app), Some(1.0));
    }

    #[test]
    fn test_overlay_does_not_touch_parameters() {
        let mut app = App::new();
        app.init_resource::<ParameterStore>()
            .insert_resource(WindDebugOverlay {
                visualize_vectors: true,
            })
            .add_plugins(WindDebugPlugin);
        app.update();

        let store = app.world().resource::<ParameterStore>();
        for id in crate::parameters::ParameterId::ALL {
            assert_eq!(store.get(id), id.default_value());
        }
        assert_eq!(store.globals().unwrap().write_count(), 1);
    }
}

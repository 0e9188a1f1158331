use bevy::prelude::*;

pub mod config;
pub mod environment_sets;
pub mod error;
pub mod parameters;
pub mod region;
pub mod settings;
pub mod transition;
pub mod wind;
pub mod wind_debug;

#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use environment_sets::EnvironmentSet;
pub use error::EnvironmentError;
pub use parameters::{ParameterFamily, ParameterId, ParameterSink, ParameterStore, ParameterValues};
pub use region::{EffectRegion, RegionTrigger, TriggerKind};
pub use settings::EnvironmentConfig;
pub use transition::{TransitionController, TransitionFinished, TransitionPhase};

/// Wind globals, post-effect saturation and trigger-driven blends between them.
///
/// Inserts `ParameterStore` (unless the host already inserted one with its own
/// sink), seeds it from the config, and registers the wind, debug overlay,
/// region and transition plugins in `Configure → Triggers → Blend` order.
///
/// Requires a `Time` resource; `MinimalPlugins` or `DefaultPlugins` provide it.
#[derive(Default)]
pub struct EnvironmentPlugin {
    pub config: EnvironmentConfig,
}

impl EnvironmentPlugin {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                EnvironmentSet::Configure,
                EnvironmentSet::Triggers,
                EnvironmentSet::Blend,
            )
                .chain(),
        );

        app.init_resource::<ParameterStore>()
            .insert_resource(self.config.wind.clone())
            .insert_resource(self.config.debug);
        app.world_mut()
            .resource_mut::<ParameterStore>()
            .set(ParameterId::Saturation, self.config.baseline_saturation);

        app.add_plugins((
            wind::WindPlugin,
            wind_debug::WindDebugPlugin,
            region::RegionPlugin,
            transition::TransitionPlugin,
        ));
    }
}

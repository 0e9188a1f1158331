use bevy::prelude::*;

use crate::config::WIND_DIRECTION_PROPERTY;
use crate::environment_sets::EnvironmentSet;
use crate::parameters::{ParameterId, ParameterStore, ParameterValues};
use crate::region::RegionBaseline;
use crate::transition::TransitionController;

use super::types::WindSettings;

/// Push every wind global from `settings`, except the parameters in `held`.
pub fn push_wind_settings(
    settings: &WindSettings,
    held: &[ParameterId],
    store: &mut ParameterStore,
) {
    for id in settings.out_of_range() {
        debug!(
            "WindSettings: {} outside advisory range {:?}",
            id.label(),
            id.range()
        );
    }
    let values: ParameterValues = settings
        .values()
        .iter()
        .filter(|(id, _)| !held.contains(id))
        .collect();
    store.apply(&values);
    store.push_vector(WIND_DIRECTION_PROPERTY, settings.direction_vector());
}

// =============================================================================
// Systems
// =============================================================================

/// Re-applies wind globals whenever `WindSettings` changes (including the
/// frame it is first inserted).
///
/// Parameters driven by a running blend or held by an occupied effect region
/// are skipped. `rebase_regions_on_wind_change` runs first and has already
/// moved those toward the new settings.
pub fn apply_wind_settings(
    settings: Res<WindSettings>,
    controller: Option<Res<TransitionController>>,
    regions: Query<&RegionBaseline>,
    mut store: ResMut<ParameterStore>,
) {
    let mut held: Vec<ParameterId> = controller
        .as_deref()
        .and_then(TransitionController::request)
        .map(|request| request.target().ids().collect())
        .unwrap_or_default();
    for baseline in regions.iter().filter(|baseline| baseline.occupied) {
        held.extend(baseline.values.ids());
    }
    push_wind_settings(&settings, &held, &mut store);
}

// =============================================================================
// Plugin
// =============================================================================

pub struct WindPlugin;

impl Plugin for WindPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindSettings>().add_systems(
            Update,
            apply_wind_settings
                .run_if(resource_changed::<WindSettings>)
                .in_set(EnvironmentSet::Configure),
        );
    }
}

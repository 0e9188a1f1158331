use bevy::prelude::*;

use crate::environment_sets::EnvironmentSet;
use crate::parameters::ParameterStore;

use super::controller::TransitionController;
use super::types::TransitionFinished;

// =============================================================================
// Systems
// =============================================================================

/// Feeds the frame delta into the controller and reports completed blends.
///
/// Does nothing while idle, so the store is not marked changed on frames
/// without a blend.
pub fn advance_transition(
    time: Res<Time>,
    mut controller: ResMut<TransitionController>,
    mut store: ResMut<ParameterStore>,
    mut finished: EventWriter<TransitionFinished>,
) {
    if !controller.is_running() {
        return;
    }

    if let Some(done) = controller.tick(time.delta_secs(), &mut store) {
        info!(
            "Transition finished after {:.2}s ({} parameters pinned)",
            done.duration,
            done.target.len()
        );
        finished.send(done);
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct TransitionPlugin;

impl Plugin for TransitionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransitionController>()
            .add_event::<TransitionFinished>()
            .add_systems(Update, advance_transition.in_set(EnvironmentSet::Blend));
    }
}

use bevy::prelude::*;

use crate::environment_sets::EnvironmentSet;
use crate::parameters::ParameterStore;
use crate::transition::TransitionController;
use crate::wind::{apply_wind_settings, WindSettings};

use super::types::{EffectRegion, RegionBaseline, RegionTrigger, TriggerKind};

// =============================================================================
// Systems
// =============================================================================

/// Records the pre-effect parameter values for regions that do not have a
/// baseline yet.
///
/// Runs before trigger handling, so a region spawned and entered in the same
/// frame still restores to the values that were live before it was spawned.
pub fn capture_region_baselines(
    mut commands: Commands,
    store: Res<ParameterStore>,
    regions: Query<Entity, (With<EffectRegion>, Without<RegionBaseline>)>,
) {
    for entity in &regions {
        let baseline = RegionBaseline::capture(&store);
        debug!(
            "EffectRegion {:?}: captured baseline of {} parameters",
            entity,
            baseline.values.len()
        );
        commands.entity(entity).insert(baseline);
    }
}

/// Turns enter/exit events into transition requests.
///
/// Enter blends toward the region's effect values, exit blends back to its
/// baseline. Either way the blend starts from the live values, so leaving
/// halfway through an enter blend reverses smoothly.
///
/// A region configured with a non-positive duration cannot blend; it snaps to
/// the requested values instead and cancels whatever was running.
pub fn handle_region_triggers(
    mut triggers: EventReader<RegionTrigger>,
    mut regions: Query<(&EffectRegion, Option<&mut RegionBaseline>)>,
    mut controller: ResMut<TransitionController>,
    mut store: ResMut<ParameterStore>,
) {
    for trigger in triggers.read() {
        let Ok((region, baseline)) = regions.get_mut(trigger.region) else {
            warn!(
                "RegionTrigger for {:?}, which is not an effect region",
                trigger.region
            );
            continue;
        };
        if !region.matches(&trigger.actor_tag) {
            debug!(
                "EffectRegion {:?}: ignoring {:?} from '{}' (expects '{}')",
                trigger.region, trigger.kind, trigger.actor_tag, region.actor_tag
            );
            continue;
        }
        let Some(mut baseline) = baseline else {
            warn!(
                "EffectRegion {:?}: {:?} before baseline capture, ignoring",
                trigger.region, trigger.kind
            );
            continue;
        };

        baseline.occupied = trigger.kind == TriggerKind::Enter;
        let targets = match trigger.kind {
            TriggerKind::Enter => region.effect_targets(&baseline),
            TriggerKind::Exit => baseline.values,
        };
        info!(
            "EffectRegion {:?}: '{}' {}, blending {} parameters over {:.2}s",
            trigger.region,
            trigger.actor_tag,
            match trigger.kind {
                TriggerKind::Enter => "entered",
                TriggerKind::Exit => "exited",
            },
            targets.len(),
            region.effect_duration
        );

        if let Err(e) = controller.start(&store, targets, region.effect_duration) {
            warn!("EffectRegion {:?}: {e}; applying instantly", trigger.region);
            controller.cancel();
            store.apply(&targets);
        }
    }
}

/// Moves every region baseline to a changed `WindSettings`.
///
/// An occupied region re-derives its effect targets from the new baseline and
/// blends there from the live values, over whatever time the running blend had
/// left (or a full `effect_duration` once pinned). With no occupied region, a
/// running blend is a return to baseline and is retargeted the same way.
/// Runs before `apply_wind_settings`, which leaves the held parameters alone.
pub fn rebase_regions_on_wind_change(
    settings: Res<WindSettings>,
    mut regions: Query<(Entity, &EffectRegion, &mut RegionBaseline)>,
    mut controller: ResMut<TransitionController>,
    mut store: ResMut<ParameterStore>,
) {
    let wind = settings.values();
    let mut occupied = None;
    for (entity, region, mut baseline) in &mut regions {
        baseline.rebase(&wind);
        if baseline.occupied && occupied.is_none() {
            occupied = Some((
                entity,
                region.effect_targets(&baseline),
                region.effect_duration,
            ));
        }
    }

    let remaining = controller.remaining();
    let (targets, duration) = match occupied {
        Some((entity, targets, effect_duration)) => {
            debug!(
                "EffectRegion {:?}: wind settings changed while occupied, retargeting",
                entity
            );
            (targets, remaining.unwrap_or(effect_duration))
        }
        None => match (controller.request(), remaining) {
            (Some(request), Some(remaining)) => {
                (request.target().overwritten_by(&wind), remaining)
            }
            _ => return,
        },
    };

    if let Err(e) = controller.start(&store, targets, duration) {
        warn!("Wind settings change: {e}; applying instantly");
        controller.cancel();
        store.apply(&targets);
    }
}

// =============================================================================
// Plugin
// =============================================================================

pub struct RegionPlugin;

impl Plugin for RegionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RegionTrigger>()
            .add_systems(
                Update,
                rebase_regions_on_wind_change
                    .run_if(resource_exists_and_changed::<WindSettings>)
                    .before(apply_wind_settings)
                    .in_set(EnvironmentSet::Configure),
            )
            .add_systems(
                Update,
                (capture_region_baselines, handle_region_triggers)
                    .chain()
                    .in_set(EnvironmentSet::Triggers),
            );
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_ACTOR_TAG, DEFAULT_EFFECT_DURATION, DEFAULT_TARGET_SATURATION,
    DEFAULT_WIND_STRENGTH_INCREASE, DEFAULT_WIND_SWING_INCREASE, DEFAULT_WIND_WEIGHT_INCREASE,
};
use crate::parameters::{ParameterFamily, ParameterId, ParameterStore, ParameterValues};

/// Parameters an effect region blends.
pub const REGION_PARAMETERS: [ParameterId; 4] = [
    ParameterId::WindStrength,
    ParameterId::TrunkWeight,
    ParameterId::TrunkSwing,
    ParameterId::Saturation,
];

// =============================================================================
// Components
// =============================================================================

/// A trigger volume that desaturates the scene and stirs up the wind while the
/// tagged actor is inside.
///
/// The host detects overlap and sends `RegionTrigger` events; this component
/// only carries the tuning.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectRegion {
    /// Only triggers from actors carrying this tag are honoured.
    pub actor_tag: String,
    /// Absolute saturation while inside.
    pub target_saturation: f32,
    /// Added to the baseline wind strength while inside.
    pub wind_strength_increase: f32,
    /// Added to the baseline trunk weight while inside.
    pub wind_weight_increase: f32,
    /// Added to the baseline trunk swinging while inside.
    pub wind_swing_increase: f32,
    /// Seconds each enter/exit blend takes.
    pub effect_duration: f32,
}

impl Default for EffectRegion {
    fn default() -> Self {
        Self {
            actor_tag: DEFAULT_ACTOR_TAG.to_string(),
            target_saturation: DEFAULT_TARGET_SATURATION,
            wind_strength_increase: DEFAULT_WIND_STRENGTH_INCREASE,
            wind_weight_increase: DEFAULT_WIND_WEIGHT_INCREASE,
            wind_swing_increase: DEFAULT_WIND_SWING_INCREASE,
            effect_duration: DEFAULT_EFFECT_DURATION,
        }
    }
}

impl EffectRegion {
    pub fn matches(&self, actor_tag: &str) -> bool {
        self.actor_tag == actor_tag
    }

    /// Per-parameter offsets applied on top of the baseline. Saturation is
    /// absolute and therefore not an offset.
    pub fn wind_offsets(&self) -> ParameterValues {
        ParameterValues::new()
            .with(ParameterId::WindStrength, self.wind_strength_increase)
            .with(ParameterId::TrunkWeight, self.wind_weight_increase)
            .with(ParameterId::TrunkSwing, self.wind_swing_increase)
    }

    /// Values to blend toward on enter. Only parameters present in the
    /// baseline are targeted, so families that were unbound at capture time
    /// stay untouched.
    pub fn effect_targets(&self, baseline: &RegionBaseline) -> ParameterValues {
        let mut targets = baseline.values.offset_by(&self.wind_offsets());
        if targets.contains(ParameterId::Saturation) {
            targets.insert(ParameterId::Saturation, self.target_saturation);
        }
        targets
    }
}

/// Parameter values a region restores on exit, captured from the store the
/// first frame the region exists and moved along with `WindSettings`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct RegionBaseline {
    pub values: ParameterValues,
    /// Set between an accepted enter and the matching exit.
    pub occupied: bool,
}

impl RegionBaseline {
    /// Snapshot the region parameters whose family is currently bound.
    pub fn capture(store: &ParameterStore) -> Self {
        let values = store
            .snapshot(REGION_PARAMETERS)
            .retain_families(|family: ParameterFamily| store.is_bound(family));
        Self {
            values,
            occupied: false,
        }
    }

    /// Replace the captured values that `values` also carries. Parameters the
    /// baseline never held stay out of it.
    pub fn rebase(&mut self, values: &ParameterValues) {
        self.values = self.values.overwritten_by(values);
    }
}

// =============================================================================
// Events
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    Enter,
    Exit,
}

/// An actor crossed a region boundary. Sent by whatever does overlap
/// detection on the host.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct RegionTrigger {
    pub region: Entity,
    pub kind: TriggerKind,
    pub actor_tag: String,
}

impl RegionTrigger {
    pub fn enter(region: Entity, actor_tag: impl Into<String>) -> Self {
        Self {
            region,
            kind: TriggerKind::Enter,
            actor_tag: actor_tag.into(),
        }
    }

    pub fn exit(region: Entity, actor_tag: impl Into<String>) -> Self {
        Self {
            region,
            kind: TriggerKind::Exit,
            actor_tag: actor_tag.into(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_SATURATION, DEFAULT_TRUNK_WIND_SPEED, DEFAULT_TRUNK_WIND_SWINGING,
    DEFAULT_TRUNK_WIND_WEIGHT, DEFAULT_WIND_AMPLITUDE, DEFAULT_WIND_SPEED, DEFAULT_WIND_STRENGTH,
};

// =============================================================================
// Parameter identity
// =============================================================================

/// The host-side feature a parameter belongs to.
///
/// A family can be missing on the host (no wind controller in the scene, no
/// colour-adjustment profile on the post-process volume); writes to its
/// parameters are then skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterFamily {
    Wind,
    ColorAdjustments,
}

impl ParameterFamily {
    pub const COUNT: usize = 2;

    pub const ALL: [ParameterFamily; Self::COUNT] =
        [ParameterFamily::Wind, ParameterFamily::ColorAdjustments];

    pub(crate) fn index(self) -> usize {
        match self {
            ParameterFamily::Wind => 0,
            ParameterFamily::ColorAdjustments => 1,
        }
    }
}

/// A named scalar consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ParameterId {
    WindSpeed,
    WindStrength,
    WindAmplitude,
    TrunkWindSpeed,
    TrunkWeight,
    TrunkSwing,
    Saturation,
}

impl ParameterId {
    pub const COUNT: usize = 7;

    pub const ALL: [ParameterId; Self::COUNT] = [
        ParameterId::WindSpeed,
        ParameterId::WindStrength,
        ParameterId::WindAmplitude,
        ParameterId::TrunkWindSpeed,
        ParameterId::TrunkWeight,
        ParameterId::TrunkSwing,
        ParameterId::Saturation,
    ];

    /// Slot index, stable and dense in `0..COUNT`.
    pub fn index(self) -> usize {
        match self {
            ParameterId::WindSpeed => 0,
            ParameterId::WindStrength => 1,
            ParameterId::WindAmplitude => 2,
            ParameterId::TrunkWindSpeed => 3,
            ParameterId::TrunkWeight => 4,
            ParameterId::TrunkSwing => 5,
            ParameterId::Saturation => 6,
        }
    }

    pub fn family(self) -> ParameterFamily {
        match self {
            ParameterId::Saturation => ParameterFamily::ColorAdjustments,
            _ => ParameterFamily::Wind,
        }
    }

    /// Name the host binds this value under (a shader global for wind, the
    /// volume property for saturation).
    pub fn property(self) -> &'static str {
        match self {
            ParameterId::WindSpeed => "_WindSpeed",
            ParameterId::WindStrength => "_WindStrength",
            ParameterId::WindAmplitude => "_WindAmplitude",
            ParameterId::TrunkWindSpeed => "_TrunkWindSpeed",
            ParameterId::TrunkWeight => "_TrunkWindWeight",
            ParameterId::TrunkSwing => "_TrunkWindSwinging",
            ParameterId::Saturation => "saturation",
        }
    }

    /// Advisory range. Reported when violated, never enforced.
    pub fn range(self) -> ParameterRange {
        match self {
            ParameterId::WindSpeed => ParameterRange::new(0.0, 1.0),
            ParameterId::WindStrength => ParameterRange::new(0.0, 3.0),
            ParameterId::WindAmplitude => ParameterRange::new(0.0, 5.0),
            ParameterId::TrunkWindSpeed => ParameterRange::new(0.0, 150.0),
            ParameterId::TrunkWeight => ParameterRange::new(0.0, 5.0),
            ParameterId::TrunkSwing => ParameterRange::new(0.0, 0.99),
            ParameterId::Saturation => ParameterRange::new(-100.0, 100.0),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            ParameterId::WindSpeed => DEFAULT_WIND_SPEED,
            ParameterId::WindStrength => DEFAULT_WIND_STRENGTH,
            ParameterId::WindAmplitude => DEFAULT_WIND_AMPLITUDE,
            ParameterId::TrunkWindSpeed => DEFAULT_TRUNK_WIND_SPEED,
            ParameterId::TrunkWeight => DEFAULT_TRUNK_WIND_WEIGHT,
            ParameterId::TrunkSwing => DEFAULT_TRUNK_WIND_SWINGING,
            ParameterId::Saturation => DEFAULT_SATURATION,
        }
    }

    /// Human-readable label for logs and debug UI.
    pub fn label(self) -> &'static str {
        match self {
            ParameterId::WindSpeed => "Wind Speed",
            ParameterId::WindStrength => "Wind Strength",
            ParameterId::WindAmplitude => "Wind Amplitude",
            ParameterId::TrunkWindSpeed => "Trunk Wind Speed",
            ParameterId::TrunkWeight => "Trunk Weight",
            ParameterId::TrunkSwing => "Trunk Swing",
            ParameterId::Saturation => "Saturation",
        }
    }
}

/// Inclusive `[min, max]` range a parameter is expected to stay in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
}

impl ParameterRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp into the range. The store never calls this; callers opt in.
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

// =============================================================================
// Sparse value sets
// =============================================================================

/// A sparse mapping from parameter to value, one fixed slot per id.
///
/// Used for transition targets, start snapshots, offsets and region baselines.
/// Iteration always follows `ParameterId::ALL` order so writes are
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterValues {
    slots: [Option<f32>; ParameterId::COUNT],
}

impl ParameterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, id: ParameterId, value: f32) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: ParameterId, value: f32) {
        self.slots[id.index()] = Some(value);
    }

    pub fn remove(&mut self, id: ParameterId) -> Option<f32> {
        self.slots[id.index()].take()
    }

    pub fn get(&self, id: ParameterId) -> Option<f32> {
        self.slots[id.index()]
    }

    pub fn contains(&self, id: ParameterId) -> bool {
        self.slots[id.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterId, f32)> + '_ {
        ParameterId::ALL
            .into_iter()
            .filter_map(|id| self.get(id).map(|value| (id, value)))
    }

    pub fn ids(&self) -> impl Iterator<Item = ParameterId> + '_ {
        self.iter().map(|(id, _)| id)
    }

    /// Adds `offsets` to every present value. Offsets for ids not present in
    /// `self` are ignored; present ids without an offset keep their value.
    pub fn offset_by(&self, offsets: &ParameterValues) -> ParameterValues {
        self.iter()
            .map(|(id, value)| (id, value + offsets.get(id).unwrap_or(0.0)))
            .collect()
    }

    /// Takes the value from `other` for every id present in both; ids only in
    /// `other` are not added.
    pub fn overwritten_by(&self, other: &ParameterValues) -> ParameterValues {
        self.iter()
            .map(|(id, value)| (id, other.get(id).unwrap_or(value)))
            .collect()
    }

    /// Keeps only the ids whose family satisfies `keep`.
    pub fn retain_families(&self, keep: impl Fn(ParameterFamily) -> bool) -> ParameterValues {
        self.iter().filter(|(id, _)| keep(id.family())).collect()
    }
}

impl FromIterator<(ParameterId, f32)> for ParameterValues {
    fn from_iter<T: IntoIterator<Item = (ParameterId, f32)>>(iter: T) -> Self {
        let mut values = ParameterValues::new();
        for (id, value) in iter {
            values.insert(id, value);
        }
        values
    }
}

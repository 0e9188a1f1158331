pub mod systems;
pub mod types;

pub use systems::{
    capture_region_baselines, handle_region_triggers, rebase_regions_on_wind_change, RegionPlugin,
};
pub use types::{EffectRegion, RegionBaseline, RegionTrigger, TriggerKind, REGION_PARAMETERS};

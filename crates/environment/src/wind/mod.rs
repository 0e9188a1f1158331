mod systems;
mod types;

pub use systems::{apply_wind_settings, push_wind_settings, WindPlugin};
pub use types::WindSettings;

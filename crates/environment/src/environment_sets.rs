//! Ordering of the environment systems inside `Update`.
//!
//! ```text
//! Configure  →  Triggers  →  Blend
//! ```
//!
//! * **Configure** – Push changed wind settings and the debug overlay flag to
//!   the parameter store.
//! * **Triggers** – Capture baselines for new effect regions, then turn
//!   region enter/exit events into transition requests.
//! * **Blend** – Advance the active transition by the frame delta.
//!
//! A trigger delivered this frame therefore starts its blend and takes its
//! first step in the same frame, and a settings change never lands after the
//! blend wrote its values.

use bevy::prelude::*;

/// Ordered phases for environment systems in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnvironmentSet {
    Configure,
    Triggers,
    Blend,
}

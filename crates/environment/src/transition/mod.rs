//! Timed linear blends between parameter sets.
//!
//! `TransitionController` holds at most one `TransitionRequest`; the
//! `advance_transition` system moves it forward once per frame.

mod controller;
mod systems;
mod types;

pub use controller::TransitionController;
pub use systems::{advance_transition, TransitionPlugin};
pub use types::{TransitionFinished, TransitionPhase, TransitionRequest, TransitionState};

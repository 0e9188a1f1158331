use bevy::prelude::*;

use crate::error::EnvironmentError;
use crate::parameters::{ParameterStore, ParameterValues};

use super::types::{TransitionFinished, TransitionPhase, TransitionRequest, TransitionState};

#[derive(Debug, Clone)]
struct ActiveTransition {
    request: TransitionRequest,
    state: TransitionState,
}

/// Runs at most one linear blend at a time across any set of parameters.
///
/// `start` snapshots the live values of the targeted parameters, so starting
/// again mid-blend (enter, then exit before the blend finished) continues from
/// wherever the previous blend left off rather than from where it began.
///
/// The controller never reads a clock; `tick` is handed the frame delta by
/// `advance_transition`, and every write goes through the `ParameterStore`.
#[derive(Resource, Debug, Default)]
pub struct TransitionController {
    active: Option<ActiveTransition>,
}

impl TransitionController {
    pub fn phase(&self) -> TransitionPhase {
        if self.active.is_some() {
            TransitionPhase::Running
        } else {
            TransitionPhase::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The request being blended, if any.
    pub fn request(&self) -> Option<&TransitionRequest> {
        self.active.as_ref().map(|a| &a.request)
    }

    pub fn state(&self) -> Option<TransitionState> {
        self.active.as_ref().map(|a| a.state)
    }

    /// Seconds left on the running blend.
    pub fn remaining(&self) -> Option<f32> {
        self.active
            .as_ref()
            .map(|a| (a.request.duration() - a.state.elapsed).max(0.0))
    }

    /// Begin blending toward `targets` over `duration` seconds, replacing any
    /// blend already running.
    ///
    /// An invalid duration is rejected by `TransitionRequest::new` before
    /// anything is cancelled, so a bad request never interrupts a good one.
    pub fn start(
        &mut self,
        store: &ParameterStore,
        targets: ParameterValues,
        duration: f32,
    ) -> Result<(), EnvironmentError> {
        let start = store.snapshot(targets.ids());
        let request = TransitionRequest::new(start, targets, duration)?;

        if let Some(previous) = self.active.replace(ActiveTransition {
            request,
            state: TransitionState::started(),
        }) {
            debug!(
                "TransitionController: cancelled blend at {:.0}% to start a new one",
                previous.state.fraction(previous.request.duration()) * 100.0
            );
        }
        Ok(())
    }

    /// Like `start`, with each target computed as `origin + offset`.
    pub fn start_with_offsets(
        &mut self,
        store: &ParameterStore,
        origins: &ParameterValues,
        offsets: &ParameterValues,
        duration: f32,
    ) -> Result<(), EnvironmentError> {
        self.start(store, origins.offset_by(offsets), duration)
    }

    /// Drop the running blend where it stands. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Advance the running blend by `dt` seconds and write the new values.
    ///
    /// On the tick that reaches the duration, targets are written exactly and
    /// the controller returns to idle.
    pub fn tick(&mut self, dt: f32, store: &mut ParameterStore) -> Option<TransitionFinished> {
        let active = self.active.as_mut()?;
        if dt.is_finite() && dt > 0.0 {
            active.state.elapsed += dt;
        }

        let duration = active.request.duration();
        if active.state.elapsed >= duration {
            let target = *active.request.target();
            store.apply(&target);
            self.active = None;
            return Some(TransitionFinished { target, duration });
        }

        let fraction = active.state.fraction(duration);
        store.apply(&active.request.sample(fraction));
        None
    }
}

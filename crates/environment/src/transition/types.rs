use bevy::prelude::*;

use crate::error::EnvironmentError;
use crate::parameters::{ParameterId, ParameterValues};

/// Linear interpolation, `t` already clamped by the caller.
#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Reject durations the blend cannot divide by.
pub(crate) fn validate_duration(duration: f32) -> Result<f32, EnvironmentError> {
    if duration.is_finite() && duration > 0.0 {
        Ok(duration)
    } else {
        Err(EnvironmentError::InvalidDuration(duration))
    }
}

// =============================================================================
// Request
// =============================================================================

/// One blend: where every parameter started, where it is going, and how long
/// it takes. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRequest {
    start: ParameterValues,
    target: ParameterValues,
    duration: f32,
}

impl TransitionRequest {
    /// Build a request. Ids in `start` without a target are dropped; targeted
    /// ids without a start value begin at their target and stay put.
    pub fn new(
        start: ParameterValues,
        target: ParameterValues,
        duration: f32,
    ) -> Result<Self, EnvironmentError> {
        let duration = validate_duration(duration)?;
        let start = target
            .iter()
            .map(|(id, to)| (id, start.get(id).unwrap_or(to)))
            .collect();
        Ok(Self {
            start,
            target,
            duration,
        })
    }

    pub fn start(&self) -> &ParameterValues {
        &self.start
    }

    pub fn target(&self) -> &ParameterValues {
        &self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Value of `id` at `fraction` of the way through, or `None` if the
    /// request does not touch `id`.
    pub fn value_at(&self, id: ParameterId, fraction: f32) -> Option<f32> {
        let start = self.start.get(id)?;
        let target = self.target.get(id)?;
        Some(lerp(start, target, fraction.clamp(0.0, 1.0)))
    }

    /// Every targeted value at `fraction`, in id order.
    pub fn sample(&self, fraction: f32) -> ParameterValues {
        self.target
            .ids()
            .filter_map(|id| self.value_at(id, fraction).map(|v| (id, v)))
            .collect()
    }
}

// =============================================================================
// Progress
// =============================================================================

/// Progress through the active request.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransitionState {
    /// Seconds accumulated from frame deltas since the request started.
    pub elapsed: f32,
    pub active: bool,
}

impl TransitionState {
    pub(crate) fn started() -> Self {
        Self {
            elapsed: 0.0,
            active: true,
        }
    }

    /// `elapsed / duration` clamped to `[0, 1]`.
    pub fn fraction(&self, duration: f32) -> f32 {
        (self.elapsed / duration).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Running,
}

/// Sent once when a blend reaches its target. Cancelled blends send nothing.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct TransitionFinished {
    pub target: ParameterValues,
    pub duration: f32,
}

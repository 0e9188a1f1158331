use std::any::Any;
use std::collections::BTreeMap;

use bevy::prelude::*;

use super::types::{ParameterFamily, ParameterId, ParameterValues};

// =============================================================================
// Host sink
// =============================================================================

/// Receives every value the store applies.
///
/// The host decides what a property name maps to (a global shader float, a
/// volume override, a uniform on every wind material). Implementations must
/// be cheap: the store calls them synchronously on every write.
pub trait ParameterSink: Send + Sync + 'static {
    fn set_float(&mut self, property: &'static str, value: f32);

    fn set_vector(&mut self, _property: &'static str, _value: Vec3) {}

    /// Lets the host get its concrete sink back out of the store.
    fn as_any(&self) -> &dyn Any;
}

/// Default sink: a named global table the renderer reads from each frame.
#[derive(Debug, Clone, Default)]
pub struct ShaderGlobals {
    floats: BTreeMap<&'static str, f32>,
    vectors: BTreeMap<&'static str, Vec3>,
    writes: u64,
}

impl ShaderGlobals {
    pub fn float(&self, property: &str) -> Option<f32> {
        self.floats.get(property).copied()
    }

    pub fn vector(&self, property: &str) -> Option<Vec3> {
        self.vectors.get(property).copied()
    }

    /// Total number of writes received, floats and vectors combined.
    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl ParameterSink for ShaderGlobals {
    fn set_float(&mut self, property: &'static str, value: f32) {
        self.floats.insert(property, value);
        self.writes += 1;
    }

    fn set_vector(&mut self, property: &'static str, value: Vec3) {
        self.vectors.insert(property, value);
        self.writes += 1;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Parameter store
// =============================================================================

/// Current value of every parameter, plus the sink those values are pushed to.
///
/// This is the single owner of wind/post-effect state. Systems that want to
/// change a parameter go through `set`, which stores the value and forwards it
/// to the sink in the same call.
#[derive(Resource)]
pub struct ParameterStore {
    values: [f32; ParameterId::COUNT],
    bound: [bool; ParameterFamily::COUNT],
    sink: Option<Box<dyn ParameterSink>>,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(ShaderGlobals::default())
    }
}

impl ParameterStore {
    /// A store at default values with every family bound.
    pub fn new(sink: impl ParameterSink) -> Self {
        Self {
            values: ParameterId::ALL.map(ParameterId::default_value),
            bound: [true; ParameterFamily::COUNT],
            sink: Some(Box::new(sink)),
        }
    }

    /// A store with no sink attached. Values are tracked but go nowhere.
    pub fn detached() -> Self {
        Self {
            values: ParameterId::ALL.map(ParameterId::default_value),
            bound: [true; ParameterFamily::COUNT],
            sink: None,
        }
    }

    pub fn get(&self, id: ParameterId) -> f32 {
        self.values[id.index()]
    }

    /// Store `value` and forward it to the sink.
    ///
    /// Out-of-range values are kept as-is. Writes to an unbound family are
    /// dropped without touching the stored value.
    pub fn set(&mut self, id: ParameterId, value: f32) {
        if !self.is_bound(id.family()) {
            debug!(
                "ParameterStore: {:?} unbound, skipping {} = {}",
                id.family(),
                id.label(),
                value
            );
            return;
        }
        self.values[id.index()] = value;
        if let Some(sink) = self.sink.as_mut() {
            sink.set_float(id.property(), value);
        }
    }

    /// Set every value in `values`, in id order.
    pub fn apply(&mut self, values: &ParameterValues) {
        for (id, value) in values.iter() {
            self.set(id, value);
        }
    }

    /// Current values for `ids`.
    pub fn snapshot(&self, ids: impl IntoIterator<Item = ParameterId>) -> ParameterValues {
        ids.into_iter().map(|id| (id, self.get(id))).collect()
    }

    /// Forward a float global that is not a tracked parameter.
    pub fn push_float(&mut self, property: &'static str, value: f32) {
        if let Some(sink) = self.sink.as_mut() {
            sink.set_float(property, value);
        }
    }

    /// Forward a vector global (wind direction).
    pub fn push_vector(&mut self, property: &'static str, value: Vec3) {
        if let Some(sink) = self.sink.as_mut() {
            sink.set_vector(property, value);
        }
    }

    // -------------------------------------------------------------------------
    // Families
    // -------------------------------------------------------------------------

    pub fn is_bound(&self, family: ParameterFamily) -> bool {
        self.bound[family.index()]
    }

    pub fn bind(&mut self, family: ParameterFamily) {
        self.bound[family.index()] = true;
    }

    pub fn unbind(&mut self, family: ParameterFamily) {
        self.bound[family.index()] = false;
    }

    // -------------------------------------------------------------------------
    // Sink
    // -------------------------------------------------------------------------

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    pub fn set_sink(&mut self, sink: impl ParameterSink) {
        self.sink = Some(Box::new(sink));
    }

    pub fn take_sink(&mut self) -> Option<Box<dyn ParameterSink>> {
        self.sink.take()
    }

    /// The attached sink, if it is an `S`.
    pub fn sink<S: ParameterSink>(&self) -> Option<&S> {
        self.sink
            .as_deref()
            .and_then(|sink| sink.as_any().downcast_ref::<S>())
    }

    /// Convenience for the default sink.
    pub fn globals(&self) -> Option<&ShaderGlobals> {
        self.sink::<ShaderGlobals>()
    }
}

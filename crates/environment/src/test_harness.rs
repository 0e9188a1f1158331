//! # TestEnvironment: headless harness for environment integration tests
//!
//! Wraps a bevy `App` with `EnvironmentPlugin` and a hand-driven `Time`, so a
//! test decides exactly how many seconds each frame lasts.

use std::any::Any;
use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;

use crate::parameters::{ParameterId, ParameterSink, ParameterStore, ShaderGlobals};
use crate::region::{EffectRegion, RegionTrigger};
use crate::settings::EnvironmentConfig;
use crate::transition::{TransitionController, TransitionFinished};
use crate::{EnvironmentPlugin, EnvironmentSet};

/// Sink that keeps every float write, in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub writes: Vec<(&'static str, f32)>,
}

impl RecordingSink {
    /// Values written to `property`, oldest first.
    pub fn history(&self, property: &str) -> Vec<f32> {
        self.writes
            .iter()
            .filter(|(p, _)| *p == property)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl ParameterSink for RecordingSink {
    fn set_float(&mut self, property: &'static str, value: f32) {
        self.writes.push((property, value));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Completion events seen so far.
#[derive(Resource, Default)]
pub struct FinishedLog(pub Vec<TransitionFinished>);

fn record_finished(mut events: EventReader<TransitionFinished>, mut log: ResMut<FinishedLog>) {
    log.0.extend(events.read().cloned());
}

pub struct TestEnvironment {
    app: App,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default config, `ShaderGlobals` sink, one zero-length frame already run
    /// so wind settings are applied.
    pub fn new() -> Self {
        Self::with_config(EnvironmentConfig::default())
    }

    pub fn with_config(config: EnvironmentConfig) -> Self {
        Self::build(config, ParameterStore::default())
    }

    /// Start with a caller-built store (custom sink, unbound families).
    pub fn with_store(config: EnvironmentConfig, store: ParameterStore) -> Self {
        Self::build(config, store)
    }

    fn build(config: EnvironmentConfig, store: ParameterStore) -> Self {
        let mut app = App::new();
        app.init_resource::<Time>()
            .insert_resource(store)
            .add_plugins(EnvironmentPlugin::new(config))
            .init_resource::<FinishedLog>()
            .add_systems(Update, record_finished.after(EnvironmentSet::Blend));
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup
    // -----------------------------------------------------------------------

    /// Spawn a region and run a zero-length frame so its baseline is captured.
    pub fn spawn_region(&mut self, region: EffectRegion) -> Entity {
        let entity = self.app.world_mut().spawn(region).id();
        self.tick(0.0);
        entity
    }

    /// Queue an enter trigger; it is handled on the next `tick`.
    pub fn enter(&mut self, region: Entity, actor_tag: &str) {
        self.app
            .world_mut()
            .send_event(RegionTrigger::enter(region, actor_tag));
    }

    /// Queue an exit trigger; it is handled on the next `tick`.
    pub fn exit(&mut self, region: Entity, actor_tag: &str) {
        self.app
            .world_mut()
            .send_event(RegionTrigger::exit(region, actor_tag));
    }

    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run one frame lasting `seconds`.
    pub fn tick(&mut self, seconds: f32) {
        self.app
            .world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
        self.app.update();
    }

    /// Run `frames` frames of `seconds` each.
    pub fn tick_many(&mut self, frames: u32, seconds: f32) {
        for _ in 0..frames {
            self.tick(seconds);
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn value(&self, id: ParameterId) -> f32 {
        self.store().get(id)
    }

    pub fn store(&self) -> &ParameterStore {
        self.resource::<ParameterStore>()
    }

    pub fn store_mut(&mut self) -> Mut<'_, ParameterStore> {
        self.app.world_mut().resource_mut::<ParameterStore>()
    }

    pub fn controller(&self) -> &TransitionController {
        self.resource::<TransitionController>()
    }

    pub fn globals(&self) -> &ShaderGlobals {
        self.store()
            .globals()
            .expect("TestEnvironment store has no ShaderGlobals sink")
    }

    pub fn recording(&self) -> &RecordingSink {
        self.store()
            .sink::<RecordingSink>()
            .expect("TestEnvironment store has no RecordingSink")
    }

    pub fn finished(&self) -> &[TransitionFinished] {
        &self.resource::<FinishedLog>().0
    }

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Mut<'_, R> {
        self.app.world_mut().resource_mut::<R>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}

use std::any::Any;

use bevy::prelude::Vec3;

use super::*;

/// Sink that records every forwarded write, in order.
#[derive(Default)]
struct LogSink {
    writes: Vec<(&'static str, f32)>,
}

impl ParameterSink for LogSink {
    fn set_float(&mut self, property: &'static str, value: f32) {
        self.writes.push((property, value));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// -----------------------------------------------------------------------------
// ParameterId
// -----------------------------------------------------------------------------

#[test]
fn test_indices_are_dense_and_unique() {
    for (i, id) in ParameterId::ALL.iter().enumerate() {
        assert_eq!(id.index(), i, "{id:?} should sit at slot {i}");
    }
}

#[test]
fn test_families() {
    assert_eq!(ParameterId::Saturation.family(), ParameterFamily::ColorAdjustments);
    for id in ParameterId::ALL {
        if id != ParameterId::Saturation {
            assert_eq!(id.family(), ParameterFamily::Wind, "{id:?}");
        }
    }
}

#[test]
fn test_wind_properties_match_shader_globals() {
    assert_eq!(ParameterId::WindStrength.property(), "_WindStrength");
    assert_eq!(ParameterId::TrunkWeight.property(), "_TrunkWindWeight");
    assert_eq!(ParameterId::TrunkSwing.property(), "_TrunkWindSwinging");
}

#[test]
fn test_default_amplitude_is_outside_advisory_range() {
    // The shipped amplitude default exceeds its slider range; ranges are advisory.
    let id = ParameterId::WindAmplitude;
    assert!(!id.range().contains(id.default_value()));
    assert!((id.range().clamp(id.default_value()) - 5.0).abs() < f32::EPSILON);
}

// -----------------------------------------------------------------------------
// ParameterValues
// -----------------------------------------------------------------------------

#[test]
fn test_values_iterate_in_id_order() {
    let values = ParameterValues::new()
        .with(ParameterId::Saturation, -20.0)
        .with(ParameterId::WindStrength, 1.0);
    let ids: Vec<_> = values.ids().collect();
    assert_eq!(ids, vec![ParameterId::WindStrength, ParameterId::Saturation]);
    assert_eq!(values.len(), 2);
    assert!(!values.is_empty());
}

#[test]
fn test_offset_by_ignores_unknown_ids() {
    let origins = ParameterValues::new()
        .with(ParameterId::WindStrength, 0.46)
        .with(ParameterId::Saturation, 0.0);
    let offsets = ParameterValues::new()
        .with(ParameterId::WindStrength, 0.5)
        .with(ParameterId::TrunkSwing, 0.3);

    let targets = origins.offset_by(&offsets);
    assert!((targets.get(ParameterId::WindStrength).unwrap() - 0.96).abs() < 1e-6);
    assert_eq!(targets.get(ParameterId::Saturation), Some(0.0));
    assert_eq!(targets.get(ParameterId::TrunkSwing), None);
}

#[test]
fn test_overwritten_by_keeps_own_ids() {
    let baseline = ParameterValues::new()
        .with(ParameterId::WindStrength, 0.46)
        .with(ParameterId::Saturation, 10.0);
    let settings = ParameterValues::new()
        .with(ParameterId::WindStrength, 1.2)
        .with(ParameterId::WindSpeed, 0.9);

    let merged = baseline.overwritten_by(&settings);
    assert_eq!(merged.get(ParameterId::WindStrength), Some(1.2));
    assert_eq!(merged.get(ParameterId::Saturation), Some(10.0));
    assert!(!merged.contains(ParameterId::WindSpeed));
}

#[test]
fn test_retain_families() {
    let values = ParameterValues::new()
        .with(ParameterId::WindStrength, 1.0)
        .with(ParameterId::Saturation, 5.0);
    let wind_only = values.retain_families(|f| f == ParameterFamily::Wind);
    assert!(wind_only.contains(ParameterId::WindStrength));
    assert!(!wind_only.contains(ParameterId::Saturation));
}

// -----------------------------------------------------------------------------
// ParameterStore
// -----------------------------------------------------------------------------

#[test]
fn test_store_starts_at_defaults() {
    let store = ParameterStore::default();
    for id in ParameterId::ALL {
        assert_eq!(store.get(id), id.default_value(), "{id:?}");
    }
}

#[test]
fn test_set_forwards_to_sink_in_call_order() {
    let mut store = ParameterStore::new(LogSink::default());
    store.set(ParameterId::WindStrength, 1.2);
    store.set(ParameterId::Saturation, -40.0);
    store.set(ParameterId::WindStrength, 1.3);

    let sink = store.sink::<LogSink>().expect("log sink attached");
    assert_eq!(
        sink.writes,
        vec![
            ("_WindStrength", 1.2),
            ("saturation", -40.0),
            ("_WindStrength", 1.3)
        ]
    );
    assert_eq!(store.get(ParameterId::WindStrength), 1.3);
}

#[test]
fn test_set_does_not_clamp() {
    let mut store = ParameterStore::default();
    store.set(ParameterId::TrunkSwing, 4.0);
    assert_eq!(store.get(ParameterId::TrunkSwing), 4.0);
}

#[test]
fn test_unbound_family_skips_store_and_sink() {
    let mut store = ParameterStore::new(LogSink::default());
    store.unbind(ParameterFamily::ColorAdjustments);
    store.set(ParameterId::Saturation, -100.0);

    assert_eq!(store.get(ParameterId::Saturation), ParameterId::Saturation.default_value());
    assert!(store.sink::<LogSink>().unwrap().writes.is_empty());

    store.bind(ParameterFamily::ColorAdjustments);
    store.set(ParameterId::Saturation, -100.0);
    assert_eq!(store.get(ParameterId::Saturation), -100.0);
}

#[test]
fn test_detached_store_still_tracks_values() {
    let mut store = ParameterStore::detached();
    assert!(!store.has_sink());
    store.set(ParameterId::WindSpeed, 0.9);
    store.push_float("_WindDebug", 1.0);
    assert_eq!(store.get(ParameterId::WindSpeed), 0.9);
    assert!(store.globals().is_none());
}

#[test]
fn test_sink_downcast_to_wrong_type_is_none() {
    let store = ParameterStore::default();
    assert!(store.sink::<LogSink>().is_none());
    assert!(store.globals().is_some());
}

#[test]
fn test_take_sink_detaches() {
    let mut store = ParameterStore::default();
    assert!(store.take_sink().is_some());
    assert!(!store.has_sink());
    store.set_sink(ShaderGlobals::default());
    assert!(store.has_sink());
}

#[test]
fn test_shader_globals_records_floats_and_vectors() {
    let mut store = ParameterStore::default();
    store.set(ParameterId::TrunkWeight, 1.5);
    store.push_vector("_WindDirection", Vec3::NEG_Z);

    let globals = store.globals().unwrap();
    assert_eq!(globals.float("_TrunkWindWeight"), Some(1.5));
    assert_eq!(globals.vector("_WindDirection"), Some(Vec3::NEG_Z));
    assert_eq!(globals.write_count(), 2);
}

#[test]
fn test_apply_and_snapshot() {
    let mut store = ParameterStore::default();
    let values = ParameterValues::new()
        .with(ParameterId::WindStrength, 0.9)
        .with(ParameterId::TrunkSwing, 0.4);
    store.apply(&values);

    let snap = store.snapshot(values.ids());
    assert_eq!(snap, values);
}

//! Criterion benchmarks for the transition controller.
//!
//! Benchmarks:
//!   - controller tick mid-blend over the four region parameters
//!   - controller restart (snapshot + replace) while a blend is running
//!   - a full `Update` frame of the environment plugin with a blend running
//!
//! Budget: controller operations < 1us, full frame < 50us.
//!
//! Run with: cargo bench -p environment --bench transition_bench --features bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use environment::parameters::{ParameterId, ParameterStore, ParameterValues};
use environment::region::EffectRegion;
use environment::test_harness::TestEnvironment;
use environment::transition::TransitionController;

fn region_targets() -> ParameterValues {
    ParameterValues::new()
        .with(ParameterId::WindStrength, 0.96)
        .with(ParameterId::TrunkWeight, 1.5)
        .with(ParameterId::TrunkSwing, 0.5)
        .with(ParameterId::Saturation, -100.0)
}

// ---------------------------------------------------------------------------
// Benchmark: controller tick / restart
// ---------------------------------------------------------------------------

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition_controller");
    group.sample_size(1000);

    // Duration far beyond what the bench accumulates, so the blend never ends.
    group.bench_function("tick_mid_blend", |b| {
        let mut store = ParameterStore::default();
        let mut controller = TransitionController::default();
        let _ = controller.start(&store, region_targets(), 1.0e9);
        b.iter(|| black_box(controller.tick(black_box(1.0 / 60.0), &mut store)));
    });

    group.bench_function("restart_mid_blend", |b| {
        let mut store = ParameterStore::default();
        let mut controller = TransitionController::default();
        let _ = controller.start(&store, region_targets(), 2.0);
        controller.tick(1.0, &mut store);
        b.iter(|| black_box(controller.start(&store, black_box(region_targets()), 2.0)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: full frame
// ---------------------------------------------------------------------------

fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("environment_frame");

    group.bench_function("update_with_blend", |b| {
        let mut env = TestEnvironment::new();
        let region = env.spawn_region(EffectRegion {
            effect_duration: 1.0e9,
            ..Default::default()
        });
        env.enter(region, "Player");
        env.tick(0.0);
        b.iter(|| env.tick(black_box(1.0 / 60.0)));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register groups
// ---------------------------------------------------------------------------

criterion_group!(benches, bench_controller, bench_full_frame);
criterion_main!(benches);

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use environment::{
    EnvironmentConfig, EnvironmentPlugin, EnvironmentSet, ParameterId, ParameterStore,
    RegionTrigger, TransitionFinished,
};

/// Seconds between parameter reports.
const REPORT_INTERVAL: f32 = 0.5;

fn main() {
    // Optional JSON config; defaults otherwise.
    let config = match std::env::var("WINDSHIFT_CONFIG") {
        Ok(path) => EnvironmentConfig::load_or_default(path),
        Err(_) => EnvironmentConfig::default(),
    };
    let region = config.region.clone();

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / 60.0,
        ))),
        LogPlugin::default(),
    ))
    .add_plugins(EnvironmentPlugin::new(config));

    let region = app.world_mut().spawn(region).id();
    app.insert_resource(Walkthrough::scripted(region))
        .add_systems(
            Update,
            drive_walkthrough.before(EnvironmentSet::Configure),
        )
        .add_systems(
            Update,
            (report_parameters, report_finished).after(EnvironmentSet::Blend),
        );

    app.run();
}

// ---------------------------------------------------------------------------
// Scripted player
// ---------------------------------------------------------------------------

enum Step {
    Enter,
    Exit,
    Quit,
}

/// A player walking into the region, turning back before the blend finishes,
/// then re-entering and staying until the demo quits.
#[derive(Resource)]
struct Walkthrough {
    region: Entity,
    tag: String,
    steps: Vec<(f32, Step)>,
    next: usize,
}

impl Walkthrough {
    fn scripted(region: Entity) -> Self {
        Self {
            region,
            tag: "Player".to_string(),
            steps: vec![
                (1.0, Step::Enter),
                (2.0, Step::Exit),
                (4.5, Step::Enter),
                (7.5, Step::Quit),
            ],
            next: 0,
        }
    }
}

fn drive_walkthrough(
    time: Res<Time>,
    mut walk: ResMut<Walkthrough>,
    mut triggers: EventWriter<RegionTrigger>,
    mut exit: EventWriter<AppExit>,
) {
    let now = time.elapsed_secs();
    while let Some((at, step)) = walk.steps.get(walk.next) {
        if now < *at {
            break;
        }
        match step {
            Step::Enter => {
                info!("t={now:.2}s player enters the region");
                triggers.send(RegionTrigger::enter(walk.region, walk.tag.clone()));
            }
            Step::Exit => {
                info!("t={now:.2}s player leaves the region");
                triggers.send(RegionTrigger::exit(walk.region, walk.tag.clone()));
            }
            Step::Quit => {
                exit.send(AppExit::Success);
            }
        }
        walk.next += 1;
    }
}

// ---------------------------------------------------------------------------
// Reporting
// ---------------------------------------------------------------------------

fn report_parameters(time: Res<Time>, store: Res<ParameterStore>, mut last: Local<f32>) {
    let now = time.elapsed_secs();
    if now - *last < REPORT_INTERVAL {
        return;
    }
    *last = now;

    let line = [
        ParameterId::WindStrength,
        ParameterId::TrunkWeight,
        ParameterId::TrunkSwing,
        ParameterId::Saturation,
    ]
    .iter()
    .map(|id| format!("{}={:.3}", id.label(), store.get(*id)))
    .collect::<Vec<_>>()
    .join(" ");
    info!("t={now:.2}s {line}");
}

fn report_finished(time: Res<Time>, mut finished: EventReader<TransitionFinished>) {
    for event in finished.read() {
        info!(
            "t={:.2}s blend of {} parameters finished after {:.2}s",
            time.elapsed_secs(),
            event.target.len(),
            event.duration
        );
    }
}

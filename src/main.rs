use anyhow::Result;
use glam::DVec3;
use motionscope_config::{AppConfig, DisplayMode};
use motionscope_pipeline::{PoseUpdate, Sampler, ScenePose, TickOutput};
use motionscope_sensor::SensorHub;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Publish rate of the simulated sensor feed. Faster than the sampling loop,
/// as real acquisition hardware is.
const SIM_UPDATE_MS: u64 = 20;

/// Chart collaborator stand-in.
///
/// A charting frontend would turn each window into line-series data; this
/// build logs what it would draw.
struct ChartView {
    frames: u64,
}

impl ChartView {
    fn new() -> Self {
        Self { frames: 0 }
    }

    fn render(&mut self, window: &[DVec3]) {
        self.frames += 1;
        // The newest sample sits at the end of the window.
        if let Some(latest) = window.last() {
            debug!(
                x = latest.x,
                y = latest.y,
                z = latest.z,
                window = window.len(),
                "Chart window updated"
            );
        }
    }
}

/// Scene collaborator stand-in.
///
/// Holds the current reference-frame orientations and applies the hold
/// policy: a degenerate tick keeps the previous pose on screen.
struct SceneView {
    pose: ScenePose,
    frames: u64,
}

impl SceneView {
    fn new() -> Self {
        Self {
            pose: ScenePose::new(),
            frames: 0,
        }
    }

    fn render(&mut self, update: &PoseUpdate) {
        self.pose.apply(update);
        self.frames += 1;
        debug!(
            earth_w = self.pose.earth.w,
            car_w = self.pose.car.w,
            held = update.earth.is_none(),
            "Scene orientation updated"
        );
    }
}

/// The fixed-period driver: pull a snapshot, run one tick, route the output.
///
/// Single task, one tick at a time; a tick that overruns the period causes
/// the next firing to be skipped rather than overlapped.
async fn run_sampling_loop(config: &AppConfig, hub: SensorHub) -> Result<()> {
    let mut sampler = Sampler::new(config.sampling.chart_capacity);
    let mut chart = ChartView::new();
    let mut scene = SceneView::new();

    // The picker UI owns the mode at runtime; this build keeps the startup
    // selection for the whole session.
    let mode: DisplayMode = config.display.initial_mode;

    let mut interval = tokio::time::interval(Duration::from_millis(config.sampling.period_ms));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    info!(?mode, "Sampling loop running");
    let mut tick_count: u64 = 0;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let snapshot = hub.snapshot();
                match sampler.tick(&snapshot, mode) {
                    TickOutput::Chart(window) => chart.render(&window),
                    TickOutput::Scene(update) => scene.render(&update),
                }

                tick_count += 1;
                if tick_count % 300 == 0 {
                    debug!(tick_count, "Sampling heartbeat");
                }
            }
            result = &mut shutdown => {
                if let Err(e) = result {
                    warn!(?e, "Ctrl-C handler failed");
                }
                info!(tick_count, chart_frames = chart.frames, scene_frames = scene.frames, "Sampling loop stopped");
                break;
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "motionscope_app=info,motionscope_sensor=info,motionscope_pipeline=info".into()
            }),
        )
        .init();

    info!("motionscope starting");

    // Load config.
    let config = motionscope_config::load_config().unwrap_or_else(|e| {
        warn!(?e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    info!(
        period_ms = config.sampling.period_ms,
        chart_capacity = config.sampling.chart_capacity,
        mode = ?config.display.initial_mode,
        "Config loaded"
    );

    // No phone attached in this build: run the simulated drive feed.
    let hub = SensorHub::simulated(SIM_UPDATE_MS);

    run_sampling_loop(&config, hub).await?;

    // Save config on exit.
    if let Err(e) = motionscope_config::save_config(&config) {
        warn!(?e, "Failed to save config");
    }

    Ok(())
}

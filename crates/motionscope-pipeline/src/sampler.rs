//! The per-tick sampling step.
//!
//! One tick: pull a snapshot, buffer the acceleration sample, and produce the
//! output for whichever view is active. The tick is a plain method so tests
//! drive it directly with injected readings; the production driver is a thin
//! timer adapter around it.

use crate::fifo::Fifo;
use crate::orientation::{car_frame_rotation, matrix_to_quaternion};
use glam::{DQuat, DVec3};
use motionscope_config::DisplayMode;
use motionscope_sensor::types::SensorSnapshot;

/// Orientation update for the reference-frame scene.
///
/// `None` for a frame means the attitude was degenerate this tick and the
/// scene must keep showing its previous orientation.
#[derive(Debug, Clone, Copy)]
pub struct PoseUpdate {
    /// Device attitude relative to the earth frame.
    pub earth: Option<DQuat>,
    /// Device attitude relative to the heading-aligned car frame.
    pub car: Option<DQuat>,
}

/// What a tick produced, for exactly one downstream view.
#[derive(Debug, Clone)]
pub enum TickOutput {
    /// Full acceleration window, oldest first, for the line chart.
    Chart(Vec<DVec3>),
    /// Quaternion pair for the 3-D scene.
    Scene(PoseUpdate),
}

/// Sampling state: the acceleration history buffer.
///
/// No other state is carried between ticks; the orientation path is pure.
pub struct Sampler {
    fifo: Fifo<DVec3>,
}

impl Sampler {
    /// Sampler with a chart window of `chart_capacity` samples.
    pub fn new(chart_capacity: usize) -> Self {
        Self {
            fifo: Fifo::new(chart_capacity, DVec3::ZERO),
        }
    }

    /// Run one sampling step.
    ///
    /// The acceleration sample is buffered unconditionally — history keeps
    /// accumulating while the chart is hidden. The display mode selects the
    /// single output: scene quaternions for `ReferenceFrames`, the chart
    /// window otherwise. Nothing in a tick can fail; the one numeric
    /// degeneracy surfaces as `None` inside [`PoseUpdate`].
    pub fn tick(&mut self, snapshot: &SensorSnapshot, mode: DisplayMode) -> TickOutput {
        self.fifo.push(snapshot.accel);

        if mode.shows_scene() {
            let earth = matrix_to_quaternion(snapshot.rotation);
            let car = matrix_to_quaternion(car_frame_rotation(
                snapshot.rotation,
                snapshot.motion.speed_mps,
                snapshot.motion.course_deg,
            ));
            TickOutput::Scene(PoseUpdate { earth, car })
        } else {
            TickOutput::Chart(self.fifo.snapshot())
        }
    }

    /// The chart window length.
    pub fn chart_capacity(&self) -> usize {
        self.fifo.capacity()
    }
}

/// The scene collaborator's orientation state.
///
/// Applies the documented hold policy: a `None` frame in a [`PoseUpdate`]
/// leaves the corresponding quaternion at its last good value, so a
/// degenerate tick freezes the displayed frame instead of corrupting it.
#[derive(Debug, Clone, Copy)]
pub struct ScenePose {
    pub earth: DQuat,
    pub car: DQuat,
}

impl ScenePose {
    pub fn new() -> Self {
        Self {
            earth: DQuat::IDENTITY,
            car: DQuat::IDENTITY,
        }
    }

    /// Take over the quaternions present in `update`, keep the rest.
    pub fn apply(&mut self, update: &PoseUpdate) {
        if let Some(earth) = update.earth {
            self.earth = earth;
        }
        if let Some(car) = update.car {
            self.car = car;
        }
    }
}

impl Default for ScenePose {
    fn default() -> Self {
        Self::new()
    }
}

use crate::types::{MotionState, SensorSnapshot, NO_COURSE};
use glam::{DMat3, DQuat, DVec3, EulerRot};

/// Length of one simulated drive cycle in seconds.
const CYCLE_S: f64 = 120.0;

/// Cruise speed in m/s (~54 km/h).
const CRUISE_SPEED: f64 = 15.0;

/// Below this speed the simulated location fix reports no course.
const COURSE_MIN_SPEED: f64 = 1.0;

/// Deterministic synthetic drive feed.
///
/// Stands in for the phone's acquisition layer during development: a repeating
/// stop / accelerate / cruise / brake cycle whose speed crosses the heading
/// gate in both directions, with a course sweep while moving and a gently
/// rocking device attitude. Same step index, same snapshot — no randomness,
/// so recorded behavior is reproducible under test.
#[derive(Debug, Clone, Copy)]
pub struct DriveSim {
    /// Seconds between consecutive samples.
    dt_s: f64,
}

impl DriveSim {
    pub fn new(update_ms: u64) -> Self {
        Self {
            dt_s: update_ms as f64 / 1000.0,
        }
    }

    /// Snapshot for the given sample index.
    pub fn sample(&self, step: u64) -> SensorSnapshot {
        let t = step as f64 * self.dt_s;
        let (speed, longitudinal) = speed_profile(t);

        let course = if speed > COURSE_MIN_SPEED {
            (90.0 + 45.0 * (t * 0.05).sin()).rem_euclid(360.0)
        } else {
            NO_COURSE
        };

        // Lateral sway while driving, faint vibration when stopped.
        let lateral = if speed > COURSE_MIN_SPEED {
            0.6 * (t * 0.8).sin()
        } else {
            0.05 * (t * 2.1).sin()
        };
        let vertical = 0.3 * (t * 1.7).sin();
        let accel = DVec3::new(lateral, longitudinal, vertical);

        // Dash-mounted phone: small oscillation around level.
        let yaw = 0.3 * (t * 0.10).sin();
        let pitch = 0.15 * (t * 0.23).sin();
        let roll = 0.10 * (t * 0.31).sin();
        let rotation = DMat3::from_quat(DQuat::from_euler(EulerRot::ZYX, yaw, pitch, roll));

        SensorSnapshot {
            accel,
            rotation,
            motion: MotionState {
                speed_mps: speed,
                course_deg: course,
            },
        }
    }
}

/// Speed and matching longitudinal acceleration at cycle time `t`.
///
/// Profile: stopped, ramp up, cruise with a slight surge, ramp down, stopped.
fn speed_profile(t: f64) -> (f64, f64) {
    let t = t.rem_euclid(CYCLE_S);
    if t < 10.0 {
        (0.0, 0.0)
    } else if t < 40.0 {
        let ramp = (t - 10.0) / 30.0;
        (ramp * CRUISE_SPEED, CRUISE_SPEED / 30.0)
    } else if t < 80.0 {
        let phase = (t - 40.0) * 0.25;
        (CRUISE_SPEED + 0.8 * phase.sin(), 0.8 * 0.25 * phase.cos())
    } else if t < 110.0 {
        let ramp = (t - 80.0) / 30.0;
        ((1.0 - ramp) * CRUISE_SPEED, -CRUISE_SPEED / 30.0)
    } else {
        (0.0, 0.0)
    }
}

use glam::{DMat3, DVec3};

/// Course value published when no heading fix exists.
///
/// Non-positive course is a sentinel, not an error: location hardware reports
/// it whenever course-over-ground is unavailable or unreliable.
pub const NO_COURSE: f64 = -1.0;

/// Speed and course-over-ground from the location sensor.
#[derive(Debug, Clone, Copy)]
pub struct MotionState {
    /// Ground speed in meters per second.
    pub speed_mps: f64,
    /// Direction of travel in compass degrees [0, 360), clockwise from north.
    /// Non-positive when no valid heading exists.
    pub course_deg: f64,
}

impl MotionState {
    /// Whether a valid heading fix is present.
    pub fn has_course(&self) -> bool {
        self.course_deg > 0.0
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self {
            speed_mps: 0.0,
            course_deg: NO_COURSE,
        }
    }
}

/// One instant's calibrated readings, pulled by the sampling loop each tick.
///
/// Upstream acquisition owns calibration and fusion; everything here arrives
/// ready to consume.
#[derive(Debug, Clone, Copy)]
pub struct SensorSnapshot {
    /// User acceleration [x, y, z] in m/s^2, gravity removed.
    pub accel: DVec3,
    /// Device-to-earth attitude. Assumed orthonormal.
    pub rotation: DMat3,
    /// Ground speed and course.
    pub motion: MotionState,
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            accel: DVec3::ZERO,
            rotation: DMat3::IDENTITY,
            motion: MotionState::default(),
        }
    }
}

//! The sampling-and-orientation core: acceleration history buffering,
//! attitude quaternion extraction, and the per-tick routing between the
//! chart and the reference-frame scene.

pub mod fifo;
pub mod orientation;
pub mod sampler;

pub use fifo::Fifo;
pub use orientation::{
    car_frame_rotation, matrix_to_quaternion, HEADING_SPEED_THRESHOLD, QUAT_DEGENERACY_EPSILON,
};
pub use sampler::{PoseUpdate, Sampler, ScenePose, TickOutput};

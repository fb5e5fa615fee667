//! Attitude transforms for the reference-frame scene.
//!
//! Two pure functions, no state: rotation-matrix-to-quaternion extraction for
//! the earth frame, and the speed/course-gated heading rotation that aligns
//! the car frame with the direction of travel.

use glam::{DMat3, DQuat};

/// Below `1 + trace(R)` of this value the w-dominant quaternion extraction is
/// degenerate (attitude within ~1e-3 rad of a 180° rotation).
pub const QUAT_DEGENERACY_EPSILON: f64 = 1e-7;

/// Minimum ground speed (m/s, ~5 mph) for course-over-ground to be trusted.
/// Location fixes below this speed report unreliable headings.
pub const HEADING_SPEED_THRESHOLD: f64 = 2.2452;

/// Convert an orthonormal rotation matrix to a unit quaternion.
///
/// Shepperd's method, w-dominant branch only: `None` when the attitude is
/// near a 180° rotation and `qw` would vanish. Callers decide the `None`
/// policy; the scene holds its previous orientation (see [`ScenePose`]).
///
/// [`ScenePose`]: crate::sampler::ScenePose
pub fn matrix_to_quaternion(r: DMat3) -> Option<DQuat> {
    // glam stores columns; m_rc below refers to the mathematical row/column.
    let arg = 1.0 + r.x_axis.x + r.y_axis.y + r.z_axis.z;
    if arg <= QUAT_DEGENERACY_EPSILON {
        return None;
    }
    let qw = arg.sqrt() / 2.0;
    let qx = (r.y_axis.z - r.z_axis.y) / (4.0 * qw); // m32 - m23
    let qy = (r.z_axis.x - r.x_axis.z) / (4.0 * qw); // m13 - m31
    let qz = (r.x_axis.y - r.y_axis.x) / (4.0 * qw); // m21 - m12
    Some(DQuat::from_xyzw(qx, qy, qz, qw))
}

/// Attitude of the car body frame.
///
/// Heading-aligned only when a valid course exists (`course_deg > 0`) and the
/// speed is above [`HEADING_SPEED_THRESHOLD`]; course is clockwise from
/// north, so it is negated for the counterclockwise rotation convention and
/// applied about the vertical axis. Below the gate the car frame coincides
/// with the earth frame.
///
/// Two-state policy with no hysteresis: a single tick across the threshold
/// flips the result. Smoothing, if wanted, belongs downstream.
pub fn car_frame_rotation(device: DMat3, speed_mps: f64, course_deg: f64) -> DMat3 {
    if course_deg > 0.0 && speed_mps > HEADING_SPEED_THRESHOLD {
        let theta = -course_deg.to_radians();
        device * DMat3::from_rotation_z(theta)
    } else {
        DMat3::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_mat3_eq(a: DMat3, b: DMat3, tol: f64) {
        let diff = a - b;
        for col in [diff.x_axis, diff.y_axis, diff.z_axis] {
            assert!(
                col.length() <= tol,
                "matrices differ:\n{:?}\nvs\n{:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn identity_matrix_gives_identity_quaternion() {
        let q = matrix_to_quaternion(DMat3::IDENTITY).unwrap();
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 0.0);
        assert_eq!(q.w, 1.0);
    }

    #[test]
    fn quarter_turn_about_z_extracts_correctly() {
        let q = matrix_to_quaternion(DMat3::from_rotation_z(PI / 2.0)).unwrap();
        let expected = DQuat::from_rotation_z(PI / 2.0);
        assert!((q.x - expected.x).abs() < 1e-12);
        assert!((q.y - expected.y).abs() < 1e-12);
        assert!((q.z - expected.z).abs() < 1e-12);
        assert!((q.w - expected.w).abs() < 1e-12);
    }

    #[test]
    fn round_trips_a_general_rotation() {
        let q = DQuat::from_euler(glam::EulerRot::ZYX, 0.4, -0.7, 1.1);
        let extracted = matrix_to_quaternion(DMat3::from_quat(q)).unwrap();
        // Both have w > 0 here, so compare componentwise.
        assert!((extracted.x - q.x).abs() < 1e-9);
        assert!((extracted.y - q.y).abs() < 1e-9);
        assert!((extracted.z - q.z).abs() < 1e-9);
        assert!((extracted.w - q.w).abs() < 1e-9);
    }

    #[test]
    fn half_turn_about_any_axis_is_degenerate() {
        assert!(matrix_to_quaternion(DMat3::from_rotation_x(PI)).is_none());
        assert!(matrix_to_quaternion(DMat3::from_rotation_y(PI)).is_none());
        assert!(matrix_to_quaternion(DMat3::from_rotation_z(PI)).is_none());
    }

    #[test]
    fn near_half_turn_just_above_epsilon_still_converts() {
        // 1 + trace = 2 + 2cos(theta) ~= 1e-6 here, above the 1e-7 cutoff.
        let theta = PI - 1e-3;
        let q = matrix_to_quaternion(DMat3::from_rotation_z(theta)).unwrap();
        assert!(q.w > 0.0);
        assert!((q.z - (theta / 2.0).sin()).abs() < 1e-6);
    }

    #[test]
    fn car_frame_is_identity_below_speed_threshold() {
        let device = DMat3::from_rotation_y(0.5);
        assert_mat3_eq(car_frame_rotation(device, 0.0, 90.0), DMat3::IDENTITY, 0.0);
        assert_mat3_eq(car_frame_rotation(device, 2.2452, 90.0), DMat3::IDENTITY, 0.0);
        assert_mat3_eq(car_frame_rotation(device, 1.0, 359.0), DMat3::IDENTITY, 0.0);
    }

    #[test]
    fn car_frame_is_identity_without_a_course() {
        let device = DMat3::from_rotation_y(0.5);
        assert_mat3_eq(car_frame_rotation(device, 30.0, 0.0), DMat3::IDENTITY, 0.0);
        assert_mat3_eq(car_frame_rotation(device, 30.0, -1.0), DMat3::IDENTITY, 0.0);
    }

    #[test]
    fn heading_alignment_applies_negated_course_about_vertical() {
        let device = DMat3::from_rotation_y(0.3) * DMat3::from_rotation_x(0.2);
        let result = car_frame_rotation(device, 5.0, 90.0);
        let expected = device * DMat3::from_rotation_z(-90.0_f64.to_radians());
        assert_mat3_eq(result, expected, 1e-9);
    }

    #[test]
    fn heading_alignment_with_identity_device_is_pure_yaw() {
        let result = car_frame_rotation(DMat3::IDENTITY, 10.0, 180.0);
        let expected = DMat3::from_rotation_z(-PI);
        assert_mat3_eq(result, expected, 1e-9);
    }
}

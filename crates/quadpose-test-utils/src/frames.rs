//! Frame and vector comparison helpers.

use approx::relative_eq;
use nalgebra::Vector3;
use quadpose_core::RotationOrder;
use quadpose_ik::Frame;

pub fn vec3(x: f64, y: f64, z: f64) -> Vector3<f64> {
    Vector3::new(x, y, z)
}

/// A frame with every angle and coordinate non-zero.
pub fn sample_frame(order: RotationOrder) -> Frame {
    Frame::from_euler_and_position(order, (0.3, -0.2, 0.45), (1.5, -0.5, 2.0))
}

/// Panics unless `actual` and `expected` agree within `epsilon`.
#[track_caller]
pub fn assert_vec_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert!(
        relative_eq!(actual, expected, epsilon = epsilon),
        "vectors differ: actual {actual:?}, expected {expected:?} (eps {epsilon})"
    );
}

/// Panics unless both translation and rotation agree within `epsilon`.
#[track_caller]
pub fn assert_frame_eq(actual: &Frame, expected: &Frame, epsilon: f64) {
    assert!(
        actual.approx_eq(expected, epsilon),
        "frames differ:\n  actual   t={:?} r={:?}\n  expected t={:?} r={:?}",
        actual.translation(),
        actual.euler_angles(),
        expected.translation(),
        expected.euler_angles(),
    );
}

//! Rigid-body frames built from Euler angles.
//!
//! A [`Frame`] pairs an [`Isometry3`] with the [`RotationOrder`] it was built
//! in, so sinks can turn it back into angles in the same convention.
//!
//! Angles are always passed as `(yaw, roll, pitch)`: yaw about Z, roll about
//! X and pitch about Y. The tuple is reordered into per-axis slots before the
//! order is applied, so the same tuple means different orientations under
//! different orders.

use std::ops::Mul;

use nalgebra::{Isometry3, Matrix3, Point3, Rotation3, Translation3, UnitQuaternion, Vector3};

use quadpose_core::RotationOrder;

/// Below this `cos(middle angle)` a decomposition is treated as gimbal locked.
const GIMBAL_EPSILON: f64 = 1e-9;

/// A rigid transform: rotation then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    isometry: Isometry3<f64>,
    order: RotationOrder,
}

impl Frame {
    pub fn identity(order: RotationOrder) -> Self {
        Self {
            isometry: Isometry3::identity(),
            order,
        }
    }

    pub const fn from_isometry(isometry: Isometry3<f64>, order: RotationOrder) -> Self {
        Self { isometry, order }
    }

    /// Build a frame from `(yaw, roll, pitch)` in radians and a position.
    pub fn from_euler_and_position(
        order: RotationOrder,
        angles: (f64, f64, f64),
        position: (f64, f64, f64),
    ) -> Self {
        let rotation = rotation_from_euler(order, angles);
        let translation = Translation3::new(position.0, position.1, position.2);
        Self {
            isometry: Isometry3::from_parts(
                translation,
                UnitQuaternion::from_rotation_matrix(&rotation),
            ),
            order,
        }
    }

    /// Pure translation.
    pub fn from_translation(order: RotationOrder, x: f64, y: f64, z: f64) -> Self {
        Self {
            isometry: Isometry3::translation(x, y, z),
            order,
        }
    }

    /// Pure rotation about the local Z axis.
    pub fn from_yaw(order: RotationOrder, yaw: f64) -> Self {
        Self::from_euler_and_position(order, (yaw, 0.0, 0.0), (0.0, 0.0, 0.0))
    }

    /// `self * other`: apply `other` first, then `self`.
    ///
    /// The result keeps `self`'s rotation order.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            isometry: self.isometry * other.isometry,
            order: self.order,
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            isometry: self.isometry.inverse(),
            order: self.order,
        }
    }

    /// Decompose the rotation into `(yaw, roll, pitch)` for `order`.
    ///
    /// The middle axis of `order` comes back in `[-pi/2, pi/2]`, the other
    /// two in `(-pi, pi]`. At gimbal lock (middle angle at +-pi/2) only the
    /// sum or difference of the outer angles is defined: the last-applied
    /// angle is reported as 0 and the first-applied one carries the rest.
    pub fn to_euler_angles(&self, order: RotationOrder) -> (f64, f64, f64) {
        let matrix = self.isometry.rotation.to_rotation_matrix().into_inner();
        euler_from_matrix(order, &matrix)
    }

    /// [`to_euler_angles`](Self::to_euler_angles) in this frame's own order.
    pub fn euler_angles(&self) -> (f64, f64, f64) {
        self.to_euler_angles(self.order)
    }

    pub fn translation(&self) -> Vector3<f64> {
        self.isometry.translation.vector
    }

    pub fn rotation(&self) -> UnitQuaternion<f64> {
        self.isometry.rotation
    }

    pub fn rotation_matrix(&self) -> Matrix3<f64> {
        self.isometry.rotation.to_rotation_matrix().into_inner()
    }

    pub const fn isometry(&self) -> &Isometry3<f64> {
        &self.isometry
    }

    pub const fn order(&self) -> RotationOrder {
        self.order
    }

    /// Same transform, decomposed in a different order from now on.
    #[must_use]
    pub const fn with_order(mut self, order: RotationOrder) -> Self {
        self.order = order;
        self
    }

    /// Map a point given in this frame into the parent frame.
    pub fn transform_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.isometry.transform_point(&Point3::from(*point)).coords
    }

    /// Express a parent-frame point in this frame's coordinates.
    pub fn local_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.isometry
            .inverse_transform_point(&Point3::from(*point))
            .coords
    }

    /// Unit vector of local axis `axis` (0 = X, 1 = Y, 2 = Z) in the parent frame.
    ///
    /// # Panics
    ///
    /// Panics if `axis > 2`.
    pub fn axis(&self, axis: usize) -> Vector3<f64> {
        self.rotation_matrix().column(axis).into_owned()
    }

    /// Compare translation and rotation matrix entries within `epsilon`.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        let dt = (self.translation() - other.translation()).amax();
        let dr = (self.rotation_matrix() - other.rotation_matrix()).amax();
        dt <= epsilon && dr <= epsilon
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::identity(RotationOrder::default())
    }
}

impl Mul for Frame {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl Mul<&Frame> for &Frame {
    type Output = Frame;

    fn mul(self, rhs: &Frame) -> Frame {
        self.compose(rhs)
    }
}

/// Wrap an angle into `(-pi, pi]`.
pub fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Per-axis angle slots `[x, y, z]` for a `(yaw, roll, pitch)` tuple.
const fn axis_angles((yaw, roll, pitch): (f64, f64, f64)) -> [f64; 3] {
    [roll, pitch, yaw]
}

fn axis_rotation(axis: usize, angle: f64) -> Rotation3<f64> {
    let unit = match axis {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        _ => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&unit, angle)
}

fn rotation_from_euler(order: RotationOrder, angles: (f64, f64, f64)) -> Rotation3<f64> {
    let slots = axis_angles(angles);
    let [first, second, third] = order.axes();
    axis_rotation(third, slots[third])
        * axis_rotation(second, slots[second])
        * axis_rotation(first, slots[first])
}

/// Inverse of [`rotation_from_euler`], for `R = R_k * R_j * R_i`.
fn euler_from_matrix(order: RotationOrder, m: &Matrix3<f64>) -> (f64, f64, f64) {
    let [i, j, k] = order.axes();
    // Cyclic orders and their reversals differ only in the sign of the
    // off-diagonal terms.
    let s = if order.is_cyclic() { 1.0 } else { -1.0 };

    let middle = (-s * m[(k, i)]).clamp(-1.0, 1.0).asin();
    let cos_middle = m[(k, j)].hypot(m[(k, k)]);

    let (first, last) = if cos_middle > GIMBAL_EPSILON {
        (
            (s * m[(k, j)]).atan2(m[(k, k)]),
            (s * m[(j, i)]).atan2(m[(i, i)]),
        )
    } else {
        ((-s * m[(j, k)]).atan2(m[(j, j)]), 0.0)
    };

    let mut slots = [0.0; 3];
    slots[i] = first;
    slots[j] = middle;
    slots[k] = last;
    (slots[2], slots[0], slots[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

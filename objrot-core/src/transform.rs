/// Rotations about the principal axes
#[cfg(test)]
use nalgebra::Matrix3;

use crate::geometry::{Axis, Point3D};

/// A right-handed rotation about one coordinate axis.
///
/// `sin` and `cos` are evaluated once at construction, so rotating a whole
/// document costs one trigonometric evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    axis: Axis,
    degrees: f64,
    sin_a: f64,
    cos_a: f64,
}

impl Rotation {
    /// Create a rotation of `degrees` about `axis`.
    ///
    /// Any magnitude and sign is accepted; the angle is not normalized.
    pub fn new(axis: Axis, degrees: f64) -> Self {
        let (sin_a, cos_a) = degrees.to_radians().sin_cos();
        Self {
            axis,
            degrees,
            sin_a,
            cos_a,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The equivalent 3x3 rotation matrix, used to check `apply`.
    #[cfg(test)]
    fn matrix(&self) -> Matrix3<f64> {
        let (sin_a, cos_a) = (self.sin_a, self.cos_a);
        #[rustfmt::skip]
        let matrix = match self.axis {
            Axis::X => Matrix3::new(
                1.0,   0.0,    0.0,
                0.0, cos_a, -sin_a,
                0.0, sin_a,  cos_a,
            ),
            Axis::Y => Matrix3::new(
                 cos_a, 0.0, sin_a,
                   0.0, 1.0,   0.0,
                -sin_a, 0.0, cos_a,
            ),
            Axis::Z => Matrix3::new(
                cos_a, -sin_a, 0.0,
                sin_a,  cos_a, 0.0,
                  0.0,    0.0, 1.0,
            ),
        };
        matrix
    }

    /// Rotate a point (or a normal; pure rotations need no renormalization).
    ///
    /// The coordinate on the rotation axis is copied through untouched, so an
    /// infinite value there never turns into NaN.
    pub fn apply(&self, point: &Point3D) -> Point3D {
        let (s, c) = (self.sin_a, self.cos_a);
        let (x, y, z) = (point.x, point.y, point.z);
        match self.axis {
            Axis::X => Point3D::new(x, y * c - z * s, y * s + z * c),
            Axis::Y => Point3D::new(x * c + z * s, y, -x * s + z * c),
            Axis::Z => Point3D::new(x * c - y * s, x * s + y * c, z),
        }
    }
}

/// Rotate `point` by `degrees` about `axis`.
pub fn rotate(axis: Axis, degrees: f64, point: &Point3D) -> Point3D {
    Rotation::new(axis, degrees).apply(point)
}

/// Geometry primitives for OBJ rotation
use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;

use crate::error::RotateError;

/// A vertex position or normal direction read from one OBJ line.
pub type Point3D = Point3<f64>;

/// Principal axis a rotation is performed about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of the coordinate this axis leaves untouched.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl FromStr for Axis {
    type Err = RotateError;

    /// Case-insensitive: `x`, `Y` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(RotateError::InvalidAxis {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Parse a rotation angle in degrees.
pub fn parse_angle(s: &str) -> Result<f64, RotateError> {
    s.trim().parse::<f64>().map_err(|_| RotateError::InvalidAngle {
        value: s.to_string(),
    })
}

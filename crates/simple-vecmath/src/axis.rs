use crate::Vector3;

/// One of the three coordinate axes.
///
/// Rotation APIs accept `impl Into<Vector3>`, so an [`Axis`] can be passed wherever an arbitrary
/// rotation axis is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the unit vector pointing along this axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// assert_eq!(Axis::Y.direction(), vec3(0.0, 1.0, 0.0));
    /// ```
    pub const fn direction(self) -> Vector3 {
        match self {
            Axis::X => Vector3::X,
            Axis::Y => Vector3::Y,
            Axis::Z => Vector3::Z,
        }
    }
}

impl From<Axis> for Vector3 {
    #[inline]
    fn from(axis: Axis) -> Self {
        axis.direction()
    }
}

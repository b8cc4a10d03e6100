mod ops;
mod view;

use std::fmt;

use crate::{
    traits::sealed::{Components, Sealed},
    vec2, vec3, vec4, RotationMatrix, Vector2, Vector3, Vector4, VectorOps,
};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Normalization is not enforced; operations that assume unit length say so.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, and share the [`VectorOps`] contract with the vector types. Three of its methods
/// have quaternion-specific meaning:
///
/// - [`VectorOps::multiply`] is the Hamilton product (`self = self * other`), not the
///   component-wise product.
/// - [`VectorOps::interpolate`] is a spherical linear interpolation (Slerp).
/// - [`VectorOps::negate`] negates only the imaginary part `x, y, z`; `w` is left unchanged.
///
/// The [`Default`] value is [`Quaternion::IDENTITY`].
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(transparent)]
pub struct Quaternion {
    vec: Vector4,
}

unsafe impl bytemuck::Zeroable for Quaternion {}
unsafe impl bytemuck::Pod for Quaternion {}

impl Quaternion {
    /// The multiplicative identity `(0, 0, 0, 1)`.
    ///
    /// This is a unit quaternion that represents "no rotation".
    pub const IDENTITY: Self = Self {
        vec: vec4(0.0, 0.0, 0.0, 1.0),
    };

    /// Creates a quaternion from its imaginary parts `x`, `y`, `z` and its real part `w`.
    #[inline]
    pub const fn from_components(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates the rotation of `axis_angle.w` radians about the axis `axis_angle.xyz`.
    ///
    /// The axis does not have to be normalized. A zero axis yields `NaN` imaginary parts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// use std::f32::consts::PI;
    ///
    /// let q = Quaternion::from_axis_angle(&vec4(0.0, 0.0, 2.0, PI));
    /// assert_abs_diff_eq!(q, Quaternion::from_components(0.0, 0.0, 1.0, 0.0), epsilon = 1e-6);
    /// ```
    pub fn from_axis_angle(axis_angle: &Vector4) -> Self {
        let [x, y, z, angle] = axis_angle.into_array();
        let n = vec3(x, y, z).length();
        let (sin, cos) = (0.5 * angle).sin_cos();
        let s = sin / n;
        Self::from_components(x * s, y * s, z * s, cos)
    }

    /// Converts the rotation block of `m` into a quaternion.
    ///
    /// Uses the trace method: if the trace is non-negative, `w` is derived from it; otherwise the
    /// largest diagonal element picks the component that is computed first (ties go to the
    /// earliest of `m00`, `m11`, `m22`).
    ///
    /// With the storage convention of [`Matrix`][crate::Matrix], the result describes the
    /// rotation with the *inverse* sense of the one [`Matrix4::rotate`][crate::Matrix4::rotate]
    /// composed, so its axis comes out flipped while the angle is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// assert_eq!(Quaternion::from_matrix(&Matrix3::IDENTITY), Quaternion::IDENTITY);
    /// ```
    pub fn from_matrix(m: &impl RotationMatrix) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = m.rotation_block();

        let tr = m00 + m11 + m22;
        let (x, y, z, w);
        if tr >= 0.0 {
            let mut s = (tr + 1.0).sqrt();
            w = s * 0.5;
            s = 0.5 / s;
            x = (m21 - m12) * s;
            y = (m02 - m20) * s;
            z = (m10 - m01) * s;
        } else {
            let max = m00.max(m11).max(m22);
            if max == m00 {
                let mut s = (m00 - (m11 + m22) + 1.0).sqrt();
                x = s * 0.5;
                s = 0.5 / s;
                y = (m01 + m10) * s;
                z = (m20 + m02) * s;
                w = (m21 - m12) * s;
            } else if max == m11 {
                let mut s = (m11 - (m22 + m00) + 1.0).sqrt();
                y = s * 0.5;
                s = 0.5 / s;
                z = (m12 + m21) * s;
                x = (m01 + m10) * s;
                w = (m02 - m20) * s;
            } else {
                let mut s = (m22 - (m00 + m11) + 1.0).sqrt();
                z = s * 0.5;
                s = 0.5 / s;
                x = (m20 + m02) * s;
                y = (m12 + m21) * s;
                w = (m10 - m01) * s;
            }
        }

        Self::from_components(x, y, z, w)
    }

    /// Resets `self` to [`Quaternion::IDENTITY`].
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Negates the imaginary part.
    ///
    /// For unit quaternions this is the inverse rotation.
    pub fn conjugate(&mut self) -> &mut Self {
        let [x, y, z, w] = self.vec.into_array();
        self.vec = vec4(-x, -y, -z, w);
        self
    }

    /// Replaces `self` with its multiplicative inverse, the conjugate divided by the squared
    /// length.
    ///
    /// A zero quaternion is not guarded against and yields `NaN` components.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// let q = Quaternion::from_components(1.0, 2.0, 3.0, 4.0);
    /// let mut inv = q;
    /// inv.inverse();
    /// assert_abs_diff_eq!(q * inv, Quaternion::IDENTITY, epsilon = 1e-6);
    /// ```
    pub fn inverse(&mut self) -> &mut Self {
        let len2 = self.length_squared();
        if len2 == 0.0 {
            log::trace!("inverting a zero quaternion");
        }
        self.conjugate().scale(1.0 / len2)
    }

    /// Multiplies `self` by the inverse of `other` (`self = self * other⁻¹`).
    ///
    /// `other` is not modified. If `other` has zero length, the result is the zero quaternion.
    pub fn multiply_inverse(&mut self, other: &Self) -> &mut Self {
        let mut n = other.length_squared();
        if n == 0.0 {
            log::trace!("multiplying by the inverse of a zero quaternion");
        } else {
            n = 1.0 / n;
        }

        let [x, y, z, w] = self.vec.into_array();
        let [bx, by, bz, bw] = other.vec.into_array();

        #[rustfmt::skip]
        let vec = vec4(
            (x * bw - w * bx - y * bz + z * by) * n,
            (y * bw - w * by - z * bx + x * bz) * n,
            (z * bw - w * bz - x * by + y * bx) * n,
            (w * bw + x * bx + y * by + z * bz) * n,
        );
        self.vec = vec;
        self
    }

    /// Returns `(x, y)`.
    pub fn to_vector2(&self) -> Vector2 {
        vec2(self.x, self.y)
    }

    /// Returns `(x, y, z)`.
    pub fn to_vector3(&self) -> Vector3 {
        vec3(self.x, self.y, self.z)
    }

    /// Returns `(x, y, z, w)`.
    pub fn to_vector4(&self) -> Vector4 {
        self.vec
    }

    /// Extracts the rotation as `(axis.x, axis.y, axis.z, angle)` with a normalized axis and the
    /// angle in radians.
    ///
    /// The angle is `2 * atan2(|xyz|, w)`, which does not require `self` to be normalized. If the
    /// imaginary part is negligible, the result is the zero rotation `(0, 1, 0, 0)`.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// let q = Quaternion::from_axis_angle(&vec4(1.0, 0.0, 0.0, 0.5));
    /// assert_abs_diff_eq!(q.to_axis_angle(), vec4(1.0, 0.0, 0.0, 0.5), epsilon = 1e-6);
    /// ```
    pub fn to_axis_angle(&self) -> Vector4 {
        let mut axis = self.to_vector3();
        let mag = axis.length();
        if mag > f32::EPSILON {
            axis.scale(1.0 / mag);
            axis.extend(2.0 * mag.atan2(self.w))
        } else {
            vec4(0.0, 1.0, 0.0, 0.0)
        }
    }

    fn hamilton(&mut self, other: &Self) {
        let [x, y, z, w] = self.vec.into_array();
        let [bx, by, bz, bw] = other.vec.into_array();

        #[rustfmt::skip]
        let vec = vec4(
            x * bw + w * bx + y * bz - z * by,
            y * bw + w * by + z * bx - x * bz,
            z * bw + w * bz + x * by - y * bx,
            w * bw - x * bx - y * by - z * bz,
        );
        self.vec = vec;
    }
}

impl Sealed for Quaternion {}

impl Components for Quaternion {
    #[inline]
    fn components(&self) -> &[f32] {
        self.vec.as_slice()
    }

    #[inline]
    fn components_mut(&mut self) -> &mut [f32] {
        self.vec.as_mut_slice()
    }
}

impl VectorOps for Quaternion {
    type Array = [f32; 4];

    #[inline]
    fn to_array(&self) -> [f32; 4] {
        self.vec.into_array()
    }

    /// Negates `x`, `y` and `z`, leaving `w` unchanged (same as [`Quaternion::conjugate`]).
    fn negate(&mut self) -> &mut Self {
        self.conjugate()
    }

    /// Hamilton product `self = self * other`.
    ///
    /// Not commutative: the receiver is the left operand.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let i = Quaternion::from_components(1.0, 0.0, 0.0, 0.0);
    /// let j = Quaternion::from_components(0.0, 1.0, 0.0, 0.0);
    /// let mut q = i;
    /// q.multiply(&j);
    /// assert_eq!(q, Quaternion::from_components(0.0, 0.0, 1.0, 0.0)); // i * j = k
    /// ```
    fn multiply(&mut self, other: &Self) -> &mut Self {
        self.hamilton(other);
        self
    }

    /// Spherical linear interpolation towards `other`.
    ///
    /// `self` is normalized first and `other` is compared in normalized form. If the two are
    /// (anti)parallel, or the interpolation angle has a zero sine, `self` is left as the
    /// normalized input instead of falling back to linear interpolation.
    fn interpolate(&mut self, other: &Self, alpha: f32) -> &mut Self {
        self.normalize();
        let mut b = *other;
        b.normalize();

        let dot = f64::from(self.dot(&b));
        if dot.abs() >= 1.0 {
            log::trace!("slerp between parallel quaternions (dot = {dot}), leaving receiver as is");
            return self;
        }

        let omega = dot.acos();
        let sin_omega = omega.sin();
        if sin_omega == 0.0 {
            log::trace!("slerp angle has zero sine, leaving receiver as is");
            return self;
        }

        let alpha = f64::from(alpha);
        let s0 = ((1.0 - alpha) * omega).sin() / sin_omega;
        let s1 = (alpha * omega).sin() / sin_omega;
        for (a, b) in self.vec.as_mut_slice().iter_mut().zip(b.vec.as_slice()) {
            *a = (s0 * f64::from(*a) + s1 * f64::from(*b)) as f32;
        }
        self
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vector4> for Quaternion {
    #[inline]
    fn from(vec: Vector4) -> Self {
        Self { vec }
    }
}

/// Copies `x` and `y`; `z` and `w` are zero.
impl From<Vector2> for Quaternion {
    fn from(v: Vector2) -> Self {
        Self::from_components(v.x, v.y, 0.0, 0.0)
    }
}

/// Copies `x`, `y` and `z`; `w` is zero.
impl From<Vector3> for Quaternion {
    fn from(v: Vector3) -> Self {
        Self::from_components(v.x, v.y, v.z, 0.0)
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quaternion")
            .field(&self.x)
            .field(&self.y)
            .field(&self.z)
            .field(&self.w)
            .finish()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

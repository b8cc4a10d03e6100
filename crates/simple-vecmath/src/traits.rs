//! Operation contracts shared by the vector, quaternion and matrix types.

pub(crate) mod sealed {
    /// Marker preventing downstream implementations of the crate's contracts.
    pub trait Sealed {}

    /// Raw component access backing the default methods of [`VectorOps`][super::VectorOps].
    pub trait Components: Sealed {
        fn components(&self) -> &[f32];
        fn components_mut(&mut self) -> &mut [f32];
    }
}

use sealed::Components;

/// Pairs up the components of two same-arity values.
///
/// # Panics
///
/// Panics if the operands have different lengths (only possible for [`VectorN`][crate::VectorN]).
#[track_caller]
fn zip_check(lhs: usize, rhs: usize) {
    assert_eq!(
        lhs, rhs,
        "vector length mismatch: {} components vs {} components",
        lhs, rhs
    );
}

/// The operation contract every vector-like type of this crate satisfies identically.
///
/// It is implemented by [`Vector2`][crate::Vector2], [`Vector3`][crate::Vector3],
/// [`Vector4`][crate::Vector4], [`Quaternion`][crate::Quaternion] and
/// [`VectorN`][crate::VectorN], and cannot be implemented outside of this crate.
///
/// Mutating methods operate on the receiver only and return it again, so calls can be chained:
///
/// ```
/// # use simple_vecmath::*;
/// let mut v = vec3(3.0, 0.0, -4.0);
/// v.negate().scale(2.0).clamp(-1.0, 1.0);
/// assert_eq!(v, vec3(-1.0, 0.0, 1.0));
/// ```
///
/// The operands of two-operand methods are never modified.
pub trait VectorOps: Clone + Components {
    /// The owned array type returned by [`VectorOps::to_array`].
    type Array: AsRef<[f32]>;

    /// Returns the sum of the squared components.
    fn length_squared(&self) -> f32 {
        self.components().iter().map(|c| c * c).sum()
    }

    /// Returns the Euclidean length.
    #[doc(alias = "norm", alias = "magnitude")]
    fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Replaces each component with its additive inverse.
    fn negate(&mut self) -> &mut Self {
        self.components_mut().iter_mut().for_each(|c| *c = -*c);
        self
    }

    /// Multiplies each component by `scale`.
    fn scale(&mut self, scale: f32) -> &mut Self {
        self.components_mut().iter_mut().for_each(|c| *c *= scale);
        self
    }

    /// Scales `self` by the reciprocal of its length.
    ///
    /// A zero-length value is not guarded against: its components become `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut z = vec3(0.0, 0.0, 4.0);
    /// z.normalize();
    /// assert_eq!(z, Vector3::Z);
    /// ```
    fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        if length == 0.0 {
            log::trace!("normalizing a zero-length vector");
        }
        self.scale(1.0 / length)
    }

    /// Returns an independent copy of `self`.
    fn copy(&self) -> Self {
        self.clone()
    }

    /// Replaces each component with its absolute value.
    fn absolute(&mut self) -> &mut Self {
        self.components_mut().iter_mut().for_each(|c| *c = c.abs());
        self
    }

    /// Raises every component below `min` to `min`.
    fn clamp_min(&mut self, min: f32) -> &mut Self {
        for c in self.components_mut() {
            if *c < min {
                *c = min;
            }
        }
        self
    }

    /// Lowers every component above `max` to `max`.
    fn clamp_max(&mut self, max: f32) -> &mut Self {
        for c in self.components_mut() {
            if *c > max {
                *c = max;
            }
        }
        self
    }

    /// Clamps every component into `min..=max`.
    ///
    /// The lower bound is applied first, so if `min > max` every component ends up as `max`.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut v = vec2(-10.0, 10.0);
    /// v.clamp(5.0, 3.0);
    /// assert_eq!(v, vec2(3.0, 3.0));
    /// ```
    fn clamp(&mut self, min: f32, max: f32) -> &mut Self {
        self.clamp_min(min).clamp_max(max)
    }

    /// Returns the components in positional order (`x, y[, z][, w]`).
    fn to_array(&self) -> Self::Array;

    /// Component-wise addition.
    fn add(&mut self, other: &Self) -> &mut Self {
        zip_check(self.components().len(), other.components().len());
        for (a, b) in self.components_mut().iter_mut().zip(other.components()) {
            *a += *b;
        }
        self
    }

    /// Component-wise subtraction.
    fn subtract(&mut self, other: &Self) -> &mut Self {
        zip_check(self.components().len(), other.components().len());
        for (a, b) in self.components_mut().iter_mut().zip(other.components()) {
            *a -= *b;
        }
        self
    }

    /// Component-wise (Hadamard) product.
    fn multiply(&mut self, other: &Self) -> &mut Self {
        zip_check(self.components().len(), other.components().len());
        for (a, b) in self.components_mut().iter_mut().zip(other.components()) {
            *a *= *b;
        }
        self
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// The sum is accumulated in `f64`.
    fn distance_squared(&self, other: &Self) -> f32 {
        zip_check(self.components().len(), other.components().len());
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| f64::from(a - b).powi(2))
            .sum::<f64>() as f32
    }

    /// Euclidean distance to `other`.
    fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Sum of absolute component differences ("taxicab" distance).
    fn distance_l1(&self, other: &Self) -> f32 {
        zip_check(self.components().len(), other.components().len());
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| (a - b).abs())
            .sum()
    }

    /// Largest absolute component difference (Chebyshev distance).
    ///
    /// A `NaN` difference makes the result `NaN`.
    fn distance_linf(&self, other: &Self) -> f32 {
        zip_check(self.components().len(), other.components().len());
        self.components()
            .iter()
            .zip(other.components())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, |max, d| if d > max || d.is_nan() { d } else { max })
    }

    /// Linear interpolation towards `other`: `self = (1 - alpha) * self + alpha * other`.
    ///
    /// `alpha` is not restricted to `0..=1`; values outside that range extrapolate.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut v = vec2(0.0, 10.0);
    /// v.interpolate(&vec2(10.0, 20.0), 1.5);
    /// assert_eq!(v, vec2(15.0, 25.0));
    /// ```
    fn interpolate(&mut self, other: &Self, alpha: f32) -> &mut Self {
        zip_check(self.components().len(), other.components().len());
        for (a, b) in self.components_mut().iter_mut().zip(other.components()) {
            *a = (1.0 - alpha) * *a + alpha * *b;
        }
        self
    }

    /// Returns `true` if no component differs from `other` by more than `epsilon`.
    ///
    /// This is the only tolerance-based comparison; `==` is exact.
    ///
    /// Never `true` if a component of either operand is `NaN`.
    fn epsilon_equals(&self, other: &Self, epsilon: f32) -> bool {
        zip_check(self.components().len(), other.components().len());
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Sum of the component-wise products.
    fn dot(&self, other: &Self) -> f32 {
        zip_check(self.components().len(), other.components().len());
        self.components()
            .iter()
            .zip(other.components())
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }
}

/// The operation contract of the square matrix types [`Matrix3`][crate::Matrix3] and
/// [`Matrix4`][crate::Matrix4].
pub trait MatrixOps: Clone + sealed::Sealed {
    /// The owned flat array type returned by [`MatrixOps::to_array`].
    type Array: AsRef<[f32]>;

    /// Overwrites `self` with the identity matrix.
    fn identity(&mut self) -> &mut Self;

    /// Overwrites `self` with all zeroes.
    fn zero(&mut self) -> &mut Self;

    /// Replaces `self` with its inverse (adjugate divided by determinant).
    ///
    /// Singular matrices are not guarded against; the result then contains `Inf`/`NaN`. Check
    /// [`MatrixOps::determinant`] first when that matters.
    fn invert(&mut self) -> &mut Self;

    /// Negates every element.
    fn negate(&mut self) -> &mut Self;

    /// Swaps rows and columns.
    fn transpose(&mut self) -> &mut Self;

    /// Returns the determinant.
    fn determinant(&self) -> f32;

    /// Returns the elements in storage order (see [`Matrix`][crate::Matrix]).
    fn to_array(&self) -> Self::Array;
}

/// Types that carry a 3x3 rotation block.
///
/// Implemented by [`Matrix3`][crate::Matrix3] (the whole matrix) and [`Matrix4`][crate::Matrix4]
/// (its upper-left block).
pub trait RotationMatrix: sealed::Sealed {
    /// Returns the 3x3 block in storage order: `block[a][b]` is element `mAB`.
    fn rotation_block(&self) -> [[f32; 3]; 3];
}

//! [`approx`] integration.
//!
//! Every type compares component by component with `f32` tolerances, so the `approx` assertion
//! macros work on vectors, quaternions and matrices directly:
//!
//! ```
//! # use simple_vecmath::*;
//! use approx::assert_abs_diff_eq;
//!
//! let mut m = Matrix4::IDENTITY;
//! m.rotate(std::f32::consts::PI, Axis::Z);
//! assert_abs_diff_eq!(m.transform(&Vector4::X), -Vector4::X, epsilon = 1e-6);
//! ```
//!
//! Vectors of different length (only possible with [`VectorN`]) never compare equal.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{traits::sealed::Components, Matrix, Quaternion, Vector, VectorN};

macro_rules! impl_for_components {
    ($([$($generics:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($generics)*> AbsDiffEq for $ty {
                type Epsilon = f32;

                fn default_epsilon() -> f32 {
                    f32::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
                    self.components().abs_diff_eq(other.components(), epsilon)
                }
            }

            impl<$($generics)*> RelativeEq for $ty {
                fn default_max_relative() -> f32 {
                    f32::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
                    self.components()
                        .relative_eq(other.components(), epsilon, max_relative)
                }
            }

            impl<$($generics)*> UlpsEq for $ty {
                fn default_max_ulps() -> u32 {
                    f32::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
                    self.components().ulps_eq(other.components(), epsilon, max_ulps)
                }
            }
        )+
    };
}

impl_for_components!([const N: usize] Vector<N>, [] Quaternion, [] VectorN);

impl<const N: usize> Matrix<N> {
    fn all_elements(&self, other: &Self, eq: impl Fn(&f32, &f32) -> bool) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| eq(a, b))
    }
}

impl<const N: usize> AbsDiffEq for Matrix<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.all_elements(other, |a, b| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Matrix<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.all_elements(other, |a, b| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize> UlpsEq for Matrix<N> {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.all_elements(other, |a, b| a.ulps_eq(b, epsilon, max_ulps))
    }
}

//! Small vectors, square matrices and quaternions for composing transforms and representing
//! rotations.
//!
//! The crate provides:
//!
//! - [`Vector2`], [`Vector3`] and [`Vector4`] (aliases of the const-generic [`Vector`]), plus the
//!   heap-allocated [`VectorN`] whose length is picked at runtime.
//! - [`Quaternion`] for rotations, with conversions from and to axis-angle form and rotation
//!   matrices, the Hamilton product and spherical interpolation.
//! - [`Matrix3`] and [`Matrix4`] with determinant, inversion, transposition, and (for
//!   [`Matrix4`]) affine composition of translation, scale and axis rotation.
//! - A minimal row-major [`MatrixN`].
//!
//! All vector-like types share one operation contract, [`VectorOps`]. Mutating operations work in
//! place and return `&mut Self` so they can be chained:
//!
//! ```
//! # use simple_vecmath::*;
//! use approx::assert_relative_eq;
//!
//! let mut v = vec3(3.0, -4.0, 0.0);
//! v.absolute().normalize().scale(10.0);
//! assert_relative_eq!(v, vec3(6.0, 8.0, 0.0));
//! ```
//!
//! Non-mutating arithmetic is available through the standard operators on the fixed-size types.
//!
//! # Conventions
//!
//! - Everything is `f32`.
//! - Matrices are stored column-major. [`Matrix::from_rows`] and indexing with `(row, col)` follow
//!   mathematical notation; flat arrays ([`MatrixOps::to_array`], [`Matrix::from_slice`]) are in
//!   storage order.
//! - Matrices act on column vectors: [`Matrix::transform`] computes `M·v`.
//! - Numerical degeneracies (normalizing a zero vector, inverting a singular matrix) are not
//!   errors. They yield `NaN` or infinite components and are reported through the [`log`] facade
//!   at `trace` level. [`Error`] is only returned when building values from too-short slices.
//! - Approximate comparisons go through the [`approx`] crate's `AbsDiffEq`, `RelativeEq` and
//!   `UlpsEq`, implemented for every vector, quaternion and matrix type.
//!
//! [`log`]: https://docs.rs/log

mod approx_eq;
mod axis;
mod error;
mod matrix;
mod matrix_n;
mod quat;
mod scalar;
mod traits;
mod vector;
mod vector_n;

pub use axis::*;
pub use error::{Error, Result};
pub use matrix::*;
pub use matrix_n::*;
pub use quat::*;
pub use scalar::determinant3x3;
pub use traits::{MatrixOps, RotationMatrix, VectorOps};
pub use vector::*;
pub use vector_n::*;

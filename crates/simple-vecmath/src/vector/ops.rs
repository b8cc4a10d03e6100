//! Implementations of `std::ops`.
//!
//! The arithmetic operators are the non-mutating forms of the [`VectorOps`] methods: they work
//! on copies and never touch their operands.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::VectorOps;

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Exact, component-wise comparison. See [`VectorOps::epsilon_equals`] for a tolerant one.
impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector<N> {
    fn eq(&self, other: &[f32; N]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [f32; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        VectorOps::negate(&mut self);
        self
    }
}

/// Element-wise addition.
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        VectorOps::add(&mut self, &rhs);
        self
    }
}

/// Element-wise addition.
impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        VectorOps::add(self, &rhs);
    }
}

/// Element-wise subtraction.
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        VectorOps::subtract(&mut self, &rhs);
        self
    }
}

/// Element-wise subtraction.
impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        VectorOps::subtract(self, &rhs);
    }
}

/// Element-wise (Hadamard) multiplication.
impl<const N: usize> Mul for Vector<N> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        VectorOps::multiply(&mut self, &rhs);
        self
    }
}

/// Element-wise (Hadamard) multiplication.
impl<const N: usize> MulAssign for Vector<N> {
    fn mul_assign(&mut self, rhs: Self) {
        VectorOps::multiply(self, &rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        VectorOps::scale(&mut self, rhs);
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        VectorOps::scale(self, rhs);
    }
}

/// Vector-Scalar division.
impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self::from_fn(|i| self.0[i] / rhs)
    }
}

/// Vector-Scalar division.
impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        self.0.iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

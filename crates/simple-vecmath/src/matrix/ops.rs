use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::{Matrix, Vector};

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

/// Matrix * Column Vector.
impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        self.transform(&rhs)
    }
}

/// Matrix * Matrix.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self.multiply(&rhs);
        self
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<f32> for Matrix<N> {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        self.0.iter_mut().flatten().for_each(|elem| *elem *= rhs);
        self
    }
}

/// Element-wise addition.
impl<const N: usize> Add for Matrix<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        Matrix::add(&mut self, &rhs);
        self
    }
}

/// Element-wise subtraction.
impl<const N: usize> Sub for Matrix<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self.subtract(&rhs);
        self
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Matrix<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Matrix3, MatrixOps};

    #[test]
    fn operators() {
        let a = Matrix3::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 3.0]]);
        let b = Matrix3::IDENTITY * 2.0;

        assert_eq!(a * Matrix3::IDENTITY, a);
        assert_eq!(a * b, a + a);
        assert_eq!(a - a, Matrix3::ZERO);
        assert_eq!(a * vec3(1.0, 1.0, 1.0), vec3(3.0, 1.0, 3.0));

        let mut negated = a;
        negated.negate();
        assert_eq!(-a, negated);
    }
}

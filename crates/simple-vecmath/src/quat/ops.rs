use std::ops::{Mul, MulAssign};

use crate::{Quaternion, VectorOps};

/// Hamilton product.
impl Mul for Quaternion {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        VectorOps::multiply(&mut self, &rhs);
        self
    }
}

/// Hamilton product.
impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        VectorOps::multiply(self, &rhs);
    }
}


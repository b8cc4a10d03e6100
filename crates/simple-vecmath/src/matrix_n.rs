use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::error::{check_len, Error, Result};

/// A `width × height` matrix whose dimensions are chosen at runtime.
///
/// Unlike [`Matrix3`][crate::Matrix3] and [`Matrix4`][crate::Matrix4], elements are stored
/// row-major, and only the dimension-agnostic part of the matrix contract is available: there is
/// no identity, inverse, transpose or determinant for arbitrary rectangular matrices.
///
/// # Examples
///
/// ```
/// # use simple_vecmath::*;
/// let mut m = MatrixN::new(3, 2);
/// m[(1, 2)] = 5.0;
/// m.negate();
/// assert_eq!(m.to_array(), [0.0, 0.0, 0.0, 0.0, 0.0, -5.0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct MatrixN {
    width: usize,
    height: usize,
    data: Box<[f32]>,
}

impl MatrixN {
    /// Creates a zero matrix with `width` columns and `height` rows.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows a `usize`.
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Self {
        let len = match element_count(width, height) {
            Ok(len) => len,
            Err(e) => panic!("{}", e),
        };
        Self {
            width,
            height,
            data: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Creates a matrix from the first `width * height` elements of `data`, in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionOverflow`] if `width * height` overflows a `usize`, and
    /// [`Error::OutOfRange`] if `data` is too short.
    pub fn from_row_major(width: usize, height: usize, data: &[f32]) -> Result<Self> {
        let len = element_count(width, height)?;
        check_len(data, len)?;
        Ok(Self {
            width,
            height,
            data: data[..len].into(),
        })
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the element at `row` and `col`, or [`None`] if either is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.offset(row, col).map(|i| self.data[i])
    }

    /// Negates every element in place.
    pub fn negate(&mut self) -> &mut Self {
        self.data.iter_mut().for_each(|elem| *elem = -*elem);
        self
    }

    /// Sets every element to zero.
    pub fn zero(&mut self) -> &mut Self {
        self.data.fill(0.0);
        self
    }

    /// Returns the elements in row-major order.
    pub fn to_array(&self) -> Vec<f32> {
        self.data.to_vec()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    #[track_caller]
    fn offset_or_panic(&self, row: usize, col: usize) -> usize {
        match self.offset(row, col) {
            Some(i) => i,
            None => panic!(
                "index ({}, {}) out of bounds for a {}x{} matrix",
                row, col, self.height, self.width
            ),
        }
    }
}

fn element_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(Error::DimensionOverflow { width, height })
}

/// Indexes by `(row, col)`.
///
/// # Panics
///
/// Panics if `row >= height` or `col >= width`.
impl Index<(usize, usize)> for MatrixN {
    type Output = f32;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.data[self.offset_or_panic(row, col)]
    }
}

impl IndexMut<(usize, usize)> for MatrixN {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        let i = self.offset_or_panic(row, col);
        &mut self.data[i]
    }
}

impl fmt::Debug for MatrixN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return f.debug_list().finish();
        }
        f.debug_list().entries(self.data.chunks(self.width)).finish()
    }
}

use std::{
    array,
    f32::consts::PI,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::{check_len, Error, Result},
    scalar::{cofactor_sign, determinant3x3, determinant3x3_array, minor4},
    traits::sealed::Sealed,
    vec4,
    vector::{format_components, hash_component},
    Axis, MatrixOps, RotationMatrix, Vector, Vector3, Vector4, VectorOps,
};

mod ops;

/// A 3x3 matrix.
pub type Matrix3 = Matrix<3>;
/// A 4x4 matrix, typically holding an affine transform.
pub type Matrix4 = Matrix<4>;

/// A square, column-major `N`x`N` matrix of [`f32`] elements.
///
/// # Layout
///
/// Elements are stored as `N` groups of `N`. Group `a` is column `a`, element `b` of that group is
/// row `b`, so the element often written `mAB` is found in group `A` at position `B`. Flat arrays
/// ([`MatrixOps::to_array`], [`Matrix::from_slice`]) list the groups one after another in that
/// order.
///
/// For [`Matrix4`] transforms, group 3 holds the translation, which
/// [`Matrix4::translate`] updates and [`Matrix4::rotate`] leaves alone.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from rows or columns.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_slice`] reads a flat array in storage order, rejecting short input.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the commonly used constants. [`Default`] is the
///   identity.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row* (Y coordinate), the second is the *column* (X
/// coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use simple_vecmath::*;
/// let mut mat = Matrix::from_rows([
///     [0.0, 1.0],
///     [2.0, 3.0],
/// ]);
/// mat[(0, 0)] = 4.0;
/// assert_eq!(mat[(0, 0)], 4.0);
/// assert_eq!(mat[(0, 1)], 1.0);
/// assert_eq!(mat.to_columns(), [[4.0, 2.0], [1.0, 3.0]]);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// returns an [`Option`] instead.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const N: usize>(pub(crate) [[f32; N]; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Matrix<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Matrix<N> {}

impl<const N: usize> Matrix<N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[0.0; N]; N]);

    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut elems = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            elems[i][i] = 1.0;
            i += 1;
        }
        Self(elems)
    };

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let rows = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<N>>>(rows: [U; N]) -> Self {
        Self::from_columns(rows).transposed()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<N>>>(columns: [U; N]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mat = Matrix::from_fn(|row, col| (row * 10 + col) as f32);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0],
    ///     [10.0, 11.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a matrix from the first `N * N` elements of `data`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `data` is shorter than `N * N`.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let data: Vec<f32> = (0..9).map(|i| i as f32).collect();
    /// let m = Matrix3::from_slice(&data)?;
    /// assert_eq!(m.to_array().as_slice(), data.as_slice());
    /// assert!(Matrix4::from_slice(&data).is_err());
    /// # Ok::<(), simple_vecmath::Error>(())
    /// ```
    pub fn from_slice(data: &[f32]) -> Result<Self> {
        check_len(data, N * N)?;
        Ok(Self(array::from_fn(|a| array::from_fn(|b| data[a * N + b]))))
    }

    /// Returns the columns (the storage groups) of this matrix.
    #[inline]
    pub fn to_columns(&self) -> [[f32; N]; N] {
        self.0
    }

    /// Returns the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// assert_eq!(Matrix3::IDENTITY.get(2, 2), Some(1.0));
    /// assert_eq!(Matrix3::IDENTITY.get(3, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.0.get(col).and_then(|col| col.get(row)).copied()
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> f32 {
        (0..N).map(|i| self.0[i][i]).sum()
    }

    /// Adds `other` element-wise.
    pub fn add(&mut self, other: &Self) -> &mut Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` element-wise.
    pub fn subtract(&mut self, other: &Self) -> &mut Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Replaces `self` with the matrix product `self * other`.
    ///
    /// Applied to a vector, the result first applies `other`, then the old `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut a = Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    /// a.multiply(&Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [1.0, 0.0],
    /// ]));
    /// assert_eq!(a, Matrix::from_rows([
    ///     [2.0, 1.0],
    ///     [4.0, 3.0],
    /// ]));
    /// ```
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        let lhs = self.0;
        self.0 = array::from_fn(|col| {
            array::from_fn(|row| (0..N).fold(0.0, |acc, k| acc + lhs[k][row] * other.0[col][k]))
        });
        self
    }

    /// Returns the matrix-vector product `self * v`.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let m = Matrix::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// assert_eq!(m.transform(&vec2(4.0, 5.0)), vec2(5.0, 23.0));
    /// ```
    pub fn transform(&self, v: &Vector<N>) -> Vector<N> {
        Vector::from_fn(|row| (0..N).fold(0.0, |acc, col| acc + self.0[col][row] * v[col]))
    }

    fn zip_with(&mut self, other: &Self, f: impl Fn(f32, f32) -> f32) -> &mut Self {
        for (lhs, rhs) in self.0.iter_mut().zip(&other.0) {
            for (a, b) in lhs.iter_mut().zip(rhs) {
                *a = f(*a, *b);
            }
        }
        self
    }

    fn transposed(self) -> Self {
        Self::from_fn(|row, col| self.0[row][col])
    }

    fn flatten<const L: usize>(&self) -> [f32; L] {
        debug_assert_eq!(L, N * N);
        array::from_fn(|i| self.0[i / N][i % N])
    }
}

impl Matrix3 {
    fn det(&self) -> f32 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.0;
        determinant3x3(m00, m01, m02, m10, m11, m12, m20, m21, m22)
    }

    /// Returns the inverse as `adjugate / determinant`, without checking the determinant.
    fn inverted(&self) -> Self {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.0;
        let det = self.det();
        if det == 0.0 {
            log::trace!("inverting a singular 3x3 matrix");
        }
        let inv = 1.0 / det;

        let t00 = m11 * m22 - m12 * m21;
        let t01 = -m10 * m22 + m12 * m20;
        let t02 = m10 * m21 - m11 * m20;
        let t10 = -m01 * m22 + m02 * m21;
        let t11 = m00 * m22 - m02 * m20;
        let t12 = -m00 * m21 + m01 * m20;
        let t20 = m01 * m12 - m02 * m11;
        let t21 = -m00 * m12 + m02 * m10;
        let t22 = m00 * m11 - m01 * m10;

        #[rustfmt::skip]
        let inverted = Self([
            [t00 * inv, t10 * inv, t20 * inv],
            [t01 * inv, t11 * inv, t21 * inv],
            [t02 * inv, t12 * inv, t22 * inv],
        ]);
        inverted
    }

    /// Embeds `self` into the upper-left block of a [`Matrix4`].
    ///
    /// Every other element is zero, *including* the bottom-right one, so the result is not an
    /// affine transform until that element is set.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let m = Matrix3::IDENTITY.to_matrix4();
    /// assert_eq!(m[(3, 3)], 0.0);
    /// assert_eq!(m.to_matrix3(), Matrix3::IDENTITY);
    /// ```
    pub fn to_matrix4(&self) -> Matrix4 {
        Matrix4::from_fn(|row, col| self.get(row, col).unwrap_or(0.0))
    }

    /// Extracts the rotation as `(axis.x, axis.y, axis.z, angle)`.
    ///
    /// See [`Matrix4::to_axis_angle`].
    pub fn to_axis_angle(&self) -> Vector4 {
        axis_angle(self.rotation_block())
    }
}

impl Matrix4 {
    /// Laplace expansion along group 0.
    fn det(&self) -> f32 {
        (0..4)
            .map(|b| cofactor_sign(0, b) * self.0[0][b] * determinant3x3_array(minor4(&self.0, 0, b)))
            .sum()
    }

    fn inverted(&self) -> Self {
        let det = self.det();
        if det == 0.0 {
            log::trace!("inverting a singular 4x4 matrix");
        }
        let inv = 1.0 / det;

        let cofactors: [[f32; 4]; 4] = array::from_fn(|a| {
            array::from_fn(|b| cofactor_sign(a, b) * determinant3x3_array(minor4(&self.0, a, b)))
        });
        Self::from_fn(|b, a| cofactors[b][a] * inv)
    }

    /// Returns the upper-left 3x3 block.
    pub fn to_matrix3(&self) -> Matrix3 {
        Matrix3::from_fn(|row, col| self.0[col][row])
    }

    /// Composes a rotation of `radians` about `axis` onto `self` (`self = self * R`).
    ///
    /// `axis` must be normalized. The rotation is counterclockwise when looking down `axis`
    /// towards the origin, so applying the result with [`Matrix::transform`] rotates vectors
    /// counterclockwise. The translation group is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let mut m = Matrix4::IDENTITY;
    /// m.rotate(FRAC_PI_2, Axis::Z);
    /// assert_abs_diff_eq!(m.transform(&Vector4::X), Vector4::Y, epsilon = 1e-6);
    /// ```
    pub fn rotate(&mut self, radians: f32, axis: impl Into<Vector3>) -> &mut Self {
        let [x, y, z] = axis.into().into_array();
        let (s, c) = radians.sin_cos();
        let oneminusc = 1.0 - c;
        let (xy, yz, xz) = (x * y, y * z, x * z);
        let (xs, ys, zs) = (x * s, y * s, z * s);

        #[rustfmt::skip]
        let f = [
            [x * x * oneminusc + c, xy * oneminusc + zs,   xz * oneminusc - ys],
            [xy * oneminusc - zs,   y * y * oneminusc + c, yz * oneminusc + xs],
            [xz * oneminusc + ys,   yz * oneminusc - xs,   z * z * oneminusc + c],
        ];

        let cols = self.0;
        for (j, fj) in f.iter().enumerate() {
            for r in 0..4 {
                self.0[j][r] = cols[0][r] * fj[0] + cols[1][r] * fj[1] + cols[2][r] * fj[2];
            }
        }
        self
    }

    /// Composes the Euler rotation `angles` onto `self`: first about X by `angles.x`, then about Y
    /// by `angles.y`, then about Z by `angles.z`, all in radians.
    #[doc(alias = "euler")]
    pub fn rotate_xyz(&mut self, angles: &Vector3) -> &mut Self {
        self.rotate(angles.x, Axis::X)
            .rotate(angles.y, Axis::Y)
            .rotate(angles.z, Axis::Z)
    }

    /// Composes a translation by `v` onto `self` (`self = self * T(v)`).
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut m = Matrix4::IDENTITY;
    /// m.scale_uniform(2.0).translate(&vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform(&Vector4::W), vec4(2.0, 4.0, 6.0, 1.0));
    /// ```
    pub fn translate(&mut self, v: &Vector3) -> &mut Self {
        let [x, y, z] = v.into_array();
        for r in 0..4 {
            self.0[3][r] += self.0[0][r] * x + self.0[1][r] * y + self.0[2][r] * z;
        }
        self
    }

    /// Composes a scale by `v` onto `self`, multiplying group 0 by `v.x`, group 1 by `v.y` and
    /// group 2 by `v.z`.
    pub fn scale(&mut self, v: &Vector3) -> &mut Self {
        for (group, factor) in self.0.iter_mut().zip(v.into_array()) {
            group.iter_mut().for_each(|elem| *elem *= factor);
        }
        self
    }

    /// [`Matrix4::scale`] by the same `factor` on all three axes.
    pub fn scale_uniform(&mut self, factor: f32) -> &mut Self {
        self.scale(&Vector3::splat(factor))
    }

    /// Extracts the rotation of the upper-left block as `(axis.x, axis.y, axis.z, angle)`.
    ///
    /// The angle (radians, in `0..=π`) is `atan2(sin, cos)` with `cos = (trace - 1) / 2` and `sin`
    /// taken from the antisymmetric part. The axis follows the same sense as
    /// [`Quaternion::from_matrix`][crate::Quaternion::from_matrix]. For the zero rotation the
    /// result is `(0, 1, 0, 0)`.
    pub fn to_axis_angle(&self) -> Vector4 {
        axis_angle(self.rotation_block())
    }
}

fn axis_angle(block: [[f32; 3]; 3]) -> Vector4 {
    let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = block;
    let cos = (m00 + m11 + m22 - 1.0) * 0.5;
    let mut axis = Vector3::from([m21 - m12, m02 - m20, m10 - m01]);
    let len = axis.length();

    if len > f32::EPSILON {
        axis.scale(1.0 / len);
        return axis.extend((0.5 * len).atan2(cos));
    }
    if cos >= 0.0 {
        return vec4(0.0, 1.0, 0.0, 0.0);
    }

    // Half turn: the antisymmetric part vanishes, recover the axis from `R = 2aaᵀ - I`.
    let diag = [m00, m11, m22];
    let k = (0..3).fold(0, |k, i| if diag[i] > diag[k] { i } else { k });
    let ak = ((diag[k] + 1.0) * 0.5).sqrt();
    let axis = Vector3::from_fn(|i| {
        if i == k {
            ak
        } else {
            (block[k][i] + block[i][k]) / (4.0 * ak)
        }
    });
    axis.extend(PI)
}

impl<const N: usize> Sealed for Matrix<N> {}

impl RotationMatrix for Matrix3 {
    fn rotation_block(&self) -> [[f32; 3]; 3] {
        self.0
    }
}

impl RotationMatrix for Matrix4 {
    fn rotation_block(&self) -> [[f32; 3]; 3] {
        self.to_matrix3().0
    }
}

macro_rules! impl_matrix_ops {
    ($n:literal, $len:literal) => {
        impl MatrixOps for Matrix<$n> {
            type Array = [f32; $len];

            fn identity(&mut self) -> &mut Self {
                *self = Self::IDENTITY;
                self
            }

            fn zero(&mut self) -> &mut Self {
                *self = Self::ZERO;
                self
            }

            fn invert(&mut self) -> &mut Self {
                *self = self.inverted();
                self
            }

            fn negate(&mut self) -> &mut Self {
                self.0
                    .iter_mut()
                    .flatten()
                    .for_each(|elem| *elem = -*elem);
                self
            }

            fn transpose(&mut self) -> &mut Self {
                *self = self.transposed();
                self
            }

            fn determinant(&self) -> f32 {
                self.det()
            }

            fn to_array(&self) -> [f32; $len] {
                self.flatten()
            }
        }
    };
}

impl_matrix_ops!(3, 9);
impl_matrix_ops!(4, 16);

impl<const N: usize> Default for Matrix<N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<const N: usize> TryFrom<&[f32]> for Matrix<N> {
    type Error = Error;

    fn try_from(value: &[f32]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl<const N: usize> Hash for Matrix<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elem in self.0.iter().flatten() {
            hash_component(*elem, state);
        }
    }
}

impl<const N: usize> fmt::Debug for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const N: usize>(&'a Matrix<N>, usize);
        impl<'a, const N: usize> fmt::Debug for FormatRow<'a, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..N {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in 0..N {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

/// One storage group per line, tab-indented, elements in their shortest round-trip form.
impl<const N: usize> fmt::Display for Matrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[\n")?;
        for (i, group) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",\n")?;
            }
            write!(f, "\t[{}]", format_components(group))?;
        }
        f.write_str("\n]")
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::hash_map::DefaultHasher, f32::consts::FRAC_PI_2};

    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    use crate::{vec3, Quaternion};

    use super::*;

    #[rustfmt::skip]
    fn sample4() -> Matrix4 {
        Matrix::from_rows([
            [ 2.0, -1.0,  0.0,  3.0],
            [ 1.0,  4.0, -2.0,  0.5],
            [ 0.0,  1.0,  3.0, -1.0],
            [ 0.0,  0.0,  0.0,  1.0],
        ])
    }

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]),
            Matrix3::from_columns([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]),
        );
        assert_eq!(Matrix4::default(), Matrix4::IDENTITY);
    }

    #[test]
    fn storage_order() {
        let m = Matrix3::from_fn(|row, col| (col * 3 + row) as f32);
        assert_eq!(m.to_array(), [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(Matrix3::from_slice(&m.to_array()), Ok(m));
        assert_eq!(
            Matrix3::try_from(&[1.0; 8][..]),
            Err(Error::OutOfRange {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn fmt() {
        let m = Matrix3::from_rows([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(
            format!("{:?}", m),
            "[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0], [6.0, 7.0, 8.0]]"
        );

        // Storage groups (columns) for display output.
        assert_eq!(
            m.to_string(),
            "[\n\t[0.0,3.0,6.0],\n\t[1.0,4.0,7.0],\n\t[2.0,5.0,8.0]\n]"
        );
    }

    #[test]
    fn constants() {
        assert_eq!(Matrix3::ZERO.to_array(), [0.0; 9]);
        assert_eq!(Matrix4::IDENTITY.trace(), 4.0);

        let mut m = sample4();
        m.zero();
        assert_eq!(m, Matrix4::ZERO);
        m.identity();
        assert_eq!(m, Matrix4::IDENTITY);
    }

    #[test]
    fn add_subtract_negate() {
        let mut m = sample4();
        m.add(&Matrix4::IDENTITY).subtract(&Matrix4::IDENTITY);
        assert_eq!(m, sample4());

        m.negate().add(&sample4());
        assert_eq!(m, Matrix4::ZERO);
    }

    #[test]
    fn mat_mat_mul() {
        let a = sample4();
        let b = sample4().transposed();
        let mut c = a;
        c.multiply(&b);
        assert_eq!(c[(0, 1)], (0..4).map(|k| a[(0, k)] * b[(k, 1)]).sum::<f32>());
        assert_eq!(c[(2, 3)], (0..4).map(|k| a[(2, k)] * b[(k, 3)]).sum::<f32>());
        assert_eq!(c, a * b);
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix3::ZERO.determinant(), 0.0);
        assert_eq!(Matrix4::ZERO.determinant(), 0.0);
        assert_eq!(Matrix3::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix4::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix3::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        assert_eq!(testmat.determinant(), 54.0);
        assert_eq!(testmat.transposed().determinant(), 54.0);

        // Upper-left block determinant times the bottom-right 1.
        assert_eq!(sample4().determinant(), sample4().to_matrix3().determinant());
        assert_eq!(sample4().determinant(), 2.0 * 14.0 + 1.0 * 3.0);
    }

    #[test]
    fn invert() {
        let mut inv = sample4();
        inv.invert();
        assert_abs_diff_eq!(inv * sample4(), Matrix4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(sample4() * inv, Matrix4::IDENTITY, epsilon = 1e-5);

        let m3 = sample4().to_matrix3();
        let mut inv3 = m3;
        inv3.invert();
        assert_abs_diff_eq!(inv3 * m3, Matrix3::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn invert_singular() {
        let mut m = Matrix3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
        m.invert();
        assert!(m.to_array().iter().any(|e| !e.is_finite()));

        let mut m = Matrix4::ZERO;
        m.invert();
        assert!(m.to_array().iter().all(|e| e.is_nan()));
    }

    #[test]
    fn transpose() {
        let mut m = sample4();
        m.transpose();
        assert_eq!(m[(0, 3)], 0.0);
        assert_eq!(m[(3, 0)], 3.0);
        m.transpose();
        assert_eq!(m, sample4());
    }

    #[test]
    fn conversions() {
        let m4 = sample4();
        let m3 = m4.to_matrix3();
        assert_eq!(m3, Matrix3::from_rows([[2.0, -1.0, 0.0], [1.0, 4.0, -2.0], [0.0, 1.0, 3.0]]));

        let back = m3.to_matrix4();
        assert_eq!(back.to_matrix3(), m3);
        assert_eq!(back.to_columns()[3], [0.0; 4]);
        assert_eq!(back[(3, 3)], 0.0);
    }

    #[test]
    fn translate_scale() {
        let mut m = Matrix4::IDENTITY;
        m.translate(&vec3(1.0, 2.0, 3.0));
        assert_eq!(m.to_columns()[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(
            m.transform(&vec4(1.0, 1.0, 1.0, 1.0)),
            vec4(2.0, 3.0, 4.0, 1.0)
        );

        // Translation is applied before the existing transform.
        let mut m = Matrix4::IDENTITY;
        m.scale(&vec3(2.0, 3.0, 4.0)).translate(&vec3(1.0, 1.0, 1.0));
        assert_eq!(m.to_columns()[3], [2.0, 3.0, 4.0, 1.0]);
        assert_eq!(m.transform(&Vector4::X), vec4(2.0, 0.0, 0.0, 0.0));

        let mut u = Matrix4::IDENTITY;
        u.scale_uniform(5.0);
        assert_eq!(u.trace(), 16.0);
    }

    #[test]
    fn rotate() {
        let mut m = Matrix4::IDENTITY;
        m.rotate(FRAC_PI_2, Axis::Z);
        assert_abs_diff_eq!(m.transform(&Vector4::X), Vector4::Y, epsilon = 1e-6);
        assert_abs_diff_eq!(m.transform(&Vector4::Y), -Vector4::X, epsilon = 1e-6);
        assert_eq!(m.to_columns()[3], [0.0, 0.0, 0.0, 1.0]);

        // Composition keeps the translation group.
        let mut t = Matrix4::IDENTITY;
        t.translate(&vec3(5.0, 6.0, 7.0)).rotate(1.0, Axis::Y);
        assert_eq!(t.to_columns()[3], [5.0, 6.0, 7.0, 1.0]);
        assert_abs_diff_eq!(t.to_matrix3().determinant(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn rotate_xyz_order() {
        let angles = vec3(0.3, -1.1, 2.0);
        let mut euler = Matrix4::IDENTITY;
        euler.rotate_xyz(&angles);

        let mut manual = Matrix4::IDENTITY;
        manual.rotate(0.3, Axis::X);
        manual.rotate(-1.1, Axis::Y);
        manual.rotate(2.0, Axis::Z);
        assert_eq!(euler, manual);

        let mut reversed = Matrix4::IDENTITY;
        reversed.rotate(2.0, Axis::Z).rotate(-1.1, Axis::Y).rotate(0.3, Axis::X);
        assert_abs_diff_ne!(euler, reversed, epsilon = 1e-3);
    }

    #[test]
    fn axis_angle() {
        let mut m = Matrix4::IDENTITY;
        m.rotate(1.0, vec3(1.0, 2.0, 2.0) / 3.0);
        let aa = m.to_axis_angle();
        assert_abs_diff_eq!(aa.w, 1.0, epsilon = 1e-5);
        let axis = -vec3(1.0, 2.0, 2.0) / 3.0;
        assert_abs_diff_eq!(aa.truncate(), axis, epsilon = 1e-5);

        // Same sense as the quaternion conversion.
        let q = Quaternion::from_matrix(&m).to_axis_angle();
        assert_abs_diff_eq!(q, aa, epsilon = 1e-4);

        assert_eq!(Matrix3::IDENTITY.to_axis_angle(), vec4(0.0, 1.0, 0.0, 0.0));

        let mut half = Matrix4::IDENTITY;
        half.rotate(PI, Axis::X);
        let aa = half.to_axis_angle();
        assert_abs_diff_eq!(aa.w, PI, epsilon = 1e-5);
        let along_x = aa.truncate().dot(&Vector3::X);
        assert_abs_diff_eq!(along_x.abs(), 1.0, epsilon = 1e-5);

        #[rustfmt::skip]
        let exact = Matrix3::from_rows([
            [-1.0, 0.0,  0.0],
            [ 0.0, 1.0,  0.0],
            [ 0.0, 0.0, -1.0],
        ]);
        assert_eq!(exact.to_axis_angle(), vec4(0.0, 1.0, 0.0, PI));
    }

    #[test]
    fn hash_agrees_with_eq() {
        fn hash_of(m: &Matrix3) -> u64 {
            let mut hasher = DefaultHasher::new();
            m.hash(&mut hasher);
            hasher.finish()
        }

        let mut m = Matrix3::IDENTITY;
        m[(0, 1)] = -0.0;
        assert_eq!(m, Matrix3::IDENTITY);
        assert_eq!(hash_of(&m), hash_of(&Matrix3::IDENTITY));

        m[(0, 1)] = 1e-9;
        assert_ne!(hash_of(&m), hash_of(&Matrix3::IDENTITY));
    }

    #[test]
    fn plain_data() {
        let m = sample4();
        assert_eq!(bytemuck::cast::<Matrix4, [f32; 16]>(m), m.to_array());

        let ms = [Matrix3::IDENTITY, Matrix3::ZERO];
        let flat: &[f32] = bytemuck::cast_slice(&ms);
        assert_eq!(flat.len(), 18);
        assert_eq!(&flat[..9], &Matrix3::IDENTITY.to_array());
        assert_eq!(bytemuck::cast_slice::<f32, Matrix3>(flat), &ms);
    }
}

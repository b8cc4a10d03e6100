use std::{
    array, fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::{check_len, Error, Result},
    traits::sealed::{Components, Sealed},
    Matrix4, Quaternion, VectorOps,
};

mod ops;
pub(crate) mod view;

/// A 2-dimensional vector.
pub type Vector2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vector3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vector4 = Vector<4>;

/// An `N`-element vector of [`f32`] components.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices with
///   [`Vector::from_slice`] (or [`TryFrom`]), which rejects slices that are too short.
/// - The [`Default`] implementation and [`Vector::ZERO`] yield a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the
///   underlying storage.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation.
///
/// # Operations
///
/// The in-place, chainable operations live on the [`VectorOps`] trait. The std operators (`+`,
/// `-`, `*`, `/`, unary `-`) are their non-mutating counterparts.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>([f32; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Sealed for Vector<N> {}

impl<const N: usize> Components for Vector<N> {
    #[inline]
    fn components(&self) -> &[f32] {
        &self.0
    }

    #[inline]
    fn components_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

impl<const N: usize> VectorOps for Vector<N> {
    type Array = [f32; N];

    #[inline]
    fn to_array(&self) -> [f32; N] {
        self.0
    }
}

impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([0.0; N]);

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: f32) -> Self {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let v = Vector::from_fn(|i| i as f32 + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(array::from_fn(cb))
    }

    /// Creates a vector from the first `N` elements of `data`.
    ///
    /// Elements past the first `N` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `data` has fewer than `N` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// assert_eq!(Vector2::from_slice(&[100.0, 50.0, 25.0])?, vec2(100.0, 50.0));
    /// assert!(Vector2::from_slice(&[100.0]).is_err());
    /// # Ok::<(), simple_vecmath::Error>(())
    /// ```
    pub fn from_slice(data: &[f32]) -> Result<Self> {
        check_len(data, N)?;
        Ok(Self::from_fn(|i| data[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [f32; N] {
        self.0
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// The cosine is clamped to `-1.0..=1.0` before taking the arc cosine, so rounding errors on
    /// (anti)parallel vectors cannot produce `NaN`. Zero-length operands do.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::{assert_abs_diff_eq, assert_relative_eq};
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_relative_eq!(Vector3::Y.angle(&Vector3::X), FRAC_PI_2);
    /// assert_abs_diff_eq!(vec2(2.0, 2.0).angle(&vec2(1.0, 1.0)), 0.0, epsilon = 1e-3);
    /// ```
    pub fn angle(&self, other: &Self) -> f32 {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl Vector2 {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, z: f32) -> Vector3 {
        let [x, y] = self.0;
        vec3(x, y, z)
    }

    /// Returns the 2D pseudo cross product `self.x * other.y - self.y * other.x`.
    ///
    /// This is the Z coordinate of the cross product of both vectors extended with `z = 0`.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// assert_eq!(Vector2::X.cross(&Vector2::Y), 1.0);
    /// assert_eq!(Vector2::Y.cross(&Vector2::X), -1.0);
    /// ```
    pub fn cross(&self, other: &Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Rotates `self` counterclockwise by `radians` (Y axis pointing up).
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::assert_relative_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let mut v = Vector2::X;
    /// v.rotate(FRAC_PI_2);
    /// assert_relative_eq!(v, Vector2::Y);
    /// ```
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        let (sin, cos) = radians.sin_cos();
        let [x, y] = self.0;
        self.0 = [x * cos - y * sin, x * sin + y * cos];
        self
    }

    /// Rotates `self` by a quarter turn counterclockwise: `(x, y) -> (-y, x)`.
    pub fn turn_left(&mut self) -> &mut Self {
        let [x, y] = self.0;
        self.0 = [-y, x];
        self
    }

    /// Rotates `self` by a quarter turn clockwise: `(x, y) -> (y, -x)`.
    pub fn turn_right(&mut self) -> &mut Self {
        let [x, y] = self.0;
        self.0 = [y, -x];
        self
    }
}

impl Vector3 {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector2 {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, w: f32) -> Vector4 {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }

    /// Replaces `self` with the cross product `self × other`.
    ///
    /// The result is perpendicular to both operands. Swapping the operands inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut v = Vector3::X;
    /// v.cross(&Vector3::Y);
    /// assert_eq!(v, Vector3::Z);
    ///
    /// let mut v = Vector3::Y;
    /// v.cross(&Vector3::X);
    /// assert_eq!(v, -Vector3::Z);
    /// ```
    pub fn cross(&mut self, other: &Self) -> &mut Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = [
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        ];
        self.0 = cross;
        self
    }

    /// Rotates `self` by `degrees` about `axis`.
    ///
    /// The vector is placed in the translation slots of an identity [`Matrix4`], that matrix is
    /// rotated with [`Matrix4::rotate`] and the vector is read back from the same slots. Since the
    /// slots sit in the row that [`Matrix4::rotate`] multiplies from the left, the vector is turned
    /// *clockwise* when looking down `axis` towards the origin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// let mut v = Vector3::X;
    /// v.rotate(90.0, Axis::Z);
    /// assert_abs_diff_eq!(v, vec3(0.0, -1.0, 0.0), epsilon = 1e-6);
    /// ```
    pub fn rotate(&mut self, degrees: f32, axis: impl Into<Vector3>) -> &mut Self {
        let mut m = Matrix4::IDENTITY;
        for (group, value) in self.0.into_iter().enumerate() {
            m.0[group][3] = value;
        }
        m.rotate(degrees.to_radians(), axis);
        self.0 = [m.0[0][3], m.0[1][3], m.0[2][3]];
        self
    }

    /// Sets `self` to the perspective projection of `v`: its `x`, `y` and `z` divided by `w`.
    ///
    /// `w == 0` is not guarded against.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let mut v = Vector3::ZERO;
    /// v.project(&vec4(2.0, 4.0, 8.0, 2.0));
    /// assert_eq!(v, vec3(1.0, 2.0, 4.0));
    /// ```
    pub fn project(&mut self, v: &Vector4) -> &mut Self {
        let [x, y, z, w] = v.0;
        self.0 = [x / w, y / w, z / w];
        self
    }
}

impl Vector4 {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);

    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector3 {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[f32]> for Vector<N> {
    type Error = Error;

    fn try_from(value: &[f32]) -> Result<Self> {
        Self::from_slice(value)
    }
}

impl From<Quaternion> for Vector4 {
    fn from(q: Quaternion) -> Self {
        q.to_vector4()
    }
}

impl<const N: usize> Hash for Vector<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.0 {
            hash_component(c, state);
        }
    }
}

/// Hashes the bit pattern of `c`, with `-0.0` and `+0.0` hashing identically since they compare
/// equal.
pub(crate) fn hash_component<H: Hasher>(c: f32, state: &mut H) {
    let c = if c == 0.0 { 0.0f32 } else { c };
    c.to_bits().hash(state);
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats as `(x,y[,z][,w])`, each component in its shortest round-trip form (`100.0`).
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", format_components(&self.0))
    }
}

/// Joins components with `,`, printing each one the way `{:?}` does.
pub(crate) fn format_components(components: &[f32]) -> impl fmt::Display + '_ {
    itertools::Itertools::format_with(components.iter(), ",", |c, f| {
        f(&format_args!("{c:?}"))
    })
}

/// Constructs a [`Vector2`] from its two elements.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vector2 {
    Vector([x, y])
}

/// Constructs a [`Vector3`] from its three elements.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector([x, y, z])
}

/// Constructs a [`Vector4`] from its four elements.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::{
        collections::hash_map::DefaultHasher,
        f32::consts::{FRAC_PI_2, PI},
    };

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::Axis;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn access() {
        assert_eq!(Vector3::X.x, 1.0);
        assert_eq!(Vector3::X[0], 1.0);
        assert_eq!(Vector3::X[1], 0.0);
        assert_eq!(Vector3::X.y, 0.0);
        assert_eq!(Vector3::Y.y, 1.0);
        assert_eq!(Vector3::Z.z, 1.0);
        assert_eq!(Vector4::W.w, 1.0);

        let mut v = vec2(0.0, 1.0);
        v.x = 777.0;
        assert_eq!(v[0], 777.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    fn fmt() {
        assert_eq!(vec2(100.0, 50.0).to_string(), "(100.0,50.0)");
        assert_eq!(Vector4::W.to_string(), "(0.0,0.0,0.0,1.0)");
        assert_eq!(vec3(0.5, -1.25, 1e-7).to_string(), "(0.5,-1.25,1e-7)");
        assert_eq!(format!("{:?}", Vector4::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn from_slice() {
        assert_eq!(
            Vector2::from_slice(&[100.0]),
            Err(Error::OutOfRange {
                expected: 2,
                actual: 1
            })
        );
        let v = Vector2::try_from(&[100.0, 50.0, 25.0][..]).unwrap();
        assert_eq!(v.x, 100.0);
        assert_eq!(v.y, 50.0);
        assert!(Vector4::from_slice(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn angle_regression() {
        let a = vec2(100.0, 50.0);
        let b = vec2(24.0, 300.0);
        let degrees = a.angle(&b).to_degrees();
        assert_abs_diff_eq!(degrees, 58.861026644417464, epsilon = 1e-4);
    }

    #[test]
    fn angle_clamped() {
        let v = vec3(0.1, 0.2, 0.3);
        assert_abs_diff_eq!(v.angle(&v), 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(v.angle(&-v), PI, epsilon = 1e-3);
        assert_relative_eq!(vec2(1.0, 0.0).angle(&vec2(0.0, -3.0)), FRAC_PI_2);
        assert!(Vector3::ZERO.angle(&Vector3::X).is_nan());
    }

    #[test]
    fn rotate_2d() {
        let mut v = Vector2::Y;
        v.rotate(FRAC_PI_2);
        assert_relative_eq!(v, -Vector2::X);

        let mut v = vec2(3.0, 4.0);
        v.turn_left();
        assert_eq!(v, vec2(-4.0, 3.0));
        v.turn_right().turn_right();
        assert_eq!(v, vec2(4.0, -3.0));
    }

    #[test]
    fn cross() {
        let mut v = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        v.cross(&b);
        assert_eq!(v, vec3(-3.0, 6.0, -3.0));
        assert_eq!(b, vec3(4.0, 5.0, 6.0));
        assert_eq!(v.dot(&b), 0.0);
    }

    #[test]
    fn rotate_3d() {
        let mut v = Vector3::X;
        v.rotate(90.0, Axis::Z);
        assert_abs_diff_eq!(v, vec3(0.0, -1.0, 0.0), epsilon = 1e-6);

        let mut v = Vector3::Y;
        v.rotate(90.0, Axis::X);
        assert_abs_diff_eq!(v, vec3(0.0, 0.0, -1.0), epsilon = 1e-6);

        // A full turn is the identity, and vectors along the axis stay put.
        let mut v = vec3(1.0, 2.0, 3.0);
        v.rotate(360.0, vec3(1.0, 1.0, 0.0).normalize().copy());
        assert_abs_diff_eq!(v, vec3(1.0, 2.0, 3.0), epsilon = 1e-5);
        let mut v = vec3(0.0, 0.0, 5.0);
        v.rotate(37.0, Axis::Z);
        assert_abs_diff_eq!(v, vec3(0.0, 0.0, 5.0), epsilon = 1e-6);
    }

    #[test]
    fn hash() {
        assert_eq!(hash_of(&vec2(0.0, 1.0)), hash_of(&vec2(-0.0, 1.0)));
        assert_eq!(vec2(0.0, 1.0), vec2(-0.0, 1.0));
        assert_ne!(hash_of(&vec2(1.0, 0.0)), hash_of(&vec2(0.0, 1.0)));
    }

    #[test]
    fn extend_truncate() {
        let v = vec2(1.0, 2.0).extend(3.0).extend(4.0);
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.truncate().truncate(), vec2(1.0, 2.0));
    }

    #[test]
    fn plain_data() {
        let vs = [vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
        let flat: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let v: Vector4 = bytemuck::cast([1.0f32, 2.0, 3.0, 4.0]);
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
    }
}

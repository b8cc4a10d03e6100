use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};

use crate::{
    error::{Error, Result},
    traits::sealed::{Components, Sealed},
    vector::{format_components, hash_component},
    VectorOps,
};

/// A heap-allocated vector whose length is chosen at runtime.
///
/// The length is fixed once the vector is created. [`VectorN`] satisfies the same [`VectorOps`]
/// contract as the fixed-size vectors; two-operand operations require both operands to have the
/// same length.
///
/// # Examples
///
/// ```
/// # use simple_vecmath::*;
/// let mut v = VectorN::from_slice(&[3.0, 0.0, 4.0, 0.0, 0.0]);
/// v.normalize();
/// assert_eq!(v.len(), 5);
/// assert_eq!(v.as_slice(), &[0.6, 0.0, 0.8, 0.0, 0.0]);
/// ```
#[derive(Clone, PartialEq, Default)]
pub struct VectorN {
    data: Box<[f32]>,
}

impl VectorN {
    /// Creates a zero vector with `len` components.
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0.0; len].into_boxed_slice(),
        }
    }

    /// Creates a vector holding a copy of `data`.
    pub fn from_slice(data: &[f32]) -> Self {
        Self { data: data.into() }
    }

    /// Creates a vector from the `size` elements of `data` starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceRange`] if `offset + size` exceeds `data.len()`.
    ///
    /// ```
    /// # use simple_vecmath::*;
    /// let data = [1.0, 2.0, 3.0, 4.0];
    /// assert_eq!(VectorN::from_slice_range(&data, 2, 1)?.as_slice(), &[2.0, 3.0]);
    /// assert!(VectorN::from_slice_range(&data, 2, 3).is_err());
    /// # Ok::<(), simple_vecmath::Error>(())
    /// ```
    pub fn from_slice_range(data: &[f32], size: usize, offset: usize) -> Result<Self> {
        let range = offset
            .checked_add(size)
            .filter(|end| *end <= data.len())
            .map(|end| offset..end)
            .ok_or(Error::SliceRange {
                offset,
                size,
                len: data.len(),
            })?;
        Ok(Self::from_slice(&data[range]))
    }

    /// Returns the number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the component at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.data.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns an iterator over the components.
    pub fn iter(&self) -> slice::Iter<'_, f32> {
        self.data.iter()
    }
}

impl Sealed for VectorN {}

impl Components for VectorN {
    #[inline]
    fn components(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn components_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Two-operand methods panic if the operands differ in length.
impl VectorOps for VectorN {
    type Array = Vec<f32>;

    fn to_array(&self) -> Vec<f32> {
        self.data.to_vec()
    }
}

impl From<Vec<f32>> for VectorN {
    fn from(data: Vec<f32>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl FromIterator<f32> for VectorN {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VectorN {
    type Item = &'a f32;
    type IntoIter = slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for VectorN {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for VectorN {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}

impl Hash for VectorN {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.len().hash(state);
        for c in self.iter() {
            hash_component(*c, state);
        }
    }
}

impl fmt::Debug for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", format_components(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use approx::assert_relative_eq;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn construction() {
        let v = VectorN::new(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.to_array(), vec![0.0; 3]);
        assert!(VectorN::new(0).is_empty());

        let v: VectorN = (1..=4).map(|i| i as f32).collect();
        assert_eq!(v, VectorN::from(vec![1.0, 2.0, 3.0, 4.0]));
        assert_eq!(v.get(3), Some(4.0));
        assert_eq!(v.get(4), None);
    }

    #[test]
    fn slice_range() {
        let data = [1.0, 2.0, 3.0];
        assert_eq!(
            VectorN::from_slice_range(&data, 3, 0).unwrap().as_slice(),
            &data
        );
        assert!(VectorN::from_slice_range(&data, 0, 3).unwrap().is_empty());
        assert_eq!(
            VectorN::from_slice_range(&data, 2, 2),
            Err(Error::SliceRange {
                offset: 2,
                size: 2,
                len: 3
            })
        );
        assert!(VectorN::from_slice_range(&data, usize::MAX, 1).is_err());
    }

    #[test]
    fn equality_needs_same_length() {
        let a = VectorN::from_slice(&[1.0, 2.0]);
        let b = VectorN::from_slice(&[1.0, 2.0, 0.0]);
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&VectorN::from_slice(&[1.0, 2.0])));
        assert_eq!(hash_of(&b), hash_of(&VectorN::from_slice(&[1.0, 2.0, -0.0])));
    }

    #[test]
    fn contract() {
        let mut v = VectorN::from_slice(&[1.0, -2.0, 3.0]);
        let w = VectorN::from_slice(&[0.5, 0.5, 0.5]);

        v.add(&w).scale(2.0);
        assert_eq!(v.as_slice(), &[3.0, -3.0, 7.0]);
        assert_eq!(v.distance_l1(&w), 2.5 + 3.5 + 6.5);
        assert_eq!(v.distance_linf(&w), 6.5);
        assert_relative_eq!(v.dot(&w), 3.5);
        assert!(v.epsilon_equals(&v.copy(), 0.0));
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn mismatched_lengths() {
        let mut v = VectorN::new(2);
        v.add(&VectorN::new(3));
    }

    #[test]
    fn fmt() {
        let v = VectorN::from_slice(&[1.0, 2.5, -3.0]);
        assert_eq!(v.to_string(), "(1.0,2.5,-3.0)");
        assert_eq!(format!("{:?}", v), "[1.0, 2.5, -3.0]");
        assert_eq!(VectorN::new(0).to_string(), "()");
    }
}

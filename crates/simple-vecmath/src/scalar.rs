//! Floating-point helpers shared by [`Matrix3`][crate::Matrix3] and
//! [`Matrix4`][crate::Matrix4].

/// Computes the determinant of a 3x3 matrix given as 9 elements, by cofactor expansion along
/// the first group of three.
///
/// # Examples
///
/// ```
/// # use simple_vecmath::*;
/// assert_eq!(determinant3x3(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0), 1.0);
/// assert_eq!(determinant3x3(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0), 24.0);
/// ```
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn determinant3x3(
    t00: f32,
    t01: f32,
    t02: f32,
    t10: f32,
    t11: f32,
    t12: f32,
    t20: f32,
    t21: f32,
    t22: f32,
) -> f32 {
    t00 * (t11 * t22 - t12 * t21) + t01 * (t12 * t20 - t10 * t22) + t02 * (t10 * t21 - t11 * t20)
}

/// Returns the 3x3 minor of a 4x4 element grid, leaving out group `skip_a` and element `skip_b`.
///
/// The remaining elements keep their relative order, so the result can be passed straight to
/// [`determinant3x3`].
pub(crate) fn minor4(m: &[[f32; 4]; 4], skip_a: usize, skip_b: usize) -> [f32; 9] {
    let mut out = [0.0; 9];
    let mut i = 0;
    for (a, group) in m.iter().enumerate() {
        if a == skip_a {
            continue;
        }
        for (b, elem) in group.iter().enumerate() {
            if b == skip_b {
                continue;
            }
            out[i] = *elem;
            i += 1;
        }
    }
    out
}

/// [`determinant3x3`] taking the 9 elements as an array.
#[inline]
pub(crate) fn determinant3x3_array(t: [f32; 9]) -> f32 {
    let [t00, t01, t02, t10, t11, t12, t20, t21, t22] = t;
    determinant3x3(t00, t01, t02, t10, t11, t12, t20, t21, t22)
}

/// Sign of the cofactor at position `(a, b)` in a Laplace expansion.
#[inline]
pub(crate) fn cofactor_sign(a: usize, b: usize) -> f32 {
    if (a + b) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

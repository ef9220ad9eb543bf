//! 3×3 matrices and rotations.

use std::fmt::{self, Debug, Formatter};

use crate::math::angle::Angle;
use crate::math::approx::ApproxEq;
use crate::math::vec::Vec3;

/// A 3×3 row-major matrix, applied to column vectors.
///
/// Every matrix produced by the rotation constructors in this module is
/// orthonormal: its rows (and columns) are unit length and mutually
/// perpendicular to floating-point tolerance. Composition preserves this.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Mat3(pub [[f32; 3]; 3]);

/// Returns the rotation by `a` about the x axis.
pub fn rotate_x(a: Angle) -> Mat3 {
    let (sin, cos) = a.sin_cos();
    Mat3([
        [1.0, 0.0, 0.0],
        [0.0, cos, -sin],
        [0.0, sin, cos],
    ])
}

/// Returns the rotation by `a` about the y axis.
pub fn rotate_y(a: Angle) -> Mat3 {
    let (sin, cos) = a.sin_cos();
    Mat3([
        [cos, 0.0, sin],
        [0.0, 1.0, 0.0],
        [-sin, 0.0, cos],
    ])
}

/// Returns the rotation by `a` about the z axis.
pub fn rotate_z(a: Angle) -> Mat3 {
    let (sin, cos) = a.sin_cos();
    Mat3([
        [cos, -sin, 0.0],
        [sin, cos, 0.0],
        [0.0, 0.0, 1.0],
    ])
}

/// Returns the composite rotation by `x`, `z`, and `y` about the
/// respective axes, applied in exactly that order.
///
/// This is the renderer's canonical rotation composition: pitch about x
/// first, then yaw about z (the world up axis), then roll about y. Face
/// normals, flat shading, and the camera's view direction all depend on
/// this exact order, so every rotation in the pipeline goes through here.
///
/// # Examples
/// ```
/// # use corundum_core::assert_approx_eq;
/// # use corundum_core::math::{degs, rotate_xzy, vec3, Angle};
/// // Pure yaw takes +x to +y
/// let m = rotate_xzy(Angle::ZERO, degs(90.0), Angle::ZERO);
/// assert_approx_eq!(m.apply(&vec3(1.0, 0.0, 0.0)), vec3(0.0, 1.0, 0.0));
/// ```
pub fn rotate_xzy(x: Angle, z: Angle, y: Angle) -> Mat3 {
    rotate_x(x).then(&rotate_z(z)).then(&rotate_y(y))
}

//
// Inherent impls
//

impl Mat3 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// Returns the `i`th row of `self` as a vector.
    #[inline]
    pub fn row_vec(&self, i: usize) -> Vec3 {
        self.0[i].into()
    }

    /// Returns the `i`th column of `self` as a vector.
    #[inline]
    pub fn col_vec(&self, i: usize) -> Vec3 {
        [self.0[0][i], self.0[1][i], self.0[2][i]].into()
    }

    /// Applies `self` to the column vector `v`.
    pub fn apply(&self, v: &Vec3) -> Vec3 {
        [
            self.row_vec(0).dot(v),
            self.row_vec(1).dot(v),
            self.row_vec(2).dot(v),
        ]
        .into()
    }

    /// Applies the transpose of `self` to the column vector `v`.
    ///
    /// Equivalent to the row-vector product `v * self`. The face pipeline
    /// transforms shading normals this way: for an orthonormal matrix it
    /// applies the inverse rotation without building a new matrix.
    pub fn apply_transposed(&self, v: &Vec3) -> Vec3 {
        [
            self.col_vec(0).dot(v),
            self.col_vec(1).dot(v),
            self.col_vec(2).dot(v),
        ]
        .into()
    }

    /// Returns the composite transform of first `other`, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let mut els = [[0.0_f32; 3]; 3];
        for (i, row) in els.iter_mut().enumerate() {
            for (j, el) in row.iter_mut().enumerate() {
                *el = self.row_vec(i).dot(&other.col_vec(j));
            }
        }
        Self(els)
    }

    /// Returns the composite transform of first `self`, then `other`.
    pub fn then(&self, other: &Self) -> Self {
        other.compose(self)
    }

    /// Returns the transpose of `self`.
    ///
    /// For an orthonormal matrix the transpose equals the inverse.
    pub fn transpose(&self) -> Self {
        let mut els = [[0.0_f32; 3]; 3];
        for (i, row) in els.iter_mut().enumerate() {
            for (j, el) in row.iter_mut().enumerate() {
                *el = self.0[j][i];
            }
        }
        Self(els)
    }
}

//
// Local trait impls
//

impl ApproxEq<Self, f32> for Mat3 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

//
// Foreign trait impls
//

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Debug for Mat3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat3[")?;
        for row in &self.0 {
            writeln!(f, "    {row:6.2?}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;
    use crate::math::angle::degs;
    use crate::math::vec::vec3;

    use super::*;

    fn is_orthonormal(m: &Mat3) -> bool {
        (0..3).all(|i| {
            m.row_vec(i).len().approx_eq_eps(&1.0, &1e-5)
                && (0..3).filter(|&j| j != i).all(|j| {
                    m.row_vec(i)
                        .dot(&m.row_vec(j))
                        .approx_eq_eps(&0.0, &1e-5)
                })
        })
    }

    #[test]
    fn identity_apply() {
        let v = vec3(1.0, -2.0, 3.0);
        assert_eq!(Mat3::IDENTITY.apply(&v), v);
    }

    #[test]
    fn elementary_rotations() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);

        assert_approx_eq!(rotate_x(degs(90.0)).apply(&y), z);
        assert_approx_eq!(rotate_y(degs(90.0)).apply(&z), x);
        assert_approx_eq!(rotate_z(degs(90.0)).apply(&x), y);
    }

    #[test]
    fn composition_order_is_x_then_z_then_y() {
        let (x, z, y) = (degs(15.0), degs(30.0), degs(45.0));
        let expect = rotate_y(y)
            .compose(&rotate_z(z))
            .compose(&rotate_x(x));
        assert_approx_eq!(rotate_xzy(x, z, y), expect);
    }

    #[test]
    fn single_axis_composites_match_elementary() {
        let a = degs(77.0);
        let o = Angle::ZERO;
        assert_approx_eq!(rotate_xzy(a, o, o), rotate_x(a));
        assert_approx_eq!(rotate_xzy(o, a, o), rotate_z(a));
        assert_approx_eq!(rotate_xzy(o, o, a), rotate_y(a));
    }

    #[test]
    fn rotations_are_orthonormal() {
        for i in -4..=4 {
            for j in -4..=4 {
                for k in -2..=2 {
                    let m = rotate_xzy(
                        degs(i as f32 * 45.0),
                        degs(j as f32 * 45.0),
                        degs(k as f32 * 67.5),
                    );
                    assert!(is_orthonormal(&m), "not orthonormal: {m:?}");
                }
            }
        }
    }

    #[test]
    fn transpose_inverts_rotation() {
        let m = rotate_xzy(degs(10.0), degs(20.0), degs(30.0));
        assert_approx_eq!(m.compose(&m.transpose()), Mat3::IDENTITY);
    }

    #[test]
    fn apply_transposed_is_row_vector_product() {
        let m = rotate_z(degs(90.0));
        let v = vec3(1.0, 0.0, 0.0);
        assert_approx_eq!(m.apply_transposed(&v), vec3(0.0, -1.0, 0.0));
    }
}

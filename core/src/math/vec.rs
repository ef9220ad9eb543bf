//! Real vectors in two and three dimensions.

use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, AddAssign, Index, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

/// A real vector with `N` components, backed by an `f32` array.
///
/// Used for positions, directions, and projected screen coordinates.
/// Copied by value everywhere; there is no shared ownership of vectors.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Vector<const N: usize>(pub [f32; N]);

/// A two-component vector, used for projected screen coordinates.
pub type Vec2 = Vector<2>;
/// A three-component vector, used for world and camera space positions.
pub type Vec3 = Vector<3>;

/// Returns a new 2-vector with components `x` and `y`.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vector([x, y])
}

/// Returns a new 3-vector with components `x`, `y`, and `z`.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vector([x, y, z])
}

/// Returns the centroid (arithmetic mean) of a set of points.
///
/// The centroid is the default pivot for local rotation and scaling.
///
/// # Panics
/// If `points` is empty. The centroid of nothing is undefined, and
/// callers are expected to never ask for it.
///
/// # Examples
/// ```
/// # use corundum_core::math::{centroid, vec3};
/// let c = centroid(&[vec3(0.0, 0.0, 0.0), vec3(2.0, 4.0, 6.0)]);
/// assert_eq!(c, vec3(1.0, 2.0, 3.0));
/// ```
pub fn centroid(points: &[Vec3]) -> Vec3 {
    assert!(!points.is_empty(), "centroid of an empty point set");
    let sum = points.iter().fold(Vec3::zero(), |acc, &p| acc + p);
    sum * (1.0 / points.len() as f32)
}

//
// Inherent impls
//

impl<const N: usize> Vector<N> {
    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        let mut res = 0.0;
        for i in 0..N {
            res += self.0[i] * other.0[i];
        }
        res
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Returns `self` scaled to unit length.
    #[inline]
    pub fn normalize(&self) -> Self {
        *self * self.len().recip()
    }

    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }
}

impl Vec3 {
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the cross product of `self` and `other`.
    pub fn cross(&self, other: &Self) -> Self {
        let x = self.0[1] * other.0[2] - self.0[2] * other.0[1];
        let y = self.0[2] * other.0[0] - self.0[0] * other.0[2];
        let z = self.0[0] * other.0[1] - self.0[1] * other.0[0];
        Self([x, y, z])
    }
}

//
// Local trait impls
//

impl<const N: usize> ApproxEq<Self, f32> for Vector<N> {
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

// Derived `Default` would require `[f32; N]: Default`, which only holds
// for specific lengths.
impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Debug for Vector<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec{}{:?}", N, self.0)
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(els: [f32; N]) -> Self {
        Self(els)
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut res = self;
        for i in 0..N {
            res.0[i] += rhs.0[i];
        }
        res
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut res = self;
        for i in 0..N {
            res.0[i] -= rhs.0[i];
        }
        res
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        let mut res = self;
        for i in 0..N {
            res.0[i] = -res.0[i];
        }
        res
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        let mut res = self;
        for i in 0..N {
            res.0[i] *= rhs;
        }
        res
    }
}

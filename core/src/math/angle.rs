//! Scalar angular quantities.

use std::f32::consts::PI;
use std::fmt::{self, Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::math::approx::ApproxEq;

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
/// This also makes the degree-to-radian conversion happen in exactly one
/// place; rotation operations never convert units themselves.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

const RADS_PER_DEG: f32 = PI / 180.0;

impl Angle {
    /// A zero degree angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90 degree angle.
    pub const RIGHT: Self = Self(PI / 2.0);
    /// A 180 degree angle.
    pub const STRAIGHT: Self = Self(PI);
    /// A 360 degree angle.
    pub const FULL: Self = Self(2.0 * PI);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use std::f32;
    /// # use corundum_core::math::degs;
    /// assert_eq!(degs(90.0).to_rads(), f32::consts::FRAC_PI_2);
    /// ```
    pub const fn to_rads(self) -> f32 {
        self.0
    }

    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }

    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        self.0.sin()
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        self.0.cos()
    }
    /// Simultaneously computes the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }

    /// Returns `self` clamped to the range `min..=max`.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self(self.0.clamp(min.0, max.0))
    }
}

//
// Local trait impls
//

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: &Self) -> bool {
        self.0.approx_eq_eps(&other.0, &eps.0)
    }
    fn relative_epsilon() -> Self {
        Self(f32::relative_epsilon())
    }
}

//
// Foreign trait impls
//

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({self})")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}
impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

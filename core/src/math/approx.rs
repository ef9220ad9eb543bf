//! Testing and asserting approximate equality.

use std::iter::zip;

/// Trait for testing approximate equality.
///
/// Two floats that would be equal as real numbers may compare unequal due
/// to rounding in intermediate computations. Comparing against a small
/// relative epsilon is more robust than strict equality; the epsilon is
/// scaled by the magnitude of the values being compared.
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = Self> {
    /// Returns whether `self` and `other` are approximately equal.
    /// Uses the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &Self) -> bool {
        let diff = (self - other).abs();
        diff <= *rel_eps * self.abs().max(1.0)
    }

    fn relative_epsilon() -> Self {
        1e-6
    }
}

impl<E, T: Sized + ApproxEq<T, E>> ApproxEq<Self, E> for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

impl<E, T: Sized + ApproxEq<T, E>, const N: usize> ApproxEq<Self, E>
    for [T; N]
{
    fn approx_eq_eps(&self, other: &Self, rel_eps: &E) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> E {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
///
/// Requires that the left operand has an applicable [`ApproxEq`] impl and
/// that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
///
/// If the given values are not approximately equal.
///
/// # Examples
/// ```
/// # use corundum_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// ```
/// A custom epsilon can be given:
/// ```
/// # use corundum_core::assert_approx_eq;
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

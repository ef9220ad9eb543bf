//! RGB colors.

use std::fmt::{self, Debug, Formatter};

/// An RGB color with `u8` components.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Color3(pub [u8; 3]);

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb(r: u8, g: u8, b: u8) -> Color3 {
    Color3([r, g, b])
}

impl Color3 {
    /// Opaque black, the default object color.
    pub const BLACK: Self = rgb(0, 0, 0);
    /// Opaque white, the default frame clear color.
    pub const WHITE: Self = rgb(0xFF, 0xFF, 0xFF);

    /// Returns the red component of `self`.
    #[inline]
    pub const fn r(self) -> u8 {
        self.0[0]
    }
    /// Returns the green component of `self`.
    #[inline]
    pub const fn g(self) -> u8 {
        self.0[1]
    }
    /// Returns the blue component of `self`.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Returns a `u32` containing the component bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }

    /// Returns `self` with every channel multiplied by `factor`,
    /// clamped to the valid channel range.
    ///
    /// The flat-shading step uses this to darken face colors.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self(self.0.map(|c| {
            (c as f32 * factor).clamp(0.0, 255.0) as u8
        }))
    }
}

impl From<[u8; 3]> for Color3 {
    #[inline]
    fn from(els: [u8; 3]) -> Self {
        Self(els)
    }
}

impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r}, {g}, {b})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_u32() {
        assert_eq!(rgb(0x11, 0x22, 0x33).to_rgb_u32(), 0x0011_2233);
        assert_eq!(Color3::WHITE.to_rgb_u32(), 0x00FF_FFFF);
    }

    #[test]
    fn scaling() {
        assert_eq!(rgb(100, 200, 0).scaled(0.5), rgb(50, 100, 0));
        assert_eq!(rgb(100, 200, 0).scaled(1.0), rgb(100, 200, 0));
    }

    #[test]
    fn scaling_clamps() {
        assert_eq!(rgb(200, 0, 255).scaled(2.0), rgb(255, 0, 255));
        assert_eq!(rgb(10, 20, 30).scaled(-1.0), Color3::BLACK);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", rgb(1, 2, 3)), "rgb(1, 2, 3)");
    }
}

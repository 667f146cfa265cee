//! Display-linear RGB in the sRGB / Rec.709 primaries.

use std::fmt;
use std::ops::Index;

use chroma_core::{Error, Result};

use crate::convert::{self, ColorConvert};
use crate::pack::{pack_argb32, rgb8_to_unit, unpack_argb32};
use crate::{Srgb, XyY, Xyz};

/// Linear RGB color.
///
/// Channels are nominally 0-1 but construction never clamps; use
/// [`clamped`](Self::clamped) or [`normalized_intensity`](Self::normalized_intensity)
/// when a bounded value is needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct LinearRgb([f64; 3]);

impl LinearRgb {
    /// Creates a color from r, g, b.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self([r, g, b])
    }

    /// Unpacks the RGB bytes of `0xAARRGGBB` into 0-1 channels.
    #[inline]
    pub fn from_argb32(argb: u32) -> Self {
        Self(unpack_argb32(argb))
    }

    /// Creates a color from 8-bit channels, mapped to 0-1.
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self(rgb8_to_unit(rgb))
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> f64 {
        self.0[0]
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> f64 {
        self.0[1]
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> f64 {
        self.0[2]
    }

    /// Read-only view of `[r, g, b]`.
    #[inline]
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// Copies out `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Scaled so the brightest channel is 1, then clamped to [0, 1].
    #[inline]
    pub fn normalized_intensity(&self) -> Self {
        Self(convert::normalize_intensity(self.0))
    }

    /// Channels divided by their sum.
    #[inline]
    pub fn normalized_rgb(&self) -> Self {
        Self(convert::normalize_sum(self.0))
    }

    /// Channels clamped to [0, 1].
    #[inline]
    pub fn clamped(&self) -> Self {
        Self(convert::clamp01(self.0))
    }

    /// Packs as `0xAARRGGBB`.
    #[inline]
    pub fn to_argb32(&self) -> u32 {
        pack_argb32(self.0)
    }
}

impl ColorConvert for LinearRgb {
    #[inline]
    fn to_xyz(&self) -> Xyz {
        Xyz::from(convert::linear_rgb_to_xyz(self.0))
    }

    #[inline]
    fn to_linear_rgb(&self) -> LinearRgb {
        *self
    }

    #[inline]
    fn to_srgb(&self) -> Srgb {
        Srgb::from(convert::encode_srgb(self.0))
    }

    #[inline]
    fn to_xyy(&self) -> XyY {
        self.to_xyz().to_xyy()
    }
}

impl Index<usize> for LinearRgb {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0..=2 => &self.0[i],
            _ => panic!("LinearRgb index out of bounds: {}", i),
        }
    }
}

impl From<[f64; 3]> for LinearRgb {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self(a)
    }
}

impl From<LinearRgb> for [f64; 3] {
    #[inline]
    fn from(c: LinearRgb) -> Self {
        c.0
    }
}

impl TryFrom<&[f64]> for LinearRgb {
    type Error = Error;

    fn try_from(s: &[f64]) -> Result<Self> {
        let a: [f64; 3] = s.try_into().map_err(|_| Error::component_count(3, s.len()))?;
        Ok(Self(a))
    }
}

impl fmt::Display for LinearRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearRGB [r={:.2}, g={:.2}, b={:.2}]", self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_variants() {
        let c = LinearRgb::new(0.5, 0.25, 0.25);
        assert_eq!(c.normalized_intensity(), LinearRgb::new(1.0, 0.5, 0.5));
        assert_eq!(c.normalized_rgb(), LinearRgb::new(0.5, 0.25, 0.25));
        assert_eq!(LinearRgb::new(1.5, -0.5, 0.5).clamped(), LinearRgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_pack() {
        assert_eq!(LinearRgb::new(1.0, 0.0, 0.0).to_argb32(), 0xFFFF_0000);
        assert_eq!(LinearRgb::default().to_argb32(), 0xFF00_0000);
    }

    #[test]
    fn test_from_packed() {
        assert_eq!(LinearRgb::from_argb32(0xFF00_FF00), LinearRgb::new(0.0, 1.0, 0.0));
        assert_eq!(LinearRgb::from_rgb8([0, 0, 255]), LinearRgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_display() {
        let c = LinearRgb::new(1.0, 0.5, 0.126);
        assert_eq!(c.to_string(), "LinearRGB [r=1.00, g=0.50, b=0.13]");
    }

    #[test]
    fn test_identity() {
        let c = LinearRgb::new(0.1, 0.2, 0.3);
        assert_eq!(c.to_linear_rgb(), c);
        assert_eq!(c[1], 0.2);
    }
}

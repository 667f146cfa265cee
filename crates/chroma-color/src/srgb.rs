//! Gamma-encoded sRGB.

use std::fmt;
use std::ops::Index;

use chroma_core::{Error, Result};

use crate::convert::{self, ColorConvert};
use crate::pack::{pack_argb32, rgb8_to_unit, unpack_argb32};
use crate::{LinearRgb, XyY, Xyz};

/// sRGB color, encoded with the sRGB transfer function.
///
/// Same shape and helpers as [`LinearRgb`]; only the encoding differs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Srgb([f64; 3]);

impl Srgb {
    /// Creates a color from encoded R, G, B.
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

    /// Read-only view of `[R, G, B]`.
    #[inline]
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// Copies out `[R, G, B]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// See [`LinearRgb::normalized_intensity`].
    #[inline]
    pub fn normalized_intensity(&self) -> Self {
        Self(convert::normalize_intensity(self.0))
    }

    /// See [`LinearRgb::normalized_rgb`].
    #[inline]
    pub fn normalized_rgb(&self) -> Self {
        Self(convert::normalize_sum(self.0))
    }

    /// See [`LinearRgb::clamped`].
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

impl ColorConvert for Srgb {
    #[inline]
    fn to_xyz(&self) -> Xyz {
        self.to_linear_rgb().to_xyz()
    }

    #[inline]
    fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::from(convert::decode_srgb(self.0))
    }

    #[inline]
    fn to_srgb(&self) -> Srgb {
        *self
    }

    #[inline]
    fn to_xyy(&self) -> XyY {
        self.to_xyz().to_xyy()
    }
}

impl Index<usize> for Srgb {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0..=2 => &self.0[i],
            _ => panic!("Srgb index out of bounds: {}", i),
        }
    }
}

impl From<[f64; 3]> for Srgb {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self(a)
    }
}

impl From<Srgb> for [f64; 3] {
    #[inline]
    fn from(c: Srgb) -> Self {
        c.0
    }
}

impl TryFrom<&[f64]> for Srgb {
    type Error = Error;

    fn try_from(s: &[f64]) -> Result<Self> {
        let a: [f64; 3] = s.try_into().map_err(|_| Error::component_count(3, s.len()))?;
        Ok(Self(a))
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sRGB [R={:.2}, G={:.2}, B={:.2}]", self.0[0], self.0[1], self.0[2])
    }
}

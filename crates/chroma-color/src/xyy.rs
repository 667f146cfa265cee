//! CIE xyY: chromaticity plus luminance.

use std::fmt;
use std::ops::Index;

use chroma_core::{Error, Result};

use crate::convert::{self, ColorConvert};
use crate::{LinearRgb, Srgb, Xyz};

/// CIE xyY color.
///
/// `x` and `y` are chromaticity coordinates, `Y` is luminance. There are no
/// arithmetic operators: adding chromaticities is not meaningful. The CCT
/// estimate is provided by `chroma-cct`.
///
/// Zero or negative luminance, or `y == 0`, converts to black XYZ:
///
/// ```rust
/// use chroma_color::{ColorConvert, XyY, Xyz};
///
/// assert_eq!(XyY::new(0.3, 0.0, 50.0).to_xyz(), Xyz::new(0.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct XyY([f64; 3]);

impl XyY {
    /// Creates a color from chromaticity `x`, `y` and luminance `Y`.
    #[inline]
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self([x, y, luminance])
    }

    /// Chromaticity x.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    /// Chromaticity y.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    /// Luminance Y.
    #[inline]
    pub const fn luminance(&self) -> f64 {
        self.0[2]
    }

    /// Read-only view of `[x, y, Y]`.
    #[inline]
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// Copies out `[x, y, Y]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Packs as `0xAARRGGBB` through the sRGB conversion.
    pub fn to_argb32(&self) -> u32 {
        self.to_srgb().to_argb32()
    }
}

impl ColorConvert for XyY {
    #[inline]
    fn to_xyz(&self) -> Xyz {
        Xyz::from(convert::xyy_to_xyz(self.0))
    }

    #[inline]
    fn to_linear_rgb(&self) -> LinearRgb {
        self.to_xyz().to_linear_rgb()
    }

    #[inline]
    fn to_srgb(&self) -> Srgb {
        self.to_linear_rgb().to_srgb()
    }

    #[inline]
    fn to_xyy(&self) -> XyY {
        *self
    }
}

impl Index<usize> for XyY {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0..=2 => &self.0[i],
            _ => panic!("XyY index out of bounds: {}", i),
        }
    }
}

impl From<[f64; 3]> for XyY {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self(a)
    }
}

impl From<XyY> for [f64; 3] {
    #[inline]
    fn from(c: XyY) -> Self {
        c.0
    }
}

impl TryFrom<&[f64]> for XyY {
    type Error = Error;

    fn try_from(s: &[f64]) -> Result<Self> {
        let a: [f64; 3] = s.try_into().map_err(|_| Error::component_count(3, s.len()))?;
        Ok(Self(a))
    }
}

impl fmt::Display for XyY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "xyY [x={:.2}, y={:.2}, Y={:.2}]", self.0[0], self.0[1], self.0[2])
    }
}

//! CIE XYZ tristimulus values.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Sub};

use chroma_core::{Error, Result};
use chroma_math::Vec3;

use crate::convert::{self, ColorConvert};
use crate::{LinearRgb, Srgb, XyY};

/// CIE XYZ color. `Y` is relative luminance.
///
/// XYZ is the additive space: it is the only value type with arithmetic
/// operators, since mixing light is a sum of tristimulus values.
///
/// # Example
///
/// ```rust
/// use chroma_color::{ColorConvert, Xyz};
///
/// let a = Xyz::new(0.2, 0.3, 0.1);
/// let b = Xyz::new(0.1, 0.1, 0.1);
/// let mix = (a + b) / 2.0;
/// assert!((mix.y() - 0.2).abs() < 1e-12);
///
/// let xyy = mix.to_xyy();
/// assert!((xyy.luminance() - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Xyz([f64; 3]);

impl Xyz {
    /// Creates a color from X, Y, Z.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// X component.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    /// Y component (relative luminance).
    #[inline]
    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    /// Z component.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.0[2]
    }

    /// Read-only view of `[X, Y, Z]`.
    #[inline]
    pub const fn as_array(&self) -> &[f64; 3] {
        &self.0
    }

    /// Copies out `[X, Y, Z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// `X + Y + Z`.
    #[inline]
    pub fn sum(&self) -> f64 {
        self.0[0] + self.0[1] + self.0[2]
    }

    /// `1 / sum()`, or 1 when the sum is exactly 0.
    #[inline]
    pub fn inverse_sum(&self) -> f64 {
        let sum = self.sum();
        if sum == 0.0 { 1.0 } else { 1.0 / sum }
    }

    /// Each component scaled by [`inverse_sum`](Self::inverse_sum).
    ///
    /// The first two components of the result are the xy chromaticity.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self * self.inverse_sum()
    }

    /// Packs as `0xAARRGGBB` through the sRGB conversion.
    pub fn to_argb32(&self) -> u32 {
        self.to_srgb().to_argb32()
    }

    #[inline]
    fn vec(self) -> Vec3 {
        Vec3::from_array(self.0)
    }

    #[inline]
    fn from_vec(v: Vec3) -> Self {
        Self(v.to_array())
    }
}

impl ColorConvert for Xyz {
    #[inline]
    fn to_xyz(&self) -> Xyz {
        *self
    }

    #[inline]
    fn to_linear_rgb(&self) -> LinearRgb {
        LinearRgb::from(convert::xyz_to_linear_rgb(self.0))
    }

    #[inline]
    fn to_srgb(&self) -> Srgb {
        self.to_linear_rgb().to_srgb()
    }

    #[inline]
    fn to_xyy(&self) -> XyY {
        XyY::from(convert::xyz_to_xyy(self.0))
    }
}

impl Index<usize> for Xyz {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0..=2 => &self.0[i],
            _ => panic!("Xyz index out of bounds: {}", i),
        }
    }
}

// Xyz + Xyz
impl Add for Xyz {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec() + rhs.vec())
    }
}

// Xyz - Xyz
impl Sub for Xyz {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec() - rhs.vec())
    }
}

// Xyz * f64
impl Mul<f64> for Xyz {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::from_vec(self.vec() * s)
    }
}

// f64 * Xyz
impl Mul<Xyz> for f64 {
    type Output = Xyz;

    #[inline]
    fn mul(self, c: Xyz) -> Xyz {
        c * self
    }
}

// Xyz / f64
impl Div<f64> for Xyz {
    type Output = Self;

    #[inline]
    fn div(self, s: f64) -> Self {
        Self::from_vec(self.vec() / s)
    }
}

impl From<[f64; 3]> for Xyz {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self(a)
    }
}

impl From<Xyz> for [f64; 3] {
    #[inline]
    fn from(c: Xyz) -> Self {
        c.0
    }
}

impl TryFrom<&[f64]> for Xyz {
    type Error = Error;

    fn try_from(s: &[f64]) -> Result<Self> {
        let a: [f64; 3] = s.try_into().map_err(|_| Error::component_count(3, s.len()))?;
        Ok(Self(a))
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XYZ [X={:.2}, Y={:.2}, Z={:.2}]", self.0[0], self.0[1], self.0[2])
    }
}

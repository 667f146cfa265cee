//! Runtime-typed color.
//!
//! [`AnyColor`] wraps one of the four value types when the color space is
//! only known at run time, e.g. when it comes from a command-line argument.
//!
//! # Usage
//!
//! ```rust
//! use chroma_color::AnyColor;
//! use chroma_core::ColorSpaceId;
//!
//! let red = AnyColor::from_components(ColorSpaceId::LinearRgb, &[1.0, 0.0, 0.0])?;
//! let xyz = red.convert(ColorSpaceId::Xyz);
//! assert_eq!(xyz.space(), ColorSpaceId::Xyz);
//! # Ok::<(), chroma_core::Error>(())
//! ```

use std::fmt;

use chroma_core::{ColorSpaceId, Result};

use crate::{ColorConvert, LinearRgb, Srgb, XyY, Xyz};

/// A color in any of the four supported spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyColor {
    /// CIE XYZ.
    Xyz(Xyz),
    /// Linear RGB.
    LinearRgb(LinearRgb),
    /// sRGB.
    Srgb(Srgb),
    /// CIE xyY.
    XyY(XyY),
}

impl AnyColor {
    /// Builds a color of `space` from exactly three components.
    pub fn from_components(space: ColorSpaceId, components: &[f64]) -> Result<Self> {
        Ok(match space {
            ColorSpaceId::Xyz => AnyColor::Xyz(Xyz::try_from(components)?),
            ColorSpaceId::LinearRgb => AnyColor::LinearRgb(LinearRgb::try_from(components)?),
            ColorSpaceId::Srgb => AnyColor::Srgb(Srgb::try_from(components)?),
            ColorSpaceId::XyY => AnyColor::XyY(XyY::try_from(components)?),
        })
    }

    /// Space of the wrapped value.
    pub fn space(&self) -> ColorSpaceId {
        match self {
            AnyColor::Xyz(_) => ColorSpaceId::Xyz,
            AnyColor::LinearRgb(_) => ColorSpaceId::LinearRgb,
            AnyColor::Srgb(_) => ColorSpaceId::Srgb,
            AnyColor::XyY(_) => ColorSpaceId::XyY,
        }
    }

    /// Converts to `target`. Converting to the current space is the identity.
    pub fn convert(&self, target: ColorSpaceId) -> AnyColor {
        match target {
            ColorSpaceId::Xyz => AnyColor::Xyz(self.to_xyz()),
            ColorSpaceId::LinearRgb => AnyColor::LinearRgb(self.to_linear_rgb()),
            ColorSpaceId::Srgb => AnyColor::Srgb(self.to_srgb()),
            ColorSpaceId::XyY => AnyColor::XyY(self.to_xyy()),
        }
    }

    /// The three components.
    pub fn to_array(&self) -> [f64; 3] {
        match self {
            AnyColor::Xyz(c) => c.to_array(),
            AnyColor::LinearRgb(c) => c.to_array(),
            AnyColor::Srgb(c) => c.to_array(),
            AnyColor::XyY(c) => c.to_array(),
        }
    }

    /// Component names paired with values, e.g. `[("X", 0.95), ...]`.
    pub fn components(&self) -> [(&'static str, f64); 3] {
        let names = self.space().component_names();
        let values = self.to_array();
        [(names[0], values[0]), (names[1], values[1]), (names[2], values[2])]
    }

    /// Packs as `0xAARRGGBB`.
    pub fn to_argb32(&self) -> u32 {
        match self {
            AnyColor::Xyz(c) => c.to_argb32(),
            AnyColor::LinearRgb(c) => c.to_argb32(),
            AnyColor::Srgb(c) => c.to_argb32(),
            AnyColor::XyY(c) => c.to_argb32(),
        }
    }
}

impl ColorConvert for AnyColor {
    fn to_xyz(&self) -> Xyz {
        match self {
            AnyColor::Xyz(c) => c.to_xyz(),
            AnyColor::LinearRgb(c) => c.to_xyz(),
            AnyColor::Srgb(c) => c.to_xyz(),
            AnyColor::XyY(c) => c.to_xyz(),
        }
    }

    fn to_linear_rgb(&self) -> LinearRgb {
        match self {
            AnyColor::Xyz(c) => c.to_linear_rgb(),
            AnyColor::LinearRgb(c) => c.to_linear_rgb(),
            AnyColor::Srgb(c) => c.to_linear_rgb(),
            AnyColor::XyY(c) => c.to_linear_rgb(),
        }
    }

    fn to_srgb(&self) -> Srgb {
        match self {
            AnyColor::Xyz(c) => c.to_srgb(),
            AnyColor::LinearRgb(c) => c.to_srgb(),
            AnyColor::Srgb(c) => c.to_srgb(),
            AnyColor::XyY(c) => c.to_srgb(),
        }
    }

    fn to_xyy(&self) -> XyY {
        match self {
            AnyColor::Xyz(c) => c.to_xyy(),
            AnyColor::LinearRgb(c) => c.to_xyy(),
            AnyColor::Srgb(c) => c.to_xyy(),
            AnyColor::XyY(c) => c.to_xyy(),
        }
    }
}

impl From<Xyz> for AnyColor {
    fn from(c: Xyz) -> Self {
        AnyColor::Xyz(c)
    }
}

impl From<LinearRgb> for AnyColor {
    fn from(c: LinearRgb) -> Self {
        AnyColor::LinearRgb(c)
    }
}

impl From<Srgb> for AnyColor {
    fn from(c: Srgb) -> Self {
        AnyColor::Srgb(c)
    }
}

impl From<XyY> for AnyColor {
    fn from(c: XyY) -> Self {
        AnyColor::XyY(c)
    }
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyColor::Xyz(c) => fmt::Display::fmt(c, f),
            AnyColor::LinearRgb(c) => fmt::Display::fmt(c, f),
            AnyColor::Srgb(c) => fmt::Display::fmt(c, f),
            AnyColor::XyY(c) => fmt::Display::fmt(c, f),
        }
    }
}

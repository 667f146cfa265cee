//! Color space identifiers.
//!
//! [`ColorSpaceId`] names the four color spaces chroma-rs converts between.
//! The value types themselves live in `chroma-color`; this enum is the
//! runtime handle used when the target space is only known at run time
//! (command-line arguments, dynamic dispatch through `AnyColor`).
//!
//! # Supported Color Spaces
//!
//! | Id | Components | Notes |
//! |----|------------|-------|
//! | [`Xyz`](ColorSpaceId::Xyz) | X, Y, Z | CIE 1931 tristimulus, linear and additive |
//! | [`LinearRgb`](ColorSpaceId::LinearRgb) | r, g, b | sRGB primaries, D65, no transfer curve |
//! | [`Srgb`](ColorSpaceId::Srgb) | r, g, b | sRGB primaries, sRGB transfer curve |
//! | [`XyY`](ColorSpaceId::XyY) | x, y, Y | chromaticity plus luminance |
//!
//! # Usage
//!
//! ```
//! use chroma_core::ColorSpaceId;
//!
//! let id: ColorSpaceId = "linear".parse().unwrap();
//! assert_eq!(id, ColorSpaceId::LinearRgb);
//! assert_eq!(id.to_string(), "LinearRGB");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Runtime identifier of a color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpaceId {
    /// CIE 1931 XYZ.
    Xyz,
    /// Linear (display-linear) RGB with sRGB primaries.
    LinearRgb,
    /// Gamma-encoded sRGB.
    Srgb,
    /// CIE xyY (chromaticity + luminance).
    XyY,
}

impl ColorSpaceId {
    /// All identifiers in declaration order.
    pub const ALL: [ColorSpaceId; 4] = [
        ColorSpaceId::Xyz,
        ColorSpaceId::LinearRgb,
        ColorSpaceId::Srgb,
        ColorSpaceId::XyY,
    ];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            ColorSpaceId::Xyz => "XYZ",
            ColorSpaceId::LinearRgb => "LinearRGB",
            ColorSpaceId::Srgb => "sRGB",
            ColorSpaceId::XyY => "xyY",
        }
    }

    /// Names of the three components, in storage order.
    pub const fn component_names(self) -> [&'static str; 3] {
        match self {
            ColorSpaceId::Xyz => ["X", "Y", "Z"],
            ColorSpaceId::LinearRgb | ColorSpaceId::Srgb => ["r", "g", "b"],
            ColorSpaceId::XyY => ["x", "y", "Y"],
        }
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // xyY and XYZ differ only by case, so those two are matched first.
        match s.trim() {
            "xyY" => return Ok(ColorSpaceId::XyY),
            "XYZ" => return Ok(ColorSpaceId::Xyz),
            _ => {}
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "xyz" | "ciexyz" => Ok(ColorSpaceId::Xyz),
            "linearrgb" | "linear-rgb" | "linear_rgb" | "linear" | "linrgb" => {
                Ok(ColorSpaceId::LinearRgb)
            }
            "srgb" => Ok(ColorSpaceId::Srgb),
            "xyy" | "ciexyy" => Ok(ColorSpaceId::XyY),
            _ => Err(Error::unknown_color_space(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for id in ColorSpaceId::ALL {
            assert_eq!(id.name().parse::<ColorSpaceId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("linear".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::LinearRgb);
        assert_eq!("SRGB".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Srgb);
        assert_eq!(" xyz ".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Xyz);
        assert_eq!("xyy".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::XyY);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "lab".parse::<ColorSpaceId>().unwrap_err();
        assert_eq!(err, Error::UnknownColorSpace("lab".into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorSpaceId::Srgb.to_string(), "sRGB");
        assert_eq!(format!("{}", ColorSpaceId::XyY), "xyY");
    }
}

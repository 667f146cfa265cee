//! # chroma-color
//!
//! Color value types and the conversions between them.
//!
//! Four immutable `Copy` value types, each holding three `f64` components:
//!
//! | Type | Components | Notes |
//! |------|------------|-------|
//! | [`Xyz`] | X, Y, Z | additive; the only type with arithmetic operators |
//! | [`LinearRgb`] | r, g, b | sRGB primaries, D65, no transfer curve |
//! | [`Srgb`] | R, G, B | sRGB transfer curve applied |
//! | [`XyY`] | x, y, Y | chromaticity plus luminance |
//!
//! Every type implements [`ColorConvert`], so any space reaches any other.
//! Conversions are total: degenerate input (black, `y == 0`) has a defined
//! result instead of an error.
//!
//! # Architecture
//!
//! ```text
//!                  chroma-color
//!                       |
//!       +---------------+---------------+
//!       |               |               |
//! chroma-transfer  chroma-primaries  chroma-core
//!                       |
//!                  chroma-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::{ColorConvert, LinearRgb, Srgb};
//!
//! let orange = Srgb::from_rgb8([255, 128, 0]);
//! let linear = orange.to_linear_rgb();
//! let xyy = orange.to_xyy();
//!
//! assert!((linear.r() - 1.0).abs() < 1e-12);
//! assert!(xyy.x() > xyy.y());
//! assert_eq!(LinearRgb::new(1.0, 0.0, 0.0).to_argb32(), 0xFFFF_0000);
//! ```
//!
//! # Packed Colors
//!
//! `to_argb32` packs `0xAARRGGBB` with alpha 255. RGB types pack their own
//! channels after intensity normalization; [`Xyz`] and [`XyY`] pack through
//! their sRGB conversion.
//!
//! # Dependencies
//!
//! - [`chroma-core`] - `ColorSpaceId`, `Error`
//! - [`chroma-math`] - `Vec3`, `Mat3`
//! - [`chroma-transfer`] - sRGB encode/decode
//! - [`chroma-primaries`] - fixed RGB <-> XYZ matrices
//!
//! # Used By
//!
//! - `chroma-cct` - temperature and chromaticity
//! - `chroma-cli`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod any;
pub mod convert;
pub mod pack;
mod linear_rgb;
mod parse;
mod srgb;
mod xyy;
mod xyz;

pub use any::AnyColor;
pub use convert::ColorConvert;
pub use linear_rgb::LinearRgb;
pub use parse::parse_components;
pub use srgb::Srgb;
pub use xyy::XyY;
pub use xyz::Xyz;

pub use chroma_core::{ColorSpaceId, Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{AnyColor, ColorConvert, ColorSpaceId, LinearRgb, Srgb, XyY, Xyz};
}

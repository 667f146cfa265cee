//! # chroma-transfer
//!
//! Transfer functions for color encoding and decoding.
//!
//! A transfer function maps between linear light and an encoded signal:
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! chroma-rs only needs the sRGB curve (IEC 61966-2-1), used between
//! `LinearRgb` and `Srgb` values.
//!
//! # Usage
//!
//! ```rust
//! use chroma_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `chroma-color` - linear RGB <-> sRGB conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

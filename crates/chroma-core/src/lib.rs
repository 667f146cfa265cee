//! # chroma-core
//!
//! Core types shared by every chroma-rs crate.
//!
//! - [`ColorSpaceId`] - Runtime identifier for the four supported color spaces
//! - [`Error`], [`Result`] - Error handling for the fallible (parsing) surface
//!
//! ## Crate Structure
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-color (XYZ, linear RGB, sRGB, xyY value types)
//!    +-- chroma-cli
//! ```
//!
//! Numeric conversions never fail: degenerate inputs have defined fallbacks.
//! [`Error`] only covers building colors from untrusted input (names,
//! component lists, text).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;

pub use colorspace::ColorSpaceId;
pub use error::{Error, Result};

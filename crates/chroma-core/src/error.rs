//! Error types for chroma-rs.
//!
//! Color math in this workspace is total: division by a zero channel sum,
//! a zero maximum channel or a zero `y` chromaticity all have defined
//! fallbacks. The [`Error`] enum therefore only describes failures at the
//! input boundary, when colors are built from names, slices or text.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::{Error, Result};
//!
//! fn three(values: &[f64]) -> Result<[f64; 3]> {
//!     match values {
//!         [a, b, c] => Ok([*a, *b, *c]),
//!         _ => Err(Error::component_count(3, values.len())),
//!     }
//! }
//!
//! assert!(three(&[1.0, 2.0]).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing colors from external input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A color space name did not match any known space.
    #[error("unknown color space: '{0}' (expected one of: XYZ, LinearRGB, sRGB, xyY)")]
    UnknownColorSpace(String),

    /// A component list had the wrong length.
    #[error("component count mismatch: expected {expected}, got {got}")]
    ComponentCount {
        /// Number of components the color space requires.
        expected: usize,
        /// Number of components supplied.
        got: usize,
    },

    /// A component could not be parsed as a number.
    #[error("invalid component: '{0}'")]
    InvalidComponent(String),
}

impl Error {
    /// Creates an [`Error::UnknownColorSpace`].
    #[inline]
    pub fn unknown_color_space(name: impl Into<String>) -> Self {
        Self::UnknownColorSpace(name.into())
    }

    /// Creates an [`Error::ComponentCount`].
    #[inline]
    pub fn component_count(expected: usize, got: usize) -> Self {
        Self::ComponentCount { expected, got }
    }

    /// Creates an [`Error::InvalidComponent`].
    #[inline]
    pub fn invalid_component(text: impl Into<String>) -> Self {
        Self::InvalidComponent(text.into())
    }
}

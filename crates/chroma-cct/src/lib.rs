//! # chroma-cct
//!
//! Color temperature: blackbody chromaticity and correlated color
//! temperature (CCT).
//!
//! # Temperature -> Chromaticity
//!
//! | Function | Method | Luminance |
//! |----------|--------|-----------|
//! | [`approximate_chromaticity`] | cubic fit of the Planckian locus | fixed at 1 |
//! | [`analytical_chromaticity`] | Planck's law integrated over CIE 1931 | integrated Y |
//! | [`chromaticity_with_radiance`] | caller's radiance integrated over CIE 1931 | integrated Y |
//!
//! The integrating functions take a [`Precision`] selecting the 5 nm or
//! 1 nm grid. The `*_with` variants accept any [`MatchingFunctions`]
//! provider instead of the built-in CIE 1931 observer.
//!
//! # Chromaticity -> Temperature
//!
//! [`estimate_cct`] (also available as `XyY::cct()` through
//! [`CorrelatedColorTemperature`]) inverts the relation with a two-branch
//! exponential fit. It never fails and never clamps.
//!
//! # Usage
//!
//! ```rust
//! use chroma_cct::{analytical_chromaticity, CorrelatedColorTemperature};
//! use chroma_cie::Precision;
//!
//! let white = analytical_chromaticity(6500.0, Precision::Fine);
//! let t = white.cct();
//! assert!((t - 6500.0).abs() / 6500.0 < 0.02);
//! ```
//!
//! # Logging
//!
//! Integration emits `trace!` events (temperature, tier, sample count).
//! CCT estimation emits `debug!` when it switches to the high-temperature
//! constants.
//!
//! # Dependencies
//!
//! - [`chroma-color`] - `XyY`, `Xyz`
//! - [`chroma-cie`] - color-matching functions
//! - `tracing` - diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod approximate;
mod estimate;
pub mod planck;
mod spectral;

pub use approximate::approximate_chromaticity;
pub use estimate::{estimate_cct, CorrelatedColorTemperature, HIGH_RANGE_THRESHOLD};
pub use planck::planck_radiance;
pub use spectral::{
    analytical_chromaticity, analytical_chromaticity_with, chromaticity_with_radiance,
    chromaticity_with_radiance_with, wavelength_to_xyz,
};

pub use chroma_cie::{MatchingFunctions, Precision};

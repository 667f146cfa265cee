//! # chroma-cie
//!
//! Color-matching function tables.
//!
//! Spectral integration needs the CIE color-matching functions x̄(λ), ȳ(λ),
//! z̄(λ) at a fixed wavelength grid. This crate exposes them through the
//! [`MatchingFunctions`] trait so that the integrator in `chroma-cct` does not
//! care where the numbers come from, and ships [`Cie1931`], the CIE 1931 2°
//! standard observer.
//!
//! # Precision Tiers
//!
//! | Tier | Step | Range | Samples |
//! |------|------|-------|---------|
//! | [`Precision::Coarse`] | 5 nm | 380-780 nm | 81 |
//! | [`Precision::Fine`] | 1 nm | 380-780 nm | 401 |
//!
//! The tier-to-grid mapping lives in one place, [`Precision::tier`].
//!
//! # Usage
//!
//! ```rust
//! use chroma_cie::{Cie1931, MatchingFunctions, Precision};
//!
//! let cmf = Cie1931;
//! let tier = cmf.tier(Precision::Fine);
//! assert_eq!(tier.sample_count, 401);
//!
//! let [x, y, z] = cmf.at(555.0, Precision::Fine);
//! assert_eq!(y, 1.0);
//! ```
//!
//! # Used By
//!
//! - `chroma-cct` - blackbody integration and wavelength lookups

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod table;

use chroma_math::{lerp, Vec3};

pub use table::{CIE1931_2DEG_5NM, TABLE_END, TABLE_LEN, TABLE_START, TABLE_STEP};

/// Wavelength grid resolution used for spectral integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Precision {
    /// 5 nm steps.
    #[default]
    Coarse,
    /// 1 nm steps.
    Fine,
}

impl Precision {
    /// Maps the boolean `high_precision` switch onto a tier.
    #[inline]
    pub const fn from_high_precision(high_precision: bool) -> Self {
        if high_precision {
            Precision::Fine
        } else {
            Precision::Coarse
        }
    }

    /// Sampling grid of this tier.
    pub const fn tier(self) -> TierSpec {
        match self {
            Precision::Coarse => TierSpec {
                start_wavelength: TABLE_START,
                step: TABLE_STEP,
                sample_count: TABLE_LEN,
            },
            Precision::Fine => TierSpec {
                start_wavelength: TABLE_START,
                step: 1.0,
                sample_count: 401,
            },
        }
    }
}

/// A uniform wavelength grid: `start_wavelength + i * step` for
/// `i in 0..sample_count`, in nanometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierSpec {
    /// First sample, in nanometers.
    pub start_wavelength: f64,
    /// Distance between samples, in nanometers.
    pub step: f64,
    /// Number of samples.
    pub sample_count: usize,
}

impl TierSpec {
    /// Last sample, in nanometers.
    #[inline]
    pub fn end_wavelength(&self) -> f64 {
        self.start_wavelength + self.step * self.sample_count.saturating_sub(1) as f64
    }

    /// Iterates over the sample wavelengths in nanometers.
    pub fn wavelengths(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.sample_count).map(move |i| self.start_wavelength + self.step * i as f64)
    }
}

/// Provider of color-matching function values.
///
/// Implementors return `[x̄, ȳ, z̄]` for a wavelength (in nanometers) at the
/// requested precision, and describe the grid each tier is sampled on.
pub trait MatchingFunctions {
    /// Color-matching weights at `wavelength` nanometers.
    fn at(&self, wavelength: f64, precision: Precision) -> [f64; 3];

    /// Sampling grid for `precision`.
    fn tier(&self, precision: Precision) -> TierSpec {
        precision.tier()
    }
}

/// CIE 1931 2° standard observer.
///
/// The coarse tier returns the tabulated sample nearest to the requested
/// wavelength. The fine tier interpolates linearly between tabulated samples,
/// so both tiers agree exactly on the 5 nm grid. Wavelengths outside
/// 380-780 nm have zero response.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cie1931;

impl Cie1931 {
    fn sample(index: usize) -> Vec3 {
        Vec3::from_array(CIE1931_2DEG_5NM[index])
    }
}

impl MatchingFunctions for Cie1931 {
    fn at(&self, wavelength: f64, precision: Precision) -> [f64; 3] {
        if !(TABLE_START..=TABLE_END).contains(&wavelength) {
            return [0.0; 3];
        }

        let pos = (wavelength - TABLE_START) / TABLE_STEP;
        match precision {
            Precision::Coarse => Self::sample((pos.round() as usize).min(TABLE_LEN - 1)).to_array(),
            Precision::Fine => {
                let lo = (pos.floor() as usize).min(TABLE_LEN - 1);
                let hi = (lo + 1).min(TABLE_LEN - 1);
                let t = pos - lo as f64;
                let (a, b) = (Self::sample(lo), Self::sample(hi));
                [lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t)]
            }
        }
    }
}

//! # chroma-primaries
//!
//! The sRGB gamut: its chromaticities, the D65 white and the fixed
//! linear RGB <-> XYZ matrices.
//!
//! `chroma-color` converts with the published constants [`SRGB_TO_XYZ`]
//! and [`XYZ_TO_SRGB`]. [`derive_rgb_to_xyz`] rebuilds the forward matrix
//! from [`SRGB`] so the constants can be checked against their
//! chromaticities.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::Vec3;
//! use chroma_primaries::{D65_XYZ, SRGB_TO_XYZ};
//!
//! let white = SRGB_TO_XYZ * Vec3::ONE;
//! assert!((white - D65_XYZ).map(f64::abs).max_element() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - `Mat3`, `Vec3`
//!
//! # Used By
//!
//! - `chroma-color` - linear RGB <-> XYZ conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_math::{Mat3, Vec3};

/// Chromaticities of an RGB gamut and its white, as `[x, y]` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut {
    /// Red primary.
    pub red: [f64; 2],
    /// Green primary.
    pub green: [f64; 2],
    /// Blue primary.
    pub blue: [f64; 2],
    /// White point.
    pub white: [f64; 2],
}

/// D65 chromaticity.
pub const D65_XY: [f64; 2] = [0.3127, 0.3290];

/// D65 at `Y = 1`; equals the row sums of [`SRGB_TO_XYZ`].
pub const D65_XYZ: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// sRGB / Rec.709.
pub const SRGB: Gamut = Gamut {
    red: [0.64, 0.33],
    green: [0.30, 0.60],
    blue: [0.15, 0.06],
    white: D65_XY,
};

/// Linear sRGB to XYZ.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ to linear sRGB.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// `[x, y]` lifted to XYZ at `Y = 1`. Zero for `y == 0`.
pub fn xy_to_unit_xyz([x, y]: [f64; 2]) -> Vec3 {
    if y == 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
}

/// Builds the linear RGB to XYZ matrix of `gamut`.
///
/// Each primary's unit-Y XYZ becomes a column, scaled so that RGB
/// `(1, 1, 1)` lands on the white point. Returns `None` when the
/// primaries are collinear.
///
/// ```rust
/// use chroma_primaries::{derive_rgb_to_xyz, SRGB, SRGB_TO_XYZ};
///
/// let m = derive_rgb_to_xyz(&SRGB).unwrap();
/// assert!(m.max_abs_diff(&SRGB_TO_XYZ) < 1e-3);
/// ```
pub fn derive_rgb_to_xyz(gamut: &Gamut) -> Option<Mat3> {
    let cols = [gamut.red, gamut.green, gamut.blue].map(xy_to_unit_xyz);
    let unscaled = Mat3::from_col_vecs(cols[0], cols[1], cols[2]);
    let scale = unscaled.inverse()? * xy_to_unit_xyz(gamut.white);
    Some(Mat3::from_col_vecs(
        cols[0] * scale.x,
        cols[1] * scale.y,
        cols[2] * scale.z,
    ))
}

//! Conversion engine.
//!
//! The transforms connecting the four color spaces, expressed on raw
//! triplets, plus the shared normalization helpers used by the RGB types.
//!
//! ```text
//!            SRGB_TO_XYZ                 x = X / (X+Y+Z)
//!   LinearRgb ----------> Xyz  ---------------------------> XyY
//!      ^  |  <----------       <---------------------------
//!      |  |  XYZ_TO_SRGB         X = x*Y/y, Z = (1-x-y)*Y/y
//!  eotf|  |oetf
//!      |  v
//!     Srgb
//! ```
//!
//! [`ColorConvert`] is the shared capability set: every value type converts
//! to every other, going through linear RGB or XYZ where there is no direct
//! edge.

use chroma_math::Vec3;
use chroma_primaries::{SRGB_TO_XYZ, XYZ_TO_SRGB};
use chroma_transfer::srgb;

use crate::{LinearRgb, Srgb, XyY, Xyz};

/// Conversion to each of the four color spaces.
///
/// Converting a value to its own space returns it unchanged.
///
/// # Example
///
/// ```rust
/// use chroma_color::{ColorConvert, LinearRgb};
///
/// let red = LinearRgb::new(1.0, 0.0, 0.0);
/// assert_eq!(red.to_linear_rgb(), red);
///
/// let back = red.to_srgb().to_linear_rgb();
/// assert!((back.r() - 1.0).abs() < 1e-12);
/// ```
pub trait ColorConvert {
    /// Converts to CIE XYZ.
    fn to_xyz(&self) -> Xyz;

    /// Converts to linear RGB.
    fn to_linear_rgb(&self) -> LinearRgb;

    /// Converts to gamma-encoded sRGB.
    fn to_srgb(&self) -> Srgb;

    /// Converts to CIE xyY.
    fn to_xyy(&self) -> XyY;
}

/// Linear RGB -> XYZ via the fixed D65 matrix.
#[inline]
pub fn linear_rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    (SRGB_TO_XYZ * Vec3::from_array(rgb)).to_array()
}

/// XYZ -> linear RGB via the fixed D65 matrix.
#[inline]
pub fn xyz_to_linear_rgb(xyz: [f64; 3]) -> [f64; 3] {
    (XYZ_TO_SRGB * Vec3::from_array(xyz)).to_array()
}

/// Linear RGB -> sRGB (per-channel sRGB OETF).
#[inline]
pub fn encode_srgb(rgb: [f64; 3]) -> [f64; 3] {
    srgb::oetf_rgb(rgb)
}

/// sRGB -> linear RGB (per-channel sRGB EOTF).
#[inline]
pub fn decode_srgb(rgb: [f64; 3]) -> [f64; 3] {
    srgb::eotf_rgb(rgb)
}

/// XYZ -> xyY. Luminance passes through.
///
/// Black (`X+Y+Z == 0`) has no chromaticity; it maps to `(0, 0, 0)`.
#[inline]
pub fn xyz_to_xyy(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let sum = x + y + z;
    if sum == 0.0 {
        return [0.0, 0.0, y];
    }
    [x / sum, y / sum, y]
}

/// xyY -> XYZ.
///
/// Non-positive luminance or a zero `y` chromaticity gives XYZ `(0, 0, 0)`.
#[inline]
pub fn xyy_to_xyz(xyy: [f64; 3]) -> [f64; 3] {
    let [x, y, lum] = xyy;
    if lum <= 0.0 || y == 0.0 {
        return [0.0; 3];
    }
    [x * lum / y, lum, (1.0 - x - y) * lum / y]
}

/// Scales so the largest channel becomes 1, then clamps into [0, 1].
///
/// A zero maximum is treated as 1.
#[inline]
pub fn normalize_intensity(rgb: [f64; 3]) -> [f64; 3] {
    let v = Vec3::from_array(rgb);
    let mut max = v.max_element();
    if max == 0.0 {
        max = 1.0;
    }
    (v / max).clamp01().to_array()
}

/// Divides every channel by the channel sum (a zero sum is treated as 1).
#[inline]
pub fn normalize_sum(rgb: [f64; 3]) -> [f64; 3] {
    let v = Vec3::from_array(rgb);
    let mut sum = v.sum();
    if sum == 0.0 {
        sum = 1.0;
    }
    (v / sum).to_array()
}

/// Clamps every channel into [0, 1].
#[inline]
pub fn clamp01(rgb: [f64; 3]) -> [f64; 3] {
    Vec3::from_array(rgb).clamp01().to_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_to_d65() {
        let xyz = linear_rgb_to_xyz([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(xyz[0], 0.95047, epsilon = 1e-6);
        assert_abs_diff_eq!(xyz[1], 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(xyz[2], 1.08883, epsilon = 1e-6);
    }

    #[test]
    fn test_xyz_matrix_roundtrip() {
        let rgb = [0.25, 0.5, 0.75];
        let back = xyz_to_linear_rgb(linear_rgb_to_xyz(rgb));
        for c in 0..3 {
            assert_abs_diff_eq!(back[c], rgb[c], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_xyy_degenerate() {
        assert_eq!(xyy_to_xyz([0.3, 0.0, 50.0]), [0.0; 3]);
        assert_eq!(xyy_to_xyz([0.3, 0.3, 0.0]), [0.0; 3]);
        assert_eq!(xyy_to_xyz([0.3, 0.3, -1.0]), [0.0; 3]);
        assert_eq!(xyz_to_xyy([0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn test_xyy_roundtrip() {
        let xyz = [0.2, 0.3, 0.4];
        let back = xyy_to_xyz(xyz_to_xyy(xyz));
        for c in 0..3 {
            assert_abs_diff_eq!(back[c], xyz[c], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_normalize_intensity() {
        assert_eq!(normalize_intensity([0.5, 0.25, 0.0]), [1.0, 0.5, 0.0]);
        assert_eq!(normalize_intensity([2.0, 1.0, -1.0]), [1.0, 0.5, 0.0]);
        assert_eq!(normalize_intensity([0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn test_normalize_sum() {
        assert_eq!(normalize_sum([1.0, 1.0, 2.0]), [0.25, 0.25, 0.5]);
        assert_eq!(normalize_sum([0.0; 3]), [0.0; 3]);
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01([-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
    }
}

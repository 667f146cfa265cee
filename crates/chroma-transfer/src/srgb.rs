//! sRGB transfer function.
//!
//! A linear toe below the break point, a 2.4 power segment above it.
//! Inputs outside [0, 1] pass through unclamped; negatives stay on the toe.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear value at which encoding switches from the linear toe to the power curve.
pub const LINEAR_BREAK: f64 = 0.0031308;

/// Encoded value at which decoding switches from the linear toe to the power curve.
pub const ENCODED_BREAK: f64 = 0.04045;

/// Slope of the linear toe.
pub const TOE_SLOPE: f64 = 12.92;

const SCALE: f64 = 1.055;
const OFFSET: f64 = 0.055;
const GAMMA: f64 = 2.4;

/// Encoded sRGB to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= ENCODED_BREAK {
        v / TOE_SLOPE
    } else {
        ((v + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Linear light to encoded sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use chroma_transfer::srgb::oetf;
///
/// let encoded = oetf(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= LINEAR_BREAK {
        l * TOE_SLOPE
    } else {
        SCALE * l.powf(1.0 / GAMMA) - OFFSET
    }
}

/// [`eotf`] per channel.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// [`oetf`] per channel.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

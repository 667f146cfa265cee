//! Cubic-spline approximation of the Planckian locus.
//!
//! Kim et al. fit: x is a cubic in `1/T` with one polynomial up to 4000 K
//! and another above; y is a cubic in x with breaks at 2222 K and 4000 K.
//! Accurate within 1667-25000 K. Temperatures outside that band are
//! evaluated anyway.

use chroma_color::XyY;

// x(T), T <= 4000 K
const X_LOW: [f64; 4] = [-0.2661239e9, -0.2343589e6, 0.8776956e3, 0.179910];
// x(T), T > 4000 K
const X_HIGH: [f64; 4] = [-3.0258469e9, 2.1070379e6, 0.2226347e3, 0.240390];

// y(x), T <= 2222 K
const Y_LOW: [f64; 4] = [-1.1063814, -1.34811020, 2.18555832, -0.20219683];
// y(x), 2222 K < T <= 4000 K
const Y_MID: [f64; 4] = [-0.9549476, -1.37418593, 2.09137015, -0.16748867];
// y(x), T > 4000 K
const Y_HIGH: [f64; 4] = [3.0817580, -5.87338670, 3.75112997, -0.37001483];

/// `c[0]*v³ + c[1]*v² + c[2]*v + c[3]`
#[inline]
fn cubic(c: &[f64; 4], v: f64) -> f64 {
    ((c[0] * v + c[1]) * v + c[2]) * v + c[3]
}

/// Approximate blackbody chromaticity at `temperature` Kelvin.
///
/// Returns `xyY` with luminance fixed at 1.
///
/// # Example
///
/// ```rust
/// use chroma_cct::approximate_chromaticity;
///
/// let c = approximate_chromaticity(6500.0);
/// assert!((c.x() - 0.3135).abs() < 1e-3);
/// assert_eq!(c.luminance(), 1.0);
/// ```
pub fn approximate_chromaticity(temperature: f64) -> XyY {
    let x_coeffs = if temperature <= 4000.0 { &X_LOW } else { &X_HIGH };
    let x = cubic(x_coeffs, 1.0 / temperature);

    let y_coeffs = if temperature <= 2222.0 {
        &Y_LOW
    } else if temperature <= 4000.0 {
        &Y_MID
    } else {
        &Y_HIGH
    };
    let y = cubic(y_coeffs, x);

    XyY::new(x, y, 1.0)
}

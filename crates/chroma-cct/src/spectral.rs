//! Spectral integration against the color-matching functions.
//!
//! A blackbody's tristimulus values are the sum, over the tier's wavelength
//! grid, of the matching-function weights times the spectral radiance:
//!
//! ```text
//! X = Σ x̄(λ)·L(λ, T)      (same for Y, Z)
//! X *= step · 1e-9 / T
//! ```
//!
//! The result is returned as xyY.

use chroma_cie::{Cie1931, MatchingFunctions, Precision};
use chroma_color::{ColorConvert, XyY, Xyz};
use tracing::trace;

use crate::planck::planck_radiance;

/// Integrates `radiance(λ_nm)` over the grid of `precision`.
fn integrate<M, F>(provider: &M, temperature: f64, precision: Precision, radiance: F) -> XyY
where
    M: MatchingFunctions + ?Sized,
    F: Fn(f64) -> f64,
{
    let tier = provider.tier(precision);
    trace!(
        temperature,
        ?precision,
        samples = tier.sample_count,
        step = tier.step,
        "blackbody integration"
    );

    let mut sum = [0.0f64; 3];
    for wavelength in tier.wavelengths() {
        let weights = provider.at(wavelength, precision);
        let l = radiance(wavelength);
        for (s, w) in sum.iter_mut().zip(weights) {
            *s += w * l;
        }
    }

    let scale = tier.step * 1e-9 / temperature;
    let xyz = Xyz::from(sum.map(|v| v * scale));
    trace!(x = xyz.x(), y = xyz.y(), z = xyz.z(), "integrated tristimulus");
    xyz.to_xyy()
}

/// Blackbody chromaticity by integrating Planck's law over the CIE 1931
/// observer.
///
/// The returned luminance is the integrated `Y`, not normalized.
///
/// ```rust
/// use chroma_cct::analytical_chromaticity;
/// use chroma_cie::Precision;
///
/// let c = analytical_chromaticity(6500.0, Precision::Fine);
/// assert!((c.x() - 0.3136).abs() < 1e-3);
/// ```
pub fn analytical_chromaticity(temperature: f64, precision: Precision) -> XyY {
    analytical_chromaticity_with(&Cie1931, temperature, precision)
}

/// [`analytical_chromaticity`] with a caller-supplied table provider.
pub fn analytical_chromaticity_with<M>(provider: &M, temperature: f64, precision: Precision) -> XyY
where
    M: MatchingFunctions + ?Sized,
{
    integrate(provider, temperature, precision, |nm| planck_radiance(nm * 1e-9, temperature))
}

/// Chromaticity of an emitter described by a custom spectral radiance.
///
/// `radiance` receives the wavelength in **nanometers** and the temperature
/// in Kelvin. Non-finite radiance propagates into the result unchecked.
///
/// ```rust
/// use chroma_cct::{chromaticity_with_radiance, planck_radiance};
/// use chroma_cie::Precision;
///
/// // An equal-energy emitter sits at the center of the diagram
/// let flat = chromaticity_with_radiance(5000.0, |_, _| 1.0, Precision::Fine);
/// assert!((flat.x() - 1.0 / 3.0).abs() < 1e-3);
/// ```
pub fn chromaticity_with_radiance<F>(temperature: f64, radiance: F, precision: Precision) -> XyY
where
    F: Fn(f64, f64) -> f64,
{
    chromaticity_with_radiance_with(&Cie1931, temperature, radiance, precision)
}

/// [`chromaticity_with_radiance`] with a caller-supplied table provider.
pub fn chromaticity_with_radiance_with<M, F>(
    provider: &M,
    temperature: f64,
    radiance: F,
    precision: Precision,
) -> XyY
where
    M: MatchingFunctions + ?Sized,
    F: Fn(f64, f64) -> f64,
{
    integrate(provider, temperature, precision, |nm| radiance(nm, temperature))
}

/// CIE 1931 tristimulus weights of a single wavelength (nanometers).
///
/// Always uses the 1 nm tier. Outside 380-780 nm the result is zero.
pub fn wavelength_to_xyz(wavelength: f64) -> Xyz {
    Xyz::from(Cie1931.at(wavelength, Precision::Fine))
}

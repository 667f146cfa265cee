//! Planck's law.

/// Planck constant (J·s), CODATA 2018.
pub const PLANCK: f64 = 6.62607015e-34;
/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299792458.0;
/// Boltzmann constant (J/K).
pub const BOLTZMANN: f64 = 1.380649e-23;

/// First radiation constant, `2π·h·c²`.
pub const C1: f64 = 2.0 * std::f64::consts::PI * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT;
/// Second radiation constant, `h·c/k`.
pub const C2: f64 = PLANCK * SPEED_OF_LIGHT / BOLTZMANN;

/// Spectral radiance of a blackbody.
///
/// `wavelength` is in meters, `temperature` in Kelvin:
///
/// ```text
/// L(λ, T) = c1 / (λ⁵ · (exp(c2 / (λ·T)) - 1))
/// ```
///
/// Use this to build a custom radiance function for
/// [`chromaticity_with_radiance`](crate::chromaticity_with_radiance), which
/// passes nanometers:
///
/// ```rust
/// use chroma_cct::planck_radiance;
///
/// let scaled = |nm: f64, t: f64| 2.0 * planck_radiance(nm * 1e-9, t);
/// assert!(scaled(555.0, 6500.0) > 0.0);
/// ```
#[inline]
pub fn planck_radiance(wavelength: f64, temperature: f64) -> f64 {
    C1 / (wavelength.powi(5) * ((C2 / (wavelength * temperature)).exp() - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_second_constant() {
        assert_relative_eq!(C2, 1.438776877e-2, max_relative = 1e-9);
    }

    #[test]
    fn test_reference_radiance() {
        assert_relative_eq!(planck_radiance(555e-9, 6500.0), 1.3416587973663e14, max_relative = 1e-9);
        assert_relative_eq!(planck_radiance(500e-9, 5000.0), 3.803586101440e13, max_relative = 1e-9);
    }

    #[test]
    fn test_hotter_is_brighter() {
        let wl = 600e-9;
        assert!(planck_radiance(wl, 6000.0) > planck_radiance(wl, 3000.0));
    }
}

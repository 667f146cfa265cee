//! Chromaticity -> correlated color temperature.
//!
//! Hernández-Andrés et al. exponential fit. Two constant sets cover the
//! range: the first for roughly 3000-50000 K, the second for higher
//! temperatures. The second set is used when the first yields 50000 K or
//! more. Results are never clamped and input is never validated.

use chroma_color::XyY;
use tracing::debug;

/// Estimates at or above this use the high-temperature constants.
pub const HIGH_RANGE_THRESHOLD: f64 = 50_000.0;

/// One constant set of the fit.
struct Branch {
    xe: f64,
    ye: f64,
    a0: f64,
    a1: f64,
    t1: f64,
    a2: f64,
    t2: f64,
}

const BRANCHES: [Branch; 2] = [
    Branch {
        xe: 0.3366,
        ye: 0.1735,
        a0: -949.86315,
        a1: 6253.80338,
        t1: 0.92159,
        a2: 28.70599,
        t2: 0.20039,
    },
    Branch {
        xe: 0.3356,
        ye: 0.1691,
        a0: 36284.48953,
        a1: 0.00228,
        t1: 0.07861,
        a2: 5.4535e-36,
        t2: 0.01543,
    },
];

// Third exponential term, shared by both branches
const A3: f64 = 0.00004;
const T3: f64 = 0.07125;

impl Branch {
    fn eval(&self, x: f64, y: f64) -> f64 {
        let n = (x - self.xe) / (y - self.ye);
        self.a0 + self.a1 * (-n / self.t1).exp() + self.a2 * (-n / self.t2).exp() + A3 * (-n / T3).exp()
    }
}

/// Estimates the CCT in Kelvin of a chromaticity. Luminance is ignored.
///
/// Most accurate for 3000-800000 K. Points far from the Planckian locus
/// still produce a number; sanity-checking it is up to the caller.
///
/// ```rust
/// use chroma_cct::estimate_cct;
/// use chroma_color::XyY;
///
/// let t = estimate_cct(&XyY::new(0.3127, 0.3290, 1.0));
/// assert!((t - 6500.0).abs() < 10.0);
/// ```
pub fn estimate_cct(chromaticity: &XyY) -> f64 {
    let (x, y) = (chromaticity.x(), chromaticity.y());
    let t = BRANCHES[0].eval(x, y);
    if t >= HIGH_RANGE_THRESHOLD {
        let high = BRANCHES[1].eval(x, y);
        debug!(x, y, low = t, high, "CCT above threshold, using high-temperature constants");
        high
    } else {
        t
    }
}

/// CCT as a derived property of chromaticity.
pub trait CorrelatedColorTemperature {
    /// Estimated correlated color temperature in Kelvin.
    fn cct(&self) -> f64;
}

impl CorrelatedColorTemperature for XyY {
    #[inline]
    fn cct(&self) -> f64 {
        estimate_cct(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_d65() {
        assert_relative_eq!(estimate_cct(&XyY::new(0.3127, 0.3290, 1.0)), 6500.742, max_relative = 1e-5);
    }

    #[test]
    fn test_luminance_ignored() {
        let a = XyY::new(0.35, 0.36, 1.0);
        let b = XyY::new(0.35, 0.36, 250.0);
        assert_eq!(a.cct(), b.cct());
    }

    #[test]
    fn test_high_branch() {
        let c = XyY::new(0.282, 0.212, 1.0);
        let low = BRANCHES[0].eval(c.x(), c.y());
        assert!(low >= HIGH_RANGE_THRESHOLD);
        let t = estimate_cct(&c);
        assert_eq!(t, BRANCHES[1].eval(c.x(), c.y()));
        assert!(t < low);
        assert_relative_eq!(t, 56156.45, max_relative = 1e-5);
    }

    #[test]
    fn test_epicenter_stays_nan() {
        // n = 0/0 at the branch-0 epicenter; NaN must not select branch 1
        let t = estimate_cct(&XyY::new(0.3366, 0.1735, 1.0));
        assert!(t.is_nan());
    }

    #[test]
    fn test_no_clamping() {
        // Far off the locus the fit goes negative and is returned as is
        let t = estimate_cct(&XyY::new(0.6, 0.2, 1.0));
        assert!(t < 0.0);
    }
}

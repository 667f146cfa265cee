//! Interpolation.

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`, extrapolated
/// outside [0, 1].
///
/// ```rust
/// use chroma_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

//! Color triplets as 3D vectors.
//!
//! ```rust
//! use chroma_math::Vec3;
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25) * 2.0;
//! assert_eq!(rgb.clamp01(), Vec3::new(1.0, 1.0, 0.5));
//! ```

use std::ops::{Add, Div, Mul, Sub};

/// Three `f64` components: R, G, B or X, Y, Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// First component (R or X).
    pub x: f64,
    /// Second component (G or Y).
    pub y: f64,
    /// Third component (B or Z).
    pub z: f64,
}

impl Vec3 {
    /// `(0, 0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from `[x, y, z]`.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Returns `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `x + y + z`
    #[inline]
    pub fn sum(self) -> f64 {
        self.x + self.y + self.z
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Clamps each component to [0, 1]. NaN stays NaN.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    /// Largest component.
    #[inline]
    pub fn max_element(self) -> f64 {
        self.x.max(self.y).max(self.z)
    }

    /// Converts to glam `DVec3`.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::from_array(self.to_array())
    }

    /// Creates from glam `DVec3`.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::from_array(v.to_array())
    }
}

// Vec3 + Vec3
impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() + rhs.to_glam())
    }
}

// Vec3 - Vec3
impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() - rhs.to_glam())
    }
}

// Vec3 * f64
impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        self.map(|c| c * s)
    }
}

// Vec3 / f64
impl Div<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn div(self, s: f64) -> Self {
        self.map(|c| c / s)
    }
}

//! 3x3 matrices for RGB <-> XYZ transforms.
//!
//! Rows are stored as [`Vec3`], and matrices act on column vectors:
//! `xyz = M * rgb` takes the dot product of each row with `rgb`.
//! Inversion and products go through glam's `DMat3`.

use crate::Vec3;
use std::ops::Mul;

/// A row-major 3x3 matrix.
///
/// [`Mat3::from_rows`] is `const`, so fixed conversion matrices can live in
/// `const` items.
///
/// ```rust
/// use chroma_math::{Mat3, Vec3};
///
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Mat3::IDENTITY * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    rows: [Vec3; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self {
            rows: [
                Vec3::from_array(rows[0]),
                Vec3::from_array(rows[1]),
                Vec3::from_array(rows[2]),
            ],
        }
    }

    /// Creates a matrix whose columns are `c0`, `c1`, `c2`.
    #[inline]
    pub fn from_col_vecs(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self::from_glam(glam::DMat3::from_cols(c0.to_glam(), c1.to_glam(), c2.to_glam()))
    }

    /// Row `i` (panics if `i > 2`).
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        self.rows[i]
    }

    /// Inverse, or `None` when the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let m = self.to_glam();
        if m.determinant().abs() < 1e-15 {
            return None;
        }
        Some(Self::from_glam(m.inverse()))
    }

    /// Largest absolute element-wise difference to another matrix.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| (*a - *b).map(f64::abs).max_element())
            .fold(0.0, f64::max)
    }

    /// Converts to glam's column-major `DMat3`.
    #[inline]
    pub fn to_glam(&self) -> glam::DMat3 {
        glam::DMat3::from_cols(self.rows[0].to_glam(), self.rows[1].to_glam(), self.rows[2].to_glam())
            .transpose()
    }

    /// Creates from glam's column-major `DMat3`.
    #[inline]
    pub fn from_glam(m: glam::DMat3) -> Self {
        let t = m.transpose();
        Self {
            rows: [Vec3::from_glam(t.x_axis), Vec3::from_glam(t.y_axis), Vec3::from_glam(t.z_axis)],
        }
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        Vec3::new(self.rows[0].dot(v), self.rows[1].dot(v), self.rows[2].dot(v))
    }
}

// Mat3 * Mat3
impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() * rhs.to_glam())
    }
}

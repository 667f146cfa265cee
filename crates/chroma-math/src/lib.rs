//! # chroma-math
//!
//! Math utilities for colorimetric conversions.
//!
//! - [`Mat3`] - 3x3 matrices for RGB <-> XYZ transforms
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - [`lerp`] - linear interpolation between table samples
//!
//! All arithmetic is `f64`. [`Mat3`] stores rows and multiplies column
//! vectors (`v' = M * v`); inversion and matrix products are delegated to
//! glam's `DMat3`.
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! let swap_rb = Mat3::from_rows([[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
//! let v = swap_rb * Vec3::new(0.1, 0.2, 0.3);
//! assert_eq!(v, Vec3::new(0.3, 0.2, 0.1));
//! assert_eq!(swap_rb.inverse(), Some(swap_rb));
//! ```
//!
//! # Used By
//!
//! - `chroma-primaries` - RGB/XYZ matrix constants and derivation
//! - `chroma-cie` - color-matching table interpolation
//! - `chroma-color` - color space conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;

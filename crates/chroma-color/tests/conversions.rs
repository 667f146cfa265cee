//! Conversion behaviour across all four color spaces.

use approx::assert_abs_diff_eq;
use chroma_color::prelude::*;

/// Linear RGB samples on a coarse grid, plus a few out-of-gamut values.
fn rgb_samples() -> Vec<[f64; 3]> {
    let mut out = Vec::new();
    for r in 0..=4 {
        for g in 0..=4 {
            for b in 0..=4 {
                out.push([r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0]);
            }
        }
    }
    out.push([1.5, 0.2, 0.1]);
    out.push([0.001, 0.002, 0.0005]);
    out
}

fn assert_triplet_eq(a: [f64; 3], b: [f64; 3], eps: f64) {
    for c in 0..3 {
        assert_abs_diff_eq!(a[c], b[c], epsilon = eps);
    }
}

#[test]
fn linear_srgb_roundtrip() {
    for rgb in rgb_samples() {
        let c = LinearRgb::from(rgb);
        let back = c.to_srgb().to_linear_rgb();
        assert_triplet_eq(back.to_array(), rgb, 1e-9);
    }
}

#[test]
fn srgb_linear_roundtrip() {
    for i in 0..=20 {
        let v = i as f64 / 20.0;
        let c = Srgb::new(v, 1.0 - v, 0.5);
        let back = c.to_linear_rgb().to_srgb();
        assert_triplet_eq(back.to_array(), c.to_array(), 1e-9);
    }
}

#[test]
fn xyz_xyy_roundtrip() {
    for rgb in rgb_samples() {
        let xyz = LinearRgb::from(rgb).to_xyz();
        if xyz.sum() == 0.0 {
            continue;
        }
        let back = xyz.to_xyy().to_xyz();
        assert_triplet_eq(back.to_array(), xyz.to_array(), 1e-12);
    }
}

#[test]
fn linear_xyz_roundtrip() {
    // The fixed matrices are inverse to about 1e-7
    for rgb in rgb_samples() {
        let back = LinearRgb::from(rgb).to_xyz().to_linear_rgb();
        assert_triplet_eq(back.to_array(), rgb, 1e-6);
    }
}

#[test]
fn every_space_reaches_every_other() {
    let start = Srgb::new(0.8, 0.4, 0.2);
    let via_xyy = start.to_xyy().to_srgb();
    let via_xyz = start.to_xyz().to_srgb();
    assert_triplet_eq(via_xyy.to_array(), start.to_array(), 1e-6);
    assert_triplet_eq(via_xyz.to_array(), start.to_array(), 1e-6);
}

#[test]
fn identity_conversions() {
    let xyz = Xyz::new(0.3, 0.2, 0.1);
    let lin = LinearRgb::new(0.3, 0.2, 0.1);
    let srgb = Srgb::new(0.3, 0.2, 0.1);
    let xyy = XyY::new(0.3, 0.2, 0.1);

    assert_eq!(xyz.to_xyz(), xyz);
    assert_eq!(lin.to_linear_rgb(), lin);
    assert_eq!(srgb.to_srgb(), srgb);
    assert_eq!(xyy.to_xyy(), xyy);
}

#[test]
fn white_is_d65() {
    let xyy = LinearRgb::new(1.0, 1.0, 1.0).to_xyy();
    assert_abs_diff_eq!(xyy.x(), 0.3127, epsilon = 1e-4);
    assert_abs_diff_eq!(xyy.y(), 0.3290, epsilon = 1e-4);
    assert_abs_diff_eq!(xyy.luminance(), 1.0, epsilon = 1e-6);
}

#[test]
fn degenerate_xyy() {
    assert_eq!(XyY::new(0.3, 0.0, 50.0).to_xyz(), Xyz::new(0.0, 0.0, 0.0));
    assert_eq!(XyY::new(0.3, 0.3, -2.0).to_xyz(), Xyz::new(0.0, 0.0, 0.0));
}

#[test]
fn black_has_no_chromaticity() {
    let xyy = Xyz::default().to_xyy();
    assert_eq!(xyy, XyY::new(0.0, 0.0, 0.0));
    assert_eq!(xyy.to_xyz(), Xyz::default());
}

#[test]
fn packed_encoding() {
    assert_eq!(LinearRgb::new(1.0, 0.0, 0.0).to_argb32(), 0xFFFF_0000);
    assert_eq!(LinearRgb::new(0.0, 0.0, 0.0).to_argb32(), 0xFF00_0000);
    assert_eq!(Srgb::new(0.0, 0.0, 0.0).to_argb32(), 0xFF00_0000);
    assert_eq!(Xyz::default().to_argb32(), 0xFF00_0000);
    assert_eq!(XyY::new(0.3, 0.0, 1.0).to_argb32(), 0xFF00_0000);
}

#[test]
fn packed_white_through_xyz() {
    let white = LinearRgb::new(1.0, 1.0, 1.0).to_xyz();
    let argb = white.to_argb32();
    assert_eq!(argb >> 24, 0xFF);
    // Each channel lands at 254 or 255 after truncation
    for shift in [16, 8, 0] {
        assert!(((argb >> shift) & 0xFF) >= 254);
    }
}

#[test]
fn packed_never_wraps() {
    let hot = LinearRgb::new(1e6, -1e6, f64::INFINITY);
    let argb = hot.to_argb32();
    assert_eq!(argb >> 24, 0xFF);
}

#[test]
fn unpack_then_pack_full_channels() {
    for argb in [0xFFFF_FFFFu32, 0xFFFF_0000, 0xFF00_FF00, 0xFF00_00FF, 0xFFFF_00FF] {
        assert_eq!(Srgb::from_argb32(argb).to_argb32(), argb);
        assert_eq!(LinearRgb::from_argb32(argb).to_argb32(), argb);
    }
}

#[test]
fn normalization_helpers_match_across_rgb_types() {
    let a = [0.6, 0.3, 0.1];
    let lin = LinearRgb::from(a);
    let srgb = Srgb::from(a);
    assert_eq!(lin.normalized_intensity().to_array(), srgb.normalized_intensity().to_array());
    assert_eq!(lin.normalized_rgb().to_array(), srgb.normalized_rgb().to_array());
    assert_eq!(lin.clamped().to_array(), srgb.clamped().to_array());

    assert_eq!(LinearRgb::default().normalized_intensity(), LinearRgb::default());
    assert_eq!(Srgb::default().normalized_rgb(), Srgb::default());
}

#[test]
fn parse_and_build() {
    let parts = chroma_color::parse_components("0.2, 0.4, 0.6").unwrap();
    let c = AnyColor::from_components("linear".parse().unwrap(), &parts).unwrap();
    assert_eq!(c, AnyColor::LinearRgb(LinearRgb::new(0.2, 0.4, 0.6)));
}

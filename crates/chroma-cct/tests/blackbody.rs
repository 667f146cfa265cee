//! Blackbody locus and CCT validation.
//!
//! Reference chromaticities were precomputed in double precision from the
//! same fit coefficients and CIE 1931 2° tables.

use approx::assert_abs_diff_eq;
use chroma_cct::{
    analytical_chromaticity, approximate_chromaticity, chromaticity_with_radiance, estimate_cct,
    planck_radiance, wavelength_to_xyz, CorrelatedColorTemperature, Precision,
};
use chroma_color::{ColorConvert, XyY, Xyz};

/// (T, x, y) from the cubic fit.
const APPROXIMATE_REFERENCE: &[(f64, f64, f64)] = &[
    (1667.0, 0.564638304615, 0.402887143476),
    (2000.0, 0.526902587500, 0.413264884758),
    (2222.0, 0.503187533038, 0.415250933114),
    (2223.0, 0.503085261867, 0.415257732371),
    (4000.0, 0.380528282812, 0.376733530961),
    (4001.0, 0.380415395917, 0.376657868529),
    (6500.0, 0.313494107510, 0.323662539120),
    (10000.0, 0.280698002100, 0.288305629447),
    (25000.0, 0.252472994438, 0.252254791244),
];

/// (T, x, y) integrated on the 1 nm grid.
const ANALYTICAL_FINE_REFERENCE: &[(f64, f64, f64)] = &[
    (2000.0, 0.526643493256, 0.413298637428),
    (3000.0, 0.436924913009, 0.404076336782),
    (4000.0, 0.380451265132, 0.376768684089),
    (5000.0, 0.345122805552, 0.351648754159),
    (6500.0, 0.313554759720, 0.323690127673),
    (10000.0, 0.280667585320, 0.288376435170),
];

/// (T, x, y) integrated on the 5 nm grid.
const ANALYTICAL_COARSE_REFERENCE: &[(f64, f64, f64)] = &[
    (2000.0, 0.526674372557, 0.413300386438),
    (4000.0, 0.380448141239, 0.376763755031),
    (6500.0, 0.313544291520, 0.323670330159),
    (10000.0, 0.280657630360, 0.288351142537),
];

#[test]
fn approximate_matches_reference() {
    for &(t, x, y) in APPROXIMATE_REFERENCE {
        let c = approximate_chromaticity(t);
        assert_abs_diff_eq!(c.x(), x, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y(), y, epsilon = 1e-9);
        assert_eq!(c.luminance(), 1.0);
    }
}

#[test]
fn analytical_fine_matches_reference() {
    for &(t, x, y) in ANALYTICAL_FINE_REFERENCE {
        let c = analytical_chromaticity(t, Precision::Fine);
        assert_abs_diff_eq!(c.x(), x, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y(), y, epsilon = 1e-9);
    }
}

#[test]
fn analytical_coarse_matches_reference() {
    for &(t, x, y) in ANALYTICAL_COARSE_REFERENCE {
        let c = analytical_chromaticity(t, Precision::Coarse);
        assert_abs_diff_eq!(c.x(), x, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y(), y, epsilon = 1e-9);
    }
}

#[test]
fn tiers_agree_closely() {
    for t in [2500.0, 5500.0, 9000.0] {
        let fine = analytical_chromaticity(t, Precision::Fine);
        let coarse = analytical_chromaticity(t, Precision::Coarse);
        assert_abs_diff_eq!(fine.x(), coarse.x(), epsilon = 1e-4);
        assert_abs_diff_eq!(fine.y(), coarse.y(), epsilon = 1e-4);
    }
}

#[test]
fn methods_agree_on_locus() {
    for t in [3000.0, 5000.0, 8000.0] {
        let a = approximate_chromaticity(t);
        let b = analytical_chromaticity(t, Precision::Fine);
        assert_abs_diff_eq!(a.x(), b.x(), epsilon = 2e-3);
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = 2e-3);
    }
}

#[test]
fn d65_like_neutral_at_6500() {
    let c = analytical_chromaticity(6500.0, Precision::Fine);
    assert!((0.31..=0.32).contains(&c.x()));
    assert!((0.32..=0.33).contains(&c.y()));
}

#[test]
fn temperature_roundtrip() {
    for t in [4000.0, 5000.0, 6500.0, 10000.0] {
        let estimated = analytical_chromaticity(t, Precision::Fine).cct();
        assert!((estimated - t).abs() / t < 0.02, "{t} K -> {estimated} K");
    }
}

#[test]
fn hotter_means_more_luminance() {
    let cool = analytical_chromaticity(3000.0, Precision::Coarse);
    let hot = analytical_chromaticity(6000.0, Precision::Coarse);
    assert!(hot.luminance() > cool.luminance());
}

#[test]
fn custom_radiance_equals_builtin_planck() {
    for precision in [Precision::Coarse, Precision::Fine] {
        let builtin = analytical_chromaticity(4500.0, precision);
        let custom = chromaticity_with_radiance(4500.0, |nm, t| planck_radiance(nm * 1e-9, t), precision);
        assert_eq!(builtin, custom);
    }
}

#[test]
fn equal_energy_is_white_point_e() {
    let c = chromaticity_with_radiance(1.0, |_, _| 1.0, Precision::Coarse);
    assert_abs_diff_eq!(c.x(), 1.0 / 3.0, epsilon = 1e-4);
    assert_abs_diff_eq!(c.y(), 1.0 / 3.0, epsilon = 1e-4);
}

#[test]
fn non_finite_radiance_propagates() {
    let c = chromaticity_with_radiance(5000.0, |_, _| f64::NAN, Precision::Coarse);
    assert!(c.x().is_nan());
}

#[test]
fn estimate_high_branch() {
    let c = XyY::new(0.282, 0.212, 1.0);
    let t = estimate_cct(&c);
    assert_abs_diff_eq!(t, 56156.449, epsilon = 0.01);
    assert!(t < 79826.0);
}

#[test]
fn wavelength_lookup() {
    assert_eq!(wavelength_to_xyz(380.0), Xyz::new(0.001368, 0.000039, 0.006450));
    assert_eq!(wavelength_to_xyz(600.0), Xyz::new(1.0622, 0.631, 0.0008));
    assert_eq!(wavelength_to_xyz(781.0), Xyz::default());

    let between = wavelength_to_xyz(552.0);
    assert_abs_diff_eq!(between.y(), 0.99697, epsilon = 1e-12);
}

#[test]
fn spectral_colors_are_saturated() {
    // 450 nm is deep blue, far from the white point
    let xyy = wavelength_to_xyz(450.0).to_xyy();
    assert!(xyy.x() < 0.2 && xyy.y() < 0.1);
}

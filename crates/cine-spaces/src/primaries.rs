//! Colour primaries and RGB-XYZ matrix derivation.
//!
//! A colourspace is defined by the CIE xy chromaticities of its three
//! primaries and its whitepoint. [`normalised_primary_matrix`] turns that
//! definition into the 3x3 matrix mapping RGB tristimulus values to CIE
//! XYZ, scaled so equal RGB energy reproduces the whitepoint exactly.
//!
//! # Convention
//!
//! Whitepoint luminance is normalized to Y = 1 throughout. Matrices are
//! row-major with column vectors (`m * rgb`).
//!
//! # Usage
//!
//! ```rust
//! use cine_math::Vec3;
//! use cine_spaces::{normalised_primary_matrix, Primaries};
//!
//! let p = Primaries {
//!     r: (0.6400, 0.3300),
//!     g: (0.3000, 0.6000),
//!     b: (0.1500, 0.0600),
//!     w: (0.3127, 0.3290),
//!     name: "sRGB",
//! };
//!
//! let m = normalised_primary_matrix(&p).unwrap();
//! let white = m * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-10);
//! ```

use cine_core::{Error, Result};
use cine_math::{Mat3, Vec3};

/// RGB colourspace primaries definition.
///
/// Defines a colourspace by its three primary colours (R, G, B) and
/// whitepoint, all specified as CIE xy chromaticity coordinates.
///
/// Chromaticities slightly outside [0, 1] are valid: wide-gamut spaces use
/// imaginary primaries (DCI-P3+'s blue primary has a negative
/// y-coordinate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// Whitepoint (x, y) chromaticity
    pub w: (f64, f64),
    /// Colourspace name
    pub name: &'static str,
}

impl Primaries {
    /// Assembles a definition from a primary triple and a whitepoint.
    ///
    /// The triple is ordered `[red, green, blue]`, matching the dataset
    /// constants in the `dci_p3` module.
    pub const fn from_chromaticities(
        name: &'static str,
        primaries: [(f64, f64); 3],
        whitepoint: (f64, f64),
    ) -> Self {
        Self {
            r: primaries[0],
            g: primaries[1],
            b: primaries[2],
            w: whitepoint,
            name,
        }
    }

    /// Whitepoint as XYZ (Y = 1).
    ///
    /// # Errors
    ///
    /// [`Error::DegeneratePrimary`] if the whitepoint's y chromaticity is
    /// zero.
    #[inline]
    pub fn white_xyz(&self) -> Result<Vec3> {
        xy_to_xyz("whitepoint", self.w)
    }
}

/// Converts an xy chromaticity to XYZ with unit luminance (Y = 1).
///
/// `label` names the coordinate for error reporting.
fn xy_to_xyz(label: &'static str, (x, y): (f64, f64)) -> Result<Vec3> {
    if y == 0.0 {
        return Err(Error::degenerate_primary(label, x, y));
    }
    Ok(Vec3::new(x / y, 1.0, (1.0 - x - y) / y))
}

/// Computes the normalised primary matrix (RGB to XYZ) for a set of
/// primaries.
///
/// # Algorithm
///
/// 1. Convert the xy chromaticities of the primaries and whitepoint to
///    XYZ with Y = 1
/// 2. Solve for the scaling coefficients mapping equal RGB energy onto
///    the whitepoint
/// 3. Scale the primary columns by those coefficients
///
/// The result is a pure function of the input chromaticities: deriving
/// twice with identical inputs is bit-identical.
///
/// # Errors
///
/// - [`Error::DegeneratePrimary`] if any primary or the whitepoint has a
///   zero y chromaticity
/// - [`Error::SingularMatrix`] if the primaries are collinear or
///   duplicated
pub fn normalised_primary_matrix(primaries: &Primaries) -> Result<Mat3> {
    let r_xyz = xy_to_xyz("red", primaries.r)?;
    let g_xyz = xy_to_xyz("green", primaries.g)?;
    let b_xyz = xy_to_xyz("blue", primaries.b)?;
    let w_xyz = primaries.white_xyz()?;

    // Primaries as columns; solve P * c = W for the scaling coefficients
    let p = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let p_inv = p
        .inverse()
        .ok_or_else(|| Error::singular_matrix("solving whitepoint scaling coefficients"))?;
    let c = p_inv * w_xyz;

    Ok(Mat3::from_col_vecs(r_xyz * c.x, g_xyz * c.y, b_xyz * c.z))
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`normalised_primary_matrix`].
///
/// # Errors
///
/// Same conditions as [`normalised_primary_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Result<Mat3> {
    normalised_primary_matrix(primaries)?
        .inverse()
        .ok_or_else(|| Error::singular_matrix("inverting the normalised primary matrix"))
}

/// Computes a matrix converting one RGB colourspace to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. No
/// chromatic adaptation is applied; if the whitepoints differ the result
/// maps tristimulus values, not appearance.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Result<Mat3> {
    let src_to_xyz = normalised_primary_matrix(src)?;
    let xyz_to_dst = xyz_to_rgb_matrix(dst)?;
    Ok(xyz_to_dst * src_to_xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const SRGB: Primaries = Primaries {
        r: (0.6400, 0.3300),
        g: (0.3000, 0.6000),
        b: (0.1500, 0.0600),
        w: (0.3127, 0.3290),
        name: "sRGB",
    };

    #[test]
    fn test_white_maps_to_whitepoint() {
        let m = normalised_primary_matrix(&SRGB).unwrap();
        let white = m * Vec3::ONE;
        let expected = SRGB.white_xyz().unwrap();

        assert_abs_diff_eq!(white.x, expected.x, epsilon = 1e-10);
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(white.z, expected.z, epsilon = 1e-10);
    }

    #[test]
    fn test_known_srgb_matrix() {
        // Reference values derived from the sRGB chromaticities with the
        // D65 whitepoint taken as xy (0.3127, 0.3290). The IEC 61966-2-1
        // constants (0.4124564, ...) use the rounded XYZ whitepoint
        // (0.95047, 1, 1.08883) instead and differ in the 5th decimal.
        let m = normalised_primary_matrix(&SRGB).unwrap();
        assert_abs_diff_eq!(m.m[0][0], 0.4123908, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[1][0], 0.2126390, epsilon = 1e-6);
        assert_abs_diff_eq!(m.m[2][2], 0.9505322, epsilon = 1e-6);
    }

    #[test]
    fn test_columns_are_scaled_primaries() {
        // Each column must be proportional to the unit-luminance XYZ of
        // its primary
        let m = normalised_primary_matrix(&SRGB).unwrap();
        for (i, xy) in [SRGB.r, SRGB.g, SRGB.b].into_iter().enumerate() {
            let unit = xy_to_xyz("test", xy).unwrap();
            let col = m.col(i);
            let scale = col.y / unit.y;
            assert_abs_diff_eq!(col.x, unit.x * scale, epsilon = 1e-12);
            assert_abs_diff_eq!(col.z, unit.z * scale, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        let to_xyz = normalised_primary_matrix(&SRGB).unwrap();
        let to_rgb = xyz_to_rgb_matrix(&SRGB).unwrap();
        let result = to_rgb * to_xyz;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(result.m[i][j], expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_rgb_to_rgb_self_is_identity() {
        let m = rgb_to_rgb_matrix(&SRGB, &SRGB).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(m.m[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let a = normalised_primary_matrix(&SRGB).unwrap();
        let b = normalised_primary_matrix(&SRGB).unwrap();
        // Bit-identical, not merely close
        assert_eq!(a.m, b.m);
    }

    #[test]
    fn test_degenerate_primary() {
        let mut p = SRGB;
        p.b = (0.15, 0.0);
        let err = normalised_primary_matrix(&p).unwrap_err();
        match err {
            cine_core::Error::DegeneratePrimary { label, .. } => assert_eq!(label, "blue"),
            other => panic!("expected DegeneratePrimary, got {other:?}"),
        }
    }

    #[test]
    fn test_collinear_primaries_are_singular() {
        let mut p = SRGB;
        p.g = p.r;
        let err = normalised_primary_matrix(&p).unwrap_err();
        assert!(matches!(err, cine_core::Error::SingularMatrix { .. }));
    }

    #[test]
    fn test_negative_y_primary_is_valid() {
        // DCI-P3+ blue primary sits below the spectral locus
        let p = Primaries {
            r: (0.7400, 0.2700),
            g: (0.2200, 0.7800),
            b: (0.0900, -0.0900),
            w: (0.3140, 0.3510),
            name: "DCI-P3+",
        };
        let m = normalised_primary_matrix(&p).unwrap();
        assert!(m.is_finite());
        let white = m * Vec3::ONE;
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-10);
    }
}

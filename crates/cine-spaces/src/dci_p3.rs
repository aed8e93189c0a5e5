//! DCI-P3 and DCI-P3+ colourspace datasets.
//!
//! DCI-P3 is the Digital Cinema Initiatives projection colourspace;
//! DCI-P3+ widens it with imaginary primaries (the blue primary sits
//! below the spectral locus). Both share the "DCI-P3" whitepoint and the
//! DCI 12-bit gamma 2.6 transfer functions.
//!
//! References: DCI Digital Cinema System Specification v1.1 (2007);
//! HP, "Understanding the HP DreamColor LP2480zx DCI-P3 Emulation Color
//! Space" (2009); Canon EOS C500 firmware notes (2014) for DCI-P3+.
//!
//! # Usage
//!
//! ```rust
//! use cine_math::Vec3;
//! use cine_spaces::{dci_p3, dci_p3_plus};
//!
//! let white = dci_p3().to_xyz(Vec3::ONE);
//! assert!((white.y - 1.0).abs() < 1e-10);
//!
//! // Same whitepoint, wider primaries
//! assert_eq!(dci_p3().whitepoint(), dci_p3_plus().whitepoint());
//! ```

use crate::{ColourspaceRegistry, RgbColourspace};
use cine_colorimetry::{whitepoint, Observer};
use cine_core::Result;
use cine_transfer::dci::{eotf_dci_p3, oetf_dci_p3};

/// DCI-P3 colourspace primaries, ordered `[red, green, blue]`.
pub const DCI_P3_PRIMARIES: [(f64, f64); 3] = [(0.6800, 0.3200), (0.2650, 0.6900), (0.1500, 0.0600)];

/// DCI-P3+ colourspace primaries, ordered `[red, green, blue]`.
///
/// The blue primary's negative y-coordinate is intentional: DCI-P3+ uses
/// imaginary primaries to widen the gamut.
pub const DCI_P3_P_PRIMARIES: [(f64, f64); 3] =
    [(0.7400, 0.2700), (0.2200, 0.7800), (0.0900, -0.0900)];

/// Name of the illuminant both spaces resolve their whitepoint from.
///
/// DCI publishes no reference spectral measurement for this whitepoint;
/// the closest matching real source is the Kinoton 75P projector.
pub const DCI_P3_ILLUMINANT: &str = "DCI-P3";

pub(crate) fn build_dci_p3() -> Result<RgbColourspace> {
    let w = whitepoint(Observer::Cie1931TwoDegree, DCI_P3_ILLUMINANT)?;
    RgbColourspace::derive(
        "DCI-P3",
        DCI_P3_PRIMARIES,
        w,
        "DCI-P3",
        oetf_dci_p3,
        eotf_dci_p3,
    )
}

pub(crate) fn build_dci_p3_plus() -> Result<RgbColourspace> {
    let w = whitepoint(Observer::Cie1931TwoDegree, DCI_P3_ILLUMINANT)?;
    RgbColourspace::derive(
        "DCI-P3+",
        DCI_P3_P_PRIMARIES,
        w,
        "DCI-P3",
        oetf_dci_p3,
        eotf_dci_p3,
    )
}

/// The DCI-P3 colourspace.
///
/// Derived once on first access; subsequent calls return the same
/// descriptor.
pub fn dci_p3() -> &'static RgbColourspace {
    ColourspaceRegistry::global()
        .get("DCI-P3")
        .expect("DCI-P3 is registered at startup")
}

/// The DCI-P3+ colourspace.
pub fn dci_p3_plus() -> &'static RgbColourspace {
    ColourspaceRegistry::global()
        .get("DCI-P3+")
        .expect("DCI-P3+ is registered at startup")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use cine_math::{Mat3, Vec3};

    #[test]
    fn test_dci_p3_whitepoint_reproduction() {
        let space = dci_p3();
        let white = space.to_xyz(Vec3::ONE);
        let (x, y) = space.whitepoint();

        assert_abs_diff_eq!(white.x, x / y, epsilon = 1e-10);
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(white.z, (1.0 - x - y) / y, epsilon = 1e-10);
    }

    #[test]
    fn test_dci_p3_matrix_inverse_is_identity() {
        // The concrete scenario from the colourspace definition: forward
        // times inverse must be identity to 1e-9
        let space = dci_p3();
        let product = *space.xyz_to_rgb_matrix() * *space.rgb_to_xyz_matrix();

        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(product.m[i][j], Mat3::IDENTITY.m[i][j], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_dci_p3_known_forward_matrix() {
        // Reference values derived from the published primaries and
        // whitepoint (HP DreamColor DCI-P3 emulation whitepaper)
        let m = dci_p3().rgb_to_xyz_matrix();
        assert_abs_diff_eq!(m.m[0][0], 0.44516982, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[0][1], 0.27713441, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[0][2], 0.17228267, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[1][0], 0.20949168, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[1][1], 0.72159525, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[1][2], 0.06891307, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[2][0], 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[2][1], 0.04706056, epsilon = 1e-7);
        assert_abs_diff_eq!(m.m[2][2], 0.90735539, epsilon = 1e-7);
    }

    #[test]
    fn test_dci_p3_plus_whitepoint_reproduction() {
        let white = dci_p3_plus().to_xyz(Vec3::ONE);
        assert_abs_diff_eq!(white.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_singletons_are_stable() {
        let a = dci_p3().rgb_to_xyz_matrix();
        let b = dci_p3().rgb_to_xyz_matrix();
        assert_eq!(a.m, b.m);
    }

    #[test]
    fn test_transfer_functions_wired() {
        let space = dci_p3();
        let rgb = Vec3::splat(26.0);
        let encoded = space.encode(rgb);
        let decoded = space.decode(encoded);
        assert_abs_diff_eq!(decoded.x, 26.0, epsilon = 1e-9);
    }
}

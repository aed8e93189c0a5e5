//! DCI-P3 transfer functions.
//!
//! DCI encodes with a pure 2.6 gamma over 12-bit code values, with linear
//! light normalized against the 52.37 cd/m^2 reference peak luminance:
//!
//! ```text
//! code   = 4095 * (L / 52.37)^(1/2.6)
//! L      = 52.37 * (code / 4095)^2.6
//! ```
//!
//! Reference: Digital Cinema System Specification v1.1 (DCI, 2007).
//!
//! # Range
//!
//! - Linear input: [0, 52.37] cd/m^2 (values above encode past 4095)
//! - Code values: [0, 4095] (12-bit)

/// DCI reference peak luminance in cd/m^2.
pub const DCI_PEAK_LUMINANCE: f64 = 52.37;

/// Maximum 12-bit code value.
pub const DCI_CODE_MAX: f64 = 4095.0;

/// DCI-P3 OETF: linear luminance to 12-bit code value.
///
/// # Example
///
/// ```rust
/// use cine_transfer::dci::oetf_dci_p3;
///
/// // Reference white hits the top code value
/// assert!((oetf_dci_p3(52.37) - 4095.0).abs() < 1e-9);
/// ```
#[inline]
pub fn oetf_dci_p3(l: f64) -> f64 {
    if l <= 0.0 {
        0.0
    } else {
        DCI_CODE_MAX * (l / DCI_PEAK_LUMINANCE).powf(1.0 / 2.6)
    }
}

/// DCI-P3 EOTF: 12-bit code value to linear luminance.
///
/// Exact inverse of [`oetf_dci_p3`].
#[inline]
pub fn eotf_dci_p3(code: f64) -> f64 {
    if code <= 0.0 {
        0.0
    } else {
        DCI_PEAK_LUMINANCE * (code / DCI_CODE_MAX).powf(2.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_dci_p3_reference_white() {
        assert_abs_diff_eq!(oetf_dci_p3(DCI_PEAK_LUMINANCE), DCI_CODE_MAX, epsilon = 1e-9);
        assert_abs_diff_eq!(eotf_dci_p3(DCI_CODE_MAX), DCI_PEAK_LUMINANCE, epsilon = 1e-9);
    }

    #[test]
    fn test_dci_p3_roundtrip() {
        for i in 0..=100 {
            let l = i as f64 / 100.0 * DCI_PEAK_LUMINANCE;
            let back = eotf_dci_p3(oetf_dci_p3(l));
            assert_relative_eq!(l, back, epsilon = 1e-10, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_dci_p3_known_value() {
        // 18% grey card at reference luminance
        let code = oetf_dci_p3(0.18 * DCI_PEAK_LUMINANCE);
        assert_abs_diff_eq!(code, 4095.0 * 0.18f64.powf(1.0 / 2.6), epsilon = 1e-9);
    }

    #[test]
    fn test_dci_p3_clamps_negative() {
        assert_eq!(oetf_dci_p3(-1.0), 0.0);
        assert_eq!(eotf_dci_p3(-1.0), 0.0);
    }
}

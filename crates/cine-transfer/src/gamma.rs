//! Pure gamma transfer functions.
//!
//! Simple power-law curves:
//! - 2.2: Legacy CRT approximation
//! - 2.4: BT.1886 reference EOTF
//! - 2.6: DCI theatrical projection
//!
//! # Range
//!
//! Input/Output: [0, 1]. Negative inputs clamp to 0.

/// EOTF for arbitrary gamma: `v^gamma`
///
/// # Example
///
/// ```rust
/// use cine_transfer::gamma::gamma_eotf;
///
/// let linear = gamma_eotf(0.5, 2.6);
/// ```
#[inline]
pub fn gamma_eotf(v: f64, gamma: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`
///
/// # Example
///
/// ```rust
/// use cine_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f64, gamma: f64) -> f64 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Gamma 2.6 EOTF (DCI theatrical).
#[inline]
pub fn eotf_26(v: f64) -> f64 {
    gamma_eotf(v, 2.6)
}

/// Gamma 2.6 OETF.
#[inline]
pub fn oetf_26(l: f64) -> f64 {
    gamma_oetf(l, 2.6)
}

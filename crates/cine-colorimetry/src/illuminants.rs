//! Standard illuminant whitepoint registry.
//!
//! Maps (observer, illuminant name) to CIE xy chromaticity coordinates.
//! The registry is built once behind a [`OnceLock`] and is immutable
//! afterwards; any number of threads may read it without synchronization.
//!
//! Lookups for unknown names fail with
//! [`Error::UnknownIlluminant`](cine_core::Error::UnknownIlluminant) and
//! never fall back to a default whitepoint.
//!
//! # Example
//!
//! ```rust
//! use cine_colorimetry::{whitepoint, Observer};
//!
//! let dci = whitepoint(Observer::Cie1931TwoDegree, "DCI-P3").unwrap();
//! assert_eq!(dci, (0.314, 0.351));
//! ```

use crate::Observer;
use cine_core::{Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// D65 whitepoint chromaticity (daylight, ~6500K), 2 degree observer.
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D50 whitepoint chromaticity (~5000K), 2 degree observer.
pub const D50_XY: (f64, f64) = (0.34570, 0.35850);

/// D60 whitepoint chromaticity (~6000K), 2 degree observer.
pub const D60_XY: (f64, f64) = (0.32168, 0.33767);

/// DCI-P3 whitepoint chromaticity (theatrical projection), 2 degree observer.
///
/// DCI publishes no reference spectral measurement for this whitepoint;
/// only the chromaticity is standardized.
pub const DCI_P3_XY: (f64, f64) = (0.31400, 0.35100);

/// Illuminant chromaticities for the CIE 1931 2 degree observer.
const CIE_1931_2_DEGREE: &[(&str, (f64, f64))] = &[
    ("A", (0.44757, 0.40745)),
    ("B", (0.34842, 0.35161)),
    ("C", (0.31006, 0.31616)),
    ("D50", D50_XY),
    ("D55", (0.33242, 0.34743)),
    ("D60", D60_XY),
    ("D65", D65_XY),
    ("D75", (0.29902, 0.31485)),
    ("E", (1.0 / 3.0, 1.0 / 3.0)),
    ("DCI-P3", DCI_P3_XY),
];

/// Illuminant chromaticities for the CIE 1964 10 degree observer.
const CIE_1964_10_DEGREE: &[(&str, (f64, f64))] = &[
    ("A", (0.45117, 0.40594)),
    ("B", (0.34980, 0.35270)),
    ("C", (0.31039, 0.31905)),
    ("D50", (0.34773, 0.35952)),
    ("D55", (0.33411, 0.34877)),
    ("D65", (0.31382, 0.33100)),
    ("D75", (0.29968, 0.31740)),
    ("E", (1.0 / 3.0, 1.0 / 3.0)),
];

/// Read-only registry of standard illuminant whitepoints.
///
/// # Thread Safety
///
/// The global instance is initialized once and never mutated; it can be
/// shared freely across threads.
pub struct IlluminantRegistry {
    whitepoints: HashMap<(Observer, &'static str), (f64, f64)>,
}

impl IlluminantRegistry {
    fn new() -> Self {
        let mut whitepoints = HashMap::new();
        for &(name, xy) in CIE_1931_2_DEGREE {
            whitepoints.insert((Observer::Cie1931TwoDegree, name), xy);
        }
        for &(name, xy) in CIE_1964_10_DEGREE {
            whitepoints.insert((Observer::Cie1964TenDegree, name), xy);
        }
        Self { whitepoints }
    }

    /// Returns the global registry instance.
    pub fn global() -> &'static IlluminantRegistry {
        static INSTANCE: OnceLock<IlluminantRegistry> = OnceLock::new();
        INSTANCE.get_or_init(IlluminantRegistry::new)
    }

    /// Looks up a whitepoint chromaticity by illuminant name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownIlluminant`] if the name is not registered under
    /// the given observer.
    pub fn whitepoint(&self, observer: Observer, name: &str) -> Result<(f64, f64)> {
        self.whitepoints
            .get(&(observer, name))
            .copied()
            .ok_or_else(|| Error::unknown_illuminant(observer.name(), name))
    }

    /// Returns `true` if the illuminant is registered for the observer.
    pub fn contains(&self, observer: Observer, name: &str) -> bool {
        self.whitepoints.contains_key(&(observer, name))
    }

    /// Iterates over the illuminant names registered for an observer.
    pub fn names(&self, observer: Observer) -> impl Iterator<Item = &'static str> + '_ {
        self.whitepoints
            .keys()
            .filter(move |(obs, _)| *obs == observer)
            .map(|&(_, name)| name)
    }
}

/// Looks up a whitepoint from the global registry.
///
/// Convenience wrapper around
/// [`IlluminantRegistry::global()`](IlluminantRegistry::global).
pub fn whitepoint(observer: Observer, name: &str) -> Result<(f64, f64)> {
    IlluminantRegistry::global().whitepoint(observer, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dci_p3_whitepoint() {
        let xy = whitepoint(Observer::Cie1931TwoDegree, "DCI-P3").unwrap();
        assert_eq!(xy, (0.314, 0.351));
    }

    #[test]
    fn test_d65_differs_by_observer() {
        let two = whitepoint(Observer::Cie1931TwoDegree, "D65").unwrap();
        let ten = whitepoint(Observer::Cie1964TenDegree, "D65").unwrap();
        assert_ne!(two, ten);
    }

    #[test]
    fn test_unknown_illuminant_is_error() {
        let err = whitepoint(Observer::Cie1931TwoDegree, "Nonexistent-Illuminant").unwrap_err();
        match err {
            cine_core::Error::UnknownIlluminant { observer, name } => {
                assert_eq!(observer, "CIE 1931 2 Degree Standard Observer");
                assert_eq!(name, "Nonexistent-Illuminant");
            }
            other => panic!("expected UnknownIlluminant, got {other:?}"),
        }
    }

    #[test]
    fn test_dci_p3_only_under_2_degree() {
        assert!(IlluminantRegistry::global().contains(Observer::Cie1931TwoDegree, "DCI-P3"));
        assert!(!IlluminantRegistry::global().contains(Observer::Cie1964TenDegree, "DCI-P3"));
    }

    #[test]
    fn test_names_enumeration() {
        let names: Vec<_> = IlluminantRegistry::global()
            .names(Observer::Cie1931TwoDegree)
            .collect();
        assert!(names.contains(&"D65"));
        assert!(names.contains(&"DCI-P3"));
    }
}

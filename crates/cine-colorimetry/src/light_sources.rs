//! Light source chromaticity registry.
//!
//! The traditional CIE sources (SA, SB, SC, SD65) are physical lamps whose
//! chromaticities coincide with illuminants A, B, C and D65. They are kept
//! in their own registry because downstream data references them by source
//! name: Pointer's Gamut, for instance, is defined against source "SC".
//!
//! Same lifecycle as the illuminant registry: built once behind a
//! `OnceLock`, immutable afterwards, unknown keys fail with
//! [`Error::UnknownLightSource`](cine_core::Error::UnknownLightSource).

use crate::Observer;
use cine_core::{Error, Result};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Traditional source chromaticities, CIE 1931 2 degree observer.
const TRADITIONAL_2_DEGREE: &[(&str, (f64, f64))] = &[
    ("SA", (0.44757, 0.40745)),
    ("SB", (0.34842, 0.35161)),
    ("SC", (0.31006, 0.31616)),
    ("SD65", (0.31270, 0.32900)),
];

/// Traditional source chromaticities, CIE 1964 10 degree observer.
const TRADITIONAL_10_DEGREE: &[(&str, (f64, f64))] = &[
    ("SA", (0.45117, 0.40594)),
    ("SB", (0.34980, 0.35270)),
    ("SC", (0.31039, 0.31905)),
    ("SD65", (0.31382, 0.33100)),
];

/// Read-only registry of light source chromaticities.
pub struct LightSourceRegistry {
    sources: HashMap<(Observer, &'static str), (f64, f64)>,
}

impl LightSourceRegistry {
    fn new() -> Self {
        let mut sources = HashMap::new();
        for &(name, xy) in TRADITIONAL_2_DEGREE {
            sources.insert((Observer::Cie1931TwoDegree, name), xy);
        }
        for &(name, xy) in TRADITIONAL_10_DEGREE {
            sources.insert((Observer::Cie1964TenDegree, name), xy);
        }
        Self { sources }
    }

    /// Returns the global registry instance.
    pub fn global() -> &'static LightSourceRegistry {
        static INSTANCE: OnceLock<LightSourceRegistry> = OnceLock::new();
        INSTANCE.get_or_init(LightSourceRegistry::new)
    }

    /// Looks up a light source chromaticity by name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLightSource`] if the name is not registered under
    /// the given observer.
    pub fn chromaticity(&self, observer: Observer, name: &str) -> Result<(f64, f64)> {
        self.sources
            .get(&(observer, name))
            .copied()
            .ok_or_else(|| Error::unknown_light_source(observer.name(), name))
    }

    /// Returns `true` if the source is registered for the observer.
    pub fn contains(&self, observer: Observer, name: &str) -> bool {
        self.sources.contains_key(&(observer, name))
    }
}

/// Looks up a light source chromaticity from the global registry.
pub fn light_source(observer: Observer, name: &str) -> Result<(f64, f64)> {
    LightSourceRegistry::global().chromaticity(observer, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sc_matches_illuminant_c() {
        let sc = light_source(Observer::Cie1931TwoDegree, "SC").unwrap();
        let c = crate::whitepoint(Observer::Cie1931TwoDegree, "C").unwrap();
        assert_eq!(sc, c);
    }

    #[test]
    fn test_unknown_source_is_error() {
        let err = light_source(Observer::Cie1931TwoDegree, "Kinoton 75P").unwrap_err();
        assert!(matches!(err, cine_core::Error::UnknownLightSource { .. }));
    }
}

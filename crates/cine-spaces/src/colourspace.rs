//! RGB colourspace descriptors and the colourspace registry.
//!
//! A [`RgbColourspace`] binds a primary set, a whitepoint, the derived
//! RGB-XYZ matrices and the encode/decode transfer functions under one
//! name. Descriptors are derived once and never mutated; the registry
//! holds the built-in datasets behind a `OnceLock` global.

use crate::{normalised_primary_matrix, Primaries};
use cine_core::{Error, Result};
use cine_math::{Mat3, Vec3};
use std::collections::HashMap;
use std::sync::OnceLock;

/// A fully derived RGB colourspace.
///
/// Holds the defining chromaticities together with the matrices computed
/// from them, so downstream conversion code never re-derives. Multiple
/// colourspaces may share a whitepoint (DCI-P3 and DCI-P3+ both use the
/// "DCI-P3" illuminant) but each owns its matrices.
///
/// # Example
///
/// ```rust
/// use cine_math::Vec3;
/// use cine_spaces::dci_p3;
///
/// let space = dci_p3();
/// let xyz = space.to_xyz(Vec3::ONE);
/// assert!((xyz.y - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbColourspace {
    name: &'static str,
    primaries: Primaries,
    illuminant: &'static str,
    rgb_to_xyz: Mat3,
    xyz_to_rgb: Mat3,
    encode: fn(f64) -> f64,
    decode: fn(f64) -> f64,
}

impl RgbColourspace {
    /// Derives a colourspace from its defining chromaticities.
    ///
    /// Both the forward (RGB to XYZ) and inverse matrices are computed
    /// here; the descriptor is immutable afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::DegeneratePrimary`] or [`Error::SingularMatrix`] when the
    /// primary set cannot produce an invertible matrix.
    pub fn derive(
        name: &'static str,
        primaries: [(f64, f64); 3],
        whitepoint: (f64, f64),
        illuminant: &'static str,
        encode: fn(f64) -> f64,
        decode: fn(f64) -> f64,
    ) -> Result<Self> {
        let primaries = Primaries::from_chromaticities(name, primaries, whitepoint);
        let rgb_to_xyz = normalised_primary_matrix(&primaries)?;
        let xyz_to_rgb = rgb_to_xyz
            .inverse()
            .ok_or_else(|| Error::singular_matrix("inverting the normalised primary matrix"))?;

        Ok(Self {
            name,
            primaries,
            illuminant,
            rgb_to_xyz,
            xyz_to_rgb,
            encode,
            decode,
        })
    }

    /// Colourspace name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Primary and whitepoint chromaticities.
    #[inline]
    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    /// Whitepoint (x, y) chromaticity.
    #[inline]
    pub fn whitepoint(&self) -> (f64, f64) {
        self.primaries.w
    }

    /// Name of the illuminant the whitepoint was resolved from.
    #[inline]
    pub fn illuminant(&self) -> &'static str {
        self.illuminant
    }

    /// Forward RGB to XYZ matrix.
    #[inline]
    pub fn rgb_to_xyz_matrix(&self) -> &Mat3 {
        &self.rgb_to_xyz
    }

    /// Inverse XYZ to RGB matrix.
    #[inline]
    pub fn xyz_to_rgb_matrix(&self) -> &Mat3 {
        &self.xyz_to_rgb
    }

    /// Transforms linear RGB tristimulus values to XYZ.
    #[inline]
    pub fn to_xyz(&self, rgb: Vec3) -> Vec3 {
        self.rgb_to_xyz * rgb
    }

    /// Transforms XYZ tristimulus values to linear RGB.
    #[inline]
    pub fn from_xyz(&self, xyz: Vec3) -> Vec3 {
        self.xyz_to_rgb * xyz
    }

    /// Applies the encoding (OETF) transfer function per channel.
    #[inline]
    pub fn encode(&self, rgb: Vec3) -> Vec3 {
        Vec3::new(
            (self.encode)(rgb.x),
            (self.encode)(rgb.y),
            (self.encode)(rgb.z),
        )
    }

    /// Applies the decoding (EOTF) transfer function per channel.
    #[inline]
    pub fn decode(&self, rgb: Vec3) -> Vec3 {
        Vec3::new(
            (self.decode)(rgb.x),
            (self.decode)(rgb.y),
            (self.decode)(rgb.z),
        )
    }
}

/// Read-only registry of built-in colourspaces, keyed by name.
///
/// # Thread Safety
///
/// The global instance is built once on first access and never mutated.
pub struct ColourspaceRegistry {
    spaces: HashMap<&'static str, RgbColourspace>,
}

impl ColourspaceRegistry {
    fn new() -> Self {
        Self {
            spaces: HashMap::new(),
        }
    }

    /// Returns the global registry with the built-in datasets.
    pub fn global() -> &'static ColourspaceRegistry {
        static INSTANCE: OnceLock<ColourspaceRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut registry = ColourspaceRegistry::new();
            registry.register_builtin_spaces();
            registry
        })
    }

    fn register_builtin_spaces(&mut self) {
        // The dataset constants are validated by tests; a failure here is
        // a programming error, not an input error.
        let dci_p3 = crate::dci_p3::build_dci_p3().expect("DCI-P3 dataset is well-formed");
        let dci_p3_plus =
            crate::dci_p3::build_dci_p3_plus().expect("DCI-P3+ dataset is well-formed");
        self.register(dci_p3);
        self.register(dci_p3_plus);
    }

    fn register(&mut self, space: RgbColourspace) {
        self.spaces.insert(space.name(), space);
    }

    /// Looks up a colourspace by name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownColourspace`] if the name is not registered.
    pub fn get(&self, name: &str) -> Result<&RgbColourspace> {
        self.spaces
            .get(name)
            .ok_or_else(|| Error::unknown_colourspace(name))
    }

    /// Iterates over registered colourspace names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.spaces.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_registry_has_builtin_spaces() {
        let registry = ColourspaceRegistry::global();
        let names: Vec<_> = registry.names().collect();
        assert!(names.contains(&"DCI-P3"));
        assert!(names.contains(&"DCI-P3+"));
    }

    #[test]
    fn test_registry_unknown_name() {
        let err = ColourspaceRegistry::global().get("Rec.9999").unwrap_err();
        assert!(matches!(err, Error::UnknownColourspace { .. }));
    }

    #[test]
    fn test_xyz_roundtrip_through_descriptor() {
        let space = ColourspaceRegistry::global().get("DCI-P3").unwrap();
        let rgb = Vec3::new(0.25, 0.5, 0.75);
        let back = space.from_xyz(space.to_xyz(rgb));

        assert_abs_diff_eq!(rgb.x, back.x, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb.y, back.y, epsilon = 1e-12);
        assert_abs_diff_eq!(rgb.z, back.z, epsilon = 1e-12);
    }

    #[test]
    fn test_shared_whitepoint_distinct_matrices() {
        let registry = ColourspaceRegistry::global();
        let p3 = registry.get("DCI-P3").unwrap();
        let p3p = registry.get("DCI-P3+").unwrap();

        assert_eq!(p3.whitepoint(), p3p.whitepoint());
        assert_eq!(p3.illuminant(), p3p.illuminant());
        assert_ne!(p3.rgb_to_xyz_matrix(), p3p.rgb_to_xyz_matrix());
    }
}

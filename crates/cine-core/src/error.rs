//! Error types for colour-science operations.
//!
//! All fallible operations in the workspace report through the [`Error`]
//! enum: registry lookups that miss, and matrix derivations handed
//! degenerate or collinear primaries.
//!
//! # Usage
//!
//! ```rust
//! use cine_core::{Error, Result};
//!
//! fn xy_to_xyz(x: f64, y: f64) -> Result<[f64; 3]> {
//!     if y == 0.0 {
//!         return Err(Error::degenerate_primary("red", x, y));
//!     }
//!     Ok([x / y, 1.0, (1.0 - x - y) / y])
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
///
/// Convenience alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during colourspace derivation and registry lookup.
///
/// This enum uses [`thiserror`] for automatic [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
///
/// # Categories
///
/// - **Derivation errors**: [`DegeneratePrimary`](Error::DegeneratePrimary),
///   [`SingularMatrix`](Error::SingularMatrix)
/// - **Lookup errors**: [`UnknownIlluminant`](Error::UnknownIlluminant),
///   [`UnknownLightSource`](Error::UnknownLightSource),
///   [`UnknownColourspace`](Error::UnknownColourspace)
#[derive(Debug, Error)]
pub enum Error {
    /// A primary's y-chromaticity is zero, making the xy to XYZ
    /// projection undefined.
    ///
    /// Not recoverable locally; the input primary set is invalid.
    #[error("degenerate {label} primary ({x}, {y}): y chromaticity must be non-zero")]
    DegeneratePrimary {
        /// Which primary failed ("red", "green", "blue" or "whitepoint")
        label: &'static str,
        /// x chromaticity of the failing coordinate
        x: f64,
        /// y chromaticity of the failing coordinate
        y: f64,
    },

    /// The assembled primary matrix is non-invertible.
    ///
    /// Indicates collinear or duplicate primaries. Returned both when
    /// solving for the whitepoint scaling coefficients and when inverting
    /// the derived forward matrix.
    #[error("singular matrix while {context}")]
    SingularMatrix {
        /// What was being computed when the singularity was hit
        context: &'static str,
    },

    /// A requested illuminant name is absent from the whitepoint registry.
    ///
    /// Lookups never fall back to a default whitepoint.
    #[error("unknown illuminant '{name}' for observer '{observer}'")]
    UnknownIlluminant {
        /// Standard observer the lookup was scoped to
        observer: &'static str,
        /// Requested illuminant name
        name: String,
    },

    /// A requested light source name is absent from the registry.
    #[error("unknown light source '{name}' for observer '{observer}'")]
    UnknownLightSource {
        /// Standard observer the lookup was scoped to
        observer: &'static str,
        /// Requested light source name
        name: String,
    },

    /// A requested colourspace name is absent from the registry.
    #[error("unknown colourspace '{name}'")]
    UnknownColourspace {
        /// Requested colourspace name
        name: String,
    },
}

impl Error {
    /// Creates an [`Error::DegeneratePrimary`] error.
    #[inline]
    pub fn degenerate_primary(label: &'static str, x: f64, y: f64) -> Self {
        Self::DegeneratePrimary { label, x, y }
    }

    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(context: &'static str) -> Self {
        Self::SingularMatrix { context }
    }

    /// Creates an [`Error::UnknownIlluminant`] error.
    #[inline]
    pub fn unknown_illuminant(observer: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownIlluminant {
            observer,
            name: name.into(),
        }
    }

    /// Creates an [`Error::UnknownLightSource`] error.
    #[inline]
    pub fn unknown_light_source(observer: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownLightSource {
            observer,
            name: name.into(),
        }
    }

    /// Creates an [`Error::UnknownColourspace`] error.
    #[inline]
    pub fn unknown_colourspace(name: impl Into<String>) -> Self {
        Self::UnknownColourspace { name: name.into() }
    }

    /// Returns `true` if this is a derivation (math) error.
    #[inline]
    pub fn is_derivation_error(&self) -> bool {
        matches!(
            self,
            Self::DegeneratePrimary { .. } | Self::SingularMatrix { .. }
        )
    }

    /// Returns `true` if this is a registry lookup error.
    #[inline]
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownIlluminant { .. }
                | Self::UnknownLightSource { .. }
                | Self::UnknownColourspace { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_primary_message() {
        let err = Error::degenerate_primary("blue", 0.15, 0.0);
        let msg = err.to_string();
        assert!(msg.contains("blue"));
        assert!(msg.contains("0.15"));
        assert!(err.is_derivation_error());
    }

    #[test]
    fn test_unknown_illuminant_message() {
        let err = Error::unknown_illuminant("CIE 1931 2 Degree Standard Observer", "D42");
        let msg = err.to_string();
        assert!(msg.contains("D42"));
        assert!(msg.contains("CIE 1931"));
        assert!(err.is_lookup_error());
    }

    #[test]
    fn test_singular_matrix_message() {
        let err = Error::singular_matrix("inverting the primary matrix");
        assert!(err.to_string().contains("inverting"));
        assert!(err.is_derivation_error());
        assert!(!err.is_lookup_error());
    }
}

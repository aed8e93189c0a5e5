//! # cine-spaces
//!
//! RGB colourspace definitions: primaries, whitepoints, normalised
//! primary matrix derivation, and the built-in cinema datasets.
//!
//! # What is a Normalised Primary Matrix?
//!
//! Given the CIE xy chromaticities of a colourspace's R, G, B primaries
//! and its whitepoint, the normalised primary matrix is the 3x3 matrix
//! mapping RGB tristimulus values to CIE XYZ, scaled so that RGB
//! (1, 1, 1) lands exactly on the whitepoint at unit luminance (Y = 1).
//!
//! # Included Datasets
//!
//! | Colourspace | Whitepoint | Notes |
//! |-------------|------------|-------|
//! | DCI-P3 | DCI-P3 (0.314, 0.351) | Theatrical projection |
//! | DCI-P3+ | DCI-P3 | Wide gamut, imaginary blue primary |
//!
//! Plus the Pointer's Gamut reference data (LCHab samples and the xy
//! boundary polygon) in [`pointer_gamut`].
//!
//! # Usage
//!
//! ```rust
//! use cine_math::Vec3;
//! use cine_spaces::{dci_p3, normalised_primary_matrix, Primaries};
//!
//! // Built-in dataset, derived once
//! let xyz = dci_p3().to_xyz(Vec3::new(1.0, 0.0, 0.0));
//!
//! // Or derive for custom primaries
//! let custom = Primaries {
//!     r: (0.64, 0.33),
//!     g: (0.30, 0.60),
//!     b: (0.15, 0.06),
//!     w: (0.3127, 0.3290),
//!     name: "Custom",
//! };
//! let m = normalised_primary_matrix(&custom).unwrap();
//! ```
//!
//! # Dependencies
//!
//! - [`cine-core`] - Error types
//! - [`cine-math`] - Matrix operations
//! - [`cine-colorimetry`] - Whitepoint resolution
//! - [`cine-transfer`] - Encode/decode transfer functions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod colourspace;
pub mod dci_p3;
pub mod pointer_gamut;
mod primaries;

pub use colourspace::{ColourspaceRegistry, RgbColourspace};
pub use dci_p3::{dci_p3, dci_p3_plus, DCI_P3_ILLUMINANT, DCI_P3_PRIMARIES, DCI_P3_P_PRIMARIES};
pub use pointer_gamut::{
    pointer_gamut_illuminant, POINTER_GAMUT_BOUNDARIES, POINTER_GAMUT_DATA,
    POINTER_GAMUT_ILLUMINANT_NAME,
};
pub use primaries::{
    normalised_primary_matrix, rgb_to_rgb_matrix, xyz_to_rgb_matrix, Primaries,
};

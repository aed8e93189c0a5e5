//! # cine-colorimetry
//!
//! Static colorimetry data: standard observers, illuminant whitepoints,
//! and light source chromaticities.
//!
//! The tables are exposed as explicitly constructed, process-wide
//! immutable registries rather than loose module-level constants. Each
//! registry is built once on first access (via `OnceLock`) and answers
//! string-keyed lookups scoped to a [`Observer`].
//!
//! # Usage
//!
//! ```rust
//! use cine_colorimetry::{light_source, whitepoint, Observer};
//!
//! // Colourspace whitepoints are illuminants
//! let dci = whitepoint(Observer::Cie1931TwoDegree, "DCI-P3").unwrap();
//!
//! // Gamut data may instead reference a physical source
//! let sc = light_source(Observer::Cie1931TwoDegree, "SC").unwrap();
//! assert!(dci != sc);
//! ```
//!
//! Unknown keys are reported as errors, never substituted with defaults.
//!
//! # Used By
//!
//! - `cine-spaces` - Whitepoint resolution for colourspace datasets

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod illuminants;
mod light_sources;
mod observer;

pub use illuminants::{whitepoint, IlluminantRegistry, D50_XY, D60_XY, D65_XY, DCI_P3_XY};
pub use light_sources::{light_source, LightSourceRegistry};
pub use observer::Observer;

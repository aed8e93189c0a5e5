//! # cine-core
//!
//! Core types shared across the cine-color workspace.
//!
//! Currently this is the unified error type: every fallible operation in
//! the workspace (registry lookups, normalized-primary-matrix derivation)
//! reports a [`Error`] and the crates share the [`Result`] alias.
//!
//! # Usage
//!
//! ```rust
//! use cine_core::{Error, Result};
//!
//! fn lookup(name: &str) -> Result<(f64, f64)> {
//!     match name {
//!         "D65" => Ok((0.3127, 0.3290)),
//!         _ => Err(Error::unknown_illuminant(
//!             "CIE 1931 2 Degree Standard Observer",
//!             name,
//!         )),
//!     }
//! }
//! ```
//!
//! # Used By
//!
//! - `cine-colorimetry` - Registry lookup errors
//! - `cine-spaces` - Matrix derivation errors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub use error::{Error, Result};

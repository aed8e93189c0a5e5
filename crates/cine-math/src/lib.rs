//! # cine-math
//!
//! Dense 3x3 linear algebra for colour transformations.
//!
//! This crate provides the two primitives colour conversion needs:
//!
//! - [`Mat3`] - 3x3 matrices for RGB-XYZ transformations
//! - [`Vec3`] - 3D vectors for XYZ/RGB tristimulus triplets
//!
//! Everything is `f64`: the derivations downstream are validated to
//! tolerances (1e-10 on whitepoint reproduction) that single precision
//! cannot hold.
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! The 3x3 case is fully specialized (cofactor inverse, explicit
//! determinant) rather than delegating to a general N x N solver.
//!
//! # Usage
//!
//! ```rust
//! use cine_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = rgb_to_xyz * rgb;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::Mat3;
pub use vec3::Vec3;

//! # cine-transfer
//!
//! Transfer functions (OETF/EOTF) for cinema colour encoding.
//!
//! Transfer functions convert between linear light values and encoded
//! values for storage, projection, or transmission.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Gamma**: The exponent in a power-law transfer function
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`gamma`] | Pure power-law curves (2.2, 2.4, 2.6) | [0, 1] |
//! | [`dci`] | DCI theatrical 12-bit encoding | [0, 4095] codes |
//!
//! # Usage
//!
//! ```rust
//! use cine_transfer::dci::{eotf_dci_p3, oetf_dci_p3};
//!
//! let code = oetf_dci_p3(26.0);
//! let linear = eotf_dci_p3(code);
//! assert!((linear - 26.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dci;
pub mod gamma;

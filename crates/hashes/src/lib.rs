//! Bit-exact 2-to-1 compression functions for binary merklization.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - SHA-1, SHA-2, SHA-3 and Keccak-256 restricted to two-digest inputs.
//! - [`util`] - Rotations, endian conversion and Keccak bit interleaving.
//!
//! [`Variant`] selects a compression function at runtime; the per-algorithm
//! types select one at compile time.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
pub mod util;
mod variant;

pub use traits::{Compress, InputLengthError};
pub use variant::{CompressFn, Design, ParseVariantError, Variant};

#[doc(hidden)]
#[cfg(feature = "std")]
pub mod __internal {
  pub use crate::crypto::keccak::kernel_test;
}

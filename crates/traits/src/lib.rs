//! Core traits for the merklize hash family.
//!
//! This crate defines the contract every 2-to-1 compression function in the
//! workspace conforms to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Compress`] | Hash exactly two concatenated digests into one | SHA-256, SHA3-512, Keccak-256 |
//!
//! # Error Types
//!
//! - [`InputLengthError`] - the compression input was not two digests long
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod compress;
pub mod error;

pub use compress::{Compress, MAX_DIGEST_LEN, MAX_INPUT_LEN};
pub use error::InputLengthError;

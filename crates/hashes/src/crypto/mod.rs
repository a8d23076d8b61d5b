//! 2-to-1 compression functions.
//!
//! Every type here implements [`traits::Compress`]: the input is exactly two
//! concatenated digests and the output is one digest.

pub mod keccak;
mod padding;
pub mod sha1;
pub mod sha256;
pub mod sha3;
pub mod sha512;

pub use sha1::Sha1;
pub use sha3::{Keccak256, Sha3_224, Sha3_256, Sha3_384, Sha3_512};
pub use sha256::{Sha224, Sha256};
pub use sha512::{Sha384, Sha512, Sha512_224, Sha512_256};

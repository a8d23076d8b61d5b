//! SHA-3 and Keccak-256 as 2-to-1 compression functions.
//!
//! The five variants differ only in rate, digest length and domain suffix.
//! Keccak-256 is SHA3-256 with the pre-standard `0x01` suffix instead of
//! `0x06`.

use traits::Compress;

use super::keccak::{KeccakKernelId, kernels, sponge};
use super::padding::expect_input;

/// SHA-3 domain suffix: `01` tag plus the first padding bit.
const DS_SHA3: u8 = 0x06;
/// Original Keccak submission suffix: padding bit only.
const DS_KECCAK: u8 = 0x01;

macro_rules! sponge_variant {
  (
    $(#[$meta:meta])*
    $name:ident, $label:literal, digest = $out:literal, rate = $rate:literal, ds = $ds:expr
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct $name;

    impl $name {
      /// Sponge rate in bytes.
      pub const RATE: usize = $rate;

      /// Compress with an explicit permutation kernel instead of the
      /// configured one.
      ///
      /// # Panics
      ///
      /// Panics if `input.len() != 2 * DIGEST_LEN`.
      #[inline]
      #[track_caller]
      #[must_use]
      pub fn compress_with_kernel(kernel: KeccakKernelId, input: &[u8]) -> [u8; $out] {
        let input = expect_input::<{ 2 * $out }>($label, input);
        sponge::<{ 2 * $out }, $rate, $out>(input, $ds, kernels::permute_fn(kernel))
      }
    }

    impl Compress for $name {
      const NAME: &'static str = $label;
      const DIGEST_LEN: usize = $out;
      type Digest = [u8; $out];

      #[inline]
      #[track_caller]
      fn compress(input: &[u8]) -> [u8; $out] {
        Self::compress_with_kernel(kernels::active(), input)
      }
    }
  };
}

sponge_variant!(
  /// SHA3-224 over exactly two 28-byte digests.
  Sha3_224, "sha3-224", digest = 28, rate = 144, ds = DS_SHA3
);
sponge_variant!(
  /// SHA3-256 over exactly two 32-byte digests.
  Sha3_256, "sha3-256", digest = 32, rate = 136, ds = DS_SHA3
);
sponge_variant!(
  /// SHA3-384 over exactly two 48-byte digests.
  Sha3_384, "sha3-384", digest = 48, rate = 104, ds = DS_SHA3
);
sponge_variant!(
  /// SHA3-512 over exactly two 64-byte digests.
  ///
  /// The 128-byte input exceeds the 72-byte rate, so this is the only sponge
  /// variant that permutes twice.
  Sha3_512, "sha3-512", digest = 64, rate = 72, ds = DS_SHA3
);
sponge_variant!(
  /// Keccak-256 (Ethereum) over exactly two 32-byte digests.
  Keccak256, "keccak-256", digest = 32, rate = 136, ds = DS_KECCAK
);

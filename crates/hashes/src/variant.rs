//! Runtime selection of a compression function.

use core::{fmt, str::FromStr};

use traits::{Compress, InputLengthError};

use crate::crypto;

/// Type-erased `compress_into`: `(input, out)`.
pub type CompressFn = fn(&[u8], &mut [u8]);

/// Construction family of a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Design {
  /// Block compression with length padding (SHA-1, SHA-2).
  MerkleDamgard,
  /// Keccak-p sponge (SHA-3, Keccak-256).
  Sponge,
}

/// One of the twelve supported 2-to-1 compression functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
  /// SHA-1, 20-byte digest.
  Sha1,
  /// SHA2-224, 28-byte digest.
  Sha2_224,
  /// SHA2-256, 32-byte digest.
  Sha2_256,
  /// SHA2-384, 48-byte digest.
  Sha2_384,
  /// SHA2-512, 64-byte digest.
  Sha2_512,
  /// SHA2-512/224, 28-byte digest stored in 32-byte merkle slots.
  Sha2_512_224,
  /// SHA2-512/256, 32-byte digest.
  Sha2_512_256,
  /// SHA3-224, 28-byte digest.
  Sha3_224,
  /// SHA3-256, 32-byte digest.
  Sha3_256,
  /// SHA3-384, 48-byte digest.
  Sha3_384,
  /// SHA3-512, 64-byte digest.
  Sha3_512,
  /// Keccak-256 (pre-FIPS padding), 32-byte digest.
  Keccak256,
}

impl Variant {
  /// Every variant, in declaration order.
  pub const ALL: [Self; 12] = [
    Self::Sha1,
    Self::Sha2_224,
    Self::Sha2_256,
    Self::Sha2_384,
    Self::Sha2_512,
    Self::Sha2_512_224,
    Self::Sha2_512_256,
    Self::Sha3_224,
    Self::Sha3_256,
    Self::Sha3_384,
    Self::Sha3_512,
    Self::Keccak256,
  ];

  /// Canonical name; identical to the matching [`Compress::NAME`].
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Sha1 => crypto::Sha1::NAME,
      Self::Sha2_224 => crypto::Sha224::NAME,
      Self::Sha2_256 => crypto::Sha256::NAME,
      Self::Sha2_384 => crypto::Sha384::NAME,
      Self::Sha2_512 => crypto::Sha512::NAME,
      Self::Sha2_512_224 => crypto::Sha512_224::NAME,
      Self::Sha2_512_256 => crypto::Sha512_256::NAME,
      Self::Sha3_224 => crypto::Sha3_224::NAME,
      Self::Sha3_256 => crypto::Sha3_256::NAME,
      Self::Sha3_384 => crypto::Sha3_384::NAME,
      Self::Sha3_512 => crypto::Sha3_512::NAME,
      Self::Keccak256 => crypto::Keccak256::NAME,
    }
  }

  /// Digest size in bytes.
  #[must_use]
  pub const fn digest_len(self) -> usize {
    match self {
      Self::Sha1 => crypto::Sha1::DIGEST_LEN,
      Self::Sha2_224 => crypto::Sha224::DIGEST_LEN,
      Self::Sha2_256 => crypto::Sha256::DIGEST_LEN,
      Self::Sha2_384 => crypto::Sha384::DIGEST_LEN,
      Self::Sha2_512 => crypto::Sha512::DIGEST_LEN,
      Self::Sha2_512_224 => crypto::Sha512_224::DIGEST_LEN,
      Self::Sha2_512_256 => crypto::Sha512_256::DIGEST_LEN,
      Self::Sha3_224 => crypto::Sha3_224::DIGEST_LEN,
      Self::Sha3_256 => crypto::Sha3_256::DIGEST_LEN,
      Self::Sha3_384 => crypto::Sha3_384::DIGEST_LEN,
      Self::Sha3_512 => crypto::Sha3_512::DIGEST_LEN,
      Self::Keccak256 => crypto::Keccak256::DIGEST_LEN,
    }
  }

  /// Compression input size: two digests.
  #[must_use]
  pub const fn input_len(self) -> usize {
    2 * self.digest_len()
  }

  /// Stride of one node in a merkle output buffer.
  ///
  /// Equal to the digest length except for SHA2-512/224, whose 28-byte digest
  /// is stored in a 32-byte slot (half-word aligned in the 64-bit engine).
  #[must_use]
  pub const fn slot_len(self) -> usize {
    match self {
      Self::Sha2_512_224 => 32,
      _ => self.digest_len(),
    }
  }

  /// Native word width of the engine.
  #[must_use]
  pub const fn word_bits(self) -> u32 {
    match self {
      Self::Sha1 | Self::Sha2_224 | Self::Sha2_256 => 32,
      _ => 64,
    }
  }

  #[must_use]
  pub const fn design(self) -> Design {
    match self {
      Self::Sha3_224 | Self::Sha3_256 | Self::Sha3_384 | Self::Sha3_512 | Self::Keccak256 => Design::Sponge,
      _ => Design::MerkleDamgard,
    }
  }

  /// Merkle–Damgård block size, `None` for sponge variants.
  #[must_use]
  pub const fn block_len(self) -> Option<usize> {
    match (self.design(), self.word_bits()) {
      (Design::Sponge, _) => None,
      (Design::MerkleDamgard, 32) => Some(64),
      (Design::MerkleDamgard, _) => Some(128),
    }
  }

  /// Sponge rate in bytes, `None` for Merkle–Damgård variants.
  #[must_use]
  pub const fn rate(self) -> Option<usize> {
    match self {
      Self::Sha3_224 => Some(crypto::Sha3_224::RATE),
      Self::Sha3_256 => Some(crypto::Sha3_256::RATE),
      Self::Sha3_384 => Some(crypto::Sha3_384::RATE),
      Self::Sha3_512 => Some(crypto::Sha3_512::RATE),
      Self::Keccak256 => Some(crypto::Keccak256::RATE),
      _ => None,
    }
  }

  /// Rounds per block function or permutation.
  #[must_use]
  pub const fn rounds(self) -> usize {
    match self {
      Self::Sha2_224 | Self::Sha2_256 => 64,
      Self::Sha1 | Self::Sha2_384 | Self::Sha2_512 | Self::Sha2_512_224 | Self::Sha2_512_256 => 80,
      _ => 24,
    }
  }

  /// Function pointer to this variant's `compress_into`.
  #[must_use]
  pub fn compress_fn(self) -> CompressFn {
    match self {
      Self::Sha1 => <crypto::Sha1 as Compress>::compress_into,
      Self::Sha2_224 => <crypto::Sha224 as Compress>::compress_into,
      Self::Sha2_256 => <crypto::Sha256 as Compress>::compress_into,
      Self::Sha2_384 => <crypto::Sha384 as Compress>::compress_into,
      Self::Sha2_512 => <crypto::Sha512 as Compress>::compress_into,
      Self::Sha2_512_224 => <crypto::Sha512_224 as Compress>::compress_into,
      Self::Sha2_512_256 => <crypto::Sha512_256 as Compress>::compress_into,
      Self::Sha3_224 => <crypto::Sha3_224 as Compress>::compress_into,
      Self::Sha3_256 => <crypto::Sha3_256 as Compress>::compress_into,
      Self::Sha3_384 => <crypto::Sha3_384 as Compress>::compress_into,
      Self::Sha3_512 => <crypto::Sha3_512 as Compress>::compress_into,
      Self::Keccak256 => <crypto::Keccak256 as Compress>::compress_into,
    }
  }

  /// Hash two concatenated digests into `out`.
  ///
  /// # Panics
  ///
  /// Panics if `input.len() != self.input_len()` or
  /// `out.len() != self.digest_len()`.
  #[inline]
  pub fn hash(self, input: &[u8], out: &mut [u8]) {
    (self.compress_fn())(input, out);
  }

  /// Checked form of [`hash`](Self::hash).
  ///
  /// Both buffers are checked before anything is written; a mis-sized `out`
  /// reports the digest length as `expected`.
  pub fn try_hash(self, input: &[u8], out: &mut [u8]) -> Result<(), InputLengthError> {
    if input.len() != self.input_len() {
      return Err(InputLengthError::new(self.input_len(), input.len()));
    }
    if out.len() != self.digest_len() {
      return Err(InputLengthError::new(self.digest_len(), out.len()));
    }
    self.hash(input, out);
    Ok(())
  }

  const fn aliases(self) -> &'static [&'static str] {
    match self {
      Self::Sha1 => &["sha1"],
      Self::Sha2_224 => &["sha2-224", "sha224"],
      Self::Sha2_256 => &["sha2-256", "sha256"],
      Self::Sha2_384 => &["sha2-384", "sha384"],
      Self::Sha2_512 => &["sha2-512", "sha512"],
      Self::Sha2_512_224 => &["sha2-512/224", "sha512/224"],
      Self::Sha2_512_256 => &["sha2-512/256", "sha512/256"],
      Self::Sha3_224 => &["sha3-224"],
      Self::Sha3_256 => &["sha3-256"],
      Self::Sha3_384 => &["sha3-384"],
      Self::Sha3_512 => &["sha3-512"],
      Self::Keccak256 => &["keccak-256"],
    }
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Compare ASCII case-insensitively, ignoring `-`, `_` and `/` separators.
fn eq_ignoring_separators(a: &str, b: &str) -> bool {
  fn significant(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.bytes()
      .filter(|c| !matches!(c, b'-' | b'_' | b'/'))
      .map(|c| c.to_ascii_lowercase())
  }
  significant(a).eq(significant(b))
}

/// The name did not match any [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ParseVariantError;

impl fmt::Display for ParseVariantError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("unknown hash variant")
  }
}

impl core::error::Error for ParseVariantError {}

impl FromStr for Variant {
  type Err = ParseVariantError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    Self::ALL
      .into_iter()
      .find(|v| v.aliases().iter().any(|alias| eq_ignoring_separators(s, alias)))
      .ok_or(ParseVariantError)
  }
}

//! 2-to-1 compression trait.
//!
//! A compression function here is an ordinary hash function whose input is
//! restricted to exactly two concatenated digests of its own output size.
//! That restriction is what lets implementations fix their padding layout at
//! compile time and skip all streaming state.

use core::fmt::Debug;

use crate::InputLengthError;

/// Largest digest produced by any implementor (SHA-512, SHA3-512).
pub const MAX_DIGEST_LEN: usize = 64;

/// Largest compression input (two [`MAX_DIGEST_LEN`] digests).
pub const MAX_INPUT_LEN: usize = 2 * MAX_DIGEST_LEN;

/// Hash two concatenated digests into one digest.
///
/// Implementors are zero-sized marker types; all state lives on the stack for
/// the duration of a single call.
///
/// # Usage
///
/// ```rust,ignore
/// use hashes::crypto::Sha256;
/// use traits::Compress;
///
/// let left = [0x11u8; 32];
/// let right = [0x22u8; 32];
/// let parent = Sha256::compress_pair(&left, &right);
///
/// let mut input = [0u8; 64];
/// input[..32].copy_from_slice(&left);
/// input[32..].copy_from_slice(&right);
/// assert_eq!(parent, Sha256::compress(&input));
/// ```
///
/// # Implementor Requirements
///
/// - `DIGEST_LEN <= MAX_DIGEST_LEN`
/// - `compress` must be a pure function of its input
/// - `compress` must panic when `input.len() != INPUT_LEN`
pub trait Compress: Copy + Default + Debug + Send + Sync + 'static {
  /// Canonical lowercase name, e.g. `"sha2-256"`.
  const NAME: &'static str;

  /// Digest size in bytes.
  const DIGEST_LEN: usize;

  /// Compression input size in bytes.
  const INPUT_LEN: usize = 2 * Self::DIGEST_LEN;

  /// The digest type, typically `[u8; DIGEST_LEN]`.
  type Digest: Copy + Eq + Debug + AsRef<[u8]> + AsMut<[u8]> + Send + Sync;

  /// Compress `input` into a digest.
  ///
  /// # Panics
  ///
  /// Panics if `input.len() != Self::INPUT_LEN`.
  #[must_use]
  fn compress(input: &[u8]) -> Self::Digest;

  /// Compress `input` and write the digest into `out`.
  ///
  /// # Panics
  ///
  /// Panics if `input.len() != Self::INPUT_LEN` or `out.len() != Self::DIGEST_LEN`.
  #[inline]
  #[track_caller]
  fn compress_into(input: &[u8], out: &mut [u8]) {
    assert_eq!(
      out.len(),
      Self::DIGEST_LEN,
      "{}: output must be {} bytes",
      Self::NAME,
      Self::DIGEST_LEN
    );
    out.copy_from_slice(Self::compress(input).as_ref());
  }

  /// Checked form of [`compress`](Self::compress).
  #[inline]
  fn try_compress(input: &[u8]) -> Result<Self::Digest, InputLengthError> {
    if input.len() != Self::INPUT_LEN {
      return Err(InputLengthError::new(Self::INPUT_LEN, input.len()));
    }
    Ok(Self::compress(input))
  }

  /// Compress the concatenation `left ‖ right`.
  #[inline]
  #[must_use]
  fn compress_pair(left: &Self::Digest, right: &Self::Digest) -> Self::Digest {
    let mut buf = [0u8; MAX_INPUT_LEN];
    let (lo, hi) = buf.split_at_mut(Self::DIGEST_LEN);
    lo.copy_from_slice(left.as_ref());
    if let Some(dst) = hi.get_mut(..Self::DIGEST_LEN) {
      dst.copy_from_slice(right.as_ref());
    }
    Self::compress(buf.get(..Self::INPUT_LEN).unwrap_or(&buf))
  }
}

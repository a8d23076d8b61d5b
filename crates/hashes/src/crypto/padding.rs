//! Fixed-length Merkle–Damgård padding.
//!
//! Every compression input is exactly two digests, so the padded layout of a
//! variant is known at compile time: the message, one `0x80` marker byte,
//! zeros, then the big-endian bit length in the trailing length field. The
//! `const` assertions reject any instantiation whose `PADDED` size is not the
//! minimal block multiple for `IN`.

#![allow(clippy::indexing_slicing)] // All offsets are compile-time checked below

/// SHA-1 / SHA-224 / SHA-256 block size.
pub(crate) const BLOCK_LEN_32: usize = 64;
/// SHA-384 / SHA-512 family block size.
pub(crate) const BLOCK_LEN_64: usize = 128;

#[inline(always)]
fn pad<const IN: usize, const PADDED: usize, const BLOCK: usize, const LEN_FIELD: usize>(
  input: &[u8; IN],
) -> [u8; PADDED] {
  const {
    assert!(PADDED % BLOCK == 0, "padded length must be a whole number of blocks");
    assert!(IN + 1 + LEN_FIELD <= PADDED, "padded length too small for marker and length field");
    assert!(PADDED - BLOCK < IN + 1 + LEN_FIELD, "padded length is not minimal");
  }

  let mut out = [0u8; PADDED];
  out[..IN].copy_from_slice(input);
  out[IN] = 0x80;

  let bits = (IN as u128 * 8).to_be_bytes();
  out[PADDED - LEN_FIELD..].copy_from_slice(&bits[bits.len() - LEN_FIELD..]);
  out
}

/// Pad for the 32-bit engine: 64-byte blocks, 64-bit length field.
#[inline(always)]
pub(crate) fn pad32<const IN: usize, const PADDED: usize>(input: &[u8; IN]) -> [u8; PADDED] {
  pad::<IN, PADDED, BLOCK_LEN_32, 8>(input)
}

/// Pad for the 64-bit engine: 128-byte blocks, 128-bit length field.
#[inline(always)]
pub(crate) fn pad64<const IN: usize, const PADDED: usize>(input: &[u8; IN]) -> [u8; PADDED] {
  pad::<IN, PADDED, BLOCK_LEN_64, 16>(input)
}

/// View `input` as exactly `N` bytes or panic with the variant name.
#[inline(always)]
#[track_caller]
pub(crate) fn expect_input<'a, const N: usize>(name: &'static str, input: &'a [u8]) -> &'a [u8; N] {
  let Ok(input) = <&[u8; N]>::try_from(input) else {
    panic!("{name}: 2-to-1 input must be {N} bytes, got {}", input.len());
  };
  input
}

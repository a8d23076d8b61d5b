//! Bit and byte utilities shared by the compression engines.
//!
//! Rotations, big/little-endian word conversion, and the bit-interleaving
//! transform used by the 32-bit Keccak kernel.

#![allow(clippy::indexing_slicing)] // Fixed-size array indexing and block parsing

#[inline(always)]
#[must_use]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

#[inline(always)]
#[must_use]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

#[inline(always)]
#[must_use]
pub const fn rotr64(x: u64, n: u32) -> u64 {
  x.rotate_right(n)
}

#[inline(always)]
#[must_use]
pub const fn rotl64(x: u64, n: u32) -> u64 {
  x.rotate_left(n)
}

#[inline(always)]
#[must_use]
pub const fn load_be_u32(bytes: &[u8; 4]) -> u32 {
  u32::from_be_bytes(*bytes)
}

#[inline(always)]
#[must_use]
pub const fn load_be_u64(bytes: &[u8; 8]) -> u64 {
  u64::from_be_bytes(*bytes)
}

#[inline(always)]
#[must_use]
pub const fn load_le_u64(bytes: &[u8; 8]) -> u64 {
  u64::from_le_bytes(*bytes)
}

/// Write `words` big-endian into `out`, stopping when `out` is full.
///
/// A trailing partial word keeps its most significant bytes, which is the
/// truncation rule of every SHA-2 digest (SHA-512/224 ends on half a word).
#[inline]
pub fn store_be_u32(words: &[u32], out: &mut [u8]) {
  debug_assert!(out.len() <= words.len() * 4);
  for (chunk, word) in out.chunks_mut(4).zip(words) {
    chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
  }
}

/// 64-bit counterpart of [`store_be_u32`].
#[inline]
pub fn store_be_u64(words: &[u64], out: &mut [u8]) {
  debug_assert!(out.len() <= words.len() * 8);
  for (chunk, word) in out.chunks_mut(8).zip(words) {
    chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
  }
}

/// Write Keccak lanes little-endian into `out`, stopping when `out` is full.
#[inline]
pub fn store_le_u64(lanes: &[u64], out: &mut [u8]) {
  debug_assert!(out.len() <= lanes.len() * 8);
  for (chunk, lane) in out.chunks_mut(8).zip(lanes) {
    chunk.copy_from_slice(&lane.to_le_bytes()[..chunk.len()]);
  }
}

/// Gather the even-indexed bits of `x` into the low 32 bits.
#[inline(always)]
const fn squeeze_even_bits(x: u64) -> u32 {
  let mut x = x & 0x5555_5555_5555_5555;
  x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
  x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
  x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
  x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
  x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
  x as u32
}

/// Inverse of [`squeeze_even_bits`]: bit i moves to bit 2i.
#[inline(always)]
const fn spread_bits(x: u32) -> u64 {
  let mut x = x as u64;
  x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
  x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
  x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
  x = (x | (x << 2)) & 0x3333_3333_3333_3333;
  x = (x | (x << 1)) & 0x5555_5555_5555_5555;
  x
}

/// Split a 64-bit lane into `(even, odd)` 32-bit limbs.
///
/// Bit `i` of `even` is bit `2i` of `w`; bit `i` of `odd` is bit `2i + 1`.
#[inline(always)]
#[must_use]
pub const fn to_bit_interleaved(w: u64) -> (u32, u32) {
  (squeeze_even_bits(w), squeeze_even_bits(w >> 1))
}

/// Exact inverse of [`to_bit_interleaved`].
#[inline(always)]
#[must_use]
pub const fn from_bit_interleaved(even: u32, odd: u32) -> u64 {
  spread_bits(even) | (spread_bits(odd) << 1)
}

//! SHA-1 (FIPS 180-4) as a 2-to-1 compression function.
//!
//! A 40-byte input plus padding fits a single 64-byte block, so every call is
//! exactly one application of the block function.

#![allow(clippy::indexing_slicing)] // Fixed-size schedule and state arrays

use traits::Compress;

use super::padding::{BLOCK_LEN_32, expect_input, pad32};
use crate::util::{load_be_u32, rotl32, store_be_u32};

const ROUNDS: usize = 80;

const H0: [u32; 5] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

const K: [u32; 4] = [0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xca62_c1d6];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn schedule(block: &[u8; BLOCK_LEN_32]) -> [u32; ROUNDS] {
  let mut w = [0u32; ROUNDS];
  let (words, _) = block.as_chunks::<4>();
  for (dst, src) in w.iter_mut().zip(words) {
    *dst = load_be_u32(src);
  }
  for t in 16..ROUNDS {
    w[t] = rotl32(w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16], 1);
  }
  w
}

pub(crate) fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN_32]) {
  let w = schedule(block);
  let [mut a, mut b, mut c, mut d, mut e] = *state;

  for (t, &wt) in w.iter().enumerate() {
    let (f, k) = match t / 20 {
      0 => (ch(b, c, d), K[0]),
      1 => (parity(b, c, d), K[1]),
      2 => (maj(b, c, d), K[2]),
      _ => (parity(b, c, d), K[3]),
    };
    let tmp = rotl32(a, 5).wrapping_add(f).wrapping_add(e).wrapping_add(k).wrapping_add(wt);
    e = d;
    d = c;
    c = rotl32(b, 30);
    b = a;
    a = tmp;
  }

  for (s, v) in state.iter_mut().zip([a, b, c, d, e]) {
    *s = s.wrapping_add(v);
  }
}

/// SHA-1 over exactly two 20-byte digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha1;

impl Compress for Sha1 {
  const NAME: &'static str = "sha1";
  const DIGEST_LEN: usize = 20;
  type Digest = [u8; 20];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 20] {
    let input = expect_input::<40>(Self::NAME, input);
    let block: [u8; 64] = pad32::<40, 64>(input);

    let mut state = H0;
    compress_block(&mut state, &block);

    let mut out = [0u8; 20];
    store_be_u32(&state, &mut out);
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_vectors() {
    let mut input = [0xFFu8; 40];
    input[20..].fill(0x0F);
    assert_eq!(hex::encode(Sha1::compress(&input)), "4bd6787650da46a7624cda739c1760eecba9e815");

    let counting: [u8; 40] = core::array::from_fn(|i| i as u8);
    assert_eq!(hex::encode(Sha1::compress(&counting)), "cc9ad99e917042381b0f99588896cbf236aa8ed3");
  }

  #[test]
  fn pair_form_agrees() {
    let left = [0xFFu8; 20];
    let right = [0x0Fu8; 20];
    assert_eq!(
      hex::encode(Sha1::compress_pair(&left, &right)),
      "4bd6787650da46a7624cda739c1760eecba9e815"
    );
  }

  #[test]
  #[should_panic(expected = "sha1: 2-to-1 input must be 40 bytes")]
  fn wrong_length_panics() {
    let _ = Sha1::compress(&[0u8; 64]);
  }
}

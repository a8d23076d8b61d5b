//! 32-bit SHA-2 engine: SHA-224 and SHA-256 over two concatenated digests.
//!
//! Both inputs (56 and 64 bytes) leave no room for the marker and length
//! field in the first block, so each call runs the block function twice.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Compress;

use super::padding::{BLOCK_LEN_32, expect_input, pad32};
use crate::util::{load_be_u32, rotr32, store_be_u32};

const ROUNDS: usize = 64;

const H0_224: [u32; 8] = [
  0xc105_9ed8, 0x367c_d507, 0x3070_dd17, 0xf70e_5939, 0xffc0_0b31, 0x6858_1511, 0x64f9_8fa7, 0xbefa_4fa4,
];

const H0_256: [u32; 8] = [
  0x6a09_e667, 0xbb67_ae85, 0x3c6e_f372, 0xa54f_f53a, 0x510e_527f, 0x9b05_688c, 0x1f83_d9ab, 0x5be0_cd19,
];

const K: [u32; ROUNDS] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

#[inline(always)]
fn schedule(block: &[u8; BLOCK_LEN_32]) -> [u32; ROUNDS] {
  let mut w = [0u32; ROUNDS];
  let (words, _) = block.as_chunks::<4>();
  for (dst, src) in w.iter_mut().zip(words) {
    *dst = load_be_u32(src);
  }
  for t in 16..ROUNDS {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }
  w
}

pub(crate) fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN_32]) {
  let w = schedule(block);
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  macro_rules! round {
    ($k:expr, $wi:expr) => {{
      let t1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add($k)
        .wrapping_add($wi);
      let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

      h = g;
      g = f;
      f = e;
      e = d.wrapping_add(t1);
      d = c;
      c = b;
      b = a;
      a = t1.wrapping_add(t2);
    }};
  }

  for (&k, &wt) in K.iter().zip(w.iter()) {
    round!(k, wt);
  }

  for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *s = s.wrapping_add(v);
  }
}

#[inline(always)]
fn compress_blocks(state: &mut [u32; 8], padded: &[u8]) {
  let (blocks, rest) = padded.as_chunks::<BLOCK_LEN_32>();
  debug_assert!(rest.is_empty());
  for block in blocks {
    compress_block(state, block);
  }
}

/// SHA-224 over exactly two 28-byte digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha224;

impl Compress for Sha224 {
  const NAME: &'static str = "sha2-224";
  const DIGEST_LEN: usize = 28;
  type Digest = [u8; 28];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 28] {
    let input = expect_input::<56>(Self::NAME, input);
    let padded: [u8; 128] = pad32::<56, 128>(input);

    let mut state = H0_224;
    compress_blocks(&mut state, &padded);

    // Word 7 is dropped.
    let mut out = [0u8; 28];
    store_be_u32(&state, &mut out);
    out
  }
}

/// SHA-256 over exactly two 32-byte digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl Compress for Sha256 {
  const NAME: &'static str = "sha2-256";
  const DIGEST_LEN: usize = 32;
  type Digest = [u8; 32];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 32] {
    let input = expect_input::<64>(Self::NAME, input);
    let padded: [u8; 128] = pad32::<64, 128>(input);

    let mut state = H0_256;
    compress_blocks(&mut state, &padded);

    let mut out = [0u8; 32];
    store_be_u32(&state, &mut out);
    out
  }
}

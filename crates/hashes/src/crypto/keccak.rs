//! Keccak-p[1600, 24] permutation and the fixed-length sponge.
//!
//! The state is 25 little-endian 64-bit lanes indexed `x + 5 * y`. Two
//! permutation kernels exist: the lane kernel below and the bit-interleaved
//! 32-bit kernel in [`interleaved`]. [`kernels`] selects between them.

#![allow(clippy::indexing_slicing)] // Keccak state is fixed-size; indexing is audited

pub mod config;
mod interleaved;
pub mod kernels;
#[cfg(test)]
mod reference;

pub use config::{KeccakConfig, KeccakForce};
pub use kernels::KeccakKernelId;

use crate::util::{load_le_u64, store_le_u64};

pub(crate) const ROUNDS: usize = 24;

/// Width of the permutation state in bytes.
pub(crate) const STATE_LEN: usize = 200;

pub(crate) const RC: [u64; ROUNDS] = [
  0x0000_0000_0000_0001,
  0x0000_0000_0000_8082,
  0x8000_0000_0000_808a,
  0x8000_0000_8000_8000,
  0x0000_0000_0000_808b,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8009,
  0x0000_0000_0000_008a,
  0x0000_0000_0000_0088,
  0x0000_0000_8000_8009,
  0x0000_0000_8000_000a,
  0x0000_0000_8000_808b,
  0x8000_0000_0000_008b,
  0x8000_0000_0000_8089,
  0x8000_0000_0000_8003,
  0x8000_0000_0000_8002,
  0x8000_0000_0000_0080,
  0x0000_0000_0000_800a,
  0x8000_0000_8000_000a,
  0x8000_0000_8000_8081,
  0x8000_0000_0000_8080,
  0x0000_0000_8000_0001,
  0x8000_0000_8000_8008,
];

/// ρ rotation offsets indexed by lane `x + 5 * y`.
pub(crate) const RHO: [u32; 25] = [
  0, 1, 62, 28, 27, //
  36, 44, 6, 55, 20, //
  3, 10, 43, 25, 39, //
  41, 45, 15, 21, 8, //
  18, 2, 61, 56, 14,
];

/// Source lane for each π destination: `A'[x, y] = A[(x + 3y) mod 5, x]`.
pub(crate) const PI_SRC: [usize; 25] = {
  let mut src = [0usize; 25];
  let mut y = 0;
  while y < 5 {
    let mut x = 0;
    while x < 5 {
      src[x + 5 * y] = (x + 3 * y) % 5 + 5 * x;
      x += 1;
    }
    y += 1;
  }
  src
};

#[inline(always)]
fn theta(a: &mut [u64; 25]) {
  let mut c = [0u64; 5];
  for (x, cx) in c.iter_mut().enumerate() {
    *cx = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
  }
  for x in 0..5 {
    let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
    for y in 0..5 {
      a[x + 5 * y] ^= d;
    }
  }
}

#[inline(always)]
fn rho(a: &mut [u64; 25]) {
  for (lane, &r) in a.iter_mut().zip(RHO.iter()) {
    *lane = lane.rotate_left(r);
  }
}

#[inline(always)]
fn pi(a: &mut [u64; 25]) {
  let b = *a;
  for (dst, &src) in a.iter_mut().zip(PI_SRC.iter()) {
    *dst = b[src];
  }
}

#[inline(always)]
fn chi(a: &mut [u64; 25]) {
  for row in a.chunks_exact_mut(5) {
    let b = [row[0], row[1], row[2], row[3], row[4]];
    for x in 0..5 {
      row[x] = b[x] ^ (!b[(x + 1) % 5] & b[(x + 2) % 5]);
    }
  }
}

#[inline(always)]
fn iota(a: &mut [u64; 25], rc: u64) {
  a[0] ^= rc;
}

/// Keccak-p[1600, 24] on native 64-bit lanes.
pub(crate) fn keccakf_lanes(state: &mut [u64; 25]) {
  for &rc in RC.iter() {
    theta(state);
    rho(state);
    pi(state);
    chi(state);
    iota(state, rc);
  }
}

#[inline(always)]
fn absorb<const RATE: usize>(state: &mut [u64; 25], block: &[u8; RATE]) {
  let (lanes, _) = block.as_chunks::<8>();
  for (s, lane) in state.iter_mut().zip(lanes) {
    *s ^= load_le_u64(lane);
  }
}

/// Hash an `IN`-byte message at `RATE` with domain suffix `ds`, emit `OUT` bytes.
///
/// Full rate blocks are absorbed and permuted first; the tail is zero-filled,
/// receives `ds` right after the message and `0x80` in the last rate byte,
/// then gets one final permutation before the squeeze.
#[inline(always)]
pub(crate) fn sponge<const IN: usize, const RATE: usize, const OUT: usize>(
  input: &[u8; IN],
  ds: u8,
  permute: fn(&mut [u64; 25]),
) -> [u8; OUT] {
  const {
    assert!(RATE % 8 == 0 && RATE < STATE_LEN, "rate must be whole lanes inside the state");
    assert!(OUT <= RATE, "digest must be squeezed from a single rate block");
  }

  let mut state = [0u64; 25];
  let (blocks, rest) = input.as_chunks::<RATE>();
  for block in blocks {
    absorb(&mut state, block);
    permute(&mut state);
  }

  let mut last = [0u8; RATE];
  last[..rest.len()].copy_from_slice(rest);
  last[rest.len()] ^= ds;
  last[RATE - 1] ^= 0x80;
  absorb(&mut state, &last);
  permute(&mut state);

  let mut out = [0u8; OUT];
  store_le_u64(&state, &mut out);
  out
}

//! Bit-interleaved Keccak-p[1600, 24] on 32-bit limbs.
//!
//! Each 64-bit lane is held as two 32-bit limbs: `even` carries bits
//! 0, 2, ..., 62 and `odd` carries bits 1, 3, ..., 63. A 64-bit rotation by an
//! even offset becomes two 32-bit rotations by half the offset; an odd offset
//! additionally swaps the limbs. Every other step mapping is limb-wise, so the
//! kernel only ever touches 32-bit words.

#![allow(clippy::indexing_slicing)] // Limb array is fixed-size; indexing is audited

use super::{PI_SRC, RC, RHO, ROUNDS};
use crate::util::{from_bit_interleaved, to_bit_interleaved};

/// 50 limbs: lane `i` is `(limbs[2 * i], limbs[2 * i + 1]) == (even, odd)`.
pub(crate) type Limbs = [u32; 50];

/// Round constants in interleaved form, `(even, odd)` per round.
pub(crate) const RC_INTERLEAVED: [(u32, u32); ROUNDS] = {
  let mut out = [(0u32, 0u32); ROUNDS];
  let mut i = 0;
  while i < ROUNDS {
    out[i] = to_bit_interleaved(RC[i]);
    i += 1;
  }
  out
};

/// Rotate an interleaved lane left by `r` bits of the original 64-bit word.
#[inline(always)]
fn rotl(even: u32, odd: u32, r: u32) -> (u32, u32) {
  let half = r / 2;
  if r % 2 == 0 {
    (even.rotate_left(half), odd.rotate_left(half))
  } else {
    (odd.rotate_left(half + 1), even.rotate_left(half))
  }
}

#[inline(always)]
fn theta(a: &mut Limbs) {
  let mut c = [(0u32, 0u32); 5];
  for (x, cx) in c.iter_mut().enumerate() {
    for y in 0..5 {
      let lane = x + 5 * y;
      cx.0 ^= a[2 * lane];
      cx.1 ^= a[2 * lane + 1];
    }
  }
  for x in 0..5 {
    let (prev_even, prev_odd) = c[(x + 4) % 5];
    let (next_even, next_odd) = c[(x + 1) % 5];
    let (re, ro) = rotl(next_even, next_odd, 1);
    let (de, d_odd) = (prev_even ^ re, prev_odd ^ ro);
    for y in 0..5 {
      let lane = x + 5 * y;
      a[2 * lane] ^= de;
      a[2 * lane + 1] ^= d_odd;
    }
  }
}

#[inline(always)]
fn rho(a: &mut Limbs) {
  for (lane, &r) in RHO.iter().enumerate() {
    let (e, o) = rotl(a[2 * lane], a[2 * lane + 1], r);
    a[2 * lane] = e;
    a[2 * lane + 1] = o;
  }
}

#[inline(always)]
fn pi(a: &mut Limbs) {
  let b = *a;
  for (dst, &src) in PI_SRC.iter().enumerate() {
    a[2 * dst] = b[2 * src];
    a[2 * dst + 1] = b[2 * src + 1];
  }
}

#[inline(always)]
fn chi(a: &mut Limbs) {
  for y in 0..5 {
    for parity in 0..2 {
      let limb = |x: usize| 2 * (x + 5 * y) + parity;
      let b = [a[limb(0)], a[limb(1)], a[limb(2)], a[limb(3)], a[limb(4)]];
      for x in 0..5 {
        a[limb(x)] = b[x] ^ (!b[(x + 1) % 5] & b[(x + 2) % 5]);
      }
    }
  }
}

#[inline(always)]
fn iota(a: &mut Limbs, (even, odd): (u32, u32)) {
  a[0] ^= even;
  a[1] ^= odd;
}

/// All 24 rounds on an interleaved state.
pub(crate) fn permute_limbs(a: &mut Limbs) {
  for &rc in RC_INTERLEAVED.iter() {
    theta(a);
    rho(a);
    pi(a);
    chi(a);
    iota(a, rc);
  }
}

#[inline]
pub(crate) fn to_limbs(lanes: &[u64; 25]) -> Limbs {
  let mut limbs = [0u32; 50];
  for (pair, &lane) in limbs.chunks_exact_mut(2).zip(lanes.iter()) {
    let (even, odd) = to_bit_interleaved(lane);
    pair[0] = even;
    pair[1] = odd;
  }
  limbs
}

#[inline]
pub(crate) fn from_limbs(limbs: &Limbs, lanes: &mut [u64; 25]) {
  for (lane, pair) in lanes.iter_mut().zip(limbs.chunks_exact(2)) {
    *lane = from_bit_interleaved(pair[0], pair[1]);
  }
}

/// Keccak-p[1600, 24] through the interleaved representation.
///
/// Takes and returns ordinary lanes so it is interchangeable with the lane
/// kernel; the conversion is a pure re-encoding.
pub(crate) fn keccakf_interleaved(state: &mut [u64; 25]) {
  let mut limbs = to_limbs(state);
  permute_limbs(&mut limbs);
  from_limbs(&limbs, state);
}

//! Bit-indexed Keccak-p[1600, 24] written straight from the FIPS 202 step
//! definitions. Every constant is derived here (ρ offsets from the `(x, y)`
//! walk, round constants from the `rc` LFSR) so it shares nothing with the
//! table-driven kernels it checks.

use super::{ROUNDS, keccakf_lanes};

/// `a[x][y][z]`, one bit per byte.
type Bits = [[[u8; 64]; 5]; 5];

fn from_lanes(lanes: &[u64; 25]) -> Bits {
  let mut a = [[[0u8; 64]; 5]; 5];
  for x in 0..5 {
    for y in 0..5 {
      for z in 0..64 {
        a[x][y][z] = ((lanes[x + 5 * y] >> z) & 1) as u8;
      }
    }
  }
  a
}

fn to_lanes(a: &Bits) -> [u64; 25] {
  let mut lanes = [0u64; 25];
  for x in 0..5 {
    for y in 0..5 {
      for z in 0..64 {
        lanes[x + 5 * y] |= u64::from(a[x][y][z]) << z;
      }
    }
  }
  lanes
}

fn theta(a: &Bits) -> Bits {
  let mut c = [[0u8; 64]; 5];
  for x in 0..5 {
    for z in 0..64 {
      c[x][z] = a[x][0][z] ^ a[x][1][z] ^ a[x][2][z] ^ a[x][3][z] ^ a[x][4][z];
    }
  }
  let mut out = *a;
  for x in 0..5 {
    for z in 0..64 {
      let d = c[(x + 4) % 5][z] ^ c[(x + 1) % 5][(z + 63) % 64];
      for y in 0..5 {
        out[x][y][z] ^= d;
      }
    }
  }
  out
}

fn rho(a: &Bits) -> Bits {
  let mut out = *a;
  let (mut x, mut y) = (1usize, 0usize);
  for t in 0..24 {
    let offset = (t + 1) * (t + 2) / 2;
    for z in 0..64 {
      out[x][y][z] = a[x][y][(z + 64 * 64 - offset) % 64];
    }
    (x, y) = (y, (2 * x + 3 * y) % 5);
  }
  out
}

fn pi(a: &Bits) -> Bits {
  let mut out = *a;
  for x in 0..5 {
    for y in 0..5 {
      out[x][y] = a[(x + 3 * y) % 5][x];
    }
  }
  out
}

fn chi(a: &Bits) -> Bits {
  let mut out = *a;
  for x in 0..5 {
    for y in 0..5 {
      for z in 0..64 {
        out[x][y][z] = a[x][y][z] ^ ((a[(x + 1) % 5][y][z] ^ 1) & a[(x + 2) % 5][y][z]);
      }
    }
  }
  out
}

/// FIPS 202 Algorithm 5.
fn rc_bit(t: usize) -> u8 {
  if t % 255 == 0 {
    return 1;
  }
  let mut r = [1u8, 0, 0, 0, 0, 0, 0, 0];
  for _ in 1..=(t % 255) {
    let mut wide = [0u8; 9];
    wide[1..].copy_from_slice(&r);
    wide[0] ^= wide[8];
    wide[4] ^= wide[8];
    wide[5] ^= wide[8];
    wide[6] ^= wide[8];
    r.copy_from_slice(&wide[..8]);
  }
  r[0]
}

fn iota(a: &Bits, round: usize) -> Bits {
  let mut out = *a;
  for j in 0..=6 {
    out[0][0][(1 << j) - 1] ^= rc_bit(j + 7 * round);
  }
  out
}

fn permute(lanes: &mut [u64; 25]) {
  let mut a = from_lanes(lanes);
  for round in 0..ROUNDS {
    a = iota(&chi(&pi(&rho(&theta(&a)))), round);
  }
  *lanes = to_lanes(&a);
}

#[test]
fn round_constants_derived_from_lfsr_match_table() {
  for round in 0..ROUNDS {
    let mut lanes = [0u64; 25];
    lanes[0] = to_lanes(&iota(&[[[0u8; 64]; 5]; 5], round))[0];
    assert_eq!(lanes[0], super::RC[round], "round {round}");
  }
}

#[test]
fn rho_offsets_derived_from_walk_match_table() {
  for lane in 0..25 {
    let mut lanes = [0u64; 25];
    lanes[lane] = 1;
    let rotated = to_lanes(&rho(&from_lanes(&lanes)));
    assert_eq!(rotated[lane], 1u64.rotate_left(super::RHO[lane]), "lane {lane}");
  }
}

#[test]
fn lane_kernel_matches_bit_reference() {
  let mut seed = 0xC0FF_EE00_1234_5678u64;
  for _ in 0..4 {
    let mut state = [0u64; 25];
    for lane in state.iter_mut() {
      seed ^= seed << 13;
      seed ^= seed >> 7;
      seed ^= seed << 17;
      *lane = seed;
    }
    let mut fast = state;
    let mut slow = state;
    keccakf_lanes(&mut fast);
    permute(&mut slow);
    assert_eq!(fast, slow);
  }
}

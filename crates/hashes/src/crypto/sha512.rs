//! 64-bit SHA-2 engine: SHA-384, SHA-512, SHA-512/224 and SHA-512/256.
//!
//! All four share the 80-round block function and differ only in their
//! initial value and how much of the final state they emit. The truncated
//! variants (SHA-512/224, SHA-512/256, SHA-384) fit input plus padding into a
//! single 128-byte block; SHA-512's 128-byte input needs two.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Compress;

use super::padding::{BLOCK_LEN_64, expect_input, pad64};
use crate::util::{load_be_u64, rotr64, store_be_u64};

const ROUNDS: usize = 80;

const K: [u64; ROUNDS] = [
  0x428a_2f98_d728_ae22,
  0x7137_4491_23ef_65cd,
  0xb5c0_fbcf_ec4d_3b2f,
  0xe9b5_dba5_8189_dbbc,
  0x3956_c25b_f348_b538,
  0x59f1_11f1_b605_d019,
  0x923f_82a4_af19_4f9b,
  0xab1c_5ed5_da6d_8118,
  0xd807_aa98_a303_0242,
  0x1283_5b01_4570_6fbe,
  0x2431_85be_4ee4_b28c,
  0x550c_7dc3_d5ff_b4e2,
  0x72be_5d74_f27b_896f,
  0x80de_b1fe_3b16_96b1,
  0x9bdc_06a7_25c7_1235,
  0xc19b_f174_cf69_2694,
  0xe49b_69c1_9ef1_4ad2,
  0xefbe_4786_384f_25e3,
  0x0fc1_9dc6_8b8c_d5b5,
  0x240c_a1cc_77ac_9c65,
  0x2de9_2c6f_592b_0275,
  0x4a74_84aa_6ea6_e483,
  0x5cb0_a9dc_bd41_fbd4,
  0x76f9_88da_8311_53b5,
  0x983e_5152_ee66_dfab,
  0xa831_c66d_2db4_3210,
  0xb003_27c8_98fb_213f,
  0xbf59_7fc7_beef_0ee4,
  0xc6e0_0bf3_3da8_8fc2,
  0xd5a7_9147_930a_a725,
  0x06ca_6351_e003_826f,
  0x1429_2967_0a0e_6e70,
  0x27b7_0a85_46d2_2ffc,
  0x2e1b_2138_5c26_c926,
  0x4d2c_6dfc_5ac4_2aed,
  0x5338_0d13_9d95_b3df,
  0x650a_7354_8baf_63de,
  0x766a_0abb_3c77_b2a8,
  0x81c2_c92e_47ed_aee6,
  0x9272_2c85_1482_353b,
  0xa2bf_e8a1_4cf1_0364,
  0xa81a_664b_bc42_3001,
  0xc24b_8b70_d0f8_9791,
  0xc76c_51a3_0654_be30,
  0xd192_e819_d6ef_5218,
  0xd699_0624_5565_a910,
  0xf40e_3585_5771_202a,
  0x106a_a070_32bb_d1b8,
  0x19a4_c116_b8d2_d0c8,
  0x1e37_6c08_5141_ab53,
  0x2748_774c_df8e_eb99,
  0x34b0_bcb5_e19b_48a8,
  0x391c_0cb3_c5c9_5a63,
  0x4ed8_aa4a_e341_8acb,
  0x5b9c_ca4f_7763_e373,
  0x682e_6ff3_d6b2_b8a3,
  0x748f_82ee_5def_b2fc,
  0x78a5_636f_4317_2f60,
  0x84c8_7814_a1f0_ab72,
  0x8cc7_0208_1a64_39ec,
  0x90be_fffa_2363_1e28,
  0xa450_6ceb_de82_bde9,
  0xbef9_a3f7_b2c6_7915,
  0xc671_78f2_e372_532b,
  0xca27_3ece_ea26_619c,
  0xd186_b8c7_21c0_c207,
  0xeada_7dd6_cde0_eb1e,
  0xf57d_4f7f_ee6e_d178,
  0x06f0_67aa_7217_6fba,
  0x0a63_7dc5_a2c8_98a6,
  0x113f_9804_bef9_0dae,
  0x1b71_0b35_131c_471b,
  0x28db_77f5_2304_7d84,
  0x32ca_ab7b_40c7_2493,
  0x3c9e_be0a_15c9_bebc,
  0x431d_67c4_9c10_0d4c,
  0x4cc5_d4be_cb3e_42b6,
  0x597f_299c_fc65_7e2a,
  0x5fcb_6fab_3ad6_faec,
  0x6c44_198c_4a47_5817,
];

const H0_384: [u64; 8] = [
  0xcbbb_9d5d_c105_9ed8,
  0x629a_292a_367c_d507,
  0x9159_015a_3070_dd17,
  0x152f_ecd8_f70e_5939,
  0x6733_2667_ffc0_0b31,
  0x8eb4_4a87_6858_1511,
  0xdb0c_2e0d_64f9_8fa7,
  0x47b5_481d_befa_4fa4,
];

const H0_512: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

const H0_512_224: [u64; 8] = [
  0x8c3d_37c8_1954_4da2,
  0x73e1_9966_89dc_d4d6,
  0x1dfa_b7ae_32ff_9c82,
  0x679d_d514_582f_9fcf,
  0x0f6d_2b69_7bd4_4da8,
  0x77e3_6f73_04c4_8942,
  0x3f9d_85a8_6a1d_36c8,
  0x1112_e6ad_91d6_92a1,
];

const H0_512_256: [u64; 8] = [
  0x2231_2194_fc2b_f72c,
  0x9f55_5fa3_c84c_64c2,
  0x2393_b86b_6f53_b151,
  0x9638_7719_5940_eabd,
  0x9628_3ee2_a88e_ffe3,
  0xbe5e_1e25_5386_3992,
  0x2b01_99fc_2c85_b8aa,
  0x0eb7_2ddc_81c5_2ca2,
];

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ (x >> 6)
}

#[inline(always)]
fn schedule(block: &[u8; BLOCK_LEN_64]) -> [u64; ROUNDS] {
  let mut w = [0u64; ROUNDS];
  let (words, _) = block.as_chunks::<8>();
  for (dst, src) in w.iter_mut().zip(words) {
    *dst = load_be_u64(src);
  }
  for t in 16..ROUNDS {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }
  w
}

pub(crate) fn compress_block(state: &mut [u64; 8], block: &[u8; BLOCK_LEN_64]) {
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

/// Pad `IN` bytes into `PADDED`, run every block from `iv`, emit `OUT` bytes.
#[inline(always)]
fn digest<const IN: usize, const PADDED: usize, const OUT: usize>(iv: [u64; 8], input: &[u8; IN]) -> [u8; OUT] {
  let padded: [u8; PADDED] = pad64::<IN, PADDED>(input);

  let mut state = iv;
  let (blocks, rest) = padded.as_chunks::<BLOCK_LEN_64>();
  debug_assert!(rest.is_empty());
  for block in blocks {
    compress_block(&mut state, block);
  }

  let mut out = [0u8; OUT];
  store_be_u64(&state, &mut out);
  out
}

/// SHA-384 over exactly two 48-byte digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha384;

impl Compress for Sha384 {
  const NAME: &'static str = "sha2-384";
  const DIGEST_LEN: usize = 48;
  type Digest = [u8; 48];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 48] {
    digest::<96, 128, 48>(H0_384, expect_input::<96>(Self::NAME, input))
  }
}

/// SHA-512 over exactly two 64-byte digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha512;

impl Compress for Sha512 {
  const NAME: &'static str = "sha2-512";
  const DIGEST_LEN: usize = 64;
  type Digest = [u8; 64];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 64] {
    digest::<128, 256, 64>(H0_512, expect_input::<128>(Self::NAME, input))
  }
}

/// SHA-512/224 over exactly two 28-byte digests.
///
/// The digest is three full state words plus the high half of the fourth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha512_224;

impl Compress for Sha512_224 {
  const NAME: &'static str = "sha2-512/224";
  const DIGEST_LEN: usize = 28;
  type Digest = [u8; 28];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 28] {
    digest::<56, 128, 28>(H0_512_224, expect_input::<56>(Self::NAME, input))
  }
}

/// SHA-512/256 over exactly two 32-byte digests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha512_256;

impl Compress for Sha512_256 {
  const NAME: &'static str = "sha2-512/256";
  const DIGEST_LEN: usize = 32;
  type Digest = [u8; 32];

  #[inline]
  #[track_caller]
  fn compress(input: &[u8]) -> [u8; 32] {
    digest::<64, 128, 32>(H0_512_256, expect_input::<64>(Self::NAME, input))
  }
}

//! Scheduler properties against a naive reduction over the RustCrypto hashes.

use merkle::{Merklizer, Serial, Variant, merklize_root};
use proptest::prelude::*;

fn reference_compress(variant: Variant, input: &[u8]) -> Vec<u8> {
  use sha2::Digest as _;
  match variant {
    Variant::Sha1 => sha1::Sha1::digest(input).to_vec(),
    Variant::Sha2_224 => sha2::Sha224::digest(input).to_vec(),
    Variant::Sha2_256 => sha2::Sha256::digest(input).to_vec(),
    Variant::Sha2_384 => sha2::Sha384::digest(input).to_vec(),
    Variant::Sha2_512 => sha2::Sha512::digest(input).to_vec(),
    Variant::Sha2_512_224 => sha2::Sha512_224::digest(input).to_vec(),
    Variant::Sha2_512_256 => sha2::Sha512_256::digest(input).to_vec(),
    Variant::Sha3_224 => sha3::Sha3_224::digest(input).to_vec(),
    Variant::Sha3_256 => sha3::Sha3_256::digest(input).to_vec(),
    Variant::Sha3_384 => sha3::Sha3_384::digest(input).to_vec(),
    Variant::Sha3_512 => sha3::Sha3_512::digest(input).to_vec(),
    Variant::Keccak256 => sha3::Keccak256::digest(input).to_vec(),
  }
}

fn reference_root(variant: Variant, leaves: &[u8]) -> Vec<u8> {
  let mut level: Vec<Vec<u8>> = leaves.chunks_exact(variant.digest_len()).map(<[u8]>::to_vec).collect();
  while level.len() > 1 {
    level = level
      .chunks_exact(2)
      .map(|pair| reference_compress(variant, &pair.concat()))
      .collect();
  }
  level.pop().unwrap_or_default()
}

fn variant() -> impl Strategy<Value = Variant> {
  prop::sample::select(Variant::ALL.to_vec())
}

/// `(variant, leaves, batch)` with 2..=64 leaves and a batch that divides N/2.
fn request() -> impl Strategy<Value = (Variant, Vec<u8>, usize)> {
  (variant(), 1u32..=6).prop_flat_map(|(variant, log_n)| {
    let n = 1usize << log_n;
    (
      Just(variant),
      proptest::collection::vec(any::<u8>(), n * variant.digest_len()),
      (0..log_n).prop_map(|log_b| 1usize << log_b),
    )
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn root_matches_naive_reduction((variant, leaves, batch) in request()) {
    let expected = reference_root(variant, &leaves);
    let tree = Merklizer::new(variant).batch_size(batch).tree(&leaves).unwrap();
    prop_assert_eq!(tree.root(), expected.as_slice());
    let n = leaves.len() / variant.digest_len();
    prop_assert_eq!(merklize_root(Serial, variant, &leaves, n, batch).unwrap(), expected);
  }

  #[test]
  fn batch_size_does_not_change_the_tree((variant, leaves, batch) in request()) {
    let a = Merklizer::new(variant).batch_size(1).tree(&leaves).unwrap();
    let b = Merklizer::new(variant).batch_size(batch).tree(&leaves).unwrap();
    prop_assert_eq!(a, b);
  }

  #[test]
  fn non_power_of_two_counts_are_rejected(variant in variant(), n in 3usize..100) {
    prop_assume!(!n.is_power_of_two());
    let leaves = vec![0u8; n * variant.digest_len()];
    prop_assert_eq!(
      Merklizer::new(variant).root(&leaves).unwrap_err(),
      merkle::MerklizeError::NotPowerOfTwo(n)
    );
  }
}

#[cfg(feature = "parallel")]
proptest! {
  #![proptest_config(ProptestConfig::with_cases(32))]

  #[test]
  fn rayon_matches_serial((variant, leaves, batch) in request()) {
    let serial = Merklizer::new(variant).batch_size(batch).tree(&leaves).unwrap();
    let parallel = Merklizer::parallel(variant).batch_size(batch).tree(&leaves).unwrap();
    prop_assert_eq!(serial, parallel);
  }
}

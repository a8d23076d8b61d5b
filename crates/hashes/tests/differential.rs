//! Every variant against the RustCrypto implementations.

use hashes::{
  Compress,
  crypto::{Keccak256, Sha1, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256},
};
use proptest::prelude::*;

fn sha1_ref(data: &[u8]) -> Vec<u8> {
  use sha1::Digest as _;
  sha1::Sha1::digest(data).to_vec()
}

fn sha2_ref<D: sha2::Digest>(data: &[u8]) -> Vec<u8> {
  D::digest(data).to_vec()
}

fn sha3_ref<D: sha3::Digest>(data: &[u8]) -> Vec<u8> {
  D::digest(data).to_vec()
}

fn pair(len: usize) -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), len)
}

proptest! {
  #[test]
  fn sha1_matches_sha1_crate(data in pair(Sha1::INPUT_LEN)) {
    prop_assert_eq!(Sha1::compress(&data).to_vec(), sha1_ref(&data));
  }

  #[test]
  fn sha224_matches_sha2(data in pair(Sha224::INPUT_LEN)) {
    prop_assert_eq!(Sha224::compress(&data).to_vec(), sha2_ref::<sha2::Sha224>(&data));
  }

  #[test]
  fn sha256_matches_sha2(data in pair(Sha256::INPUT_LEN)) {
    prop_assert_eq!(Sha256::compress(&data).to_vec(), sha2_ref::<sha2::Sha256>(&data));
  }

  #[test]
  fn sha384_matches_sha2(data in pair(Sha384::INPUT_LEN)) {
    prop_assert_eq!(Sha384::compress(&data).to_vec(), sha2_ref::<sha2::Sha384>(&data));
  }

  #[test]
  fn sha512_matches_sha2(data in pair(Sha512::INPUT_LEN)) {
    prop_assert_eq!(Sha512::compress(&data).to_vec(), sha2_ref::<sha2::Sha512>(&data));
  }

  #[test]
  fn sha512_224_matches_sha2(data in pair(Sha512_224::INPUT_LEN)) {
    prop_assert_eq!(Sha512_224::compress(&data).to_vec(), sha2_ref::<sha2::Sha512_224>(&data));
  }

  #[test]
  fn sha512_256_matches_sha2(data in pair(Sha512_256::INPUT_LEN)) {
    prop_assert_eq!(Sha512_256::compress(&data).to_vec(), sha2_ref::<sha2::Sha512_256>(&data));
  }

  #[test]
  fn sha3_224_matches_sha3(data in pair(Sha3_224::INPUT_LEN)) {
    prop_assert_eq!(Sha3_224::compress(&data).to_vec(), sha3_ref::<sha3::Sha3_224>(&data));
  }

  #[test]
  fn sha3_256_matches_sha3(data in pair(Sha3_256::INPUT_LEN)) {
    prop_assert_eq!(Sha3_256::compress(&data).to_vec(), sha3_ref::<sha3::Sha3_256>(&data));
  }

  #[test]
  fn sha3_384_matches_sha3(data in pair(Sha3_384::INPUT_LEN)) {
    prop_assert_eq!(Sha3_384::compress(&data).to_vec(), sha3_ref::<sha3::Sha3_384>(&data));
  }

  #[test]
  fn sha3_512_matches_sha3(data in pair(Sha3_512::INPUT_LEN)) {
    prop_assert_eq!(Sha3_512::compress(&data).to_vec(), sha3_ref::<sha3::Sha3_512>(&data));
  }

  #[test]
  fn keccak256_matches_sha3(data in pair(Keccak256::INPUT_LEN)) {
    prop_assert_eq!(Keccak256::compress(&data).to_vec(), sha3_ref::<sha3::Keccak256>(&data));
  }

  #[test]
  fn compress_pair_is_concatenation(left in pair(32), right in pair(32)) {
    let l: [u8; 32] = left.clone().try_into().unwrap();
    let r: [u8; 32] = right.clone().try_into().unwrap();
    let joined = [left, right].concat();
    prop_assert_eq!(Sha256::compress_pair(&l, &r), Sha256::compress(&joined));
    prop_assert_eq!(Keccak256::compress_pair(&l, &r), Keccak256::compress(&joined));
  }
}

#![no_main]

use hashes::{
  Variant,
  crypto::{Keccak256, Sha3_256, keccak::KeccakKernelId},
};
use libfuzzer_sys::fuzz_target;

fn reference(variant: Variant, input: &[u8]) -> Vec<u8> {
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

fuzz_target!(|input: &[u8]| {
  let Some((&selector, rest)) = input.split_first() else {
    return;
  };
  let variant = Variant::ALL[usize::from(selector) % Variant::ALL.len()];

  let mut out = vec![0u8; variant.digest_len()];
  if rest.len() != variant.input_len() {
    assert!(variant.try_hash(rest, &mut out).is_err());
    return;
  }

  variant.hash(rest, &mut out);
  assert_eq!(out, reference(variant, rest), "{variant}");

  if rest.len() == 64 {
    for kernel in [KeccakKernelId::Lanes64, KeccakKernelId::Interleaved32] {
      assert_eq!(
        Sha3_256::compress_with_kernel(kernel, rest),
        Sha3_256::compress_with_kernel(KeccakKernelId::Lanes64, rest)
      );
      assert_eq!(
        Keccak256::compress_with_kernel(kernel, rest),
        Keccak256::compress_with_kernel(KeccakKernelId::Lanes64, rest)
      );
    }
  }
});

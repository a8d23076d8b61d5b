use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashes::{
  Variant,
  crypto::{Keccak256, Sha3_256, Sha3_512, keccak::kernels},
};

mod support;

fn compress(c: &mut Criterion) {
  let mut group = c.benchmark_group("hashes/compress");

  for variant in Variant::ALL {
    let input = support::pseudo_random_bytes(variant.input_len(), 0xD1CE_B00C_D15C_0FFE);
    let mut out = vec![0u8; variant.digest_len()];
    group.throughput(Throughput::Bytes(variant.input_len() as u64));
    group.bench_with_input(BenchmarkId::new("merklize", variant.as_str()), &input, |b, d| {
      b.iter(|| {
        variant.hash(black_box(d), &mut out);
        black_box(&out);
      })
    });
  }

  let input = support::pseudo_random_bytes(64, 1);
  group.throughput(Throughput::Bytes(64));
  group.bench_with_input(BenchmarkId::new("sha2-256", "sha2"), &input, |b, d| {
    b.iter(|| {
      use sha2::Digest as _;
      black_box(sha2::Sha256::digest(black_box(d)))
    })
  });
  group.bench_with_input(BenchmarkId::new("sha3-256", "sha3"), &input, |b, d| {
    b.iter(|| {
      use sha3::Digest as _;
      black_box(sha3::Sha3_256::digest(black_box(d)))
    })
  });
  group.bench_with_input(BenchmarkId::new("keccak-256", "sha3"), &input, |b, d| {
    b.iter(|| {
      use sha3::Digest as _;
      black_box(sha3::Keccak256::digest(black_box(d)))
    })
  });

  group.finish();
}

fn keccak_kernels(c: &mut Criterion) {
  let mut group = c.benchmark_group("hashes/keccak-kernels");
  let wide = support::pseudo_random_bytes(128, 7);

  for &kernel in kernels::ALL {
    group.throughput(Throughput::Bytes(64));
    group.bench_with_input(BenchmarkId::new("sha3-256", kernel.as_str()), &wide[..64], |b, d| {
      b.iter(|| black_box(Sha3_256::compress_with_kernel(kernel, black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("keccak-256", kernel.as_str()), &wide[..64], |b, d| {
      b.iter(|| black_box(Keccak256::compress_with_kernel(kernel, black_box(d))))
    });
    group.throughput(Throughput::Bytes(128));
    group.bench_with_input(BenchmarkId::new("sha3-512", kernel.as_str()), &wide, |b, d| {
      b.iter(|| black_box(Sha3_512::compress_with_kernel(kernel, black_box(d))))
    });
  }

  group.finish();
}

criterion_group!(benches, compress, keccak_kernels);
criterion_main!(benches);

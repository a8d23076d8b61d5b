use super::{config, interleaved::keccakf_interleaved, keccakf_lanes};

/// Keccak-p[1600, 24] permutation kernels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum KeccakKernelId {
  /// 25 native 64-bit lanes.
  Lanes64 = 0,
  /// 50 bit-interleaved 32-bit limbs.
  Interleaved32 = 1,
}

pub const ALL: &[KeccakKernelId] = &[KeccakKernelId::Lanes64, KeccakKernelId::Interleaved32];

impl KeccakKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Lanes64 => "lanes64",
      Self::Interleaved32 => "interleaved32",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<KeccakKernelId> {
  match name {
    "lanes64" => Some(KeccakKernelId::Lanes64),
    "interleaved32" => Some(KeccakKernelId::Interleaved32),
    _ => None,
  }
}

#[must_use]
pub fn permute_fn(id: KeccakKernelId) -> fn(&mut [u64; 25]) {
  match id {
    KeccakKernelId::Lanes64 => keccakf_lanes,
    KeccakKernelId::Interleaved32 => keccakf_interleaved,
  }
}

/// Kernel used when nothing is forced: interleaved on 32-bit targets.
#[inline]
#[must_use]
pub const fn default_kernel() -> KeccakKernelId {
  if cfg!(target_pointer_width = "32") {
    KeccakKernelId::Interleaved32
  } else {
    KeccakKernelId::Lanes64
  }
}

/// Kernel selected by the process configuration.
#[inline]
#[must_use]
pub fn active() -> KeccakKernelId {
  config::get().effective_kernel
}

//! Keccak runtime configuration (kernel override).
//!
//! This module centralizes Keccak kernel selection so:
//! - Benchmarks/tests can force a specific kernel
//! - Introspection can report the active configuration without allocation

use super::kernels::{KeccakKernelId, default_kernel};

/// Forced kernel selection for the sponge variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeccakForce {
  /// Use the default for the target's pointer width.
  #[default]
  Auto,
  /// Force the 64-bit lane kernel.
  Lanes,
  /// Force the bit-interleaved 32-bit kernel.
  Interleaved,
}

impl KeccakForce {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Lanes => "lanes",
      Self::Interleaved => "interleaved",
    }
  }

  /// Parse an override value; `None` for empty or unrecognized input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("lanes") || value.eq_ignore_ascii_case("lanes64") || value.eq_ignore_ascii_case("64") {
      return Some(Self::Lanes);
    }
    if value.eq_ignore_ascii_case("interleaved")
      || value.eq_ignore_ascii_case("interleaved32")
      || value.eq_ignore_ascii_case("bi")
      || value.eq_ignore_ascii_case("32")
    {
      return Some(Self::Interleaved);
    }

    None
  }
}

/// Full Keccak runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeccakConfig {
  /// Requested force mode (env/programmatic).
  pub requested_force: KeccakForce,
  /// Kernel the sponge variants will run.
  pub effective_kernel: KeccakKernelId,
}

impl KeccakConfig {
  /// Resolve a force request into a concrete kernel.
  #[must_use]
  pub const fn resolve(requested_force: KeccakForce) -> Self {
    let effective_kernel = match requested_force {
      KeccakForce::Auto => default_kernel(),
      KeccakForce::Lanes => KeccakKernelId::Lanes64,
      KeccakForce::Interleaved => KeccakKernelId::Interleaved32,
    };
    Self {
      requested_force,
      effective_kernel,
    }
  }
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: KeccakForce,
}

/// Environment variable consulted once per process.
pub const FORCE_ENV: &str = "MERKLIZE_KECCAK_FORCE";

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  let force = std::env::var(FORCE_ENV)
    .ok()
    .and_then(|value| KeccakForce::parse(&value))
    .unwrap_or_default();
  Overrides { force }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

/// Compute the effective Keccak config for the current process.
///
/// This merges the target default with the `MERKLIZE_KECCAK_FORCE` env
/// override when `std` is enabled.
#[inline]
#[must_use]
pub fn get() -> KeccakConfig {
  KeccakConfig::resolve(overrides().force)
}

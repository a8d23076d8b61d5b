//! Output-buffer geometry and request validation.
//!
//! A materialized tree over `N` leaves lives in one buffer of `N` slots.
//! Level `k` (1-based, leaves are level 0 and live elsewhere) occupies slots
//! `[N >> k, N >> (k - 1))`, so the root is slot 1 and slot 0 is never
//! written. Each level sits directly below the one it was computed from.
//!
//! ```text
//! N = 8:  slot  0   1   2   3   4   5   6   7
//!               -  L3  L2  L2  L1  L1  L1  L1
//! ```

use core::ops::{Range, RangeInclusive};

use hashes::Variant;

use crate::MerklizeError;

/// Slot holding the root digest.
pub const ROOT_SLOT: usize = 1;

/// Number of levels above the leaves.
#[inline]
#[must_use]
pub const fn depth(leaf_count: usize) -> u32 {
  leaf_count.trailing_zeros()
}

/// Slots occupied by `level` (`1..=depth`).
#[inline]
#[must_use]
pub const fn level_slots(leaf_count: usize, level: u32) -> Range<usize> {
  (leaf_count >> level)..(leaf_count >> (level - 1))
}

/// Required intermediate node count for `leaf_count` leaves.
#[inline]
#[must_use]
pub const fn intermediate_count(leaf_count: usize) -> usize {
  leaf_count.saturating_sub(1)
}

/// Bytes needed for a materialized tree, or `None` on overflow.
#[inline]
#[must_use]
pub const fn output_len(variant: Variant, leaf_count: usize) -> Option<usize> {
  leaf_count.checked_mul(variant.slot_len())
}

/// A request that passed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
  pub variant: Variant,
  pub leaf_count: usize,
  pub depth: u32,
  pub batch: usize,
}

impl Plan {
  /// Levels to compute, bottom-up.
  #[inline]
  #[must_use]
  pub fn levels(&self) -> RangeInclusive<u32> {
    1..=self.depth
  }

  /// Parent digests produced at `level`.
  #[inline]
  #[must_use]
  pub fn units(&self, level: u32) -> usize {
    self.leaf_count >> level
  }

  /// Batch size applied at `level`.
  #[inline]
  #[must_use]
  pub fn batch_for(&self, level: u32) -> usize {
    self.batch.min(self.units(level))
  }
}

fn check_leaves<E>(variant: Variant, leaves_len: usize, leaf_count: usize, batch: usize) -> Result<Plan, MerklizeError<E>> {
  if !leaf_count.is_power_of_two() {
    return Err(MerklizeError::NotPowerOfTwo(leaf_count));
  }
  if leaf_count < 2 {
    return Err(MerklizeError::TooFewLeaves(leaf_count));
  }

  // Slots are never shorter than digests, so this bounds every later size.
  let slot_len = variant.slot_len();
  if output_len(variant, leaf_count).is_none() {
    return Err(MerklizeError::LeafCountOverflow { leaf_count, slot_len });
  }

  let digest_len = variant.digest_len();
  let expected = leaf_count * digest_len;
  if leaves_len != expected {
    return Err(MerklizeError::LeafBufferLength {
      expected,
      actual: leaves_len,
      leaf_count,
      digest_len,
    });
  }

  Ok(Plan {
    variant,
    leaf_count,
    depth: depth(leaf_count),
    batch,
  })
}

/// Validate everything except the output buffer (root-only strategy).
pub fn validate_leaves<E>(
  variant: Variant,
  leaves_len: usize,
  leaf_count: usize,
  batch: usize,
) -> Result<Plan, MerklizeError<E>> {
  let plan = check_leaves(variant, leaves_len, leaf_count, batch)?;
  validate_batch(&plan)?;
  Ok(plan)
}

/// Validate a materialized-tree request.
pub fn validate<E>(
  variant: Variant,
  leaves_len: usize,
  leaf_count: usize,
  out_len: usize,
  intermediates: usize,
  batch: usize,
) -> Result<Plan, MerklizeError<E>> {
  let plan = check_leaves(variant, leaves_len, leaf_count, batch)?;

  if intermediates != intermediate_count(leaf_count) {
    return Err(MerklizeError::IntermediateCount {
      expected: intermediate_count(leaf_count),
      actual: intermediates,
      leaf_count,
    });
  }

  let slot_len = variant.slot_len();
  let slots = intermediates + 1;
  if out_len != slots * slot_len {
    return Err(MerklizeError::OutputBufferLength {
      expected: slots * slot_len,
      actual: out_len,
      slots,
      slot_len,
    });
  }

  validate_batch(&plan)?;
  Ok(plan)
}

fn validate_batch<E>(plan: &Plan) -> Result<(), MerklizeError<E>> {
  if plan.batch == 0 {
    return Err(MerklizeError::ZeroBatchSize);
  }

  let first = plan.units(1);
  if plan.batch > first || first % plan.batch != 0 {
    return Err(MerklizeError::BatchSize {
      batch: plan.batch,
      units: first,
      level: 1,
    });
  }

  for level in plan.levels() {
    let units = plan.units(level);
    let batch = plan.batch_for(level);
    if units % batch != 0 {
      return Err(MerklizeError::BatchSize { batch, units, level });
    }
  }
  Ok(())
}

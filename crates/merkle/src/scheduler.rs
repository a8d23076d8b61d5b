//! Level-synchronous merklization.
//!
//! Each level is one [`LevelTask`]; level `k + 1` is submitted only after
//! level `k` has been submitted and names it as its predecessor.

#![allow(clippy::indexing_slicing)] // Region bounds come from a validated `Plan`

use core::ops::Range;

use hashes::Variant;
use tracing::{debug, trace, warn};

use crate::{
  MerklizeError,
  executor::{Executor, LevelTask, PairKernel},
  layout::{self, Plan, ROOT_SLOT},
};

/// Outcome of a materialized merklization.
///
/// Holds one event per level in dispatch order. The root digest lives in
/// slot [`ROOT_SLOT`] of the output buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion<Ev> {
  events: Vec<Ev>,
  slot_len: usize,
  digest_len: usize,
}

impl<Ev> Completion<Ev> {
  /// Per-level events, level 1 first.
  #[inline]
  #[must_use]
  pub fn levels(&self) -> &[Ev] {
    &self.events
  }

  /// Levels above the leaves.
  #[inline]
  #[must_use]
  pub fn depth(&self) -> usize {
    self.events.len()
  }

  #[inline]
  #[must_use]
  pub fn root_slot(&self) -> usize {
    ROOT_SLOT
  }

  /// Byte range of the root digest in the output buffer.
  #[inline]
  #[must_use]
  pub fn root_range(&self) -> Range<usize> {
    let start = ROOT_SLOT * self.slot_len;
    start..start + self.digest_len
  }

  /// Root digest within `out`, or `None` if `out` is too short.
  #[inline]
  #[must_use]
  pub fn root<'a>(&self, out: &'a [u8]) -> Option<&'a [u8]> {
    out.get(self.root_range())
  }

  /// Block until the final level has completed on `executor`.
  pub fn wait<X>(&self, executor: &X) -> Result<(), X::Error>
  where
    X: Executor<Event = Ev>,
  {
    match self.events.last() {
      Some(event) => executor.wait(event),
      None => Ok(()),
    }
  }
}

/// Merklize `leaf_count` packed leaf digests into `out`.
///
/// `out` must hold `intermediate_count + 1` slots of `variant.slot_len()`
/// bytes and `intermediate_count` must equal `leaf_count - 1`. Level `k`
/// lands in slots `[leaf_count >> k, leaf_count >> (k - 1))`; the root is
/// slot 1 and slot 0 is left untouched.
///
/// All preconditions are checked before the first level is dispatched. On
/// `Ok` every level has completed.
pub fn merklize<X: Executor>(
  executor: X,
  variant: Variant,
  leaves: &[u8],
  leaf_count: usize,
  out: &mut [u8],
  intermediate_count: usize,
  batch: usize,
) -> Result<Completion<X::Event>, MerklizeError<X::Error>> {
  let plan = layout::validate(variant, leaves.len(), leaf_count, out.len(), intermediate_count, batch)
    .inspect_err(|e| warn!(%variant, leaf_count, batch, error = %e, "merklize rejected"))?;

  debug!(
    %variant,
    leaf_count,
    batch,
    depth = plan.depth,
    executor = executor.name(),
    "merklize start"
  );

  let digest_len = variant.digest_len();
  let slot_len = variant.slot_len();
  let mut events: Vec<X::Event> = Vec::with_capacity(plan.depth as usize);

  for level in plan.levels() {
    let units = plan.units(level);
    let task = if level == 1 {
      let output = &mut out[units * slot_len..2 * units * slot_len];
      let kernel = PairKernel::new(variant, digest_len, slot_len);
      LevelTask::new(level, units, plan.batch_for(level), leaves, output, kernel)
    } else {
      // Parents sit directly below their children: split at the boundary.
      let (lower, upper) = out[..4 * units * slot_len].split_at_mut(2 * units * slot_len);
      let kernel = PairKernel::new(variant, slot_len, slot_len);
      LevelTask::new(level, units, plan.batch_for(level), upper, &mut lower[units * slot_len..], kernel)
    };
    trace!(level, units, batch = task.batch(), batches = task.batches(), "dispatch level");

    let event = executor.submit(events.last(), task).map_err(MerklizeError::Backend)?;
    events.push(event);
  }

  let completion = Completion {
    events,
    slot_len,
    digest_len,
  };
  completion.wait(&executor).map_err(MerklizeError::Backend)?;

  debug!(%variant, leaf_count, depth = plan.depth, "merklize complete");
  Ok(completion)
}

/// Compute only the root, keeping at most two levels alive.
///
/// Same preconditions as [`merklize`] minus the output-buffer checks.
pub fn merklize_root<X: Executor>(
  executor: X,
  variant: Variant,
  leaves: &[u8],
  leaf_count: usize,
  batch: usize,
) -> Result<Vec<u8>, MerklizeError<X::Error>> {
  let plan: Plan = layout::validate_leaves(variant, leaves.len(), leaf_count, batch)
    .inspect_err(|e| warn!(%variant, leaf_count, batch, error = %e, "merklize rejected"))?;

  debug!(
    %variant,
    leaf_count,
    batch,
    depth = plan.depth,
    executor = executor.name(),
    "merklize root start"
  );

  let digest_len = variant.digest_len();
  let kernel = PairKernel::new(variant, digest_len, digest_len);
  let mut current: Vec<u8> = Vec::new();
  let mut next: Vec<u8> = Vec::new();
  let mut last: Option<X::Event> = None;

  for level in plan.levels() {
    let units = plan.units(level);
    next.clear();
    next.resize(units * digest_len, 0);

    let input: &[u8] = if level == 1 { leaves } else { &current };
    let task = LevelTask::new(level, units, plan.batch_for(level), input, &mut next, kernel);
    trace!(level, units, batch = task.batch(), batches = task.batches(), "dispatch level");

    let event = executor.submit(last.as_ref(), task).map_err(MerklizeError::Backend)?;
    last = Some(event);
    core::mem::swap(&mut current, &mut next);
  }

  if let Some(event) = &last {
    executor.wait(event).map_err(MerklizeError::Backend)?;
  }

  debug!(%variant, leaf_count, depth = plan.depth, "merklize root complete");
  current.truncate(digest_len);
  Ok(current)
}

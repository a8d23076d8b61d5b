//! Compute dispatch for merkle levels.
//!
//! The scheduler hands an [`Executor`] one [`LevelTask`] per level. A task
//! borrows its level's input and output regions, so every unit has finished
//! by the time `submit` returns; the `after` argument still names the
//! predecessor level explicitly so backends that queue work (device streams,
//! command buffers) can order it.

#![allow(clippy::indexing_slicing)] // Pair/slot offsets are bounded by the validated layout

use core::{convert::Infallible, fmt};

use hashes::{CompressFn, Variant};
use traits::MAX_INPUT_LEN;

use crate::config::SchedulerConfig;
#[cfg(feature = "parallel")]
use crate::parallel::{Rayon, RayonError};

/// Completion record for one dispatched level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LevelEvent {
  /// Level index, `1..=depth`.
  pub level: u32,
  /// Parent digests written.
  pub units: usize,
  /// Equal-size groups the units were split into.
  pub batches: usize,
}

/// Hashes pairs of child slots into parent slots.
///
/// `in_stride` is the distance between consecutive child digests (the digest
/// length for packed leaves, the slot length for stored levels); `out_stride`
/// is the output slot length. When a stride exceeds the digest length only
/// the digest prefix of each slot is read or written.
#[derive(Clone, Copy)]
pub struct PairKernel {
  variant: Variant,
  compress: CompressFn,
  digest_len: usize,
  in_stride: usize,
  out_stride: usize,
}

impl fmt::Debug for PairKernel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PairKernel")
      .field("variant", &self.variant)
      .field("in_stride", &self.in_stride)
      .field("out_stride", &self.out_stride)
      .finish_non_exhaustive()
  }
}

impl PairKernel {
  #[must_use]
  pub fn new(variant: Variant, in_stride: usize, out_stride: usize) -> Self {
    let digest_len = variant.digest_len();
    debug_assert!(in_stride >= digest_len && out_stride >= digest_len);
    Self {
      variant,
      compress: variant.compress_fn(),
      digest_len,
      in_stride,
      out_stride,
    }
  }

  #[inline]
  #[must_use]
  pub fn variant(&self) -> Variant {
    self.variant
  }

  /// Input bytes consumed per parent.
  #[inline]
  #[must_use]
  pub fn pair_len(&self) -> usize {
    2 * self.in_stride
  }

  /// Output bytes produced per parent.
  #[inline]
  #[must_use]
  pub fn slot_len(&self) -> usize {
    self.out_stride
  }

  /// Hash every pair in `input` into the matching slot of `output`.
  #[inline]
  pub fn run_batch(&self, input: &[u8], output: &mut [u8]) {
    debug_assert_eq!(input.len() / self.pair_len(), output.len() / self.out_stride);
    for (pair, parent) in input
      .chunks_exact(self.pair_len())
      .zip(output.chunks_exact_mut(self.out_stride))
    {
      self.run_unit(pair, parent);
    }
  }

  #[inline(always)]
  fn run_unit(&self, pair: &[u8], parent: &mut [u8]) {
    let d = self.digest_len;
    let out = &mut parent[..d];
    if self.in_stride == d {
      (self.compress)(pair, out);
      return;
    }

    // Padded slots: splice the two digest prefixes into a contiguous input.
    let mut buf = [0u8; MAX_INPUT_LEN];
    buf[..d].copy_from_slice(&pair[..d]);
    buf[d..2 * d].copy_from_slice(&pair[self.in_stride..self.in_stride + d]);
    (self.compress)(&buf[..2 * d], out);
  }
}

/// One level of independent pair compressions.
#[derive(Debug)]
pub struct LevelTask<'a> {
  level: u32,
  units: usize,
  batch: usize,
  input: &'a [u8],
  output: &'a mut [u8],
  kernel: PairKernel,
}

impl<'a> LevelTask<'a> {
  pub(crate) fn new(
    level: u32,
    units: usize,
    batch: usize,
    input: &'a [u8],
    output: &'a mut [u8],
    kernel: PairKernel,
  ) -> Self {
    debug_assert!(batch >= 1 && units % batch == 0);
    debug_assert_eq!(input.len(), units * kernel.pair_len());
    debug_assert_eq!(output.len(), units * kernel.slot_len());
    Self {
      level,
      units,
      batch,
      input,
      output,
      kernel,
    }
  }

  #[inline]
  #[must_use]
  pub fn level(&self) -> u32 {
    self.level
  }

  #[inline]
  #[must_use]
  pub fn units(&self) -> usize {
    self.units
  }

  #[inline]
  #[must_use]
  pub fn batch(&self) -> usize {
    self.batch
  }

  #[inline]
  #[must_use]
  pub fn batches(&self) -> usize {
    self.units / self.batch
  }

  /// Input bytes covered by one batch.
  #[inline]
  #[must_use]
  pub fn input_batch_len(&self) -> usize {
    self.batch * self.kernel.pair_len()
  }

  /// Output bytes covered by one batch.
  #[inline]
  #[must_use]
  pub fn output_batch_len(&self) -> usize {
    self.batch * self.kernel.slot_len()
  }

  #[inline]
  #[must_use]
  pub fn event(&self) -> LevelEvent {
    LevelEvent {
      level: self.level,
      units: self.units,
      batches: self.batches(),
    }
  }

  /// Give up the borrowed regions and the kernel.
  #[inline]
  #[must_use]
  pub fn split(self) -> (&'a [u8], &'a mut [u8], PairKernel) {
    (self.input, self.output, self.kernel)
  }

  /// Run every batch in order on the calling thread.
  pub fn run_serial(self) {
    let (ib, ob) = (self.input_batch_len(), self.output_batch_len());
    let (input, output, kernel) = self.split();
    for (i, o) in input.chunks(ib).zip(output.chunks_mut(ob)) {
      kernel.run_batch(i, o);
    }
  }
}

/// A parallel compute backend.
pub trait Executor {
  type Error: std::error::Error + Send + Sync + 'static;
  type Event: Clone + fmt::Debug;

  /// Short backend name for logs.
  fn name(&self) -> &'static str;

  /// Run all units of `task`; `after` is the level it depends on.
  ///
  /// Every output slot of the task is written when this returns `Ok`.
  fn submit(&self, after: Option<&Self::Event>, task: LevelTask<'_>) -> Result<Self::Event, Self::Error>;

  /// Block until `event` has completed.
  fn wait(&self, event: &Self::Event) -> Result<(), Self::Error>;
}

impl<X: Executor + ?Sized> Executor for &X {
  type Error = X::Error;
  type Event = X::Event;

  fn name(&self) -> &'static str {
    (**self).name()
  }

  fn submit(&self, after: Option<&Self::Event>, task: LevelTask<'_>) -> Result<Self::Event, Self::Error> {
    (**self).submit(after, task)
  }

  fn wait(&self, event: &Self::Event) -> Result<(), Self::Error> {
    (**self).wait(event)
  }
}

/// Runs batches in order on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct Serial;

impl Executor for Serial {
  type Error = Infallible;
  type Event = LevelEvent;

  fn name(&self) -> &'static str {
    "serial"
  }

  fn submit(&self, after: Option<&LevelEvent>, task: LevelTask<'_>) -> Result<LevelEvent, Infallible> {
    debug_assert!(after.is_none_or(|prev| prev.level + 1 == task.level()));
    let event = task.event();
    task.run_serial();
    Ok(event)
  }

  fn wait(&self, _event: &LevelEvent) -> Result<(), Infallible> {
    Ok(())
  }
}

/// Error type of [`Dispatch`].
#[cfg(feature = "parallel")]
pub type DispatchError = RayonError;
/// Error type of [`Dispatch`].
#[cfg(not(feature = "parallel"))]
pub type DispatchError = Infallible;

/// Executor chosen at runtime from a [`SchedulerConfig`].
#[derive(Debug)]
pub enum Dispatch {
  Serial(Serial),
  #[cfg(feature = "parallel")]
  Rayon(Rayon),
}

impl Dispatch {
  /// Serial when `parallel` is off (or the feature is disabled), otherwise a
  /// rayon pool with `config.threads` workers.
  pub fn from_config(config: &SchedulerConfig) -> Result<Self, DispatchError> {
    #[cfg(feature = "parallel")]
    if config.parallel {
      return Ok(Self::Rayon(Rayon::with_threads(config.threads)?));
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config;
    Ok(Self::Serial(Serial))
  }
}

impl Executor for Dispatch {
  type Error = DispatchError;
  type Event = LevelEvent;

  fn name(&self) -> &'static str {
    match self {
      Self::Serial(x) => x.name(),
      #[cfg(feature = "parallel")]
      Self::Rayon(x) => x.name(),
    }
  }

  fn submit(&self, after: Option<&LevelEvent>, task: LevelTask<'_>) -> Result<LevelEvent, DispatchError> {
    match self {
      Self::Serial(x) => x.submit(after, task).map_err(|never| match never {}),
      #[cfg(feature = "parallel")]
      Self::Rayon(x) => x.submit(after, task),
    }
  }

  fn wait(&self, event: &LevelEvent) -> Result<(), DispatchError> {
    match self {
      Self::Serial(x) => x.wait(event).map_err(|never| match never {}),
      #[cfg(feature = "parallel")]
      Self::Rayon(x) => x.wait(event),
    }
  }
}

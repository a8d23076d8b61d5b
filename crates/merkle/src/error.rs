//! Merklization errors.

/// Why a merklization request failed.
///
/// Every variant except [`Backend`](Self::Backend) is a precondition
/// violation detected before any level is dispatched; in that case nothing
/// has been written to the output buffer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MerklizeError<E> {
  #[error("leaf count {0} is not a power of two")]
  NotPowerOfTwo(usize),

  #[error("leaf count {0} is below the minimum of 2")]
  TooFewLeaves(usize),

  #[error("leaf count {leaf_count} with {slot_len}-byte slots overflows usize")]
  LeafCountOverflow { leaf_count: usize, slot_len: usize },

  #[error("leaf buffer holds {actual} bytes, expected {expected} ({leaf_count} leaves of {digest_len} bytes)")]
  LeafBufferLength {
    expected: usize,
    actual: usize,
    leaf_count: usize,
    digest_len: usize,
  },

  #[error("intermediate node count {actual} does not match {expected} for {leaf_count} leaves")]
  IntermediateCount {
    expected: usize,
    actual: usize,
    leaf_count: usize,
  },

  #[error("output buffer holds {actual} bytes, expected {expected} ({slots} slots of {slot_len} bytes)")]
  OutputBufferLength {
    expected: usize,
    actual: usize,
    slots: usize,
    slot_len: usize,
  },

  #[error("batch size must be at least 1")]
  ZeroBatchSize,

  #[error("batch size {batch} does not evenly divide the {units} pairings of level {level}")]
  BatchSize { batch: usize, units: usize, level: u32 },

  #[error("compute backend failure: {0}")]
  Backend(#[source] E),
}

impl<E> MerklizeError<E> {
  /// `true` for everything except backend failures.
  #[must_use]
  pub fn is_precondition(&self) -> bool {
    !matches!(self, Self::Backend(_))
  }

  /// Re-type a precondition error for another backend; backend errors are
  /// converted with `f`.
  pub fn map_backend<F>(self, f: impl FnOnce(E) -> F) -> MerklizeError<F> {
    match self {
      Self::NotPowerOfTwo(n) => MerklizeError::NotPowerOfTwo(n),
      Self::TooFewLeaves(n) => MerklizeError::TooFewLeaves(n),
      Self::LeafCountOverflow { leaf_count, slot_len } => MerklizeError::LeafCountOverflow { leaf_count, slot_len },
      Self::LeafBufferLength {
        expected,
        actual,
        leaf_count,
        digest_len,
      } => MerklizeError::LeafBufferLength {
        expected,
        actual,
        leaf_count,
        digest_len,
      },
      Self::IntermediateCount {
        expected,
        actual,
        leaf_count,
      } => MerklizeError::IntermediateCount {
        expected,
        actual,
        leaf_count,
      },
      Self::OutputBufferLength {
        expected,
        actual,
        slots,
        slot_len,
      } => MerklizeError::OutputBufferLength {
        expected,
        actual,
        slots,
        slot_len,
      },
      Self::ZeroBatchSize => MerklizeError::ZeroBatchSize,
      Self::BatchSize { batch, units, level } => MerklizeError::BatchSize { batch, units, level },
      Self::Backend(e) => MerklizeError::Backend(f(e)),
    }
  }
}

//! Owned front end: [`Merklizer`] and the [`MerkleTree`] it produces.

#![allow(clippy::indexing_slicing)] // Slot ranges derive from the tree's own leaf count

use hashes::Variant;

use crate::{
  MerklizeError,
  config::{self, SchedulerConfig},
  executor::{Dispatch, DispatchError, Executor, Serial},
  layout::{self, ROOT_SLOT},
  scheduler::{self, Completion},
};
#[cfg(feature = "parallel")]
use crate::parallel::Rayon;

/// Merklizes leaf buffers with a fixed variant, batch size and executor.
///
/// The configured batch size is clamped to the first level's pair count, so
/// the default of 64 works for any tree with at least two leaves.
#[derive(Debug, Clone)]
pub struct Merklizer<X = Serial> {
  variant: Variant,
  batch_size: usize,
  executor: X,
}

impl Merklizer<Serial> {
  #[must_use]
  pub fn new(variant: Variant) -> Self {
    Self {
      variant,
      batch_size: config::DEFAULT_BATCH_SIZE,
      executor: Serial,
    }
  }
}

#[cfg(feature = "parallel")]
impl Merklizer<Rayon> {
  /// Merklizer on rayon's global pool.
  #[must_use]
  pub fn parallel(variant: Variant) -> Self {
    Merklizer::new(variant).with_executor(Rayon::global())
  }
}

impl Merklizer<Dispatch> {
  /// Build from explicit configuration; see [`config::get`] for the
  /// environment-derived default.
  pub fn from_config(variant: Variant, config: &SchedulerConfig) -> Result<Self, DispatchError> {
    Ok(Self {
      variant,
      batch_size: config.batch_size,
      executor: Dispatch::from_config(config)?,
    })
  }
}

impl<X: Executor> Merklizer<X> {
  /// Swap the executor, keeping variant and batch size.
  #[must_use]
  pub fn with_executor<Y: Executor>(self, executor: Y) -> Merklizer<Y> {
    Merklizer {
      variant: self.variant,
      batch_size: self.batch_size,
      executor,
    }
  }

  /// Requested pairings per batch. Zero is rejected at merklize time.
  #[must_use]
  pub fn batch_size(mut self, batch_size: usize) -> Self {
    self.batch_size = batch_size;
    self
  }

  #[inline]
  #[must_use]
  pub fn variant(&self) -> Variant {
    self.variant
  }

  #[inline]
  #[must_use]
  pub fn executor(&self) -> &X {
    &self.executor
  }

  fn leaf_count(&self, leaves: &[u8]) -> usize {
    leaves.len() / self.variant.digest_len()
  }

  fn batch_for(&self, leaf_count: usize) -> usize {
    self.batch_size.min((leaf_count / 2).max(1))
  }

  /// Build the full tree over packed leaf digests.
  pub fn tree(&self, leaves: &[u8]) -> Result<MerkleTree, MerklizeError<X::Error>> {
    let leaf_count = self.leaf_count(leaves);
    let Some(len) = layout::output_len(self.variant, leaf_count) else {
      return Err(MerklizeError::LeafCountOverflow {
        leaf_count,
        slot_len: self.variant.slot_len(),
      });
    };
    let mut nodes = vec![0u8; len];
    self.into_buffer(leaves, &mut nodes)?;
    Ok(MerkleTree {
      variant: self.variant,
      leaf_count,
      nodes,
    })
  }

  /// Compute only the root digest.
  pub fn root(&self, leaves: &[u8]) -> Result<Vec<u8>, MerklizeError<X::Error>> {
    let leaf_count = self.leaf_count(leaves);
    scheduler::merklize_root(
      &self.executor,
      self.variant,
      leaves,
      leaf_count,
      self.batch_for(leaf_count),
    )
  }

  /// Merklize into a caller-provided buffer of `leaf_count` slots.
  pub fn into_buffer(&self, leaves: &[u8], out: &mut [u8]) -> Result<Completion<X::Event>, MerklizeError<X::Error>> {
    let leaf_count = self.leaf_count(leaves);
    scheduler::merklize(
      &self.executor,
      self.variant,
      leaves,
      leaf_count,
      out,
      layout::intermediate_count(leaf_count),
      self.batch_for(leaf_count),
    )
  }
}

/// A materialized tree. Leaves are not stored; levels run `1..=depth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleTree {
  variant: Variant,
  leaf_count: usize,
  nodes: Vec<u8>,
}

impl MerkleTree {
  #[inline]
  #[must_use]
  pub fn variant(&self) -> Variant {
    self.variant
  }

  #[inline]
  #[must_use]
  pub fn leaf_count(&self) -> usize {
    self.leaf_count
  }

  #[inline]
  #[must_use]
  pub fn depth(&self) -> u32 {
    layout::depth(self.leaf_count)
  }

  #[must_use]
  pub fn root(&self) -> &[u8] {
    let start = ROOT_SLOT * self.variant.slot_len();
    &self.nodes[start..start + self.variant.digest_len()]
  }

  /// Digests of `level`, or `None` outside `1..=depth`.
  #[must_use]
  pub fn level(&self, level: u32) -> Option<Level<'_>> {
    if level == 0 || level > self.depth() {
      return None;
    }
    let slots = layout::level_slots(self.leaf_count, level);
    let slot_len = self.variant.slot_len();
    Some(Level {
      bytes: &self.nodes[slots.start * slot_len..slots.end * slot_len],
      slot_len,
      digest_len: self.variant.digest_len(),
    })
  }

  /// Digest `index` of `level`.
  #[must_use]
  pub fn node(&self, level: u32, index: usize) -> Option<&[u8]> {
    self.level(level)?.get(index)
  }

  /// Raw slot buffer, padding included.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.nodes
  }

  #[inline]
  #[must_use]
  pub fn into_bytes(self) -> Vec<u8> {
    self.nodes
  }
}

/// One level of a [`MerkleTree`].
#[derive(Clone, Copy, Debug)]
pub struct Level<'a> {
  bytes: &'a [u8],
  slot_len: usize,
  digest_len: usize,
}

impl<'a> Level<'a> {
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.bytes.len() / self.slot_len
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  #[must_use]
  pub fn get(&self, index: usize) -> Option<&'a [u8]> {
    let start = index.checked_mul(self.slot_len)?;
    self.bytes.get(start..start.checked_add(self.digest_len)?)
  }

  pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a [u8]> + 'a {
    let digest_len = self.digest_len;
    self.bytes.chunks_exact(self.slot_len).map(move |slot| &slot[..digest_len])
  }
}

#[cfg(test)]
mod tests {
  use hashes::Compress as _;
  use hashes::crypto::Sha512_224;

  use super::*;

  fn leaves(n: usize, d: usize) -> Vec<u8> {
    (0..n).flat_map(|i| core::iter::repeat_n(i as u8, d)).collect()
  }

  #[test]
  fn level_views() {
    let tree = Merklizer::new(Variant::Sha1).tree(&leaves(8, 20)).unwrap();
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.level(1).map(|l| l.len()), Some(4));
    assert_eq!(tree.level(3).map(|l| l.len()), Some(1));
    assert!(tree.level(0).is_none());
    assert!(tree.level(4).is_none());
    assert_eq!(tree.node(3, 0), Some(tree.root()));
    assert_eq!(tree.node(1, 4), None);
  }

  #[test]
  fn sha512_224_levels_are_trimmed() {
    let l = leaves(4, 28);
    let tree = Merklizer::new(Variant::Sha2_512_224).tree(&l).unwrap();
    assert_eq!(tree.as_bytes().len(), 4 * 32);

    let level = tree.level(1).unwrap();
    assert!(level.iter().all(|d| d.len() == 28));
    assert_eq!(level.get(0), Some(&Sha512_224::compress(&l[..56])[..]));
    assert_eq!(level.get(1), Some(&Sha512_224::compress(&l[56..])[..]));
    assert_eq!(tree.root().len(), 28);
  }

  #[test]
  fn default_batch_is_clamped_for_small_trees() {
    let m = Merklizer::new(Variant::Sha2_256);
    assert!(m.tree(&leaves(2, 32)).is_ok());
    assert!(m.root(&leaves(4, 32)).is_ok());
  }

  #[test]
  fn explicit_bad_batch_is_rejected() {
    let m = Merklizer::new(Variant::Sha1).batch_size(3);
    assert!(matches!(m.tree(&leaves(8, 20)), Err(MerklizeError::BatchSize { .. })));
    let m = Merklizer::new(Variant::Sha1).batch_size(0);
    assert_eq!(m.root(&leaves(8, 20)), Err(MerklizeError::ZeroBatchSize));
  }

  #[test]
  fn ragged_leaf_buffer_is_rejected() {
    let r = Merklizer::new(Variant::Sha1).tree(&[0u8; 8 * 20 + 3]);
    assert!(matches!(
      r,
      Err(MerklizeError::LeafBufferLength {
        expected: 160,
        actual: 163,
        ..
      })
    ));
  }

  #[test]
  fn from_config_serial() {
    let config = SchedulerConfig::default().with_parallel(false).with_batch_size(2);
    let m = Merklizer::from_config(Variant::Sha1, &config).unwrap();
    assert_eq!(m.executor().name(), "serial");
    let serial = Merklizer::new(Variant::Sha1).tree(&leaves(8, 20)).unwrap();
    assert_eq!(m.tree(&leaves(8, 20)).unwrap(), serial);
  }
}

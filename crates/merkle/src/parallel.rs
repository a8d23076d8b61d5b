//! Rayon-backed executor.
//!
//! Batches of a level map one-to-one onto rayon tasks. Each batch owns a
//! disjoint `chunks_mut` slice of the output region, so no locking is needed.

use rayon::prelude::*;

use crate::executor::{Executor, LevelEvent, LevelTask};

/// Thread pool construction failed.
#[derive(Debug, thiserror::Error)]
#[error("failed to build rayon thread pool: {0}")]
pub struct RayonError(#[from] rayon::ThreadPoolBuildError);

/// Runs the batches of each level on a rayon pool.
#[derive(Debug, Default)]
pub struct Rayon {
  /// `None` uses rayon's global pool.
  pool: Option<rayon::ThreadPool>,
}

impl Rayon {
  /// Use rayon's global pool.
  #[must_use]
  pub fn global() -> Self {
    Self { pool: None }
  }

  /// Dedicated pool with `threads` workers; `0` uses the global pool.
  pub fn with_threads(threads: usize) -> Result<Self, RayonError> {
    if threads == 0 {
      return Ok(Self::global());
    }
    let pool = rayon::ThreadPoolBuilder::new()
      .num_threads(threads)
      .thread_name(|i| format!("merklize-{i}"))
      .build()?;
    Ok(Self { pool: Some(pool) })
  }

  /// Worker count of the pool in use.
  #[must_use]
  pub fn threads(&self) -> usize {
    match &self.pool {
      Some(pool) => pool.current_num_threads(),
      None => rayon::current_num_threads(),
    }
  }
}

impl Executor for Rayon {
  type Error = RayonError;
  type Event = LevelEvent;

  fn name(&self) -> &'static str {
    "rayon"
  }

  fn submit(&self, after: Option<&LevelEvent>, task: LevelTask<'_>) -> Result<LevelEvent, RayonError> {
    debug_assert!(after.is_none_or(|prev| prev.level + 1 == task.level()));
    let event = task.event();
    let (ib, ob) = (task.input_batch_len(), task.output_batch_len());
    let (input, output, kernel) = task.split();

    let mut run = move || {
      input
        .par_chunks(ib)
        .zip(output.par_chunks_mut(ob))
        .for_each(|(i, o)| kernel.run_batch(i, o));
    };
    match &self.pool {
      Some(pool) => pool.install(run),
      None => run(),
    }
    Ok(event)
  }

  fn wait(&self, _event: &LevelEvent) -> Result<(), RayonError> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use hashes::Variant;

  use super::*;
  use crate::executor::{PairKernel, Serial};

  #[test]
  fn matches_serial() {
    let input: Vec<u8> = (0..64 * 64).map(|i| (i * 7) as u8).collect();
    let kernel = PairKernel::new(Variant::Sha2_256, 32, 32);

    let mut a = vec![0u8; 64 * 32];
    let mut b = vec![0u8; 64 * 32];
    Serial
      .submit(None, LevelTask::new(1, 64, 8, &input, &mut a, kernel))
      .unwrap();
    Rayon::with_threads(3)
      .unwrap()
      .submit(None, LevelTask::new(1, 64, 8, &input, &mut b, kernel))
      .unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn global_pool_runs_batches() {
    let input: Vec<u8> = (0..16 * 40).map(|i| i as u8).collect();
    let kernel = PairKernel::new(Variant::Sha1, 20, 20);
    let mut a = vec![0u8; 16 * 20];
    let mut b = vec![0u8; 16 * 20];
    Serial
      .submit(None, LevelTask::new(1, 16, 4, &input, &mut a, kernel))
      .unwrap();
    let event = Rayon::global()
      .submit(None, LevelTask::new(1, 16, 4, &input, &mut b, kernel))
      .unwrap();
    assert_eq!(event.batches, 4);
    assert_eq!(a, b);
  }

  #[test]
  fn zero_threads_means_global_pool() {
    let r = Rayon::with_threads(0).unwrap();
    assert_eq!(r.threads(), rayon::current_num_threads());
  }

  #[test]
  fn dedicated_pool_size() {
    assert_eq!(Rayon::with_threads(2).unwrap().threads(), 2);
  }
}

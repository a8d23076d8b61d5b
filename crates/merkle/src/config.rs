//! Scheduler configuration (batch size, thread count, backend choice).
//!
//! Defaults can be overridden per process through environment variables;
//! [`get`] reads them once and caches the result.

use tracing::warn;

/// Default pairings per batch.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Environment variable overriding [`SchedulerConfig::batch_size`].
pub const BATCH_SIZE_ENV: &str = "MERKLIZE_BATCH_SIZE";
/// Environment variable overriding [`SchedulerConfig::threads`].
pub const THREADS_ENV: &str = "MERKLIZE_THREADS";
/// Environment variable overriding [`SchedulerConfig::parallel`].
pub const PARALLEL_ENV: &str = "MERKLIZE_PARALLEL";

/// How merklization work is batched and dispatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulerConfig {
  /// Requested pairings per batch; clamped per level.
  pub batch_size: usize,
  /// Worker threads for the rayon backend; `0` uses the global pool.
  pub threads: usize,
  /// Use the rayon backend when the `parallel` feature is enabled.
  pub parallel: bool,
}

impl Default for SchedulerConfig {
  fn default() -> Self {
    Self {
      batch_size: DEFAULT_BATCH_SIZE,
      threads: 0,
      parallel: true,
    }
  }
}

impl SchedulerConfig {
  #[must_use]
  pub fn with_batch_size(mut self, batch_size: usize) -> Self {
    self.batch_size = batch_size;
    self
  }

  #[must_use]
  pub fn with_threads(mut self, threads: usize) -> Self {
    self.threads = threads;
    self
  }

  #[must_use]
  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  /// Defaults with the process environment applied.
  #[must_use]
  pub fn from_env() -> Self {
    Self::default().with_overrides(|key| std::env::var(key).ok())
  }

  /// Apply overrides from `lookup`; unparseable values are ignored.
  #[must_use]
  pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
    if let Some(raw) = lookup(BATCH_SIZE_ENV) {
      match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => self.batch_size = n,
        _ => warn!(key = BATCH_SIZE_ENV, value = %raw, "ignoring invalid override"),
      }
    }
    if let Some(raw) = lookup(THREADS_ENV) {
      match raw.trim().parse::<usize>() {
        Ok(n) => self.threads = n,
        Err(_) => warn!(key = THREADS_ENV, value = %raw, "ignoring invalid override"),
      }
    }
    if let Some(raw) = lookup(PARALLEL_ENV) {
      match parse_flag(&raw) {
        Some(flag) => self.parallel = flag,
        None => warn!(key = PARALLEL_ENV, value = %raw, "ignoring invalid override"),
      }
    }
    self
  }
}

fn parse_flag(value: &str) -> Option<bool> {
  let value = value.trim();
  if ["1", "true", "on", "yes"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
    return Some(true);
  }
  if ["0", "false", "off", "no"].iter().any(|v| value.eq_ignore_ascii_case(v)) {
    return Some(false);
  }
  None
}

/// Process-wide configuration, read from the environment on first use.
#[must_use]
pub fn get() -> SchedulerConfig {
  use std::sync::OnceLock;
  static CONFIG: OnceLock<SchedulerConfig> = OnceLock::new();
  *CONFIG.get_or_init(SchedulerConfig::from_env)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn defaults() {
    let c = SchedulerConfig::default();
    assert_eq!(c.batch_size, DEFAULT_BATCH_SIZE);
    assert_eq!(c.threads, 0);
    assert!(c.parallel);
  }

  #[test]
  fn overrides_apply() {
    let c = SchedulerConfig::default().with_overrides(env(&[
      (BATCH_SIZE_ENV, "16"),
      (THREADS_ENV, " 4 "),
      (PARALLEL_ENV, "off"),
    ]));
    assert_eq!(c, SchedulerConfig::default().with_batch_size(16).with_threads(4).with_parallel(false));
  }

  #[test]
  fn invalid_overrides_are_ignored() {
    let c = SchedulerConfig::default().with_overrides(env(&[
      (BATCH_SIZE_ENV, "0"),
      (THREADS_ENV, "many"),
      (PARALLEL_ENV, "maybe"),
    ]));
    assert_eq!(c, SchedulerConfig::default());
  }

  #[test]
  fn flags() {
    assert_eq!(parse_flag("YES"), Some(true));
    assert_eq!(parse_flag("1"), Some(true));
    assert_eq!(parse_flag("False"), Some(false));
    assert_eq!(parse_flag(""), None);
  }

  #[test]
  fn get_is_stable() {
    assert_eq!(get(), get());
  }
}

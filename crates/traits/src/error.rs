//! Error types for compression inputs.
//!
//! Individual crates may define additional errors as needed.

use core::fmt;

/// The compression input was not exactly two digests long.
///
/// Returned by the checked `try_` entry points. The unchecked entry points
/// treat the same condition as a programming error and panic.
///
/// # Examples
///
/// ```
/// use traits::InputLengthError;
///
/// fn check(input: &[u8]) -> Result<(), InputLengthError> {
///   if input.len() != 64 {
///     return Err(InputLengthError::new(64, input.len()));
///   }
///   Ok(())
/// }
///
/// let err = check(&[0u8; 63]).unwrap_err();
/// assert_eq!(err.expected(), 64);
/// assert_eq!(err.actual(), 63);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputLengthError {
  expected: usize,
  actual: usize,
}

impl InputLengthError {
  /// Create a new length error.
  #[inline]
  #[must_use]
  pub const fn new(expected: usize, actual: usize) -> Self {
    Self { expected, actual }
  }

  /// Required input length in bytes.
  #[inline]
  #[must_use]
  pub const fn expected(&self) -> usize {
    self.expected
  }

  /// Length that was supplied.
  #[inline]
  #[must_use]
  pub const fn actual(&self) -> usize {
    self.actual
  }
}

impl fmt::Display for InputLengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "invalid compression input length: expected {} bytes, got {}",
      self.expected, self.actual
    )
  }
}

impl core::error::Error for InputLengthError {}

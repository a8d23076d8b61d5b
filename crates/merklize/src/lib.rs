//! 2-to-1 hash family and parallel binary merklization.
//!
//! `merklize` re-exports the workspace crates behind one dependency:
//! bit-exact SHA-1, SHA-2, SHA-3 and Keccak-256 restricted to two-digest
//! inputs, and a level-synchronous merkle scheduler on top of them.
//!
//! # Quick Start
//!
//! ```
//! use merklize::{Compress, Merklizer, Sha256, Variant};
//!
//! // One compression: two 32-byte digests in, one out.
//! let parent = Sha256::compress(&[0u8; 64]);
//!
//! // A tree over four leaves.
//! let leaves = [7u8; 4 * 32];
//! let tree = Merklizer::new(Variant::Sha2_256).tree(&leaves)?;
//! assert_eq!(tree.level(1).map(|l| l.len()), Some(2));
//! assert_ne!(tree.root(), &parent[..]);
//! # Ok::<(), merklize::MerklizeError<core::convert::Infallible>>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `parallel` | Yes | Rayon executor for merkle levels |
//!
//! # Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `MERKLIZE_KECCAK_FORCE` | `lanes` or `interleaved` Keccak-f kernel |
//! | `MERKLIZE_BATCH_SIZE` | Default pairings per batch |
//! | `MERKLIZE_THREADS` | Rayon worker count (`0` = global pool) |
//! | `MERKLIZE_PARALLEL` | `0`/`false`/`off` selects the serial executor |

// =============================================================================
// Compression
// =============================================================================

pub use hashes::crypto::{
  Keccak256, Sha1, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256,
};
pub use hashes::{CompressFn, Design, ParseVariantError, Variant};
pub use traits::{Compress, InputLengthError, MAX_DIGEST_LEN, MAX_INPUT_LEN};

// =============================================================================
// Merklization
// =============================================================================

#[cfg(feature = "parallel")]
pub use merkle::{Rayon, RayonError};
pub use merkle::{
  Completion, Dispatch, DispatchError, Executor, Level, LevelEvent, LevelTask, MerkleTree, MerklizeError, Merklizer,
  PairKernel, SchedulerConfig, Serial, merklize, merklize_root,
};

pub use hashes::crypto::keccak::{KeccakConfig, KeccakForce, KeccakKernelId};
pub use merkle::{config, layout};

/// Merklizer built from the process environment (see the table above).
pub fn from_env(variant: Variant) -> Result<Merklizer<Dispatch>, DispatchError> {
  Merklizer::from_config(variant, &merkle::config::get())
}

//! Level-synchronous binary merklization.
//!
//! Given `N` packed leaf digests (`N` a power of two, at least 2), every level
//! computes `parent[i] = compress(child[2i] ++ child[2i + 1])` with one of the
//! [`hashes`] 2-to-1 functions until a single root remains. Units within a
//! level are independent and are dispatched in equal-size batches through an
//! [`Executor`]; a level starts only after the level below it has completed.
//!
//! # Entry Points
//!
//! - [`Merklizer`] - owned front end returning a [`MerkleTree`] or a root.
//! - [`merklize`] - caller-provided output buffer in the slot layout described
//!   in [`layout`].
//! - [`merklize_root`] - root only, two levels of scratch.
//!
//! # Executors
//!
//! - [`Serial`] - calling thread.
//! - `Rayon` - rayon thread pool (feature `parallel`, on by default).
//! - [`Dispatch`] - chosen at runtime from a [`SchedulerConfig`].
//!
//! # Example
//!
//! ```
//! use merkle::{Merklizer, Variant};
//!
//! let leaves = [0xFFu8; 8 * 20];
//! let tree = Merklizer::new(Variant::Sha1).tree(&leaves)?;
//! assert_eq!(tree.depth(), 3);
//! assert_eq!(tree.root().len(), 20);
//! # Ok::<(), merkle::MerklizeError<core::convert::Infallible>>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

pub mod config;
mod error;
pub mod executor;
pub mod layout;
#[cfg(feature = "parallel")]
mod parallel;
mod scheduler;
mod tree;

pub use config::SchedulerConfig;
pub use error::MerklizeError;
pub use executor::{Dispatch, DispatchError, Executor, LevelEvent, LevelTask, PairKernel, Serial};
pub use hashes::Variant;
#[cfg(feature = "parallel")]
pub use parallel::{Rayon, RayonError};
pub use scheduler::{Completion, merklize, merklize_root};
pub use tree::{Level, MerkleTree, Merklizer};

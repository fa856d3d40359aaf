//! Hash containers with a fixed seed, built on *hashbrown* and *foldhash*.
//!
//! Every map created through this module hashes with [`FixedHashState`],
//! so two maps built by the same sequence of insertions iterate in the
//! same order, in every process.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

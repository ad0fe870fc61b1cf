//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Iteration order only depends on the inserted keys, never on a random seed.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

/// Re-export of `hashbrown`'s map entry API.
pub mod hash_map {
    pub use hashbrown::hash_map::{Entry, OccupiedEntry, VacantEntry};
}

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

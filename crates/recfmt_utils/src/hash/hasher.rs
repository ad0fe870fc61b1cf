//! Provide `FixedHasher` and `NoOpHasher`.
//!
//! `FixedHasher` based on `foldhash` crate,
//! Provide stable hash results through a fixed hash seed.
//!
//! `NoOpHasher` directly use u64 or bit data as hash values.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5EC0_4D7A_11CE_F00D);

/// A fixed hasher provided hash results that only related on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`] .
pub type FixedHasher = FoldHasher<'static>;

/// Fixed Hash State based upon a random but fixed seed.
///
/// Record names are hashed with this state, so lookups behave the same
/// in every process run.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use recfmt_utils::hash::FixedHashState;
///
/// let hash = |s: &str| {
///     let mut hasher = FixedHashState.build_hasher();
///     s.hash(&mut hasher);
///     hasher.finish()
/// };
///
/// assert_eq!(hash("ConfigName"), hash("ConfigName"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A no-op hash that directly pass value through `u64`.
///
/// Which can be created through [`NoOpHashState::build_hasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // `TypeId` hashes through `write_u64`, this path is only a fallback.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// A fixed hasher without any additional operations.
///
/// Used for keys that are already well distributed, such as [`TypeId`].
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use recfmt_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 3_u64.hash(&mut hasher);
///
/// assert_eq!(hasher.finish(), 3_u64);
/// ```
///
/// [`TypeId`]: core::any::TypeId
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hasher};

    use super::{FixedHashState, NoOpHashState};

    #[test]
    fn noop_write_matches_write_u64() {
        let mut a = NoOpHashState.build_hasher();
        let mut b = NoOpHashState.build_hasher();
        a.write_u64(0x0102);
        b.write(&0x0102_u64.to_le_bytes());
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn fixed_state_is_stable() {
        let mut a = FixedHashState.build_hasher();
        let mut b = FixedHashState.build_hasher();
        a.write(b"DatabaseHostName");
        b.write(b"DatabaseHostName");
        assert_eq!(a.finish(), b.finish());
    }
}

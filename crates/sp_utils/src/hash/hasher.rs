//! Provide [`FixedHashState`], a seeded `foldhash` builder.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// Seed shared by every [`FixedHashState`].
const SEED: FixedState = FixedState::with_seed(0x5EED_0F5A_9E17_C0DE);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A hash builder whose output depends only on the hashed input.
///
/// Map iteration order is a function of the hashes, so containers built on
/// this state enumerate their entries identically across runs.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use sp_utils::hash::FixedHashState;
///
/// let a = FixedHashState.hash_one("key");
/// let b = FixedHashState.hash_one("key");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        SEED.build_hasher()
    }
}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::FixedHashState;
    use crate::hash::HashMap;

    #[test]
    fn same_history_same_order() {
        let mut a: HashMap<u32, u32> = HashMap::default();
        let mut b: HashMap<u32, u32> = HashMap::default();
        for i in 0..64 {
            a.insert(i, i * 2);
            b.insert(i, i * 2);
        }

        assert!(a.iter().eq(b.iter()));
        assert!(a.hasher().hash_one(7_u32) == FixedHashState.hash_one(7_u32));
    }
}

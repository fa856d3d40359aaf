use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::{Combination, Path, PathStep};

// -----------------------------------------------------------------------------
// DispatchLimit

/// The largest branch count a combination may expand to before its
/// consumer should switch to generic runtime dispatch.
///
/// Deserializes with defaults for missing fields, so an embedding tool can
/// keep it in its own configuration file.
///
/// ```
/// use sp_path::DispatchLimit;
///
/// let limit: DispatchLimit = ron::from_str("(max_branches: 4)").unwrap();
/// assert_eq!(limit.max_branches, 4);
///
/// let limit: DispatchLimit = ron::from_str("()").unwrap();
/// assert_eq!(limit, DispatchLimit::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchLimit {
    pub max_branches: usize,
}

impl DispatchLimit {
    pub const DEFAULT_MAX_BRANCHES: usize = 32;

    #[inline]
    pub const fn new(max_branches: usize) -> Self {
        Self { max_branches }
    }
}

impl Default for DispatchLimit {
    #[inline]
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_BRANCHES)
    }
}

// -----------------------------------------------------------------------------
// Dispatch

/// How a combination should be executed, see [`Combination::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<S = PathStep> {
    /// Every concrete path, in [`Combination::to_paths`] order.
    Unrolled(Vec<Path<S>>),
    /// Too many branches; nothing was expanded.
    Generic { branches: usize },
}

impl<S: Clone> Combination<S> {
    /// Decides between unrolling and generic dispatch.
    ///
    /// The decision only costs a [`size`](Self::size) computation: paths are
    /// materialised only when they fit within `limit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_path::{Combination, Dispatch, DispatchLimit};
    ///
    /// let combination = Combination::new([vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
    ///
    /// let Dispatch::Unrolled(paths) = combination.plan(&DispatchLimit::new(8)) else {
    ///     panic!("eight branches fit");
    /// };
    /// assert_eq!(paths.len(), 8);
    ///
    /// assert_eq!(
    ///     combination.plan(&DispatchLimit::new(7)),
    ///     Dispatch::Generic { branches: 8 },
    /// );
    /// ```
    pub fn plan(&self, limit: &DispatchLimit) -> Dispatch<S> {
        let branches = self.size();
        if branches > limit.max_branches {
            log::debug!(
                "combination of {} positions expands to {branches} branches, over the limit of {}; using generic dispatch",
                self.len(),
                limit.max_branches,
            );
            return Dispatch::Generic { branches };
        }

        let paths = self.to_paths();
        crate::cfg::debug! {
            assert_eq!(paths.len(), branches, "size disagrees with expansion");
        }
        Dispatch::Unrolled(paths)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Dispatch, DispatchLimit};
    use crate::{Combination, Path};

    #[test]
    fn limit_is_inclusive() {
        let combination = Combination::new([vec!['a', 'b'], vec!['c', 'd']]).unwrap();

        assert_eq!(
            combination.plan(&DispatchLimit::new(4)),
            Dispatch::Unrolled(combination.to_paths())
        );
        assert_eq!(
            combination.plan(&DispatchLimit::new(3)),
            Dispatch::Generic { branches: 4 }
        );
    }

    #[test]
    fn singular_always_unrolls() {
        let path = Path::new(['x'; 40]);
        let combination = Combination::from_path(&path);

        assert_eq!(
            combination.plan(&DispatchLimit::new(1)),
            Dispatch::Unrolled(vec![path])
        );
    }

    #[test]
    fn deep_singular_unrolls() {
        let path = Path::new(vec![0_u8; 100_000]);
        let combination = Combination::from_path(&path);

        assert_eq!(
            combination.plan(&DispatchLimit::default()),
            Dispatch::Unrolled(vec![path])
        );
    }

    #[test]
    fn huge_combination_is_not_expanded() {
        let wide: Vec<u16> = (0..100).collect();
        let combination = Combination::new((0..8).map(|_| wide.clone())).unwrap();

        assert_eq!(
            combination.plan(&DispatchLimit::default()),
            Dispatch::Generic {
                branches: 100_usize.pow(8)
            }
        );
    }

    #[test]
    fn default_limit() {
        assert_eq!(DispatchLimit::default().max_branches, 32);
    }
}

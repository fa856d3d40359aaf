use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use serde_core::de::Error as _;
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{Path, PathStep};

// -----------------------------------------------------------------------------
// Error

/// An error returned when building a [`Combination`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CombinationError {
    #[error("position {position} of the combination has no alternatives")]
    EmptyPosition { position: usize },
}

// -----------------------------------------------------------------------------
// Combination

/// A sequence of positions, each holding a non-empty set of alternative steps.
///
/// Alternatives keep their order and may repeat. A combination made with
/// [`from_path`](Self::from_path) has exactly one alternative per position.
///
/// # Degenerate combination
///
/// A combination with zero positions expands to **zero** paths, not to one
/// empty path, and its [`size`](Self::size) is `0` accordingly.
///
/// ```
/// use sp_path::Combination;
///
/// let empty = Combination::<char>::empty();
/// assert!(empty.to_paths().is_empty());
/// assert_eq!(empty.size(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination<S = PathStep> {
    positions: Box<[Box<[S]>]>,
}

impl<S> Combination<S> {
    /// Creates a combination from per-position alternatives, outermost first.
    ///
    /// Returns [`CombinationError::EmptyPosition`] if any position has no
    /// alternative.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_path::{Combination, CombinationError};
    ///
    /// let ok = Combination::new([vec!['a', 'b'], vec!['c']]).unwrap();
    /// assert_eq!(ok.len(), 2);
    ///
    /// let err = Combination::new([vec!['a'], vec![]]).unwrap_err();
    /// assert_eq!(err, CombinationError::EmptyPosition { position: 1 });
    /// ```
    pub fn new<P, A>(positions: P) -> Result<Self, CombinationError>
    where
        P: IntoIterator<Item = A>,
        A: IntoIterator<Item = S>,
    {
        let positions = positions
            .into_iter()
            .enumerate()
            .map(|(position, alternatives)| {
                let alternatives: Box<[S]> = alternatives.into_iter().collect();
                if alternatives.is_empty() {
                    Err(CombinationError::EmptyPosition { position })
                } else {
                    Ok(alternatives)
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { positions })
    }

    /// Creates a combination with zero positions.
    #[inline]
    pub fn empty() -> Self {
        Self {
            positions: Box::default(),
        }
    }

    /// Returns the number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the alternatives at `index`, if any.
    #[inline]
    pub fn position(&self, index: usize) -> Option<&[S]> {
        self.positions.get(index).map(|alternatives| &**alternatives)
    }

    /// Iterates the positions, outermost first.
    #[inline]
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &[S]> {
        self.positions.iter().map(|alternatives| &**alternatives)
    }

    /// Returns `true` if every position has exactly one alternative.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.positions.iter().all(|alternatives| alternatives.len() == 1)
    }

    /// Returns the number of paths [`to_paths`](Self::to_paths) would produce.
    ///
    /// Runs in time linear in the number of positions; nothing is expanded.
    /// Saturates at `usize::MAX`, see [`checked_size`](Self::checked_size).
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_path::Combination;
    ///
    /// let combination = Combination::new([vec![1, 2, 3], vec![4, 5], vec![6]]).unwrap();
    /// assert_eq!(combination.size(), 6);
    /// assert_eq!(combination.size(), combination.to_paths().len());
    /// ```
    pub fn size(&self) -> usize {
        if self.positions.is_empty() {
            return 0;
        }
        self.positions
            .iter()
            .fold(1_usize, |acc, alternatives| acc.saturating_mul(alternatives.len()))
    }

    /// Like [`size`](Self::size), but returns `None` instead of saturating.
    pub fn checked_size(&self) -> Option<usize> {
        if self.positions.is_empty() {
            return Some(0);
        }
        self.positions
            .iter()
            .try_fold(1_usize, |acc, alternatives| acc.checked_mul(alternatives.len()))
    }
}

impl<S: Clone> Combination<S> {
    /// Lifts every step of `path` into a singleton alternative set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_path::{Combination, Path};
    ///
    /// let path = Path::new(['x', 'y']);
    /// let combination = Combination::from_path(&path);
    ///
    /// assert!(combination.is_singular());
    /// assert_eq!(combination.size(), 1);
    /// assert_eq!(combination.to_paths(), [path]);
    /// ```
    pub fn from_path(path: &Path<S>) -> Self {
        Self {
            positions: path
                .iter()
                .map(|step| Box::<[S]>::from([step.clone()]))
                .collect(),
        }
    }

    /// Expands the Cartesian product of all positions.
    ///
    /// For every alternative at the first position, in order, that
    /// alternative is prepended to every expansion of the remaining
    /// positions, in order. The first position therefore varies slowest.
    ///
    /// # Examples
    ///
    /// ```
    /// use sp_path::{Combination, Path};
    ///
    /// let combination = Combination::new([vec!['A', 'B'], vec!['C', 'D']]).unwrap();
    /// assert_eq!(
    ///     combination.to_paths(),
    ///     [
    ///         Path::new(['A', 'C']),
    ///         Path::new(['A', 'D']),
    ///         Path::new(['B', 'C']),
    ///         Path::new(['B', 'D']),
    ///     ]
    /// );
    /// ```
    pub fn to_paths(&self) -> Vec<Path<S>> {
        if self.positions.is_empty() {
            return Vec::new();
        }

        // One cursor per position; the last one ticks fastest.
        let mut cursor = vec![0_usize; self.positions.len()];
        let mut paths: Vec<Path<S>> = Vec::with_capacity(self.checked_size().unwrap_or(0));
        loop {
            paths.push(
                self.positions
                    .iter()
                    .zip(&cursor)
                    .map(|(alternatives, &index)| alternatives[index].clone())
                    .collect(),
            );

            let mut level = cursor.len();
            loop {
                let Some(next) = level.checked_sub(1) else {
                    return paths;
                };
                level = next;
                cursor[level] += 1;
                if cursor[level] < self.positions[level].len() {
                    break;
                }
                cursor[level] = 0;
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Trait implementations

impl<S: Clone> From<&Path<S>> for Combination<S> {
    #[inline]
    fn from(value: &Path<S>) -> Self {
        Self::from_path(value)
    }
}

/// Singleton positions print bare, others as `{a|b}`.
impl<S: fmt::Display> fmt::Display for Combination<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for alternatives in self.positions.iter() {
            if let [single] = &**alternatives {
                fmt::Display::fmt(single, f)?;
                continue;
            }
            f.write_str("{")?;
            for (index, step) in alternatives.iter().enumerate() {
                if index > 0 {
                    f.write_str("|")?;
                }
                fmt::Display::fmt(step, f)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl<S: Serialize> Serialize for Combination<S> {
    #[inline]
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        self.positions.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Combination<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<Vec<S>>::deserialize(deserializer)?;
        Self::new(raw).map_err(D::Error::custom)
    }
}

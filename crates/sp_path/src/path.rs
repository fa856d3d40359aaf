use alloc::boxed::Box;
use alloc::vec::Vec;
use core::{fmt, slice};

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};
use sp_utils::vec::FastVec;

use crate::PathStep;

/// An ordered sequence of steps, one per nesting level.
///
/// A thin wrapper over `Box<[S]>`; immutable once built.
///
/// # Examples
///
/// ```
/// use sp_path::{Path, PathStep};
///
/// let a = Path::new([PathStep::Key("user".into()), PathStep::Slot(0)]);
/// let b = Path::new([PathStep::Head]);
/// let path = a.concat(b);
///
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), ".\"user\"[0]^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path<S = PathStep>(Box<[S]>);

impl<S> Path<S> {
    /// Creates a path from the given steps, outermost first.
    pub fn new(steps: impl IntoIterator<Item = S>) -> Self {
        let mut vec: FastVec<S, 8> = FastVec::new();
        let data = vec.get();
        data.extend(steps);
        Self(vec.into_boxed_slice())
    }

    /// Creates a path without steps.
    #[inline]
    pub fn empty() -> Self {
        Self(Box::default())
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the steps, outermost first.
    #[inline]
    pub fn steps(&self) -> &[S] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.0.iter()
    }

    /// Appends the steps of `other` after the steps of `self`.
    pub fn concat(self, other: Path<S>) -> Self {
        let mut vec: FastVec<S, 12> = FastVec::new();
        let data = vec.get();
        data.extend(self.0);
        data.extend(other.0);
        Self(vec.into_boxed_slice())
    }
}

impl<S> From<Vec<S>> for Path<S> {
    #[inline]
    fn from(value: Vec<S>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl<S> From<Box<[S]>> for Path<S> {
    #[inline]
    fn from(value: Box<[S]>) -> Self {
        Self(value)
    }
}

impl<S> FromIterator<S> for Path<S> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, S> IntoIterator for &'a Path<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: fmt::Display> fmt::Display for Path<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            fmt::Display::fmt(step, f)?;
        }
        Ok(())
    }
}

impl<S: Serialize> Serialize for Path<S> {
    #[inline]
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, S: Deserialize<'de>> Deserialize<'de> for Path<S> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Box::<[S]>::deserialize(deserializer).map(Self)
    }
}

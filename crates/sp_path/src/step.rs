use core::fmt;

use serde::{Deserialize, Serialize};
use sp_value::{Key, ShapeKind, Symbol};

/// A single shape-specific step within a path.
///
/// Each variant pairs a shape kind with the datum that selects an element
/// of that shape:
///
/// - `Key`: the value stored under a key of an associative container.
/// - `Slot`: a slot of a positional record.
/// - `Tag`: the value of a tagged entry, when the tag matches.
/// - `Head`: the first element of a non-empty sequence.
///
/// # Syntax
///
/// The `Display` impl renders `.key`, `[slot]`, `:tag` and `^`:
///
/// ```
/// use sp_path::PathStep;
/// use sp_value::{Key, Symbol};
///
/// assert_eq!(PathStep::Key("a".into()).to_string(), ".\"a\"");
/// assert_eq!(PathStep::Key(Key::Int(3)).to_string(), ".3");
/// assert_eq!(PathStep::Slot(1).to_string(), "[1]");
/// assert_eq!(PathStep::Tag(Symbol::new("t")).to_string(), ":t");
/// assert_eq!(PathStep::Head.to_string(), "^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PathStep {
    Key(Key),
    Slot(usize),
    Tag(Symbol),
    Head,
}

impl PathStep {
    /// Returns the shape this step expects to navigate.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Key(_) => ShapeKind::Associative,
            Self::Slot(_) => ShapeKind::Record,
            Self::Tag(_) => ShapeKind::Tagged,
            Self::Head => ShapeKind::Sequence,
        }
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, ".{key}"),
            Self::Slot(index) => write!(f, "[{index}]"),
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Head => f.write_str("^"),
        }
    }
}

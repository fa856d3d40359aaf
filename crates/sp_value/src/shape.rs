use core::fmt;

use crate::{Symbol, Value, ValueMap};

// -----------------------------------------------------------------------------
// ShapeKind

/// An enumeration of the structural "kinds" a value may present as.
///
/// Obtained via [`Value::shape_kind`] or [`ShapeRef::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Associative,
    Record,
    Tagged,
    Sequence,
    Opaque,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Associative => f.pad("Associative"),
            Self::Record => f.pad("Record"),
            Self::Tagged => f.pad("Tagged"),
            Self::Sequence => f.pad("Sequence"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// ShapeRef

/// A borrowed view of a value, split along its shape.
///
/// Produced by [`Value::shape`]. The classification is exhaustive and
/// checked in this order, first match wins:
///
/// 1. [`Value::Map`] is `Associative`, empty or not.
/// 2. [`Value::Record`] is `Record`, of any arity.
/// 3. A [`Value::List`] whose head is an [`Entry`](crate::Entry) keyed by a
///    [`Value::Symbol`] is `Tagged`.
/// 4. Any other non-empty [`Value::List`] is `Sequence`.
/// 5. An empty [`Value::List`] is `Empty`.
/// 6. Everything else, bare entries included, is `Opaque`.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    Associative(&'a ValueMap),
    Record(&'a [Value]),
    Tagged {
        tag: &'a Symbol,
        value: &'a Value,
        tail: &'a [Value],
    },
    Sequence {
        head: &'a Value,
        tail: &'a [Value],
    },
    Empty,
    Opaque(&'a Value),
}

impl ShapeRef<'_> {
    /// Returns the [`ShapeKind`] of this view.
    ///
    /// An empty list reports [`ShapeKind::Sequence`].
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Associative(_) => ShapeKind::Associative,
            Self::Record(_) => ShapeKind::Record,
            Self::Tagged { .. } => ShapeKind::Tagged,
            Self::Sequence { .. } | Self::Empty => ShapeKind::Sequence,
            Self::Opaque(_) => ShapeKind::Opaque,
        }
    }
}

impl Value {
    /// Classifies this value, see [`ShapeRef`].
    pub fn shape(&self) -> ShapeRef<'_> {
        match self {
            Self::Map(map) => ShapeRef::Associative(map),
            Self::Record(slots) => ShapeRef::Record(slots),
            Self::List(items) => match items.split_first() {
                None => ShapeRef::Empty,
                Some((head, tail)) => match head {
                    Self::Entry(entry) => match &entry.key {
                        Self::Symbol(tag) => ShapeRef::Tagged {
                            tag,
                            value: &entry.value,
                            tail,
                        },
                        _ => ShapeRef::Sequence { head, tail },
                    },
                    _ => ShapeRef::Sequence { head, tail },
                },
            },
            other => ShapeRef::Opaque(other),
        }
    }

    /// Returns the [`ShapeKind`] of this value.
    #[inline]
    pub fn shape_kind(&self) -> ShapeKind {
        self.shape().kind()
    }
}

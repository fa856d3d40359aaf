use alloc::sync::Arc;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::Value;

// -----------------------------------------------------------------------------
// Symbol

/// A designator name.
///
/// A list whose head is an [`Entry`](crate::Entry) keyed by a symbol is a
/// *TaggedEntry*; the symbol is its tag.
///
/// Displayed with a leading colon.
///
/// # Examples
///
/// ```
/// use sp_value::Symbol;
///
/// let sym = Symbol::new("kind");
/// assert_eq!(sym.as_str(), "kind");
/// assert_eq!(format!("{sym}"), ":kind");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[inline]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name of the symbol, without the leading colon.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    #[inline]
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

// -----------------------------------------------------------------------------
// Key

/// The key domain of an associative container.
///
/// Floats are excluded so that keys are `Eq`, `Hash` and totally ordered.
/// The derived `Ord` ranks variants in declaration order first,
/// then compares payloads.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
    Symbol(Symbol),
}

impl Key {
    /// Returns the key as a plain [`Value`].
    pub fn to_value(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::Int(*i),
            Self::Str(s) => Value::Str(s.clone()),
            Self::Symbol(sym) => Value::Symbol(sym.clone()),
        }
    }
}

impl From<bool> for Key {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Key {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Key {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<Symbol> for Key {
    #[inline]
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "{:?}", &**s),
            Self::Symbol(sym) => fmt::Display::fmt(sym, f),
        }
    }
}

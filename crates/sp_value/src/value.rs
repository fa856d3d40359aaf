use alloc::sync::Arc;

use sp_utils::hash::HashMap;

use crate::{Key, Symbol};

// -----------------------------------------------------------------------------
// Value

/// The associative container held by [`Value::Map`].
///
/// Iteration order is whatever the fixed-seed hash table yields: not sorted,
/// but identical for identical insertion histories.
pub type ValueMap = HashMap<Key, Value>;

/// A key/value pair.
///
/// As the head of a [`Value::List`], an entry keyed by a [`Value::Symbol`]
/// turns the list into a *TaggedEntry*.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: Value,
    pub value: Value,
}

/// A dynamically shaped value.
///
/// Values are immutable: navigators never write into a value in place,
/// they build a new one that shares the untouched parts.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    Symbol(Symbol),
    Entry(Arc<Entry>),
    List(Arc<[Value]>),
    Record(Arc<[Value]>),
    Map(Arc<ValueMap>),
}

impl Value {
    /// Creates a [`Value::List`] from the given items.
    #[inline]
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Creates a [`Value::Record`] from the given slots.
    #[inline]
    pub fn record(slots: impl IntoIterator<Item = Value>) -> Self {
        Self::Record(slots.into_iter().collect())
    }

    /// Creates a [`Value::Map`] from the given pairs.
    ///
    /// Later pairs overwrite earlier ones with an equal key.
    #[inline]
    pub fn map(pairs: impl IntoIterator<Item = (Key, Value)>) -> Self {
        Self::Map(Arc::new(pairs.into_iter().collect()))
    }

    /// Creates a [`Value::Entry`].
    #[inline]
    pub fn entry(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self::Entry(Arc::new(Entry {
            key: key.into(),
            value: value.into(),
        }))
    }

    /// Creates a [`Value::Symbol`].
    #[inline]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(Symbol::new(name))
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_record(&self) -> Option<&[Value]> {
        match self {
            Self::Record(slots) => Some(slots),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from {
    ($ty:ty => $variant:ident) => {
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

impl_from!(bool => Bool);
impl_from!(i32 => Int);
impl_from!(i64 => Int);
impl_from!(f64 => Float);
impl_from!(&str => Str);
impl_from!(Symbol => Symbol);

impl From<Key> for Value {
    #[inline]
    fn from(value: Key) -> Self {
        value.to_value()
    }
}

impl From<Entry> for Value {
    #[inline]
    fn from(value: Entry) -> Self {
        Self::Entry(Arc::new(value))
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;

    use super::Value;
    use crate::{Key, Symbol};

    #[test]
    fn clone_shares_children() {
        let inner = Value::list([Value::from(1), Value::from(2)]);
        let outer = Value::record([inner, Value::Nil]);
        let copy = outer.clone();

        let (Value::Record(a), Value::Record(b)) = (&outer, &copy) else {
            panic!("expected records");
        };
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(outer, copy);
    }

    #[test]
    fn map_keeps_last_duplicate() {
        let map = Value::map([
            (Key::from("a"), Value::from(1)),
            (Key::from("a"), Value::from(2)),
        ]);
        let map = map.as_map().unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Key::from("a")), Some(&Value::from(2)));
    }

    #[test]
    fn key_round_trips_into_value() {
        let sym = Symbol::new("s");
        assert_eq!(Value::from(Key::from(sym.clone())), Value::Symbol(sym));
        assert_eq!(Value::from(Key::from(4)), Value::Int(4));
        assert_eq!(Value::from(Key::from("k")).as_str(), Some("k"));
    }
}

//! `serde` serialization of [`Value`].
//!
//! Serialization only: the output of a self-describing format does not tell
//! a record from a list, or a symbol from a string, so values are not read back.

use serde_core::ser::{SerializeMap, SerializeSeq, SerializeTuple};
use serde_core::{Serialize, Serializer};

use crate::{Key, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Symbol(sym) => serializer.serialize_str(sym.as_str()),
            Value::Entry(entry) => {
                let mut state = serializer.serialize_tuple(2)?;
                state.serialize_element(&entry.key)?;
                state.serialize_element(&entry.value)?;
                state.end()
            }
            Value::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Value::Record(slots) => {
                let mut state = serializer.serialize_tuple(slots.len())?;
                for slot in slots.iter() {
                    state.serialize_element(slot)?;
                }
                state.end()
            }
            Value::Map(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    state.serialize_entry(&PlainKey(key), value)?;
                }
                state.end()
            }
        }
    }
}

/// Serializes a [`Key`] as its bare scalar, without the variant name.
struct PlainKey<'a>(&'a Key);

impl Serialize for PlainKey<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Key::Bool(b) => serializer.serialize_bool(*b),
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
            Key::Symbol(sym) => serializer.serialize_str(sym.as_str()),
        }
    }
}

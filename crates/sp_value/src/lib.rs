//! The dynamic value model navigated by `sp_lens`.
//!
//! A [`Value`] is a closed sum of scalars and four container shapes:
//!
//! - **Associative**: [`Value::Map`], unique [`Key`]s mapped to values.
//! - **PositionalRecord**: [`Value::Record`], a fixed-arity tuple of slots.
//! - **TaggedEntry**: a [`Value::List`] whose head is an [`Entry`] keyed by a [`Symbol`].
//! - **PlainSequence**: any other non-empty [`Value::List`].
//!
//! [`Value::shape`] classifies a value into a borrowed [`ShapeRef`], which is
//! what navigators match on.
//!
//! Containers hold their children behind [`Arc`](alloc::sync::Arc), so cloning a
//! value, or rebuilding one with a single slot replaced, shares every
//! untouched child with the original.
//!
//! # Examples
//!
//! ```
//! use sp_value::{ShapeKind, Value};
//!
//! let tagged = Value::list([Value::entry(Value::symbol("id"), 7), Value::from("rest")]);
//! assert_eq!(tagged.shape_kind(), ShapeKind::Tagged);
//!
//! let plain = Value::list([Value::from(1), Value::from(2)]);
//! assert_eq!(plain.shape_kind(), ShapeKind::Sequence);
//!
//! assert_eq!(Value::record([]).shape_kind(), ShapeKind::Record);
//! assert_eq!(Value::from(3.5).shape_kind(), ShapeKind::Opaque);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    sp_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
    }
}

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod key;
mod ser;
mod shape;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use key::{Key, Symbol};
pub use shape::{ShapeKind, ShapeRef};
pub use value::{Entry, Value, ValueMap};

//! Read, replace, or insert a value inside a container of unknown shape.
//!
//! ## Navigators
//!
//! A [`Navigator`] focuses one element of a container and hands it to a
//! caller-supplied continuation. Every navigator follows the same contract,
//! selected by [`Mode`]:
//!
//! - [`Mode::View`]: returns whatever the continuation returns.
//! - [`Mode::Update`]: on success, rebuilds the container with only the
//!   focused element replaced by the continuation's result.
//! - [`Mode::ForceUpdate`]: as `Update`, but an empty container of an
//!   insertable shape is filled with the mode's default value instead.
//!
//! The only failure a navigator reports itself is [`LensError::NoFocus`];
//! any error returned by the continuation is passed through unchanged.
//! When no element can be focused the continuation is never invoked.
//!
//! Provided navigators:
//!
//! - [`ShapeLens`]: focuses "the first" element of whatever shape it meets.
//! - [`PathStep`]: focuses the element one shape-specific step selects.
//! - [`Path`]: chains steps, outermost first.
//!
//! # Examples
//!
//! ```
//! use sp_lens::{LensError, Navigator, ShapeLens};
//! use sp_value::Value;
//!
//! let lens = ShapeLens::new();
//! let record = Value::record([Value::from(10), Value::from(20), Value::from(30)]);
//!
//! let bumped = lens
//!     .update(&record, |v| v.as_int().map(|i| Value::from(i + 1)).ok_or(LensError::Rejected))
//!     .unwrap();
//! assert_eq!(bumped, Value::record([Value::from(11), Value::from(20), Value::from(30)]));
//!
//! let empty = Value::list([]);
//! assert_eq!(lens.get(&empty), Err(LensError::NoFocus));
//! assert_eq!(
//!     lens.force_update(&empty, Value::from("d"), |v| Ok(v.clone())),
//!     Ok(Value::list([Value::from("d")])),
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    sp_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
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

mod error;
mod focus;
mod mode;
mod navigator;
mod pick;
mod shape_lens;
mod step;

// -----------------------------------------------------------------------------
// Exports

pub use error::LensError;
pub use mode::Mode;
pub use navigator::Navigator;
pub use pick::{IterationOrder, PickFirst, SmallestKey};
pub use shape_lens::ShapeLens;

pub use sp_path::{Path, PathStep};

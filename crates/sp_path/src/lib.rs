//! Paths into nested values, and combinations of alternative paths.
//!
//! A [`Path`] is an ordered sequence of steps, one per nesting level.
//! A [`Combination`] generalises it: every level holds a non-empty set of
//! alternative steps, "try shape A, or shape B at this depth".
//!
//! - [`Combination::from_path`] lifts a path into singleton alternatives.
//! - [`Combination::to_paths`] expands the Cartesian product of alternatives.
//! - [`Combination::size`] counts that product without building it.
//! - [`Combination::plan`] picks between unrolling every branch and a
//!   generic runtime dispatch, based on the size.
//!
//! Both types are generic over the step; the default, [`PathStep`], is the
//! step understood by `sp_lens`.
//!
//! # Examples
//!
//! ```
//! use sp_path::{Combination, Path, PathStep};
//! use sp_value::Symbol;
//!
//! let combination = Combination::new([
//!     vec![PathStep::Key("id".into()), PathStep::Tag(Symbol::new("id"))],
//!     vec![PathStep::Head],
//! ])
//! .unwrap();
//!
//! assert_eq!(combination.size(), 2);
//! assert_eq!(
//!     combination.to_paths(),
//!     [
//!         Path::from(vec![PathStep::Key("id".into()), PathStep::Head]),
//!         Path::from(vec![PathStep::Tag(Symbol::new("id")), PathStep::Head]),
//!     ]
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

mod combination;
mod dispatch;
mod path;
mod step;

// -----------------------------------------------------------------------------
// Exports

pub use combination::{Combination, CombinationError};
pub use dispatch::{Dispatch, DispatchLimit};
pub use path::Path;
pub use step::PathStep;

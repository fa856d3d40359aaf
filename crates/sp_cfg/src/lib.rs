//! Compilation control macros shared by the `sp_*` crates.
//!
//! Each crate declares a `cfg` module with [`define_alias!`], turning a
//! `#[cfg(..)]` predicate into a named macro. The alias then gates code
//! without repeating the predicate everywhere:
//!
//! ```
//! mod cfg {
//!     sp_cfg::define_alias! {
//!         #[cfg(all())] => always,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! let mut hits = 0;
//! cfg::always! { hits += 1; }
//! cfg::never! { hits += 10; }
//! assert_eq!(hits, 1);
//!
//! assert!(cfg::always!());
//! assert!(!cfg::never!());
//!
//! let picked = cfg::never! { if { "on" } else { "off" } };
//! assert_eq!(picked, "off");
//! ```
#![no_std]

/// Expands its input; the target of an alias whose predicate holds.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Discards its input; the target of an alias whose predicate fails.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines one macro per `#[cfg(..)] => name` pair.
///
/// The generated macro accepts three forms:
///
/// - `name!()` evaluates to `true` or `false`.
/// - `name! { items }` keeps or drops `items`.
/// - `name! { if { a } else { b } }` keeps `a` or `b`.
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => $name:ident
        $(, $($rest:tt)*)?
    ) => {
        #[cfg($meta)]
        #[doc(hidden)]
        pub use $crate::enabled as $name;

        #[cfg(not($meta))]
        #[doc(hidden)]
        pub use $crate::disabled as $name;

        $($crate::define_alias! { $($rest)* })?
    };
}

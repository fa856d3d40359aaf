//! Re-exports [`fastvec`]'s containers.
//!
//! Paths and combinations are usually a handful of steps long,
//! so they are collected on the stack before being boxed.

pub use fastvec::FastVec;

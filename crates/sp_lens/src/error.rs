use thiserror::Error;

/// The failure of a navigation.
///
/// Navigators only ever produce [`NoFocus`](Self::NoFocus), whatever the
/// cause: an empty container, a shape mismatch, or a missing key.
/// [`Rejected`](Self::Rejected) is the conventional failure for continuations;
/// navigators pass it, like any continuation error, through untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LensError {
    #[error("no focusable element")]
    NoFocus,

    #[error("the focused value was rejected")]
    Rejected,
}

use sp_value::Value;

use crate::{LensError, Mode};

/// A three-mode accessor over [`Value`]s.
///
/// Implementors decide which element of `container` is in focus and, for the
/// write modes, how to rebuild `container` around a replaced focus.
///
/// # Contract
///
/// - The continuation runs at most once, which `FnOnce` enforces, and never
///   when nothing can be focused.
/// - [`Mode::View`] returns the continuation's result verbatim.
/// - [`Mode::Update`] and [`Mode::ForceUpdate`] return the rebuilt container
///   on success and the continuation's error, unchanged, on failure.
/// - A failed navigation leaves nothing behind: values are never written in
///   place, so the caller's container is always intact.
/// - Without a focus the result is [`LensError::NoFocus`], unless the mode is
///   `ForceUpdate` and the container is an insertable empty shape.
pub trait Navigator {
    /// Runs `k` on the focus of `container` according to `mode`.
    fn navigate<F>(&self, mode: &Mode, container: &Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>;

    /// [`navigate`](Self::navigate) in [`Mode::View`].
    #[inline]
    fn view<F>(&self, container: &Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>,
    {
        self.navigate(&Mode::View, container, k)
    }

    /// Returns a clone of the focus.
    #[inline]
    fn get(&self, container: &Value) -> Result<Value, LensError> {
        self.view(container, |focus| Ok(focus.clone()))
    }

    /// [`navigate`](Self::navigate) in [`Mode::Update`].
    #[inline]
    fn update<F>(&self, container: &Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>,
    {
        self.navigate(&Mode::Update, container, k)
    }

    /// Replaces the focus with `value`.
    #[inline]
    fn set(&self, container: &Value, value: Value) -> Result<Value, LensError> {
        self.update(container, move |_| Ok(value))
    }

    /// [`navigate`](Self::navigate) in [`Mode::ForceUpdate`].
    #[inline]
    fn force_update<F>(&self, container: &Value, default: Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>,
    {
        self.navigate(&Mode::ForceUpdate(default), container, k)
    }
}

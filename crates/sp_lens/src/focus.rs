//! Building blocks shared by the navigators.

use alloc::sync::Arc;
use core::iter;

use sp_value::{Key, Value, ValueMap};

use crate::{LensError, Mode};

/// Runs `k` on `target`, rebuilding the container with `rebuild` in write modes.
#[inline]
pub(crate) fn focus<F, R>(mode: &Mode, target: &Value, k: F, rebuild: R) -> Result<Value, LensError>
where
    F: FnOnce(&Value) -> Result<Value, LensError>,
    R: FnOnce(Value) -> Value,
{
    let result = k(target);
    if mode.is_write() {
        result.map(rebuild)
    } else {
        result
    }
}

/// Fills an empty container with the default of [`Mode::ForceUpdate`].
#[inline]
pub(crate) fn insert<B>(mode: &Mode, container: &Value, build: B) -> Result<Value, LensError>
where
    B: FnOnce(Value) -> Value,
{
    match mode.default_value() {
        Some(default) => Ok(build(default.clone())),
        None => no_focus(container),
    }
}

/// Fails with [`LensError::NoFocus`].
///
/// Debug builds with the `debug` feature also emit a `trace` record to help
/// locate the mismatch. It is a diagnostic aid only; callers see the error.
#[cold]
pub(crate) fn no_focus(container: &Value) -> Result<Value, LensError> {
    if crate::cfg::debug!() {
        log::trace!("no focusable element in {} value", container.shape_kind());
    }
    Err(LensError::NoFocus)
}

// -----------------------------------------------------------------------------
// Rebuilding

/// Copies `slots` with the slot at `index` replaced.
pub(crate) fn with_slot(slots: &[Value], index: usize, value: Value) -> Arc<[Value]> {
    let mut slots = slots.to_vec();
    if let Some(slot) = slots.get_mut(index) {
        *slot = value;
    }
    slots.into()
}

/// Prepends `head` to a copy of `tail`.
pub(crate) fn with_head(head: Value, tail: &[Value]) -> Arc<[Value]> {
    iter::once(head).chain(tail.iter().cloned()).collect()
}

/// Copies `map` with `key` bound to `value`.
pub(crate) fn with_key(map: &ValueMap, key: Key, value: Value) -> Value {
    let mut map = map.clone();
    map.insert(key, value);
    Value::Map(Arc::new(map))
}

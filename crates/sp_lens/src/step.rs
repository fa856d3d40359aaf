//! Navigation along concrete [`PathStep`]s and [`Path`]s.

use sp_path::{Path, PathStep};
use sp_value::{ShapeRef, Value};

use crate::focus::{focus, insert, no_focus, with_head, with_key, with_slot};
use crate::{LensError, Mode, Navigator};

/// Each step only accepts the shape its [`kind`](PathStep::kind) names.
///
/// `ForceUpdate` inserts where the shape can take a new element:
///
/// - `Key(k)`: a map lacking `k` gains `k => default`.
/// - `Slot(0)`: a zero-arity record becomes `(default,)`. Records never grow
///   past their arity.
/// - `Tag(t)`: an empty list becomes `[t => default]`.
/// - `Head`: an empty list becomes `[default]`.
///
/// ```
/// use sp_lens::{Navigator, PathStep};
/// use sp_value::{Key, Value};
///
/// let map = Value::map([(Key::from("a"), Value::from(1))]);
/// let step = PathStep::Key("b".into());
///
/// assert!(step.get(&map).is_err());
/// let grown = step.force_update(&map, Value::from(2), |v| Ok(v.clone())).unwrap();
/// assert_eq!(step.get(&grown), Ok(Value::from(2)));
/// ```
impl Navigator for PathStep {
    fn navigate<F>(&self, mode: &Mode, container: &Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>,
    {
        match (self, container.shape()) {
            (Self::Key(key), ShapeRef::Associative(map)) => match map.get(key) {
                Some(value) => focus(mode, value, k, |new| with_key(map, key.clone(), new)),
                None => insert(mode, container, |default| with_key(map, key.clone(), default)),
            },
            (&Self::Slot(index), ShapeRef::Record(slots)) => match slots.get(index) {
                Some(slot) => {
                    focus(mode, slot, k, |new| Value::Record(with_slot(slots, index, new)))
                }
                None if slots.is_empty() && index == 0 => {
                    insert(mode, container, |default| Value::record([default]))
                }
                None => no_focus(container),
            },
            (Self::Tag(wanted), ShapeRef::Tagged { tag, value, tail }) if tag == wanted => {
                focus(mode, value, k, |new| {
                    Value::List(with_head(Value::entry(tag.clone(), new), tail))
                })
            }
            (Self::Tag(wanted), ShapeRef::Empty) => insert(mode, container, |default| {
                Value::list([Value::entry(wanted.clone(), default)])
            }),
            (Self::Head, _) => match container.as_list() {
                Some([head, tail @ ..]) => {
                    focus(mode, head, k, |new| Value::List(with_head(new, tail)))
                }
                Some([]) => insert(mode, container, |default| Value::list([default])),
                None => no_focus(container),
            },
            _ => no_focus(container),
        }
    }
}

/// Steps are applied outermost first; each step's continuation navigates
/// the remaining steps.
///
/// The mode's default only reaches the last step; the levels above it run
/// as [`Mode::Update`]. An empty path focuses the container itself.
///
/// ```
/// use sp_lens::{Navigator, Path, PathStep};
/// use sp_value::{Key, Symbol, Value};
///
/// let doc = Value::map([(
///     Key::from("items"),
///     Value::list([Value::entry(Value::symbol("id"), Value::record([Value::from(1)]))]),
/// )]);
/// let path = Path::new([
///     PathStep::Key("items".into()),
///     PathStep::Tag(Symbol::new("id")),
///     PathStep::Slot(0),
/// ]);
///
/// assert_eq!(path.get(&doc), Ok(Value::from(1)));
/// let doc = path.set(&doc, Value::from(2)).unwrap();
/// assert_eq!(path.get(&doc), Ok(Value::from(2)));
/// ```
impl Navigator for Path<PathStep> {
    #[inline]
    fn navigate<F>(&self, mode: &Mode, container: &Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>,
    {
        navigate_steps(self.steps(), mode, container, k)
    }
}

fn navigate_steps<F>(
    steps: &[PathStep],
    mode: &Mode,
    container: &Value,
    k: F,
) -> Result<Value, LensError>
where
    F: FnOnce(&Value) -> Result<Value, LensError>,
{
    match steps {
        [] => k(container),
        [last] => last.navigate(mode, container, k),
        [step, rest @ ..] => {
            let outer = mode.outer();
            step.navigate(&outer, container, |inner| navigate_steps(rest, mode, inner, k))
        }
    }
}

use sp_value::{ShapeRef, Value};

use crate::focus::{focus, insert, no_focus, with_head, with_key, with_slot};
use crate::{IterationOrder, LensError, Mode, Navigator, PickFirst};

/// Focuses "the first" element of a container, whatever its shape.
///
/// The shape is read at runtime through [`Value::shape`]:
///
/// | shape                 | focus                              | `ForceUpdate` when empty |
/// |-----------------------|------------------------------------|--------------------------|
/// | Associative           | the entry chosen by `P`            | fails                    |
/// | Record                | slot 0                             | `(default,)`             |
/// | Tagged                | the value of the head entry        | n/a                      |
/// | Sequence              | the head                           | `[default]`              |
/// | anything else         | none                               | fails                    |
///
/// Rebuilding replaces only the focus: the map keeps its other entries, the
/// record its other slots, and a sequence its tail.
///
/// # Examples
///
/// ```
/// use sp_lens::{Navigator, ShapeLens, SmallestKey};
/// use sp_value::{Key, Value};
///
/// let tagged = Value::list([Value::entry(Value::symbol("n"), 1), Value::from("tail")]);
/// let set = ShapeLens::new().set(&tagged, Value::from(2)).unwrap();
/// assert_eq!(set, Value::list([Value::entry(Value::symbol("n"), 2), Value::from("tail")]));
///
/// let map = Value::map([(Key::from("b"), Value::from(2)), (Key::from("a"), Value::from(1))]);
/// let lens = ShapeLens::with_pick(SmallestKey);
/// assert_eq!(lens.get(&map), Ok(Value::from(1)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShapeLens<P = IterationOrder> {
    pick: P,
}

impl ShapeLens {
    /// Creates a lens picking map entries in iteration order.
    #[inline]
    pub const fn new() -> Self {
        Self {
            pick: IterationOrder,
        }
    }
}

impl<P: PickFirst> ShapeLens<P> {
    /// Creates a lens with a custom associative pick strategy.
    #[inline]
    pub const fn with_pick(pick: P) -> Self {
        Self { pick }
    }

    /// Returns the strategy choosing the focused entry of a map.
    #[inline]
    pub fn pick(&self) -> &P {
        &self.pick
    }
}

impl<P: PickFirst> Navigator for ShapeLens<P> {
    fn navigate<F>(&self, mode: &Mode, container: &Value, k: F) -> Result<Value, LensError>
    where
        F: FnOnce(&Value) -> Result<Value, LensError>,
    {
        match container.shape() {
            ShapeRef::Associative(map) => match self.pick.pick(map) {
                Some((key, value)) => focus(mode, value, k, |new| with_key(map, key.clone(), new)),
                None => no_focus(container),
            },
            ShapeRef::Record(slots) => match slots.first() {
                Some(slot) => focus(mode, slot, k, |new| Value::Record(with_slot(slots, 0, new))),
                None => insert(mode, container, |default| Value::record([default])),
            },
            ShapeRef::Tagged { tag, value, tail } => focus(mode, value, k, |new| {
                Value::List(with_head(Value::entry(tag.clone(), new), tail))
            }),
            ShapeRef::Sequence { head, tail } => {
                focus(mode, head, k, |new| Value::List(with_head(new, tail)))
            }
            ShapeRef::Empty => insert(mode, container, |default| Value::list([default])),
            ShapeRef::Opaque(_) => no_focus(container),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    use sp_value::{Key, Value};

    use super::ShapeLens;
    use crate::{LensError, Mode, Navigator, PickFirst, SmallestKey};

    fn int(i: i64) -> Value {
        Value::from(i)
    }

    fn increment(value: &Value) -> Result<Value, LensError> {
        value
            .as_int()
            .map(|i| int(i + 1))
            .ok_or(LensError::Rejected)
    }

    fn reject(_: &Value) -> Result<Value, LensError> {
        Err(LensError::Rejected)
    }

    fn modes() -> [Mode; 3] {
        [Mode::View, Mode::Update, Mode::ForceUpdate(int(99))]
    }

    /// Every shape with a focus, paired with the value in focus.
    fn focusable() -> Vec<(Value, Value)> {
        Vec::from([
            (Value::map([(Key::from("a"), int(1))]), int(1)),
            (Value::record([int(10), int(20), int(30)]), int(10)),
            (Value::record([int(5)]), int(5)),
            (
                Value::list([Value::entry(Value::symbol("t"), int(7)), int(8)]),
                int(7),
            ),
            (Value::list([int(3), int(4)]), int(3)),
            (Value::list([Value::entry(int(0), int(1))]), Value::entry(int(0), int(1))),
        ])
    }

    #[test]
    fn update_record_slot_zero() {
        let record = Value::record([int(10), int(20), int(30)]);
        let updated = ShapeLens::new().update(&record, increment).unwrap();
        assert_eq!(updated, Value::record([int(11), int(20), int(30)]));
    }

    #[test]
    fn view_returns_continuation_result() {
        let lens = ShapeLens::new();
        for (container, expected) in focusable() {
            assert_eq!(lens.get(&container), Ok(expected.clone()));
            assert_eq!(
                lens.view(&container, |_| Ok(Value::from("seen"))),
                Ok(Value::from("seen"))
            );
            assert_eq!(lens.view(&container, reject), Err(LensError::Rejected));
        }
    }

    #[test]
    fn view_map_invokes_once_on_present_value() {
        let lens = ShapeLens::new();
        for len in 1..20 {
            let map = Value::map((0..len).map(|i| (Key::from(i), int(i * 100))));
            let calls = Cell::new(0);

            let seen = lens
                .view(&map, |v| {
                    calls.set(calls.get() + 1);
                    Ok(v.clone())
                })
                .unwrap();

            assert_eq!(calls.get(), 1);
            assert!(map.as_map().unwrap().values().any(|v| *v == seen));
        }
    }

    #[test]
    fn update_map_replaces_only_picked_entry() {
        let map = Value::map([
            (Key::from("a"), int(1)),
            (Key::from("b"), int(2)),
            (Key::from("c"), int(3)),
        ]);
        let lens = ShapeLens::new();
        let picked = lens.get(&map).unwrap();
        let updated = lens.set(&map, Value::from("new")).unwrap();

        let before = map.as_map().unwrap();
        let after = updated.as_map().unwrap();
        assert_eq!(before.len(), after.len());

        let changed: Vec<_> = before
            .iter()
            .filter(|(key, value)| after.get(*key) != Some(*value))
            .collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].1, &picked);
        assert_eq!(after.get(changed[0].0), Some(&Value::from("new")));
    }

    #[test]
    fn update_sequences_keep_tail() {
        let lens = ShapeLens::new();

        let tagged = Value::list([Value::entry(Value::symbol("t"), int(7)), int(8), int(9)]);
        assert_eq!(
            lens.update(&tagged, increment),
            Ok(Value::list([Value::entry(Value::symbol("t"), int(8)), int(8), int(9)]))
        );

        let plain = Value::list([int(1), int(2)]);
        assert_eq!(lens.update(&plain, increment), Ok(Value::list([int(2), int(2)])));
    }

    #[test]
    fn rebuild_shares_untouched_children() {
        let shared = Value::list([int(1), int(2)]);
        let record = Value::record([int(0), shared.clone()]);
        let updated = ShapeLens::new().set(&record, int(5)).unwrap();

        let (Value::List(before), Value::List(after)) =
            (&record.as_record().unwrap()[1], &updated.as_record().unwrap()[1])
        else {
            panic!("expected lists in slot 1");
        };
        assert!(Arc::ptr_eq(before, after));
    }

    #[test]
    fn failed_update_leaves_container_intact() {
        let lens = ShapeLens::new();
        for (container, _) in focusable() {
            let snapshot = container.clone();
            assert_eq!(lens.update(&container, reject), Err(LensError::Rejected));
            assert_eq!(
                lens.force_update(&container, int(0), reject),
                Err(LensError::Rejected)
            );
            assert_eq!(container, snapshot);
        }
    }

    #[test]
    fn force_update_with_focus_ignores_default() {
        let lens = ShapeLens::new();
        let record = Value::record([int(1), int(2)]);
        assert_eq!(
            lens.force_update(&record, int(99), increment),
            lens.update(&record, increment)
        );
    }

    #[test]
    fn force_update_fills_empty_sequence() {
        let calls = Cell::new(0);
        let filled = ShapeLens::new().force_update(&Value::list([]), Value::from("d"), |v| {
            calls.set(calls.get() + 1);
            Ok(v.clone())
        });

        assert_eq!(filled, Ok(Value::list([Value::from("d")])));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn force_update_fills_zero_arity_record() {
        let calls = Cell::new(0);
        let filled = ShapeLens::new().force_update(&Value::record([]), Value::from("d"), |v| {
            calls.set(calls.get() + 1);
            Ok(v.clone())
        });

        assert_eq!(filled, Ok(Value::record([Value::from("d")])));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_containers_fail_without_invoking() {
        let lens = ShapeLens::new();
        for container in [Value::list([]), Value::record([])] {
            for mode in [Mode::View, Mode::Update] {
                let calls = Cell::new(0);
                let result = lens.navigate(&mode, &container, |v| {
                    calls.set(calls.get() + 1);
                    Ok(v.clone())
                });
                assert_eq!(result, Err(LensError::NoFocus));
                assert_eq!(calls.get(), 0);
            }
        }
    }

    #[test]
    fn no_focus_in_every_mode() {
        let lens = ShapeLens::new();
        let unfocusable = [
            Value::map([]),
            Value::Nil,
            int(1),
            Value::from(1.5),
            Value::from("text"),
            Value::symbol("sym"),
            Value::entry(Value::symbol("k"), int(1)),
        ];

        for container in unfocusable {
            for mode in modes() {
                let calls = Cell::new(0);
                let result = lens.navigate(&mode, &container, |v| {
                    calls.set(calls.get() + 1);
                    Ok(v.clone())
                });
                assert_eq!(result, Err(LensError::NoFocus), "{container:?} in {mode:?}");
                assert_eq!(calls.get(), 0);
            }
        }
    }

    #[test]
    fn smallest_key_ignores_insertion_order() {
        let lens = ShapeLens::with_pick(SmallestKey);
        let forward = Value::map((0..32).map(|i| (Key::from(i), int(i))));
        let backward = Value::map((0..32).rev().map(|i| (Key::from(i), int(i))));

        assert_eq!(lens.get(&forward), Ok(int(0)));
        assert_eq!(lens.get(&backward), Ok(int(0)));

        let map = backward.as_map().unwrap();
        assert_eq!(lens.pick().pick(map), Some((&Key::from(0), &int(0))));
        assert_eq!(
            lens.update(&backward, increment)
                .unwrap()
                .as_map()
                .unwrap()
                .get(&Key::from(0)),
            Some(&int(1))
        );
    }

    #[test]
    fn iteration_order_is_deterministic() {
        let lens = ShapeLens::new();
        let build = || Value::map((0..32).map(|i| (Key::from(i), int(i))));
        assert_eq!(lens.get(&build()), lens.get(&build()));
    }
}

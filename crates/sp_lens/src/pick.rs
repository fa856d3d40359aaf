use sp_value::{Key, Value, ValueMap};

/// Chooses the entry [`ShapeLens`](crate::ShapeLens) focuses in an associative container.
///
/// Must return `None` only for an empty map.
pub trait PickFirst {
    fn pick<'a>(&self, map: &'a ValueMap) -> Option<(&'a Key, &'a Value)>;
}

/// Picks the first entry the map's own iteration yields.
///
/// The order is implementation-defined: stable for a given insertion
/// history, but unrelated to the keys' ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IterationOrder;

impl PickFirst for IterationOrder {
    #[inline]
    fn pick<'a>(&self, map: &'a ValueMap) -> Option<(&'a Key, &'a Value)> {
        map.iter().next()
    }
}

/// Picks the entry with the smallest [`Key`].
///
/// Independent of how the map was built, at the cost of a full scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SmallestKey;

impl PickFirst for SmallestKey {
    #[inline]
    fn pick<'a>(&self, map: &'a ValueMap) -> Option<(&'a Key, &'a Value)> {
        map.iter().min_by(|(a, _), (b, _)| a.cmp(b))
    }
}

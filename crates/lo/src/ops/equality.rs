//! Equality operations
//!
//! Structural comparison of containers: same size, element-wise equal
//! entries. Two owned handles over the same container short-circuit to
//! true without touching any element.

use crate::{MapIn, SeqIn};
use lo_val::Pair;
use std::hash::Hash;

fn same_seq<T>(a: &SeqIn<'_, T>, b: &SeqIn<'_, T>) -> bool {
    match (a, b) {
        (SeqIn::Owned(x), SeqIn::Owned(y)) => std::ptr::eq(*x, *y),
        _ => false,
    }
}

/// Equals operation - structural equality of two sequences
/// Returns true iff the inputs have the same length and equal elements
///
/// # Examples
///
/// ```rust
/// use lo::{equals, List};
///
/// assert!(equals(List::from(vec![1, 2]), List::from(vec![1, 2])));
/// assert!(!equals(List::from(vec![1, 2]), List::from(vec![2, 1])));
/// ```
pub fn equals<'a, 'b, T: PartialEq + 'a + 'b>(
    a: impl Into<SeqIn<'a, T>>,
    b: impl Into<SeqIn<'b, T>>,
) -> bool {
    let a = a.into();
    let b = b.into();
    if same_seq(&a, &b) {
        return true;
    }
    a.as_slice() == b.as_slice()
}

/// EqualsBy operation - sequence equality under a supplied comparator
/// Returns true iff the inputs have the same length and the comparator
/// accepts every positional pair
pub fn equals_by<'a, 'b, T: 'a + 'b>(
    mut cmp: impl FnMut(&T, &T) -> bool,
    a: impl Into<SeqIn<'a, T>>,
    b: impl Into<SeqIn<'b, T>>,
) -> bool {
    let a = a.into();
    let b = b.into();
    if same_seq(&a, &b) {
        return true;
    }
    if a.len() != b.len() {
        return false;
    }
    a.as_slice().iter().zip(b.as_slice()).all(|(x, y)| cmp(x, y))
}

/// MapEquals operation - structural equality of two mappings
///
/// Entry order does not matter; the mappings are equal iff they hold
/// the same key set with equal values per key.
pub fn map_equals<'a, 'b, K, V>(
    a: impl Into<MapIn<'a, K, V>>,
    b: impl Into<MapIn<'b, K, V>>,
) -> bool
where
    K: Hash + Eq + 'a + 'b,
    V: PartialEq + 'a + 'b,
{
    let a = a.into();
    let b = b.into();
    if let (MapIn::Owned(x), MapIn::Owned(y)) = (&a, &b) {
        if std::ptr::eq(*x, *y) {
            return true;
        }
    }
    if a.len() != b.len() {
        return false;
    }
    a.entries().all(|(k, v)| b.get(k) == Some(v))
}

/// PairEquals operation - slot-wise equality of two pairs
pub fn pair_equals<A: PartialEq, B: PartialEq>(a: &Pair<A, B>, b: &Pair<A, B>) -> bool {
    a.first == b.first && a.second == b.second
}

/// PairListEquals operation - equality of two sequences of pairs
/// Returns true iff the sequences pair up slot-wise at every position
pub fn pair_list_equals<'a, 'b, A, B>(
    a: impl Into<SeqIn<'a, Pair<A, B>>>,
    b: impl Into<SeqIn<'b, Pair<A, B>>>,
) -> bool
where
    A: PartialEq + 'a + 'b,
    B: PartialEq + 'a + 'b,
{
    equals_by(|x, y| pair_equals(x, y), a, b)
}

//! Predicate scans and searches
//!
//! All four scans short-circuit; `every`/`any` stop at the deciding
//! element, `find`/`find_last` stop at the first match in their scan
//! direction.

use crate::SeqIn;

/// Every operation - true when the predicate accepts all elements
/// Returns true for an empty input
pub fn every<'a, T: 'a>(pred: impl FnMut(&T) -> bool, input: impl Into<SeqIn<'a, T>>) -> bool {
    input.into().as_slice().iter().all(pred)
}

/// Any operation - true when the predicate accepts some element
/// Returns false for an empty input
pub fn any<'a, T: 'a>(pred: impl FnMut(&T) -> bool, input: impl Into<SeqIn<'a, T>>) -> bool {
    input.into().as_slice().iter().any(pred)
}

/// Find operation - scan forward for the first accepted element
/// Returns `None` when nothing matches
///
/// # Examples
///
/// ```rust
/// use lo::{find, List};
///
/// let hit = find(|x| *x > 1, List::from(vec![1, 2, 3]));
/// assert_eq!(hit, Some(2));
/// ```
pub fn find<'a, T>(mut pred: impl FnMut(&T) -> bool, input: impl Into<SeqIn<'a, T>>) -> Option<T>
where
    T: Clone + 'a,
{
    match input.into() {
        SeqIn::Plain(list) => list.into_iter().find(|v| pred(v)),
        SeqIn::Owned(owned) => owned.iter().find(|&v| pred(v)).cloned(),
    }
}

/// Find operation scanning backward - last accepted element
/// Returns `None` when nothing matches
pub fn find_last<'a, T>(
    mut pred: impl FnMut(&T) -> bool,
    input: impl Into<SeqIn<'a, T>>,
) -> Option<T>
where
    T: Clone + 'a,
{
    match input.into() {
        SeqIn::Plain(list) => list.into_iter().rev().find(|v| pred(v)),
        SeqIn::Owned(owned) => owned.iter().rev().find(|&v| pred(v)).cloned(),
    }
}

/// Contains operation - membership test by equality
pub fn contains<'a, T>(value: &T, input: impl Into<SeqIn<'a, T>>) -> bool
where
    T: PartialEq + 'a,
{
    input.into().as_slice().contains(value)
}

//! Transform operations
//!
//! Each transform consumes its input (unless the argument is an owned
//! handle) and returns a fresh plain list of results.

use crate::{MapIn, SeqIn};
use lo_val::List;

/// Map operation - transform each element through a function
/// Returns a new list holding the transformed elements in order
///
/// # Examples
///
/// ```rust
/// use lo::{map, List};
///
/// let doubled = map(|x| x * 2, List::from(vec![1, 2, 3]));
/// assert_eq!(doubled.items, vec![2, 4, 6]);
/// ```
pub fn map<'a, T, U>(f: impl FnMut(T) -> U, input: impl Into<SeqIn<'a, T>>) -> List<U>
where
    T: Clone + 'a,
{
    input.into().into_values().map(f).collect()
}

/// Map operation with position - the function also receives the
/// element's index, counted from 0
/// Returns a new list holding the transformed elements in order
pub fn map_indexed<'a, T, U>(
    mut f: impl FnMut(T, usize) -> U,
    input: impl Into<SeqIn<'a, T>>,
) -> List<U>
where
    T: Clone + 'a,
{
    input
        .into()
        .into_values()
        .enumerate()
        .map(|(index, value)| f(value, index))
        .collect()
}

/// Map operation over a mapping - the function receives each key and
/// value, in insertion order
/// Returns a new list holding one result per entry
///
/// # Examples
///
/// ```rust
/// use lo::{map_entries, Map};
///
/// let m = Map::new().with("a", 1).with("b", 2);
/// let tagged = map_entries(|k, v| format!("{}={}", k, v), m);
/// assert_eq!(tagged.items, vec!["a=1", "b=2"]);
/// ```
pub fn map_entries<'a, K, V, U>(
    mut f: impl FnMut(K, V) -> U,
    input: impl Into<MapIn<'a, K, V>>,
) -> List<U>
where
    K: Clone + 'a,
    V: Clone + 'a,
{
    input
        .into()
        .into_entries()
        .map(|(key, value)| f(key, value))
        .collect()
}

/// FlatMap operation - transform each element into a list and splice
/// the results together
/// Returns one flat list, results in element order
///
/// # Examples
///
/// ```rust
/// use lo::{flat_map, List};
///
/// let out = flat_map(|x| List::from(vec![x, x * 10]), List::from(vec![1, 2]));
/// assert_eq!(out.items, vec![1, 10, 2, 20]);
/// ```
pub fn flat_map<'a, T, U>(f: impl FnMut(T) -> List<U>, input: impl Into<SeqIn<'a, T>>) -> List<U>
where
    T: Clone + 'a,
{
    input.into().into_values().flat_map(f).collect()
}

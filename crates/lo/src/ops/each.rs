//! Iteration, product and removal operations

use crate::SeqIn;
use lo_val::{pair, List, Pair};

/// Each operation - run a callable once per element, in order
///
/// The callable is invoked for its side effects; nothing is returned.
///
/// # Examples
///
/// ```rust
/// use lo::{each, List};
///
/// let mut seen = Vec::new();
/// each(|v| seen.push(v), List::from(vec![1, 2, 3]));
/// assert_eq!(seen, vec![1, 2, 3]);
/// ```
pub fn each<'a, T>(f: impl FnMut(T), input: impl Into<SeqIn<'a, T>>)
where
    T: Clone + 'a,
{
    input.into().into_values().for_each(f);
}

/// Each operation, indexed variant - the callable also receives the
/// element's position, counted from zero
pub fn each_indexed<'a, T>(mut f: impl FnMut(T, usize), input: impl Into<SeqIn<'a, T>>)
where
    T: Clone + 'a,
{
    for (index, value) in input.into().into_values().enumerate() {
        f(value, index);
    }
}

/// Product operation - cartesian product of two sequences
/// Returns every combination as a pair, outer loop over `a`, inner
/// loop over `b`
///
/// # Examples
///
/// ```rust
/// use lo::{pair, product, List};
///
/// let pairs = product(List::from(vec![1, 2]), List::from(vec!["x", "y"]));
/// assert_eq!(
///     pairs.items,
///     vec![pair(1, "x"), pair(1, "y"), pair(2, "x"), pair(2, "y")]
/// );
/// ```
pub fn product<'a, 'b, A, B>(
    a: impl Into<SeqIn<'a, A>>,
    b: impl Into<SeqIn<'b, B>>,
) -> List<Pair<A, B>>
where
    A: Clone + 'a,
    B: Clone + 'b,
{
    let b = b.into().into_list();
    let mut out = List::new();
    for x in a.into().into_values() {
        for y in b.iter() {
            out.push(pair(x.clone(), y.clone()));
        }
    }
    out
}

/// Pull operation - remove every element equal to a value
/// Returns the remaining elements in their original order
pub fn pull<'a, T>(value: &T, input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + PartialEq + 'a,
{
    match input.into() {
        SeqIn::Plain(mut list) => {
            list.items.retain(|v| v != value);
            list
        }
        SeqIn::Owned(owned) => owned.iter().filter(|&v| v != value).cloned().collect(),
    }
}

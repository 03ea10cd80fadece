//! Set-flavored operations over sequences
//!
//! All of these preserve first-occurrence order; membership is tracked
//! in an auxiliary hash set of seen keys.

use crate::SeqIn;
use lo_val::List;
use std::collections::HashSet;
use std::hash::Hash;

/// Uniq operation - drop repeated elements, keeping first occurrences
///
/// # Examples
///
/// ```rust
/// use lo::{uniq, List};
///
/// let out = uniq(List::from(vec![1, 3, 2, 1, 4, 2, 5]));
/// assert_eq!(out.items, vec![1, 3, 2, 4, 5]);
/// ```
pub fn uniq<'a, T>(input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + Hash + Eq + 'a,
{
    uniq_by(|v| v.clone(), input)
}

/// Uniq-by operation - drop elements whose derived key was already
/// seen, keeping first occurrences
pub fn uniq_by<'a, T, K>(mut key: impl FnMut(&T) -> K, input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + 'a,
    K: Hash + Eq,
{
    let mut seen = HashSet::new();
    let mut out = List::new();
    for value in input.into().into_values() {
        if seen.insert(key(&value)) {
            out.push(value);
        }
    }
    out
}

/// Union operation - deduplicated elements of `a` then of `b`
pub fn union<'a, 'b, T>(
    a: impl Into<SeqIn<'a, T>>,
    b: impl Into<SeqIn<'b, T>>,
) -> List<T>
where
    T: Clone + Hash + Eq + 'a + 'b,
{
    let mut seen = HashSet::new();
    let mut out = List::new();
    for value in a.into().into_values().chain(b.into().into_values()) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Intersection operation - deduplicated elements of `a` that also
/// appear in `b`, in `a`'s order
pub fn intersection<'a, 'b, T>(
    a: impl Into<SeqIn<'a, T>>,
    b: impl Into<SeqIn<'b, T>>,
) -> List<T>
where
    T: Clone + Hash + Eq + 'a + 'b,
{
    let pool: HashSet<T> = b.into().into_values().collect();
    let mut seen = HashSet::new();
    let mut out = List::new();
    for value in a.into().into_values() {
        if pool.contains(&value) && seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

/// Difference operation - elements of `a` that do not appear in `b`,
/// repeats included, in `a`'s order
pub fn difference<'a, 'b, T>(
    a: impl Into<SeqIn<'a, T>>,
    b: impl Into<SeqIn<'b, T>>,
) -> List<T>
where
    T: Clone + Hash + Eq + 'a + 'b,
{
    let pool: HashSet<T> = b.into().into_values().collect();
    let mut out = List::new();
    for value in a.into().into_values() {
        if !pool.contains(&value) {
            out.push(value);
        }
    }
    out
}

//! Fold and reduce operations

use crate::SeqIn;

/// Fold operation - combine elements left to right from a seed
/// Returns the final accumulator
///
/// # Examples
///
/// ```rust
/// use lo::{fold_left, List};
///
/// let total = fold_left(|acc, x| acc + x, 0, List::from(vec![1, 2, 3]));
/// assert_eq!(total, 6);
/// ```
pub fn fold_left<'a, T, A>(
    f: impl FnMut(A, T) -> A,
    seed: A,
    input: impl Into<SeqIn<'a, T>>,
) -> A
where
    T: Clone + 'a,
{
    input.into().into_values().fold(seed, f)
}

/// Fold operation from the right - combine elements right to left
/// from a seed
/// Returns the final accumulator
pub fn fold_right<'a, T, A>(
    f: impl FnMut(A, T) -> A,
    seed: A,
    input: impl Into<SeqIn<'a, T>>,
) -> A
where
    T: Clone + 'a,
{
    input.into().into_values().rev().fold(seed, f)
}

/// Reduce operation - fold left to right seeded by the first element
/// Returns `None` on an empty input; a single element comes back
/// untouched
pub fn reduce<'a, T>(f: impl FnMut(T, T) -> T, input: impl Into<SeqIn<'a, T>>) -> Option<T>
where
    T: Clone + 'a,
{
    input.into().into_values().reduce(f)
}

/// Reduce operation from the right - fold right to left seeded by the
/// last element
/// Returns `None` on an empty input; a single element comes back
/// untouched
pub fn reduce_right<'a, T>(f: impl FnMut(T, T) -> T, input: impl Into<SeqIn<'a, T>>) -> Option<T>
where
    T: Clone + 'a,
{
    input.into().into_values().rev().reduce(f)
}

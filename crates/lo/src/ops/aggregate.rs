//! Aggregate operations
//!
//! Scalar reductions. Empty inputs degrade to the reduction's identity
//! (`sum`, `join`) or to `None` (`max`, `min`, `mean`); none of them
//! fail.

use crate::SeqIn;
use lo_val::LoStr;
use std::fmt::Display;
use std::iter::Sum;

/// Sum operation - add the elements up
/// Returns the additive identity for an empty input
pub fn sum<'a, T>(input: impl Into<SeqIn<'a, T>>) -> T
where
    T: Clone + Sum<T> + 'a,
{
    input.into().into_values().sum()
}

/// Max operation - the largest element
/// Returns `None` for an empty input
pub fn max<'a, T>(input: impl Into<SeqIn<'a, T>>) -> Option<T>
where
    T: Clone + Ord + 'a,
{
    input.into().into_values().max()
}

/// Min operation - the smallest element
/// Returns `None` for an empty input
pub fn min<'a, T>(input: impl Into<SeqIn<'a, T>>) -> Option<T>
where
    T: Clone + Ord + 'a,
{
    input.into().into_values().min()
}

/// Mean operation - arithmetic mean of the elements
/// Returns `None` for an empty input
///
/// The element type must convert to `f64` without loss, which admits
/// integers up to 32 bits and the floats. `i64` (the element type
/// `Range` produces) has no lossless conversion; map to `f64` first.
///
/// # Examples
///
/// ```rust
/// use lo::{map, mean, range};
///
/// let m = mean(map(|x| x as f64, range(1, 5).to_list()));
/// assert_eq!(m, Some(2.5));
/// ```
pub fn mean<'a, T>(input: impl Into<SeqIn<'a, T>>) -> Option<f64>
where
    T: Clone + Into<f64> + 'a,
{
    let seq = input.into();
    let len = seq.len();
    if len == 0 {
        return None;
    }
    let total: f64 = seq.into_values().map(Into::into).sum();
    Some(total / len as f64)
}

/// Length operation - the number of elements
///
/// Unlike the `len` accessor on the container itself, this is a full
/// operation: a plain input is consumed by the call.
pub fn length<'a, T: 'a>(input: impl Into<SeqIn<'a, T>>) -> usize {
    input.into().len()
}

/// Join operation - concatenate the elements' text with a separator
///
/// # Examples
///
/// ```rust
/// use lo::{join, List};
///
/// let csv = join(", ", List::from(vec![1, 2, 3]));
/// assert_eq!(csv, "1, 2, 3");
/// ```
pub fn join<'a, T>(sep: &str, input: impl Into<SeqIn<'a, T>>) -> LoStr
where
    T: Clone + Display + 'a,
{
    let mut out = LoStr::new();
    for (i, value) in input.into().into_values().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&value.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map;
    use lo_val::{range, List};

    #[test]
    fn test_sum() {
        assert_eq!(sum(List::from(vec![1, 2, 3])), 6);
        assert_eq!(sum(List::<i32>::new()), 0);
    }

    #[test]
    fn test_max_min() {
        assert_eq!(max(List::from(vec![3, 1, 2])), Some(3));
        assert_eq!(min(List::from(vec![3, 1, 2])), Some(1));
        assert_eq!(max(List::<i32>::new()), None);
        assert_eq!(min(List::<i32>::new()), None);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(List::from(vec![1, 2, 3, 4])), Some(2.5));
        assert_eq!(mean(List::<i32>::new()), None);
    }

    #[test]
    fn test_mean_over_range_output() {
        let ticks = range(0, 10).to_list();
        assert_eq!(mean(map(|x| x as f64, ticks)), Some(4.5));
    }

    #[test]
    fn test_length() {
        assert_eq!(length(List::from(vec![1, 2, 3])), 3);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("-", List::from(vec!["a", "b", "c"])), "a-b-c");
        assert_eq!(join(", ", List::<i32>::new()), "");
        assert_eq!(join(", ", List::from(vec![7])), "7");
    }
}

//! Filter, take and drop operations

use crate::SeqIn;
use lo_val::List;

/// Filter operation - keep the elements the predicate accepts
/// Returns a new list with the accepted elements in their input order
///
/// # Examples
///
/// ```rust
/// use lo::{filter, List};
///
/// let evens = filter(|x| x % 2 == 0, List::from(vec![1, 2, 3, 4]));
/// assert_eq!(evens.items, vec![2, 4]);
/// ```
pub fn filter<'a, T>(mut pred: impl FnMut(&T) -> bool, input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + 'a,
{
    match input.into() {
        SeqIn::Plain(list) => list.into_iter().filter(|v| pred(v)).collect(),
        SeqIn::Owned(owned) => owned.iter().filter(|&v| pred(v)).cloned().collect(),
    }
}

/// Take operation - keep the first `n` elements
/// Returns a new list with `min(n, len)` elements
pub fn take<'a, T>(n: usize, input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + 'a,
{
    match input.into() {
        SeqIn::Plain(mut list) => {
            list.items.truncate(n);
            list
        }
        SeqIn::Owned(owned) => owned.iter().take(n).cloned().collect(),
    }
}

/// Take-while operation - keep the leading elements the predicate
/// accepts; the predicate sees each element together with the number
/// of elements already taken
/// Returns the accepted prefix as a new list
pub fn take_while<'a, T>(
    mut pred: impl FnMut(&T, usize) -> bool,
    input: impl Into<SeqIn<'a, T>>,
) -> List<T>
where
    T: Clone + 'a,
{
    let mut out = List::new();
    for value in input.into().into_values() {
        if !pred(&value, out.len()) {
            break;
        }
        out.push(value);
    }
    out
}

/// Drop operation - discard the first `n` elements
/// Returns a new list with the remaining `len - min(n, len)` elements
pub fn drop<'a, T>(n: usize, input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + 'a,
{
    match input.into() {
        SeqIn::Plain(mut list) => {
            let cut = n.min(list.items.len());
            list.items.drain(..cut);
            list
        }
        SeqIn::Owned(owned) => owned.iter().skip(n).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lo_val::as_owned_list;

    #[test]
    fn test_filter_keeps_order() {
        let out = filter(|x| *x > 1, List::from(vec![3, 1, 2]));
        assert_eq!(out.items, vec![3, 2]);
    }

    #[test]
    fn test_take_clamps_to_len() {
        assert_eq!(take(2, List::from(vec![1, 2, 3])).items, vec![1, 2]);
        assert_eq!(take(9, List::from(vec![1, 2, 3])).items, vec![1, 2, 3]);
        assert!(take(0, List::from(vec![1, 2, 3])).is_empty());
    }

    #[test]
    fn test_take_while_sees_output_size() {
        // accept while fewer than 2 elements are already out
        let out = take_while(|_, taken| taken < 2, List::from(vec![9, 9, 9, 9]));
        assert_eq!(out.items, vec![9, 9]);
    }

    #[test]
    fn test_take_while_stops_at_first_failure() {
        let out = take_while(|x, _| *x < 3, List::from(vec![1, 2, 3, 1]));
        assert_eq!(out.items, vec![1, 2]);
    }

    #[test]
    fn test_drop_clamps_to_len() {
        assert_eq!(drop(1, List::from(vec![1, 2, 3])).items, vec![2, 3]);
        assert!(drop(9, List::from(vec![1, 2, 3])).is_empty());
    }

    #[test]
    fn test_owned_input_survives() {
        let owned = as_owned_list([1, 2, 3, 4]);
        let front = take(2, &owned);
        let back = drop(2, &owned);
        assert_eq!(front.items, vec![1, 2]);
        assert_eq!(back.items, vec![3, 4]);
        assert_eq!(owned.len(), 4);
    }
}

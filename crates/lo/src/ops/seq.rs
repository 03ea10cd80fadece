//! Sequence rearrangement operations

use crate::SeqIn;
use lo_val::List;

/// Reverse operation - the elements in opposite order
pub fn reverse<'a, T>(input: impl Into<SeqIn<'a, T>>) -> List<T>
where
    T: Clone + 'a,
{
    match input.into() {
        SeqIn::Plain(mut list) => {
            list.items.reverse();
            list
        }
        SeqIn::Owned(owned) => owned.iter().rev().cloned().collect(),
    }
}

/// Concat operation - the elements of `a` followed by the elements of `b`
///
/// # Examples
///
/// ```rust
/// use lo::{concat, List};
///
/// let joined = concat(List::from(vec![1, 2]), List::from(vec![3]));
/// assert_eq!(joined.items, vec![1, 2, 3]);
/// ```
pub fn concat<'a, 'b, T>(a: impl Into<SeqIn<'a, T>>, b: impl Into<SeqIn<'b, T>>) -> List<T>
where
    T: Clone + 'a + 'b,
{
    let mut out = a.into().into_list();
    out.extend(b.into().into_values());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lo_val::own_list;

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(List::from(vec![1, 2, 3])).items, vec![3, 2, 1]);
        assert!(reverse(List::<i32>::new()).is_empty());
    }

    #[test]
    fn test_reverse_owned() {
        let owned = own_list(List::from(vec![1, 2]));
        assert_eq!(reverse(&owned).items, vec![2, 1]);
        assert_eq!(owned.items, vec![1, 2]);
    }

    #[test]
    fn test_concat_mixed_argument_forms() {
        let owned = own_list(List::from(vec![3, 4]));
        let joined = concat(List::from(vec![1, 2]), &owned);
        assert_eq!(joined.items, vec![1, 2, 3, 4]);
        assert_eq!(owned.len(), 2);
    }
}

//! Grouping operations

use crate::SeqIn;
use lo_val::{List, Map};
use std::hash::Hash;

/// Group-by operation - bucket elements under a derived key
/// Returns a mapping from key to the bucketed elements; buckets appear
/// in first-occurrence order and keep their members in input order
///
/// # Examples
///
/// ```rust
/// use lo::{group_by, List};
///
/// let by_parity = group_by(|x| x % 2, List::from(vec![1, 2, 3, 4]));
/// assert_eq!(by_parity.get(&1).unwrap().items, vec![1, 3]);
/// assert_eq!(by_parity.get(&0).unwrap().items, vec![2, 4]);
/// ```
pub fn group_by<'a, T, K>(
    mut key: impl FnMut(&T) -> K,
    input: impl Into<SeqIn<'a, T>>,
) -> Map<K, List<T>>
where
    T: Clone + 'a,
    K: Hash + Eq,
{
    let mut out = Map::new();
    for value in input.into().into_values() {
        let k = key(&value);
        out.get_or_insert_with(k, List::new).push(value);
    }
    out
}

/// Index-by operation - key elements by a derived key, the last
/// element per key winning
pub fn index_by<'a, T, K>(
    mut key: impl FnMut(&T) -> K,
    input: impl Into<SeqIn<'a, T>>,
) -> Map<K, T>
where
    T: Clone + 'a,
    K: Hash + Eq,
{
    let mut out = Map::new();
    for value in input.into().into_values() {
        out.set(key(&value), value);
    }
    out
}

/// Chunk operation - split into consecutive runs of `n` elements, the
/// last run keeping whatever remains
/// Returns a list of chunks; a chunk size of zero yields no chunks
pub fn chunk<'a, T>(n: usize, input: impl Into<SeqIn<'a, T>>) -> List<List<T>>
where
    T: Clone + 'a,
{
    let mut out = List::new();
    if n == 0 {
        return out;
    }
    let mut current = List::new();
    for value in input.into().into_values() {
        current.push(value);
        if current.len() == n {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lo_val::pair;

    #[test]
    fn test_group_by_buckets_in_first_seen_order() {
        let input = List::from(vec![pair("a", 1), pair("b", 2), pair("a", 3)]);
        let grouped = group_by(|p| p.first, input);

        let keys: Vec<&&str> = grouped.keys().collect();
        assert_eq!(keys, vec![&"a", &"b"]);
        assert_eq!(
            grouped.get(&"a").unwrap().items,
            vec![pair("a", 1), pair("a", 3)]
        );
        assert_eq!(grouped.get(&"b").unwrap().items, vec![pair("b", 2)]);
    }

    #[test]
    fn test_index_by_last_wins() {
        let input = List::from(vec![pair("a", 1), pair("b", 2), pair("a", 3)]);
        let indexed = index_by(|p| p.first, input);

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed.get(&"a"), Some(&pair("a", 3)));
    }

    #[test]
    fn test_chunk_last_short() {
        let chunks = chunk(2, List::from(vec![1, 2, 3, 4, 5]));
        let plain: Vec<Vec<i32>> = chunks.into_iter().map(|c| c.items).collect();
        assert_eq!(plain, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_chunk_zero_is_empty() {
        assert!(chunk(0, List::from(vec![1, 2, 3])).is_empty());
    }
}

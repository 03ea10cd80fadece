//! Conversions between mappings and sequences of pairs

use crate::{MapIn, SeqIn};
use lo_val::{pair, List, Map, Pair};
use std::hash::Hash;

/// Keys operation - the mapping's keys as a list, in insertion order
pub fn keys<'a, K, V>(input: impl Into<MapIn<'a, K, V>>) -> List<K>
where
    K: Clone + 'a,
    V: 'a,
{
    match input.into() {
        MapIn::Plain(map) => map.into_iter().map(|(k, _)| k).collect(),
        MapIn::Owned(owned) => owned.keys().cloned().collect(),
    }
}

/// Values operation - the mapping's values as a list, in insertion
/// order
pub fn values<'a, K, V>(input: impl Into<MapIn<'a, K, V>>) -> List<V>
where
    K: 'a,
    V: Clone + 'a,
{
    match input.into() {
        MapIn::Plain(map) => map.into_iter().map(|(_, v)| v).collect(),
        MapIn::Owned(owned) => owned.values().cloned().collect(),
    }
}

/// Map-keys operation - rewrite every key through a function, values
/// untouched; colliding rewritten keys keep the last value
pub fn map_keys<'a, K, V, K2>(
    mut f: impl FnMut(K) -> K2,
    input: impl Into<MapIn<'a, K, V>>,
) -> Map<K2, V>
where
    K: Clone + 'a,
    V: Clone + 'a,
    K2: Hash + Eq,
{
    input
        .into()
        .into_entries()
        .map(|(k, v)| (f(k), v))
        .collect()
}

/// Map-values operation - rewrite every value through a function,
/// keys untouched
pub fn map_values<'a, K, V, V2>(
    mut f: impl FnMut(V) -> V2,
    input: impl Into<MapIn<'a, K, V>>,
) -> Map<K, V2>
where
    K: Clone + Hash + Eq + 'a,
    V: Clone + 'a,
{
    input
        .into()
        .into_entries()
        .map(|(k, v)| (k, f(v)))
        .collect()
}

/// To-pairs operation - the mapping's entries as a list of pairs, in
/// insertion order
pub fn to_pairs<'a, K, V>(input: impl Into<MapIn<'a, K, V>>) -> List<Pair<K, V>>
where
    K: Clone + 'a,
    V: Clone + 'a,
{
    input
        .into()
        .into_entries()
        .map(|(k, v)| pair(k, v))
        .collect()
}

/// From-pairs operation - build a mapping from a list of pairs, the
/// last pair per key winning
pub fn from_pairs<'a, K, V>(input: impl Into<SeqIn<'a, Pair<K, V>>>) -> Map<K, V>
where
    K: Clone + Hash + Eq + 'a,
    V: Clone + 'a,
{
    input
        .into()
        .into_values()
        .map(|p| (p.first, p.second))
        .collect()
}

/// Zip operation - pair elements positionally, stopping at the
/// shorter input
///
/// # Examples
///
/// ```rust
/// use lo::{pair, zip, List};
///
/// let zipped = zip(List::from(vec![1, 2, 3]), List::from(vec!["x", "y"]));
/// assert_eq!(zipped.items, vec![pair(1, "x"), pair(2, "y")]);
/// ```
pub fn zip<'a, 'b, A, B>(
    a: impl Into<SeqIn<'a, A>>,
    b: impl Into<SeqIn<'b, B>>,
) -> List<Pair<A, B>>
where
    A: Clone + 'a,
    B: Clone + 'b,
{
    a.into()
        .into_values()
        .zip(b.into().into_values())
        .map(|(x, y)| pair(x, y))
        .collect()
}

/// Zip-object operation - build a mapping from a sequence of keys and
/// a sequence of values; keys left without a value get `None`, values
/// left without a key are ignored
pub fn zip_object<'a, 'b, K, V>(
    key_seq: impl Into<SeqIn<'a, K>>,
    value_seq: impl Into<SeqIn<'b, V>>,
) -> Map<K, Option<V>>
where
    K: Clone + Hash + Eq + 'a,
    V: Clone + 'b,
{
    let mut remaining = value_seq.into().into_values();
    let mut out = Map::new();
    for key in key_seq.into().into_values() {
        out.set(key, remaining.next());
    }
    out
}

/// Merge operation - combine two mappings into one
///
/// Entries of `a` come first in their order; entries of `b` follow in
/// theirs. On a key collision `b`'s value wins while the key keeps its
/// position from `a`.
pub fn merge<'a, 'b, K, V>(
    a: impl Into<MapIn<'a, K, V>>,
    b: impl Into<MapIn<'b, K, V>>,
) -> Map<K, V>
where
    K: Clone + Hash + Eq + 'a + 'b,
    V: Clone + 'a + 'b,
{
    let mut out = a.into().into_map();
    for (key, value) in b.into().into_entries() {
        out.set(key, value);
    }
    out
}

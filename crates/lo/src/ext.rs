//! Method-call surface
//!
//! The operations in method position, for pipeline-shaped code. The
//! receiver follows the same rules as the last argument of the free
//! function: a plain container is consumed by the call, an owned
//! handle is lent. Four operations stay free-function only: `keys`,
//! `values` and `merge` would be shadowed by `Map`'s inherent methods
//! of the same names, and `pair_equals` takes plain references rather
//! than a container.
//!
//! # Examples
//!
//! ```rust
//! use lo::{List, ListOps};
//!
//! let out = List::from(vec![1, 2, 3, 4])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10);
//! assert_eq!(out.items, vec![20, 40]);
//! ```

use crate::ops;
use crate::{MapIn, SeqIn};
use lo_val::{List, LoStr, Map, Pair};
use std::fmt::Display;
use std::hash::Hash;
use std::iter::Sum;

/// Sequence operations in method position, available on `List<T>`
/// (consuming) and `&OwnedList<T>` (lending).
pub trait ListOps<'a, T: 'a>: Into<SeqIn<'a, T>> + Sized {
    // ========== Transforms ==========

    fn map<U>(self, f: impl FnMut(T) -> U) -> List<U>
    where
        T: Clone + 'a,
    {
        ops::map(f, self)
    }

    fn map_indexed<U>(self, f: impl FnMut(T, usize) -> U) -> List<U>
    where
        T: Clone + 'a,
    {
        ops::map_indexed(f, self)
    }

    fn flat_map<U>(self, f: impl FnMut(T) -> List<U>) -> List<U>
    where
        T: Clone + 'a,
    {
        ops::flat_map(f, self)
    }

    // ========== Filters ==========

    fn filter(self, pred: impl FnMut(&T) -> bool) -> List<T>
    where
        T: Clone + 'a,
    {
        ops::filter(pred, self)
    }

    fn take(self, n: usize) -> List<T>
    where
        T: Clone + 'a,
    {
        ops::take(n, self)
    }

    fn take_while(self, pred: impl FnMut(&T, usize) -> bool) -> List<T>
    where
        T: Clone + 'a,
    {
        ops::take_while(pred, self)
    }

    fn drop(self, n: usize) -> List<T>
    where
        T: Clone + 'a,
    {
        ops::drop(n, self)
    }

    fn pull(self, value: &T) -> List<T>
    where
        T: Clone + PartialEq + 'a,
    {
        ops::pull(value, self)
    }

    // ========== Folds ==========

    fn fold_left<A>(self, f: impl FnMut(A, T) -> A, seed: A) -> A
    where
        T: Clone + 'a,
    {
        ops::fold_left(f, seed, self)
    }

    fn fold_right<A>(self, f: impl FnMut(A, T) -> A, seed: A) -> A
    where
        T: Clone + 'a,
    {
        ops::fold_right(f, seed, self)
    }

    fn reduce(self, f: impl FnMut(T, T) -> T) -> Option<T>
    where
        T: Clone + 'a,
    {
        ops::reduce(f, self)
    }

    fn reduce_right(self, f: impl FnMut(T, T) -> T) -> Option<T>
    where
        T: Clone + 'a,
    {
        ops::reduce_right(f, self)
    }

    // ========== Scans ==========

    fn every(self, pred: impl FnMut(&T) -> bool) -> bool
    where
        T: 'a,
    {
        ops::every(pred, self)
    }

    fn any(self, pred: impl FnMut(&T) -> bool) -> bool
    where
        T: 'a,
    {
        ops::any(pred, self)
    }

    fn find(self, pred: impl FnMut(&T) -> bool) -> Option<T>
    where
        T: Clone + 'a,
    {
        ops::find(pred, self)
    }

    fn find_last(self, pred: impl FnMut(&T) -> bool) -> Option<T>
    where
        T: Clone + 'a,
    {
        ops::find_last(pred, self)
    }

    fn contains(self, value: &T) -> bool
    where
        T: PartialEq + 'a,
    {
        ops::contains(value, self)
    }

    // ========== Set ops ==========

    fn uniq(self) -> List<T>
    where
        T: Clone + Hash + Eq + 'a,
    {
        ops::uniq(self)
    }

    fn uniq_by<K>(self, key: impl FnMut(&T) -> K) -> List<T>
    where
        T: Clone + 'a,
        K: Hash + Eq,
    {
        ops::uniq_by(key, self)
    }

    fn union<'b>(self, other: impl Into<SeqIn<'b, T>>) -> List<T>
    where
        T: Clone + Hash + Eq + 'a + 'b,
    {
        ops::union(self, other)
    }

    fn intersection<'b>(self, other: impl Into<SeqIn<'b, T>>) -> List<T>
    where
        T: Clone + Hash + Eq + 'a + 'b,
    {
        ops::intersection(self, other)
    }

    fn difference<'b>(self, other: impl Into<SeqIn<'b, T>>) -> List<T>
    where
        T: Clone + Hash + Eq + 'a + 'b,
    {
        ops::difference(self, other)
    }

    // ========== Grouping ==========

    fn group_by<K>(self, key: impl FnMut(&T) -> K) -> Map<K, List<T>>
    where
        T: Clone + 'a,
        K: Hash + Eq,
    {
        ops::group_by(key, self)
    }

    fn index_by<K>(self, key: impl FnMut(&T) -> K) -> Map<K, T>
    where
        T: Clone + 'a,
        K: Hash + Eq,
    {
        ops::index_by(key, self)
    }

    fn chunk(self, n: usize) -> List<List<T>>
    where
        T: Clone + 'a,
    {
        ops::chunk(n, self)
    }

    // ========== Aggregates ==========

    fn sum(self) -> T
    where
        T: Clone + Sum<T> + 'a,
    {
        ops::sum(self)
    }

    fn max(self) -> Option<T>
    where
        T: Clone + Ord + 'a,
    {
        ops::max(self)
    }

    fn min(self) -> Option<T>
    where
        T: Clone + Ord + 'a,
    {
        ops::min(self)
    }

    fn mean(self) -> Option<f64>
    where
        T: Clone + Into<f64> + 'a,
    {
        ops::mean(self)
    }

    fn length(self) -> usize
    where
        T: 'a,
    {
        ops::length(self)
    }

    fn join(self, sep: &str) -> LoStr
    where
        T: Clone + Display + 'a,
    {
        ops::join(sep, self)
    }

    // ========== Combining ==========

    fn reverse(self) -> List<T>
    where
        T: Clone + 'a,
    {
        ops::reverse(self)
    }

    fn concat<'b>(self, other: impl Into<SeqIn<'b, T>>) -> List<T>
    where
        T: Clone + 'a + 'b,
    {
        ops::concat(self, other)
    }

    fn zip<'b, B>(self, other: impl Into<SeqIn<'b, B>>) -> List<Pair<T, B>>
    where
        T: Clone + 'a,
        B: Clone + 'b,
    {
        ops::zip(self, other)
    }

    fn product<'b, B>(self, other: impl Into<SeqIn<'b, B>>) -> List<Pair<T, B>>
    where
        T: Clone + 'a,
        B: Clone + 'b,
    {
        ops::product(self, other)
    }

    fn zip_object<'b, V>(self, values: impl Into<SeqIn<'b, V>>) -> Map<T, Option<V>>
    where
        T: Clone + Hash + Eq + 'a,
        V: Clone + 'b,
    {
        ops::zip_object(self, values)
    }

    fn from_pairs<K, V>(self) -> Map<K, V>
    where
        Self: Into<SeqIn<'a, Pair<K, V>>>,
        K: Clone + Hash + Eq + 'a,
        V: Clone + 'a,
    {
        ops::from_pairs(self)
    }

    // ========== Equality ==========

    fn equals<'b>(self, other: impl Into<SeqIn<'b, T>>) -> bool
    where
        T: PartialEq + 'b,
    {
        ops::equals(self, other)
    }

    fn equals_by<'b>(
        self,
        cmp: impl FnMut(&T, &T) -> bool,
        other: impl Into<SeqIn<'b, T>>,
    ) -> bool
    where
        T: 'b,
    {
        ops::equals_by(cmp, self, other)
    }

    fn pair_list_equals<'b, A, B>(self, other: impl Into<SeqIn<'b, Pair<A, B>>>) -> bool
    where
        Self: Into<SeqIn<'a, Pair<A, B>>>,
        A: PartialEq + 'a + 'b,
        B: PartialEq + 'a + 'b,
    {
        ops::pair_list_equals(self, other)
    }

    // ========== Iteration ==========

    fn each(self, f: impl FnMut(T))
    where
        T: Clone + 'a,
    {
        ops::each(f, self)
    }

    fn each_indexed(self, f: impl FnMut(T, usize))
    where
        T: Clone + 'a,
    {
        ops::each_indexed(f, self)
    }
}

impl<'a, T: 'a, S: Into<SeqIn<'a, T>>> ListOps<'a, T> for S {}

/// Mapping operations in method position, available on `Map<K, V>`
/// (consuming) and `&OwnedMap<K, V>` (lending).
pub trait MapOps<'a, K: 'a, V: 'a>: Into<MapIn<'a, K, V>> + Sized {
    fn map_entries<U>(self, f: impl FnMut(K, V) -> U) -> List<U>
    where
        K: Clone + 'a,
        V: Clone + 'a,
    {
        ops::map_entries(f, self)
    }

    fn map_keys<K2>(self, f: impl FnMut(K) -> K2) -> Map<K2, V>
    where
        K: Clone + 'a,
        V: Clone + 'a,
        K2: Hash + Eq,
    {
        ops::map_keys(f, self)
    }

    fn map_values<V2>(self, f: impl FnMut(V) -> V2) -> Map<K, V2>
    where
        K: Clone + Hash + Eq + 'a,
        V: Clone + 'a,
    {
        ops::map_values(f, self)
    }

    fn to_pairs(self) -> List<Pair<K, V>>
    where
        K: Clone + 'a,
        V: Clone + 'a,
    {
        ops::to_pairs(self)
    }

    fn map_equals<'b>(self, other: impl Into<MapIn<'b, K, V>>) -> bool
    where
        K: Hash + Eq + 'b,
        V: PartialEq + 'b,
    {
        ops::map_equals(self, other)
    }
}

impl<'a, K: 'a, V: 'a, S: Into<MapIn<'a, K, V>>> MapOps<'a, K, V> for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use lo_val::{own_list, own_map, pair};

    #[test]
    fn test_pipeline_consumes_each_stage() {
        let out = List::from(vec![3, 1, 4, 1, 5, 9, 2, 6])
            .uniq()
            .filter(|x| x % 2 == 0)
            .map(|x| x * 100);
        assert_eq!(out.items, vec![400, 200, 600]);
    }

    #[test]
    fn test_owned_receiver_survives_method_calls() {
        let owned = own_list(List::from(vec![1, 2, 3]));
        assert_eq!(owned.take(2).items, vec![1, 2]);
        assert_eq!(owned.drop(2).items, vec![3]);
        assert_eq!(owned.sum(), 6);
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn test_method_and_free_forms_agree() {
        let by_method = List::from(vec![1, 2, 3]).map(|x| x + 1);
        let by_fn = ops::map(|x| x + 1, List::from(vec![1, 2, 3]));
        assert_eq!(by_method, by_fn);
    }

    #[test]
    fn test_map_methods() {
        let m = Map::new().with("a", 1).with("b", 2);
        let doubled = m.map_values(|v| v * 2);
        assert!(doubled.map_equals(Map::new().with("a", 2).with("b", 4)));
    }

    #[test]
    fn test_zip_and_fold_in_one_chain() {
        let total = List::from(vec![1, 2, 3])
            .zip(List::from(vec![10, 20]))
            .fold_left(|acc, p| acc + p.first * p.second, 0);
        assert_eq!(total, 1 * 10 + 2 * 20);
    }

    #[test]
    fn test_equals_method() {
        assert!(List::from(vec![pair(1, 2)]).equals(List::from(vec![pair(1, 2)])));
    }

    #[test]
    fn test_equality_methods_mix_plain_and_owned() {
        let owned = own_list(List::from(vec![1, 2, 3]));
        assert!(List::from(vec![1, 2, 3]).equals(&owned));
        assert!(owned.equals_by(|x, y| x == y, List::from(vec![1, 2, 3])));
        let settings = own_map(Map::new().with("a", 1));
        assert!(Map::new().with("a", 1).map_equals(&settings));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_zip_object_method_pads_missing_values() {
        let labels = own_list(List::from(vec!["a", "b", "c"]));
        let filled = labels.zip_object(List::from(vec![1, 2]));
        assert_eq!(filled.get(&"a"), Some(&Some(1)));
        assert_eq!(filled.get(&"c"), Some(&None));
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_pair_rows_round_trip_through_methods() {
        let rows = List::from(vec![pair("x", 1), pair("y", 2)]);
        let back = rows.from_pairs().to_pairs();
        assert!(back.pair_list_equals(List::from(vec![pair("x", 1), pair("y", 2)])));
    }
}

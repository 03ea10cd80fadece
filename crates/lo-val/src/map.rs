use crate::Pair;
use indexmap::IndexMap;
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

/// Insertion-ordered key/value mapping.
///
/// Entries come back out in the order they went in, including after
/// removals. Like [`List`](crate::List), a `Map` travels by value and
/// is freed by the operation that receives it unless claimed with
/// [`own`](Map::own) first.
#[derive(Debug, Clone)]
pub struct Map<K, V> {
    entries: IndexMap<K, V>,
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Map {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Map<K, V> {
    pub fn new() -> Self {
        Map {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn set(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        self.entries.entry(key).or_insert_with(default)
    }

    /// Remove an entry, keeping the remaining entries in insertion order.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn merge(&mut self, other: &Map<K, V>)
    where
        K: Clone,
        V: Clone,
    {
        for (key, value) in other.iter() {
            self.set(key.clone(), value.clone());
        }
    }

    // ========== Chainable Builder Methods ==========

    /// Create map and set key-value (chainable)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lo_val::Map;
    ///
    /// let map = Map::new()
    ///     .with("name", "Alice")
    ///     .with("city", "Boston");
    /// ```
    pub fn with(mut self, key: K, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Create map from pairs (convenience method)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lo_val::{pair, Map};
    ///
    /// let map = Map::from_pairs([pair("a", 1), pair("b", 2)]);
    /// assert_eq!(map.get(&"a"), Some(&1));
    /// ```
    pub fn from_pairs(pairs: impl IntoIterator<Item = Pair<K, V>>) -> Self {
        let mut map = Self::new();
        for pair in pairs {
            map.set(pair.first, pair.second);
        }
        map
    }
}

/// Build a map from pairs, last write per key winning.
///
/// # Examples
///
/// ```rust
/// use lo_val::{make_map, pair};
///
/// let m = make_map([pair("a", 1), pair("a", 2), pair("b", 3)]);
/// assert_eq!(m.get(&"a"), Some(&2));
/// assert_eq!(m.len(), 2);
/// ```
pub fn make_map<K: Hash + Eq, V>(pairs: impl IntoIterator<Item = Pair<K, V>>) -> Map<K, V> {
    Map::from_pairs(pairs)
}

impl<K: Display, V: Display> Display for Map<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        print_map(f, self)
    }
}

pub fn print_map<K: Display, V: Display>(f: &mut Formatter<'_>, map: &Map<K, V>) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (k, v)) in map.iter().enumerate() {
        write!(f, "{}: {}", k, v)?;
        if i < map.len() - 1 {
            write!(f, ", ")?;
        }
    }
    write!(f, "}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair;

    #[test]
    fn test_with_chain() {
        let map = Map::new().with("name", "Alice").with("city", "Boston");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"name"), Some(&"Alice"));
        assert_eq!(map.get(&"city"), Some(&"Boston"));
    }

    #[test]
    fn test_chain_preserves_order() {
        let map = Map::new().with("zebra", 1).with("apple", 2).with("middle", 3);

        let keys: Vec<&&str> = map.keys().collect();
        assert_eq!(keys, vec![&"zebra", &"apple", &"middle"]);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut map = Map::new().with("a", 1).with("b", 2);
        map.set("a", 10);

        let entries: Vec<(&&str, &i32)> = map.iter().collect();
        assert_eq!(entries, vec![(&"a", &10), (&"b", &2)]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map = Map::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(map.remove(&"b"), Some(2));

        let keys: Vec<&&str> = map.keys().collect();
        assert_eq!(keys, vec![&"a", &"c"]);
    }

    #[test]
    fn test_get_or_insert_with() {
        let mut map: Map<&str, Vec<i32>> = Map::new();
        map.get_or_insert_with("evens", Vec::new).push(2);
        map.get_or_insert_with("evens", Vec::new).push(4);

        assert_eq!(map.get(&"evens"), Some(&vec![2, 4]));
    }

    #[test]
    fn test_merge() {
        let mut map = Map::new().with("a", 1).with("b", 2);
        let other = Map::new().with("b", 20).with("c", 30);
        map.merge(&other);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&"b"), Some(&20));
        assert_eq!(map.get(&"c"), Some(&30));
    }

    #[test]
    fn test_eq_ignores_insertion_order() {
        let left = Map::new().with("a", 1).with("b", 2);
        let right = Map::new().with("b", 2).with("a", 1);
        assert_eq!(left, right);
    }

    #[test]
    fn test_make_map() {
        let map = make_map([pair("a", 1), pair("b", 2)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"b"), Some(&2));
    }

    #[test]
    fn test_display() {
        let map = Map::new().with("a", 1).with("b", 2);
        assert_eq!(map.to_string(), "{a: 1, b: 2}");
        assert_eq!(Map::<i32, i32>::new().to_string(), "{}");
    }
}

//! Argument forms accepted by every operation
//!
//! Operations take containers through [`SeqIn`] and [`MapIn`]. A plain
//! [`List`] or [`Map`] converts by value, moving into the operation,
//! which consumes it. An owned handle converts from `&OwnedList` /
//! `&OwnedMap`, lending the container for the duration of the call.
//! A bare `&List` deliberately does not convert: borrowing rights come
//! only from claiming the container first.

use lo_val::{List, Map, OwnedList, OwnedMap};

/// A sequence argument: either a plain list (consumed) or a borrowed
/// owned handle (read, cloning what the operation emits).
pub enum SeqIn<'a, T> {
    Plain(List<T>),
    Owned(&'a OwnedList<T>),
}

impl<'a, T> From<List<T>> for SeqIn<'a, T> {
    fn from(list: List<T>) -> Self {
        SeqIn::Plain(list)
    }
}

impl<'a, T> From<&'a OwnedList<T>> for SeqIn<'a, T> {
    fn from(owned: &'a OwnedList<T>) -> Self {
        SeqIn::Owned(owned)
    }
}

impl<'a, T> SeqIn<'a, T> {
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// View the elements for scanning without taking them.
    pub fn as_slice(&self) -> &[T] {
        match self {
            SeqIn::Plain(list) => &list.items,
            SeqIn::Owned(owned) => &owned.items,
        }
    }
}

impl<'a, T: Clone> SeqIn<'a, T> {
    /// Iterate the elements by value. The plain form moves them out;
    /// the owned form clones each element as it is produced.
    pub fn into_values(self) -> SeqValues<'a, T> {
        match self {
            SeqIn::Plain(list) => SeqValues::Plain(list.items.into_iter()),
            SeqIn::Owned(owned) => SeqValues::Owned(owned.items.iter()),
        }
    }

    /// Turn the argument into a plain list. The plain form hands back
    /// its own allocation.
    pub fn into_list(self) -> List<T> {
        match self {
            SeqIn::Plain(list) => list,
            SeqIn::Owned(owned) => (**owned).clone(),
        }
    }
}

/// By-value iterator over a sequence argument.
pub enum SeqValues<'a, T> {
    Plain(std::vec::IntoIter<T>),
    Owned(std::slice::Iter<'a, T>),
}

impl<'a, T: Clone> Iterator for SeqValues<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            SeqValues::Plain(iter) => iter.next(),
            SeqValues::Owned(iter) => iter.next().cloned(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SeqValues::Plain(iter) => iter.size_hint(),
            SeqValues::Owned(iter) => iter.size_hint(),
        }
    }
}

impl<'a, T: Clone> DoubleEndedIterator for SeqValues<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        match self {
            SeqValues::Plain(iter) => iter.next_back(),
            SeqValues::Owned(iter) => iter.next_back().cloned(),
        }
    }
}

impl<'a, T: Clone> ExactSizeIterator for SeqValues<'a, T> {}

/// A mapping argument, the [`Map`] analogue of [`SeqIn`].
pub enum MapIn<'a, K, V> {
    Plain(Map<K, V>),
    Owned(&'a OwnedMap<K, V>),
}

impl<'a, K, V> From<Map<K, V>> for MapIn<'a, K, V> {
    fn from(map: Map<K, V>) -> Self {
        MapIn::Plain(map)
    }
}

impl<'a, K, V> From<&'a OwnedMap<K, V>> for MapIn<'a, K, V> {
    fn from(owned: &'a OwnedMap<K, V>) -> Self {
        MapIn::Owned(owned)
    }
}

impl<'a, K, V> MapIn<'a, K, V> {
    pub fn len(&self) -> usize {
        match self {
            MapIn::Plain(map) => map.len(),
            MapIn::Owned(owned) => owned.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the entries in insertion order without taking them.
    pub fn entries(&self) -> indexmap::map::Iter<'_, K, V> {
        match self {
            MapIn::Plain(map) => map.iter(),
            MapIn::Owned(owned) => owned.iter(),
        }
    }
}

impl<'a, K: std::hash::Hash + Eq, V> MapIn<'a, K, V> {
    /// Look up a value for scanning without taking the entry.
    pub fn get(&self, key: &K) -> Option<&V> {
        match self {
            MapIn::Plain(map) => map.get(key),
            MapIn::Owned(owned) => owned.get(key),
        }
    }
}

impl<'a, K: Clone, V: Clone> MapIn<'a, K, V> {
    /// Iterate the entries by value, in insertion order.
    pub fn into_entries(self) -> MapEntries<'a, K, V> {
        match self {
            MapIn::Plain(map) => MapEntries::Plain(map.into_iter()),
            MapIn::Owned(owned) => MapEntries::Owned(owned.iter()),
        }
    }

    /// Turn the argument into a plain map. The plain form hands back
    /// its own storage.
    pub fn into_map(self) -> Map<K, V> {
        match self {
            MapIn::Plain(map) => map,
            MapIn::Owned(owned) => (**owned).clone(),
        }
    }
}

/// By-value iterator over a mapping argument.
pub enum MapEntries<'a, K, V> {
    Plain(indexmap::map::IntoIter<K, V>),
    Owned(indexmap::map::Iter<'a, K, V>),
}

impl<'a, K: Clone, V: Clone> Iterator for MapEntries<'a, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        match self {
            MapEntries::Plain(iter) => iter.next(),
            MapEntries::Owned(iter) => iter.next().map(|(k, v)| (k.clone(), v.clone())),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            MapEntries::Plain(iter) => iter.size_hint(),
            MapEntries::Owned(iter) => iter.size_hint(),
        }
    }
}

impl<'a, K: Clone, V: Clone> DoubleEndedIterator for MapEntries<'a, K, V> {
    fn next_back(&mut self) -> Option<(K, V)> {
        match self {
            MapEntries::Plain(iter) => iter.next_back(),
            MapEntries::Owned(iter) => iter.next_back().map(|(k, v)| (k.clone(), v.clone())),
        }
    }
}

//! Owned wrappers for keeping containers across operations
//!
//! By default an operation receives its container by value and frees it
//! when done; the move makes any later use of the original binding a
//! compile error. Claiming a container first (`own_list`, `own_map`, or
//! the fluent `.own()`) wraps it in an owned handle that operations
//! only borrow, so the container survives any number of calls until the
//! handle is released or dropped.

use crate::{List, Map};
use std::fmt::{self, Display, Formatter};
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// A list claimed by the caller.
///
/// Operations accept `&OwnedList<T>` and read through the borrow; the
/// wrapped list is never consumed. Dereferences to [`List`] for the
/// whole read surface.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedList<T> {
    list: List<T>,
}

impl<T> OwnedList<T> {
    /// Owning an already-owned list is a no-op.
    pub fn own(self) -> Self {
        self
    }

    /// Hand the list back to plain circulation. The next operation to
    /// receive it will consume it again.
    pub fn release(self) -> List<T> {
        self.list
    }
}

impl<T> Deref for OwnedList<T> {
    type Target = List<T>;

    fn deref(&self) -> &List<T> {
        &self.list
    }
}

impl<T> DerefMut for OwnedList<T> {
    fn deref_mut(&mut self) -> &mut List<T> {
        &mut self.list
    }
}

impl<'a, T> IntoIterator for &'a OwnedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.items.iter()
    }
}

impl<T: Display> Display for OwnedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.list.fmt(f)
    }
}

/// A map claimed by the caller, the mapping analogue of [`OwnedList`].
#[derive(Debug, Clone)]
pub struct OwnedMap<K, V> {
    map: Map<K, V>,
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for OwnedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> OwnedMap<K, V> {
    /// Owning an already-owned map is a no-op.
    pub fn own(self) -> Self {
        self
    }

    /// Hand the map back to plain circulation.
    pub fn release(self) -> Map<K, V> {
        self.map
    }
}

impl<K, V> Deref for OwnedMap<K, V> {
    type Target = Map<K, V>;

    fn deref(&self) -> &Map<K, V> {
        &self.map
    }
}

impl<K, V> DerefMut for OwnedMap<K, V> {
    fn deref_mut(&mut self) -> &mut Map<K, V> {
        &mut self.map
    }
}

impl<'a, K, V> IntoIterator for &'a OwnedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K: Display, V: Display> Display for OwnedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.map.fmt(f)
    }
}

/// Claim a list as owned.
///
/// # Examples
///
/// ```rust
/// use lo_val::{own_list, List};
///
/// let owned = own_list(List::from(vec![1, 2, 3]));
/// assert_eq!(owned.len(), 3);
/// ```
pub fn own_list<T>(list: List<T>) -> OwnedList<T> {
    OwnedList { list }
}

/// Claim a map as owned.
pub fn own_map<K, V>(map: Map<K, V>) -> OwnedMap<K, V> {
    OwnedMap { map }
}

/// Build an owned list directly from elements.
///
/// # Examples
///
/// ```rust
/// use lo_val::as_owned_list;
///
/// let owned = as_owned_list([1, 2, 3]);
/// assert_eq!(owned.len(), 3);
/// ```
pub fn as_owned_list<T>(items: impl IntoIterator<Item = T>) -> OwnedList<T> {
    own_list(List::from(items))
}

impl<T> List<T> {
    /// Claim this list as owned (fluent form of [`own_list`]).
    pub fn own(self) -> OwnedList<T> {
        own_list(self)
    }
}

impl<K, V> Map<K, V> {
    /// Claim this map as owned (fluent form of [`own_map`]).
    pub fn own(self) -> OwnedMap<K, V> {
        own_map(self)
    }
}

use std::fmt::{self, Formatter};
use std::ops::{Index, IndexMut};

/// Ordered sequence backing the operation library.
///
/// A `List` travels by value: passing it to an operation moves it, and
/// the operation frees it when done. Claim it with [`own`](List::own)
/// first to keep it alive across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    pub items: Vec<T>,
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::new()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        List { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = T>) {
        self.items.extend(other);
    }

    // ========== Chainable Builder Methods ==========

    /// Create list and add element (chainable)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lo_val::List;
    ///
    /// let list = List::new()
    ///     .with(1)
    ///     .with(2)
    ///     .with(3);
    /// ```
    pub fn with(mut self, item: T) -> Self {
        self.push(item);
        self
    }

    /// Create list and add multiple elements (chainable)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lo_val::List;
    ///
    /// let list = List::new()
    ///     .with_items([1, 2, 3, 4, 5]);
    /// ```
    pub fn with_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        for item in items {
            self.push(item);
        }
        self
    }

    /// Create list from iterator (convenience method)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lo_val::List;
    ///
    /// let list = List::from(vec![1, 2, 3, 4, 5]);
    /// let list = List::from(0..10);
    /// ```
    pub fn from(items: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        for item in items {
            list.push(item);
        }
        list
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List { items }
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        print_list(f, self)
    }
}

pub fn print_list<T: fmt::Display>(f: &mut Formatter<'_>, list: &List<T>) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in list.iter().enumerate() {
        write!(f, "{}", item)?;
        if i < list.len() - 1 {
            write!(f, ", ")?;
        }
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_chain() {
        let list = List::new().with(1).with(2).with(3).with(4).with(5);

        assert_eq!(list.len(), 5);
        assert_eq!(list.items[0], 1);
        assert_eq!(list.items[4], 5);
    }

    #[test]
    fn test_with_items() {
        let list = List::new().with_items([1, 2, 3, 4, 5]);

        assert_eq!(list.len(), 5);
        assert_eq!(list.items[0], 1);
        assert_eq!(list.items[4], 5);
    }

    #[test]
    fn test_from_range() {
        let list = List::from(0..5);
        assert_eq!(list.len(), 5);
        assert_eq!(list.items[0], 0);
        assert_eq!(list.items[4], 4);
    }

    #[test]
    fn test_from_empty() {
        let list = List::from(std::iter::empty::<i32>());
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut list = List::from(vec![1, 3]);
        list.insert(1, 2);
        assert_eq!(list.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_index() {
        let mut list = List::from(vec![10, 20, 30]);
        assert_eq!(list[1], 20);
        list[1] = 25;
        assert_eq!(list[1], 25);
    }

    #[test]
    fn test_iter_both_directions() {
        let list = List::from(vec![1, 2, 3]);
        let forward: Vec<i32> = list.iter().copied().collect();
        let backward: Vec<i32> = list.iter().rev().copied().collect();
        assert_eq!(forward, vec![1, 2, 3]);
        assert_eq!(backward, vec![3, 2, 1]);
    }

    #[test]
    fn test_display() {
        let list = List::from(vec![1, 2, 3]);
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(List::<i32>::new().to_string(), "[]");
    }
}

use std::fmt::{self, Display, Formatter};

/// Two-element value, the unit of `zip`, `to_pairs` and `product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

/// Build a pair (convenience constructor)
///
/// # Examples
///
/// ```rust
/// use lo_val::pair;
///
/// let p = pair("a", 1);
/// assert_eq!(p.first, "a");
/// assert_eq!(p.second, 1);
/// ```
pub fn pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair { first, second }
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair { first, second }
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A: Display, B: Display> Display for Pair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_fields() {
        let p = pair("name", "Alice");
        assert_eq!(p.first, "name");
        assert_eq!(p.second, "Alice");
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Pair<i32, &str> = (1, "one").into();
        assert_eq!(p, pair(1, "one"));

        let t: (i32, &str) = p.into();
        assert_eq!(t, (1, "one"));
    }

    #[test]
    fn test_swap() {
        let p = pair(1, "one").swap();
        assert_eq!(p, pair("one", 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(pair("a", 1).to_string(), "(a, 1)");
    }
}

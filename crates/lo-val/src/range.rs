use crate::{List, ValError, ValResult};
use std::cmp::Ordering;
use std::fmt::{self, Formatter};

/// Lazily stepped numeric range.
///
/// A range holds `start`, `finish` and `step` plus a cursor; values are
/// produced one at a time through [`Iterator`], never materialized up
/// front. `finish` is exclusive. Iterating a range by value consumes
/// it; iterate `&mut range` to keep it around, or [`reset`](Range::reset)
/// the cursor to walk it again.
///
/// The default range counts from 0 toward `i64::MAX` in steps of 1, so
/// take from it lazily rather than collecting it whole.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    pub start: i64,
    pub finish: i64,
    pub step: i64,
    current: i64,
}

impl Default for Range {
    fn default() -> Self {
        Range {
            start: 0,
            finish: i64::MAX,
            step: 1,
            current: 0,
        }
    }
}

impl Range {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// Whether another value exists between the cursor and `finish`,
    /// in the direction of `step`. A step of zero never has a next
    /// value.
    pub fn has_next(&self) -> bool {
        match self.step.cmp(&0) {
            Ordering::Greater => self.current < self.finish,
            Ordering::Less => self.current > self.finish,
            Ordering::Equal => false,
        }
    }

    /// Rewind the cursor to `start`.
    pub fn reset(&mut self) {
        self.current = self.start;
    }

    /// Drain the remaining values into a list, consuming the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lo_val::range;
    ///
    /// let list = range(0, 5).to_list();
    /// assert_eq!(list.items, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn to_list(self) -> List<i64> {
        self.collect()
    }
}

impl Iterator for Range {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if !self.has_next() {
            return None;
        }
        let value = self.current;
        // saturate near the i64 limits; has_next stops the walk there
        self.current = self.current.saturating_add(self.step);
        Some(value)
    }
}

/// Build an ascending range with a step of 1. `finish` is exclusive;
/// a `finish` at or below `start` yields an empty range.
///
/// # Examples
///
/// ```rust
/// use lo_val::range;
///
/// let values: Vec<i64> = range(1, 4).collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub fn range(start: i64, finish: i64) -> Range {
    Range {
        start,
        finish,
        step: 1,
        current: start,
    }
}

/// Build a range with an explicit step. Negative steps count down.
/// A step of zero is rejected because the range could never advance.
///
/// # Examples
///
/// ```rust
/// use lo_val::range_step;
///
/// let values: Vec<i64> = range_step(10, 4, -2).unwrap().collect();
/// assert_eq!(values, vec![10, 8, 6]);
/// ```
pub fn range_step(start: i64, finish: i64, step: i64) -> ValResult<Range> {
    if step == 0 {
        return Err(ValError::ZeroStep);
    }
    Ok(Range {
        start,
        finish,
        step,
        current: start,
    })
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.step == 1 {
            write!(f, "{}..{}", self.start, self.finish)
        } else {
            write!(f, "{}..{} by {}", self.start, self.finish, self.step)
        }
    }
}

//! lo - move-semantics functional utilities
//!
//! Operations over ordered lists and maps that consume their container
//! arguments by default: passing a plain [`List`] or [`Map`] moves it
//! into the call, and the compiler rejects any later use of it. A
//! container the caller wants to keep is claimed first through
//! [`own_list`] / [`own_map`] (or `.own()`); the resulting handle is
//! then lent to any number of operations by reference.
//!
//! Callables follow the same rule. A closure passed by value is gone
//! after the call; passing `&mut closure` lends it instead.
//!
//! A consumed container cannot be touched again:
//!
//! ```compile_fail
//! use lo::{map, List};
//!
//! let xs = List::from(vec![1, 2, 3]);
//! let doubled = map(|x| x * 2, xs);
//! let tripled = map(|x| x * 3, xs); // error: xs already moved
//! ```
//!
//! An owned handle survives as many calls as needed:
//!
//! ```rust
//! use lo::{map, own_list, List};
//!
//! let xs = own_list(List::from(vec![1, 2, 3]));
//! let doubled = map(|x| x * 2, &xs);
//! let tripled = map(|x| x * 3, &xs);
//! assert_eq!(doubled.items, vec![2, 4, 6]);
//! assert_eq!(tripled.items, vec![3, 6, 9]);
//! ```

pub use lo_val::*;

mod input;
pub use input::*;

mod ops;
pub use ops::*;

mod ext;
pub use ext::*;

#[cfg(test)]
mod tests;

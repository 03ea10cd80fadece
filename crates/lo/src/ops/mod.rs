//! The operation surface
//!
//! Free functions taking their container last, through [`crate::SeqIn`]
//! or [`crate::MapIn`], and any callable first. Plain containers are
//! consumed by the call; owned handles are lent and survive it.

mod transform;
pub use transform::*;

mod filter;
pub use filter::*;

mod fold;
pub use fold::*;

mod scan;
pub use scan::*;

mod sets;
pub use sets::*;

mod group;
pub use group::*;

mod shape;
pub use shape::*;

mod aggregate;
pub use aggregate::*;

mod equality;
pub use equality::*;

mod each;
pub use each::*;

mod seq;
pub use seq::*;

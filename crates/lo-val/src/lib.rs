mod string;
pub use string::*;

mod list;
pub use list::*;

mod pair;
pub use pair::*;

mod map;
pub use map::*;

mod range;
pub use range::*;

mod owned;
pub use owned::*;

mod error;
pub use error::*;

//! Grid views read by the rectangle finder.
//!
//! Every container implements [`GridView`]: a borrowed strided buffer
//! ([`GridRef`]), validated slice-of-rows input ([`RowGrid`]) and the owned
//! boolean [`Mask`]. The finder only ever asks for one row at a time.
pub mod cell;
pub mod mask;
pub mod rows;
pub mod traits;
pub mod view;

pub use self::cell::{Cell, CellPolarity};
pub use self::mask::Mask;
pub use self::rows::{GridRow, RowGrid};
pub use self::traits::{GridView, Rows};
pub use self::view::GridRef;

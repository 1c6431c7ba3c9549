#![doc = include_str!("../README.md")]

pub mod error;
pub mod finder;
pub mod grid;
pub mod io;
pub mod types;

mod histogram;

#[cfg(feature = "python")]
pub mod python;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{DimensionLimit, FinderError, ShapeMismatch, MAX_DIMENSION};
pub use crate::finder::{
    find_largest_rectangle, find_largest_rectangle_in_rows, find_largest_rectangles,
    largest_area, FinderOptions, FinderWorkspace, RectangleFinder,
};
pub use crate::types::{RectBounds, RectangleResult, ScanReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use largrect::prelude::*;
///
/// let cells = [1u8, 1, 0, 1, 1, 1];
/// let grid = GridRef::new(6, 1, &cells).unwrap();
/// let best = find_largest_rectangle(&grid).unwrap();
/// assert_eq!(best.area, 3);
/// ```
pub mod prelude {
    pub use crate::grid::{CellPolarity, GridRef, GridView, Mask, RowGrid};
    pub use crate::{
        find_largest_rectangle, FinderOptions, RectBounds, RectangleFinder, RectangleResult,
    };
}

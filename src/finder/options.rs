//! Parameters of the rectangle finder.
//!
//! Defaults reproduce the plain contract: set cells are valid and only the
//! per-side `MAX_DIMENSION` limit applies.
use crate::error::{DimensionLimit, FinderError, MAX_DIMENSION};
use crate::grid::CellPolarity;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FinderOptions {
    /// Which cells may belong to a rectangle.
    pub polarity: CellPolarity,
    /// Optional cap on `rows * cols`, to bound work on untrusted input.
    pub max_cells: Option<u64>,
}

impl FinderOptions {
    pub fn with_polarity(mut self, polarity: CellPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_max_cells(mut self, max_cells: Option<u64>) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Reject a `rows × cols` grid that exceeds the configured limits.
    pub fn check_dimensions(&self, rows: usize, cols: usize) -> Result<(), FinderError> {
        if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(FinderError::UnsupportedDimension {
                rows,
                cols,
                limit: DimensionLimit::Side(MAX_DIMENSION),
            });
        }
        if let Some(max_cells) = self.max_cells {
            if rows as u64 * cols as u64 > max_cells {
                return Err(FinderError::UnsupportedDimension {
                    rows,
                    cols,
                    limit: DimensionLimit::Cells(max_cells),
                });
            }
        }
        Ok(())
    }
}

//! Errors reported by the rectangle finder.
//!
//! Both kinds are raised before any scan work starts; the finder never
//! returns a partial result.

/// Largest number of rows or columns accepted by the finder.
///
/// Every coordinate then fits a C `int` on the host side and the area of
/// the full grid fits in a `u64`.
pub const MAX_DIMENSION: usize = i32::MAX as usize;

/// Why a grid shape was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeMismatch {
    /// Row `row` has a different length than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat buffer holds fewer cells than the declared shape needs.
    BufferTooShort { required: usize, found: usize },
    /// Row stride smaller than the row width.
    StrideTooSmall { width: usize, stride: usize },
}

/// Which size limit an oversized grid ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionLimit {
    /// Per-side limit (`MAX_DIMENSION`).
    Side(usize),
    /// Cell-count limit configured through `FinderOptions::max_cells`.
    Cells(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinderError {
    InvalidShape(ShapeMismatch),
    UnsupportedDimension {
        rows: usize,
        cols: usize,
        limit: DimensionLimit,
    },
}

impl std::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeMismatch::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            ShapeMismatch::BufferTooShort { required, found } => {
                write!(f, "buffer holds {found} cells, shape needs {required}")
            }
            ShapeMismatch::StrideTooSmall { width, stride } => {
                write!(f, "row stride {stride} is smaller than width {width}")
            }
        }
    }
}

impl std::fmt::Display for FinderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinderError::InvalidShape(mismatch) => write!(f, "invalid grid shape: {mismatch}"),
            FinderError::UnsupportedDimension {
                rows,
                cols,
                limit: DimensionLimit::Side(max),
            } => write!(
                f,
                "unsupported grid dimension {rows}x{cols} (at most {max} per side)"
            ),
            FinderError::UnsupportedDimension {
                rows,
                cols,
                limit: DimensionLimit::Cells(max),
            } => write!(
                f,
                "unsupported grid dimension {rows}x{cols} (at most {max} cells)"
            ),
        }
    }
}

impl std::error::Error for FinderError {}

impl From<ShapeMismatch> for FinderError {
    fn from(mismatch: ShapeMismatch) -> Self {
        FinderError::InvalidShape(mismatch)
    }
}

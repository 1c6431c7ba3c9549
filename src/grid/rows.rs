use super::cell::Cell;
use super::traits::GridView;
use crate::error::{FinderError, ShapeMismatch};

/// One row of nested grid input.
///
/// The cell type is an associated type, so `&[Vec<T>]`, `&[[T; N]]` and
/// `&[&[T]]` all infer their cell type without annotations.
pub trait GridRow {
    type Cell: Cell;

    fn cells(&self) -> &[Self::Cell];
}

impl<T: Cell> GridRow for Vec<T> {
    type Cell = T;

    #[inline]
    fn cells(&self) -> &[T] {
        self
    }
}

impl<T: Cell, const N: usize> GridRow for [T; N] {
    type Cell = T;

    #[inline]
    fn cells(&self) -> &[T] {
        self
    }
}

impl<'a, T: Cell> GridRow for &'a [T] {
    type Cell = T;

    #[inline]
    fn cells(&self) -> &[T] {
        self
    }
}

impl<T: Cell> GridRow for Box<[T]> {
    type Cell = T;

    #[inline]
    fn cells(&self) -> &[T] {
        self
    }
}

/// Check that every row has the length of the first one and return it.
pub(crate) fn uniform_width<R: GridRow>(rows: &[R]) -> Result<usize, FinderError> {
    let width = rows.first().map_or(0, |r| r.cells().len());
    if let Some((row, found)) = rows
        .iter()
        .map(|r| r.cells().len())
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(ShapeMismatch::RaggedRow {
            row,
            expected: width,
            found,
        }
        .into());
    }
    Ok(width)
}

/// Grid borrowed as a slice of rows (`&[Vec<T>]`, `&[[T; N]]`, `&[&[T]]`).
///
/// Construction checks that every row has the same length as the first
/// one, so a `RowGrid` is always rectangular.
#[derive(Debug)]
pub struct RowGrid<'a, R> {
    rows: &'a [R],
    width: usize,
}

impl<'a, R: GridRow> RowGrid<'a, R> {
    pub fn new(rows: &'a [R]) -> Result<Self, FinderError> {
        let width = uniform_width(rows)?;
        Ok(Self { rows, width })
    }
}

impl<'a, R> Clone for RowGrid<'a, R> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            width: self.width,
        }
    }
}

impl<'a, R: GridRow> GridView for RowGrid<'a, R> {
    type Cell = R::Cell;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.rows.len()
    }
    #[inline]
    fn row(&self, y: usize) -> &[R::Cell] {
        self.rows[y].cells()
    }
}

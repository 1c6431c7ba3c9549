//! Owned boolean occupancy mask in row-major layout (stride == width).
//!
//! Used when a grid has to be built rather than borrowed, e.g. from a
//! thresholded image file. Provides row access and a contiguous slice.
use super::cell::Cell;
use super::rows::{GridRow, RowGrid};
use super::traits::GridView;
use super::view::GridRef;
use crate::error::FinderError;

/// Fields stay private so that `data.len() == w * h` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    w: usize,
    h: usize,
    data: Vec<bool>,
}

impl Mask {
    /// All-unset mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![false; w * h],
        }
    }

    /// Mask where cell `(x, y)` is `f(x, y)`.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self { w, h, data }
    }

    /// Copy any grid view, keeping only whether each cell is set.
    pub fn from_view<G: GridView>(grid: &G) -> Self {
        let mut data = Vec::with_capacity(grid.width() * grid.height());
        for row in grid.rows() {
            data.extend(row.iter().map(|c| c.is_set()));
        }
        Self {
            w: grid.width(),
            h: grid.height(),
            data,
        }
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows<R: GridRow>(rows: &[R]) -> Result<Self, FinderError> {
        let grid = RowGrid::new(rows)?;
        Ok(Self::from_view(&grid))
    }

    /// Cells in row-major order, `width * height` of them.
    pub fn cells(&self) -> &[bool] {
        &self.data
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: bool) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Set every cell of the inclusive box `[top..=bottom] × [left..=right]`.
    pub fn fill_box(&mut self, top: usize, left: usize, bottom: usize, right: usize, v: bool) {
        if self.w == 0 || self.h == 0 {
            return;
        }
        for y in top..=bottom.min(self.h - 1) {
            for x in left..=right.min(self.w - 1) {
                self.set(x, y, v);
            }
        }
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Borrow as a read-only `GridRef`.
    pub fn as_view(&self) -> GridRef<'_, bool> {
        GridRef::new(self.w, self.h, &self.data).expect("mask storage matches its shape")
    }
}

impl GridView for Mask {
    type Cell = bool;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[bool] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[bool]> {
        Some(&self.data)
    }
}

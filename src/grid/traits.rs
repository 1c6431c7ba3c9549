use super::cell::Cell;

/// Row-major read access to a rectangular grid of cells.
pub trait GridView {
    type Cell: Cell;

    /// Number of columns.
    fn width(&self) -> usize;
    /// Number of rows.
    fn height(&self) -> usize;

    /// Borrow row `y`; the slice has exactly `width()` cells.
    fn row(&self, y: usize) -> &[Self::Cell];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { grid: self, y: 0 }
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    fn cell(&self, x: usize, y: usize) -> Self::Cell {
        self.row(y)[x]
    }

    fn as_slice(&self) -> Option<&[Self::Cell]> {
        None
    }
}

impl<G: GridView> GridView for &G {
    type Cell = G::Cell;

    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }
    #[inline]
    fn row(&self, y: usize) -> &[Self::Cell] {
        (**self).row(y)
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Self::Cell]> {
        (**self).as_slice()
    }
}

pub struct Rows<'a, G: ?Sized + GridView> {
    grid: &'a G,
    y: usize,
}

impl<'a, G: GridView> Iterator for Rows<'a, G> {
    type Item = &'a [G::Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.grid.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.grid.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.height().saturating_sub(self.y);
        (left, Some(left))
    }
}

impl<'a, G: GridView> ExactSizeIterator for Rows<'a, G> {}

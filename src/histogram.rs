use crate::grid::{Cell, CellPolarity};

/// One rectangle resolved under a histogram row: columns `left..=right`,
/// every bar in that span at least `height` tall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HistogramSpan {
    pub left: usize,
    pub right: usize,
    pub height: u32,
}

impl HistogramSpan {
    #[inline]
    pub(crate) fn area(&self) -> u64 {
        u64::from(self.height) * (self.right - self.left + 1) as u64
    }
}

/// Per-column run lengths of valid cells ending at the current row, plus
/// the monotonic stack used to resolve the rectangles under them.
#[derive(Debug, Default)]
pub(crate) struct HeightHistogram {
    heights: Vec<u32>,
    // (start column, height), heights strictly increasing bottom to top
    stack: Vec<(usize, u32)>,
}

impl HeightHistogram {
    /// Zero all bars and size the histogram for `cols` columns.
    pub(crate) fn reset(&mut self, cols: usize) {
        self.heights.clear();
        self.heights.resize(cols, 0);
        self.stack.clear();
    }

    #[cfg(test)]
    pub(crate) fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub(crate) fn capacity(&self) -> usize {
        self.heights.capacity()
    }

    /// Advance the histogram by one grid row and return how many of its
    /// cells are valid.
    pub(crate) fn accumulate_row<C: Cell>(&mut self, row: &[C], polarity: CellPolarity) -> usize {
        debug_assert_eq!(row.len(), self.heights.len());
        let mut valid = 0;
        for (h, &cell) in self.heights.iter_mut().zip(row) {
            if polarity.is_valid(cell) {
                *h += 1;
                valid += 1;
            } else {
                *h = 0;
            }
        }
        valid
    }

    /// Emit every rectangle that cannot be widened under the current bars.
    ///
    /// Columns are scanned left to right; a bar lower than the stack top
    /// closes the taller entries, and a zero-height sentinel at `cols`
    /// flushes the rest. Returns the number of spans emitted.
    pub(crate) fn resolve_spans(&mut self, mut visit: impl FnMut(HistogramSpan)) -> usize {
        let cols = self.heights.len();
        let mut emitted = 0;
        self.stack.clear();
        for col in 0..=cols {
            let height = if col < cols { self.heights[col] } else { 0 };
            let mut start = col;
            while let Some(&(top_start, top_height)) = self.stack.last() {
                if top_height <= height {
                    break;
                }
                self.stack.pop();
                visit(HistogramSpan {
                    left: top_start,
                    right: col - 1,
                    height: top_height,
                });
                emitted += 1;
                start = top_start;
            }
            let continues_top = self
                .stack
                .last()
                .is_some_and(|&(_, top_height)| top_height == height);
            if height > 0 && !continues_top {
                self.stack.push((start, height));
            }
        }
        emitted
    }
}

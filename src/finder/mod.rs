//! Largest all-valid rectangle in a 2-D grid.
//!
//! Each row updates a histogram of per-column run lengths; the largest
//! rectangle under every histogram row is resolved with a monotonic stack.
//! Work is O(rows × cols) with O(cols) scratch memory.
//!
//! Among rectangles of equal area the top-most one wins, then the
//! left-most one.
pub mod batch;
pub mod options;
pub mod workspace;

pub use self::batch::find_largest_rectangles;
pub use self::options::FinderOptions;
pub use self::workspace::FinderWorkspace;

use crate::error::FinderError;
use crate::grid::{GridRow, GridView, RowGrid};
use crate::histogram::HistogramSpan;
use crate::types::{RectBounds, RectangleResult, ScanReport};
use log::debug;
use std::time::Instant;

/// Finder owning its options and a reusable workspace.
#[derive(Debug, Default)]
pub struct RectangleFinder {
    options: FinderOptions,
    workspace: FinderWorkspace,
}

impl RectangleFinder {
    pub fn new(options: FinderOptions) -> Self {
        Self {
            options,
            workspace: FinderWorkspace::new(),
        }
    }

    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: FinderOptions) {
        self.options = options;
    }

    pub fn workspace(&self) -> &FinderWorkspace {
        &self.workspace
    }

    /// Largest valid rectangle of `grid`.
    pub fn find<G: GridView>(&mut self, grid: &G) -> Result<RectangleResult, FinderError> {
        scan(grid, &self.options, &mut self.workspace).map(|outcome| outcome.result)
    }

    /// Area of the largest valid rectangle, without its location.
    pub fn find_area<G: GridView>(&mut self, grid: &G) -> Result<u64, FinderError> {
        self.find(grid).map(|r| r.area)
    }

    /// Same as [`find`](Self::find), with scan statistics and timing.
    pub fn find_with_report<G: GridView>(&mut self, grid: &G) -> Result<ScanReport, FinderError> {
        let t0 = Instant::now();
        let outcome = scan(grid, &self.options, &mut self.workspace)?;
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "RectangleFinder::find {}x{} valid={} candidates={} area={} in {:.3} ms",
            grid.height(),
            grid.width(),
            outcome.valid_cells,
            outcome.candidates,
            outcome.result.area,
            elapsed_ms
        );
        Ok(ScanReport {
            rows: grid.height(),
            cols: grid.width(),
            valid_cells: outcome.valid_cells,
            candidates: outcome.candidates,
            elapsed_ms,
            result: outcome.result,
        })
    }
}

/// Largest rectangle of set cells in `grid`, using a fresh workspace.
pub fn find_largest_rectangle<G: GridView>(grid: &G) -> Result<RectangleResult, FinderError> {
    RectangleFinder::default().find(grid)
}

/// Largest rectangle of set cells in nested rows (`&[Vec<T>]`,
/// `&[[T; N]]`, `&[&[T]]`); ragged rows fail with `InvalidShape` before any
/// scanning.
pub fn find_largest_rectangle_in_rows<R: GridRow>(
    rows: &[R],
) -> Result<RectangleResult, FinderError> {
    let grid = RowGrid::new(rows)?;
    find_largest_rectangle(&grid)
}

/// Area of the largest rectangle of set cells in `grid`.
pub fn largest_area<G: GridView>(grid: &G) -> Result<u64, FinderError> {
    find_largest_rectangle(grid).map(|r| r.area)
}

pub(crate) struct ScanOutcome {
    pub result: RectangleResult,
    pub valid_cells: u64,
    pub candidates: u64,
}

/// Run the histogram scan over `grid` with the given scratch space.
pub(crate) fn scan<G: GridView>(
    grid: &G,
    options: &FinderOptions,
    workspace: &mut FinderWorkspace,
) -> Result<ScanOutcome, FinderError> {
    let rows = grid.height();
    let cols = grid.width();
    if let Err(err) = options.check_dimensions(rows, cols) {
        debug!("RectangleFinder::scan rejected {rows}x{cols}: {err}");
        return Err(err);
    }

    let mut best = RectangleResult::empty();
    let mut valid_cells = 0u64;
    let mut candidates = 0u64;
    if rows == 0 || cols == 0 {
        return Ok(ScanOutcome {
            result: best,
            valid_cells,
            candidates,
        });
    }

    let histogram = workspace.prepare(cols);
    for (r, row) in grid.rows().enumerate() {
        valid_cells += histogram.accumulate_row(row, options.polarity) as u64;
        let resolved = histogram.resolve_spans(|span| offer(&mut best, r, span));
        candidates += resolved as u64;
    }

    Ok(ScanOutcome {
        result: best,
        valid_cells,
        candidates,
    })
}

/// Replace `best` with the span's rectangle when it is larger, or equally
/// large and further up (then further left).
#[inline]
fn offer(best: &mut RectangleResult, row: usize, span: HistogramSpan) {
    let area = span.area();
    let top = row + 1 - span.height as usize;
    let wins = match best.bounds {
        None => area > 0,
        Some(b) => area > best.area || (area == best.area && (top, span.left) < (b.top, b.left)),
    };
    if wins {
        *best = RectangleResult {
            area,
            bounds: Some(RectBounds {
                top,
                left: span.left,
                bottom: row,
                right: span.right,
            }),
        };
    }
}

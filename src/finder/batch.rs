//! Run the finder over many independent grids.
//!
//! With the `parallel` feature each rayon worker keeps its own workspace;
//! otherwise one workspace is reused sequentially.
use super::options::FinderOptions;
use super::workspace::FinderWorkspace;
use crate::error::FinderError;
use crate::grid::GridView;
use crate::types::RectangleResult;
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Largest rectangle of every grid, in input order. A failing grid does
/// not affect the others.
pub fn find_largest_rectangles<G>(
    grids: &[G],
    options: &FinderOptions,
) -> Vec<Result<RectangleResult, FinderError>>
where
    G: GridView + Sync,
{
    let t0 = Instant::now();
    let results = run(grids, options);
    debug!(
        "find_largest_rectangles {} grids in {:.3} ms",
        grids.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );
    results
}

#[cfg(feature = "parallel")]
fn run<G>(grids: &[G], options: &FinderOptions) -> Vec<Result<RectangleResult, FinderError>>
where
    G: GridView + Sync,
{
    grids
        .par_iter()
        .map_init(FinderWorkspace::new, |workspace, grid| {
            super::scan(grid, options, workspace).map(|outcome| outcome.result)
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run<G>(grids: &[G], options: &FinderOptions) -> Vec<Result<RectangleResult, FinderError>>
where
    G: GridView + Sync,
{
    let mut workspace = FinderWorkspace::new();
    grids
        .iter()
        .map(|grid| super::scan(grid, options, &mut workspace).map(|outcome| outcome.result))
        .collect()
}

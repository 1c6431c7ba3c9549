//! Scratch buffers reused across finder invocations.
//!
//! A workspace belongs to one finder or one worker thread; it is never
//! shared between concurrent scans.
use crate::histogram::HeightHistogram;

#[derive(Debug, Default)]
pub struct FinderWorkspace {
    histogram: HeightHistogram,
    scans: u64,
}

impl FinderWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero the histogram for a grid with `cols` columns and hand it out.
    pub(crate) fn prepare(&mut self, cols: usize) -> &mut HeightHistogram {
        self.scans += 1;
        self.histogram.reset(cols);
        &mut self.histogram
    }

    /// Number of scans that have used this workspace.
    pub fn scans(&self) -> u64 {
        self.scans
    }

    /// Columns the histogram can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.histogram.capacity()
    }
}

use super::cell::Cell;
use super::traits::GridView;
use crate::error::{FinderError, ShapeMismatch};

/// Borrowed row-major grid over a flat buffer with an explicit row stride.
///
/// This is the shape in which host arrays arrive: a pointer to the first
/// cell, a width, a height and the number of cells between row starts.
#[derive(Clone, Copy, Debug)]
pub struct GridRef<'a, T> {
    w: usize,
    h: usize,
    stride: usize, // cells between rows
    data: &'a [T],
}

impl<'a, T: Cell> GridRef<'a, T> {
    /// Tightly packed `w × h` view (`stride == w`).
    pub fn new(w: usize, h: usize, data: &'a [T]) -> Result<Self, FinderError> {
        Self::with_stride(w, h, w, data)
    }

    /// View with rows starting every `stride` cells.
    ///
    /// Fails with `InvalidShape` when the stride is narrower than a row or
    /// the buffer ends before the last row does.
    pub fn with_stride(
        w: usize,
        h: usize,
        stride: usize,
        data: &'a [T],
    ) -> Result<Self, FinderError> {
        if h > 1 && stride < w {
            return Err(ShapeMismatch::StrideTooSmall { width: w, stride }.into());
        }
        let required = if h == 0 || w == 0 {
            0
        } else {
            (h - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(w))
                .ok_or(ShapeMismatch::BufferTooShort {
                    required: usize::MAX,
                    found: data.len(),
                })?
        };
        if data.len() < required {
            return Err(ShapeMismatch::BufferTooShort {
                required,
                found: data.len(),
            }
            .into());
        }
        Ok(Self {
            w,
            h,
            stride: if w == 0 { 0 } else { stride.max(w) },
            data,
        })
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }
}

impl<'a, T: Cell> GridView for GridRef<'a, T> {
    type Cell = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[T]> {
        (self.stride == self.w).then(|| &self.data[..self.w * self.h])
    }
}

use serde::Serialize;

/// Inclusive cell bounds of a rectangle: rows `top..=bottom`, columns
/// `left..=right`. Bounds with `right < left` or `bottom < top` describe an
/// empty box of zero width or height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RectBounds {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl RectBounds {
    #[inline]
    pub fn width(&self) -> usize {
        (self.right + 1).saturating_sub(self.left)
    }
    #[inline]
    pub fn height(&self) -> usize {
        (self.bottom + 1).saturating_sub(self.top)
    }
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.top..=self.bottom).contains(&row) && (self.left..=self.right).contains(&col)
    }
}

/// Largest all-valid rectangle of a grid.
///
/// `bounds` is `None` exactly when `area == 0`, i.e. the grid is empty or
/// holds no valid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RectangleResult {
    pub area: u64,
    pub bounds: Option<RectBounds>,
}

impl RectangleResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn width(&self) -> usize {
        self.bounds.map_or(0, |b| b.width())
    }

    pub fn height(&self) -> usize {
        self.bounds.map_or(0, |b| b.height())
    }

    /// `(area, top, left, bottom, right)` with the degenerate zero-size box
    /// `(0, 0, 0, -1, -1)` standing in for "no rectangle".
    pub fn as_tuple(&self) -> (u64, i64, i64, i64, i64) {
        match self.bounds {
            Some(b) => (
                self.area,
                b.top as i64,
                b.left as i64,
                b.bottom as i64,
                b.right as i64,
            ),
            None => (0, 0, 0, -1, -1),
        }
    }
}

/// Diagnostics for one finder invocation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub rows: usize,
    pub cols: usize,
    /// Cells that were eligible to be part of a rectangle.
    pub valid_cells: u64,
    /// Histogram rectangles resolved by the monotonic stack.
    pub candidates: u64,
    pub elapsed_ms: f64,
    pub result: RectangleResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_degenerate_tuple() {
        let r = RectangleResult::empty();
        assert!(r.is_empty());
        assert_eq!(r.as_tuple(), (0, 0, 0, -1, -1));
        assert_eq!((r.width(), r.height()), (0, 0));
    }

    #[test]
    fn single_cell_is_distinct_from_empty() {
        let r = RectangleResult {
            area: 1,
            bounds: Some(RectBounds {
                top: 0,
                left: 0,
                bottom: 0,
                right: 0,
            }),
        };
        assert!(!r.is_empty());
        assert_eq!(r.as_tuple(), (1, 0, 0, 0, 0));
        assert_ne!(r.as_tuple(), RectangleResult::empty().as_tuple());
    }

    #[test]
    fn inverted_bounds_are_empty_instead_of_panicking() {
        let b = RectBounds {
            top: 4,
            left: 3,
            bottom: 1,
            right: 0,
        };
        assert_eq!((b.width(), b.height(), b.area()), (0, 0, 0));
        assert!(!b.contains(2, 1));
        let b = RectBounds {
            top: 2,
            left: 2,
            bottom: 2,
            right: 1,
        };
        assert_eq!((b.width(), b.height()), (0, 1));
    }

    #[test]
    fn serializes_bounds_as_object_or_null() {
        let r = RectangleResult {
            area: 6,
            bounds: Some(RectBounds {
                top: 1,
                left: 1,
                bottom: 2,
                right: 3,
            }),
        };
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["area"], 6);
        assert_eq!(json["bounds"]["right"], 3);
        let json = serde_json::to_value(RectangleResult::empty()).unwrap();
        assert!(json["bounds"].is_null());
    }
}

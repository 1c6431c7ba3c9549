use largrect::grid::{CellPolarity, GridView};
use largrect::{RectBounds, RectangleResult};

/// Exhaustive reference: tries every rectangle, keeps the largest all-valid
/// one, top-most then left-most on ties.
pub fn brute_force_largest<G: GridView>(grid: &G, polarity: CellPolarity) -> RectangleResult {
    let (w, h) = (grid.width(), grid.height());
    // prefix[y][x] = valid cells in rows 0..y, columns 0..x
    let mut prefix = vec![vec![0u64; w + 1]; h + 1];
    for y in 0..h {
        for x in 0..w {
            let v = u64::from(polarity.is_valid(grid.cell(x, y)));
            prefix[y + 1][x + 1] = prefix[y][x + 1] + prefix[y + 1][x] - prefix[y][x] + v;
        }
    }
    let valid_in = |b: &RectBounds| {
        prefix[b.bottom + 1][b.right + 1] + prefix[b.top][b.left]
            - prefix[b.top][b.right + 1]
            - prefix[b.bottom + 1][b.left]
    };

    let mut best = RectangleResult::empty();
    for top in 0..h {
        for left in 0..w {
            for bottom in top..h {
                for right in left..w {
                    let b = RectBounds {
                        top,
                        left,
                        bottom,
                        right,
                    };
                    let area = b.area();
                    if valid_in(&b) != area {
                        continue;
                    }
                    // Loop order already visits (top, left) ascending.
                    if area > best.area {
                        best = RectangleResult {
                            area,
                            bounds: Some(b),
                        };
                    }
                }
            }
        }
    }
    best
}

/// True when every cell inside `bounds` is valid.
pub fn all_valid<G: GridView>(grid: &G, bounds: &RectBounds, polarity: CellPolarity) -> bool {
    (bounds.top..=bounds.bottom)
        .all(|y| (bounds.left..=bounds.right).all(|x| polarity.is_valid(grid.cell(x, y))))
}

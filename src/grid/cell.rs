//! Cell values and the rule deciding which cells may belong to a rectangle.
use serde::{Deserialize, Serialize};

/// A grid cell that is either set (true / non-zero) or unset.
pub trait Cell: Copy {
    fn is_set(self) -> bool;
}

impl Cell for bool {
    #[inline]
    fn is_set(self) -> bool {
        self
    }
}

macro_rules! impl_integer_cell {
    ($($ty:ty),*) => {
        $(
            impl Cell for $ty {
                #[inline]
                fn is_set(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

impl_integer_cell!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// NaN compares unequal to zero, so it counts as set (same as `bool(nan)`).
impl Cell for f32 {
    #[inline]
    fn is_set(self) -> bool {
        self != 0.0
    }
}

impl Cell for f64 {
    #[inline]
    fn is_set(self) -> bool {
        self != 0.0
    }
}

/// Which cells are valid members of a rectangle.
///
/// - `NonZero` (default): set cells are valid.
/// - `Zero`: unset cells are valid, i.e. the largest empty rectangle in an
///   occupancy image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellPolarity {
    #[default]
    NonZero,
    Zero,
}

impl CellPolarity {
    #[inline]
    pub fn is_valid<C: Cell>(self, cell: C) -> bool {
        match self {
            CellPolarity::NonZero => cell.is_set(),
            CellPolarity::Zero => !cell.is_set(),
        }
    }
}

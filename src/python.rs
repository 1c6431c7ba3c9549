//! Python extension module `largrect` over NumPy arrays.
//!
//! Built with the `python` feature (add `extension-module` when producing
//! the wheel). The scan itself runs with the GIL released.
use crate::error::FinderError;
use crate::finder::{FinderOptions, RectangleFinder};
use crate::grid::{Cell, CellPolarity, GridRef};
use crate::types::RectangleResult;
use numpy::{
    dtype_bound, Element, PyArrayDescrMethods, PyReadonlyArray2, PyUntypedArray,
    PyUntypedArrayMethods,
};
use pyo3::exceptions::{PyOverflowError, PyTypeError, PyValueError};
use pyo3::prelude::*;

const NATIVE_CONTRACT_VERSION: u32 = 1;

fn finder_error_to_py(err: FinderError) -> PyErr {
    match err {
        FinderError::InvalidShape(_) => PyValueError::new_err(err.to_string()),
        FinderError::UnsupportedDimension { .. } => PyOverflowError::new_err(err.to_string()),
    }
}

fn options_for(zero_is_valid: bool, max_cells: Option<u64>) -> FinderOptions {
    let polarity = if zero_is_valid {
        CellPolarity::Zero
    } else {
        CellPolarity::NonZero
    };
    FinderOptions::default()
        .with_polarity(polarity)
        .with_max_cells(max_cells)
}

fn scan_array<T>(
    py: Python<'_>,
    array: PyReadonlyArray2<'_, T>,
    options: FinderOptions,
) -> PyResult<RectangleResult>
where
    T: Cell + Element + Sync,
{
    let view = array.as_array();
    let (rows, cols) = view.dim();
    // Copies only when the array is not C-contiguous.
    let standard = view.as_standard_layout();
    let data = standard
        .as_slice()
        .ok_or_else(|| PyValueError::new_err("array has no contiguous row-major layout"))?;
    py.allow_threads(|| {
        let grid = GridRef::new(cols, rows, data)?;
        RectangleFinder::new(options).find(&grid)
    })
    .map_err(finder_error_to_py)
}

macro_rules! scan_first_matching {
    ($py:expr, $image:expr, $options:expr, $($ty:ty),+) => {
        $(
            if let Ok(array) = $image.extract::<PyReadonlyArray2<'_, $ty>>() {
                return scan_array::<$ty>($py, array, $options.clone());
            }
        )+
    };
}

fn scan_any(
    py: Python<'_>,
    image: &Bound<'_, PyAny>,
    options: FinderOptions,
) -> PyResult<RectangleResult> {
    scan_first_matching!(
        py, image, options, bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64
    );
    Err(PyTypeError::new_err(
        "image must be a 2-dimensional numpy array of bool, (u)int8, (u)int16, (u)int32, \
         (u)int64, float32 or float64",
    ))
}

#[pyfunction]
fn contract_version() -> u32 {
    NATIVE_CONTRACT_VERSION
}

/// Largest axis-aligned rectangle of valid cells.
///
/// Returns (area, top, left, bottom, right) with inclusive bounds, or
/// (0, 0, 0, -1, -1) when no cell is valid. Non-zero cells are valid unless
/// `zero_is_valid` is set.
#[pyfunction]
#[pyo3(signature = (image, zero_is_valid = false, max_cells = None))]
fn largest_rectangle(
    py: Python<'_>,
    image: &Bound<'_, PyAny>,
    zero_is_valid: bool,
    max_cells: Option<u64>,
) -> PyResult<(u64, i64, i64, i64, i64)> {
    let result = scan_any(py, image, options_for(zero_is_valid, max_cells))?;
    Ok(result.as_tuple())
}

/// Area of the largest axis-aligned rectangle of valid cells.
#[pyfunction]
#[pyo3(signature = (image, zero_is_valid = false, max_cells = None))]
fn largest_area(
    py: Python<'_>,
    image: &Bound<'_, PyAny>,
    zero_is_valid: bool,
    max_cells: Option<u64>,
) -> PyResult<u64> {
    scan_any(py, image, options_for(zero_is_valid, max_cells)).map(|r| r.area)
}

/// Find the largest rectangle containing 0 in a uint8 image.
///
/// Returns (x0, y0, x1, y1) where (x0, y0) is the upper left corner as
/// (row, column) and (x1, y1) the bottom right corner. An image without any
/// zero pixel gives (0, 0, 0, 0); use `largest_rectangle` to tell that
/// apart from a single zero pixel in the corner.
#[pyfunction]
#[pyo3(name = "largrect")]
fn largrect_uint8(py: Python<'_>, image: &Bound<'_, PyAny>) -> PyResult<(i64, i64, i64, i64)> {
    let untyped = image
        .downcast::<PyUntypedArray>()
        .map_err(|_| PyTypeError::new_err("Type numpy.uint8 expected for image array."))?;
    if !untyped.dtype().is_equiv_to(&dtype_bound::<u8>(py)) {
        return Err(PyTypeError::new_err("Type numpy.uint8 expected for image array."));
    }
    if untyped.ndim() != 2 {
        return Err(PyTypeError::new_err("image must be a 2-dimensional array."));
    }
    let array = image.extract::<PyReadonlyArray2<'_, u8>>()?;
    let result = scan_array(py, array, options_for(true, None))?;
    Ok(result.bounds.map_or((0, 0, 0, 0), |b| {
        (b.top as i64, b.left as i64, b.bottom as i64, b.right as i64)
    }))
}

#[pymodule]
#[pyo3(name = "largrect")]
fn largrect_module(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(contract_version, module)?)?;
    module.add_function(wrap_pyfunction!(largest_rectangle, module)?)?;
    module.add_function(wrap_pyfunction!(largest_area, module)?)?;
    module.add_function(wrap_pyfunction!(largrect_uint8, module)?)?;
    Ok(())
}

#[cfg(all(test, feature = "auto-initialize"))]
mod tests {
    use super::*;
    use crate::error::ShapeMismatch;
    use crate::find_largest_rectangle_in_rows;
    use numpy::ndarray::array;
    use numpy::{IntoPyArray, PyArray1, PyArray2};

    fn message(py: Python<'_>, err: &PyErr) -> String {
        err.value_bound(py).to_string()
    }

    #[test]
    fn image_without_valid_cells_gives_degenerate_tuple() {
        Python::with_gil(|py| {
            let image = PyArray2::<u8>::zeros_bound(py, [3, 3], false);
            let out = largest_rectangle(py, image.as_any(), false, None).unwrap();
            assert_eq!(out, (0, 0, 0, -1, -1));
            assert_eq!(largest_area(py, image.as_any(), false, None).unwrap(), 0);
        });
    }

    #[test]
    fn zero_polarity_is_selectable() {
        Python::with_gil(|py| {
            let image = PyArray2::<u8>::zeros_bound(py, [2, 3], false);
            let out = largest_rectangle(py, image.as_any(), true, None).unwrap();
            assert_eq!(out, (6, 0, 0, 1, 2));
        });
    }

    #[test]
    fn finder_errors_map_to_python_exceptions() {
        Python::with_gil(|py| {
            let err = finder_error_to_py(FinderError::InvalidShape(ShapeMismatch::RaggedRow {
                row: 1,
                expected: 3,
                found: 2,
            }));
            assert!(err.is_instance_of::<PyValueError>(py));
            assert!(message(py, &err).contains("row 1 has 2 cells"));

            let image = array![[1u8, 1, 1], [1, 1, 1], [1, 1, 1]].into_pyarray_bound(py);
            let err = largest_rectangle(py, image.as_any(), false, Some(4)).unwrap_err();
            assert!(err.is_instance_of::<PyOverflowError>(py));
            assert!(message(py, &err).contains("at most 4 cells"));
        });
    }

    #[test]
    fn every_integer_width_is_accepted() {
        Python::with_gil(|py| {
            let image = array![[0i16, 3], [-2, 5]].into_pyarray_bound(py);
            assert_eq!(largest_area(py, image.as_any(), false, None).unwrap(), 2);
            let image = array![[7i8, 7, 0]].into_pyarray_bound(py);
            assert_eq!(largest_area(py, image.as_any(), false, None).unwrap(), 2);
            let image = array![[1u16], [1], [1]].into_pyarray_bound(py);
            assert_eq!(largest_area(py, image.as_any(), false, None).unwrap(), 3);
            let image = PyArray2::<u32>::zeros_bound(py, [2, 2], false);
            assert_eq!(largest_area(py, image.as_any(), true, None).unwrap(), 4);
            let image = array![[u64::MAX, 0]].into_pyarray_bound(py);
            assert_eq!(
                largest_rectangle(py, image.as_any(), false, None).unwrap(),
                (1, 0, 0, 0, 0)
            );
        });
    }

    #[test]
    fn transposed_arrays_are_read_in_logical_order() {
        Python::with_gil(|py| {
            let image = array![[1u8, 1, 0], [1, 1, 0]].into_pyarray_bound(py);
            let transposed = image.getattr("T").unwrap();
            let out = largest_rectangle(py, &transposed, false, None).unwrap();
            assert_eq!(out, (4, 0, 0, 1, 1));

            let rows = [[1u8, 1], [1, 1], [0, 0]];
            let expected = find_largest_rectangle_in_rows(&rows).unwrap();
            assert_eq!(out, expected.as_tuple());
        });
    }

    #[test]
    fn unsupported_objects_raise_type_error() {
        Python::with_gil(|py| {
            let image = PyArray1::<u8>::zeros_bound(py, 4, false);
            let err = largest_rectangle(py, image.as_any(), false, None).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }

    #[test]
    fn legacy_entry_point_matches_documented_example() {
        Python::with_gil(|py| {
            let image = array![[1u8, 0, 0, 2], [0, 0, 0, 2], [0, 0, 0, 3], [2, 0, 0, 0]]
                .into_pyarray_bound(py);
            assert_eq!(largrect_uint8(py, image.as_any()).unwrap(), (0, 1, 3, 2));
        });
    }

    #[test]
    fn legacy_entry_point_without_zero_pixel_returns_origin_tuple() {
        Python::with_gil(|py| {
            let image = array![[4u8, 4], [4, 4]].into_pyarray_bound(py);
            assert_eq!(largrect_uint8(py, image.as_any()).unwrap(), (0, 0, 0, 0));
        });
    }

    #[test]
    fn legacy_entry_point_rejects_other_dtypes_and_ranks() {
        Python::with_gil(|py| {
            let image = PyArray2::<i16>::zeros_bound(py, [2, 2], false);
            let err = largrect_uint8(py, image.as_any()).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert_eq!(
                message(py, &err),
                "Type numpy.uint8 expected for image array."
            );

            let image = PyArray1::<u8>::zeros_bound(py, 4, false);
            let err = largrect_uint8(py, image.as_any()).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert_eq!(message(py, &err), "image must be a 2-dimensional array.");

            let not_an_array = py.None().into_bound(py);
            let err = largrect_uint8(py, &not_an_array).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
        });
    }
}

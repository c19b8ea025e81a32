use ndarray::{stack, Array2, ArrayView1, ArrayViewMutD, Axis};
use sigbridge_core::{Matrix, Smpl};
use tracing::trace;

use crate::error::{ConversionError, Result};
use crate::host::{HostArray, HostObject};
use crate::validate::{rejected, select_array, Target};

/// Alias the rows of a host array into a pre-sized [`Matrix`].
///
/// The array must have exactly `matrix.height()` rows; the matrix is never
/// resized. A one-dimensional array counts as a single row. Rows are taken
/// one by one, so a row-major array whose rows are padded apart is accepted
/// as long as each row is contiguous. On success every row of `matrix`
/// points into the array's storage and `matrix.length()` is the row length.
/// On failure `matrix` is left as it was.
pub fn array_to_matrix<'a>(
    input: Option<&'a mut HostObject>,
    matrix: &mut Matrix<'a>,
) -> Result<()> {
    let (array, shape) = select_array(input, Target::Matrix)?;

    if shape.rows != matrix.height() {
        let err = ConversionError::RowCountMismatch {
            expected: matrix.height(),
            actual: shape.rows,
        };
        rejected(Target::Matrix, &err);
        return Err(err);
    }

    let rows = array
        .view_mut::<Smpl>()
        .ok_or(ConversionError::NonContiguous)
        .and_then(split_rows)
        .inspect_err(|err| rejected(Target::Matrix, err))?;
    matrix.bind_rows(shape.length, rows)?;

    trace!(height = matrix.height(), length = matrix.length(), "bound matrix rows");
    Ok(())
}

/// Split a one- or two-dimensional view into one slice per row.
fn split_rows(view: ArrayViewMutD<'_, Smpl>) -> Result<Vec<&mut [Smpl]>> {
    let mut rest = if view.ndim() == 1 {
        view.insert_axis(Axis(0))
    } else {
        view
    };

    let mut rows = Vec::with_capacity(rest.len_of(Axis(0)));
    while rest.len_of(Axis(0)) > 0 {
        let (head, tail) = rest.split_at(Axis(0), 1);
        let row = head
            .index_axis_move(Axis(0), 0)
            .into_slice()
            .ok_or(ConversionError::NonContiguous)?;
        rows.push(row);
        rest = tail;
    }
    Ok(rows)
}

/// Copy a matrix's rows into a new, owned `(rows, length)` host array.
///
/// Each row is first viewed in place, then the views are stacked. Rows need
/// not be adjacent in memory, so this is the one conversion that copies.
/// An unbound matrix gives an array with zero rows.
pub fn matrix_to_array(matrix: &Matrix<'_>) -> HostArray {
    let rows: Vec<ArrayView1<'_, Smpl>> = matrix.rows().map(ArrayView1::from).collect();

    // `stack` refuses an empty sequence. Bound rows always share one length.
    let out = stack(Axis(0), &rows).unwrap_or_else(|_| Array2::zeros((0, matrix.length())));
    HostArray::from(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, s, Array1, Array2, Array3, ShapeBuilder};
    use sigbridge_core::kernel::Lifecycle;
    use sigbridge_core::MatrixConfig;

    fn matrix<'a>(height: usize) -> Matrix<'a> {
        Matrix::try_new(MatrixConfig { height }).expect("valid height")
    }

    fn base_ptr(host: &HostObject) -> *const Smpl {
        host.as_array()
            .and_then(HostArray::view::<Smpl>)
            .map(|v| v.as_ptr())
            .expect("sample array")
    }

    #[test]
    fn rows_alias_the_host_array() {
        let mut host: HostObject =
            Array2::<Smpl>::from_shape_fn((3, 4), |(i, j)| (i * 4 + j) as Smpl).into();
        let base = base_ptr(&host);

        let mut mat = matrix(3);
        array_to_matrix(Some(&mut host), &mut mat).expect("valid matrix");

        assert_eq!(mat.length(), 4);
        for i in 0..3 {
            assert_eq!(mat.row_ptr(i), Some(base.wrapping_add(i * 4)));
        }
        assert_eq!(mat.row(2).expect("row 2"), &[8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn row_count_mismatch_is_an_error() {
        let mut host: HostObject = Array2::<Smpl>::zeros((4, 5)).into();
        let mut mat = matrix(3);
        let err = array_to_matrix(Some(&mut host), &mut mat).expect_err("4 rows into 3");
        assert_eq!(
            err,
            ConversionError::RowCountMismatch {
                expected: 3,
                actual: 4,
            }
        );
        assert_eq!(mat.height(), 3);
        assert!(!mat.is_bound());
    }

    #[test]
    fn one_dimensional_input_is_a_single_row() {
        let mut host: HostObject = array![1.0 as Smpl, 2.0, 3.0].into();
        let mut mat = matrix(1);
        array_to_matrix(Some(&mut host), &mut mat).expect("single row");
        assert_eq!(mat.length(), 3);
        assert_eq!(mat.row(0).expect("row 0"), &[1.0, 2.0, 3.0]);

        let mut host: HostObject = Array1::<Smpl>::zeros(3).into();
        let mut mat = matrix(2);
        let err = array_to_matrix(Some(&mut host), &mut mat).expect_err("1 row into 2");
        assert_eq!(
            err,
            ConversionError::RowCountMismatch {
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn rejects_three_dimensions() {
        let mut host: HostObject = Array3::<Smpl>::zeros((2, 2, 2)).into();
        let mut mat = matrix(2);
        let err = array_to_matrix(Some(&mut host), &mut mat).expect_err("3-d input");
        assert_eq!(err, ConversionError::TooManyDimensions { max: 2, got: 3 });
    }

    #[test]
    fn rejects_column_major_storage() {
        let fortran = Array2::<Smpl>::zeros((2, 3).f());
        let mut host: HostObject = fortran.into();
        let mut mat = matrix(2);
        let err = array_to_matrix(Some(&mut host), &mut mat).expect_err("column-major input");
        assert_eq!(err, ConversionError::NonContiguous);
        assert!(!mat.is_bound());
    }

    #[test]
    fn padded_rows_are_bound_in_place() {
        let padded = Array2::<Smpl>::from_shape_fn((2, 4), |(i, j)| (i * 4 + j) as Smpl)
            .slice_move(s![.., ..3]);
        assert_eq!(padded.strides(), &[4, 1]);
        let mut host: HostObject = padded.into();
        let base = base_ptr(&host);

        let mut mat = matrix(2);
        array_to_matrix(Some(&mut host), &mut mat).expect("contiguous rows");

        assert_eq!(mat.length(), 3);
        assert_eq!(mat.row_ptr(0), Some(base));
        assert_eq!(mat.row_ptr(1), Some(base.wrapping_add(4)));
        assert_eq!(mat.row(1).expect("row 1"), &[4.0, 5.0, 6.0]);

        let out = matrix_to_array(&mat);
        assert_eq!(out.shape(), &[2, 3]);
    }

    #[test]
    fn strided_rows_are_rejected() {
        let strided = Array2::<Smpl>::zeros((2, 6)).slice_move(s![.., ..;2]);
        let mut host: HostObject = strided.into();
        let mut mat = matrix(2);
        let err = array_to_matrix(Some(&mut host), &mut mat).expect_err("strided rows");
        assert_eq!(err, ConversionError::NonContiguous);
        assert!(!mat.is_bound());
    }

    #[test]
    fn materialized_array_is_a_copy() {
        let mut host: HostObject = array![[1.0 as Smpl, 2.0], [3.0, 4.0], [5.0, 6.0]].into();
        let base = base_ptr(&host);
        let mut mat = matrix(3);
        array_to_matrix(Some(&mut host), &mut mat).expect("valid matrix");

        let out = matrix_to_array(&mat);
        assert_eq!(out.shape(), &[3, 2]);
        let values = out.view::<Smpl>().expect("sample array");
        assert_ne!(values.as_ptr(), base);
        assert_eq!(
            values.iter().copied().collect::<Vec<_>>(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn unbound_matrix_materializes_empty() {
        let mat = matrix(2);
        let out = matrix_to_array(&mat);
        assert_eq!(out.shape(), &[0, 0]);
    }
}

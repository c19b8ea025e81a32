use ndarray::ArrayViewMut1;
use sigbridge_core::{Smpl, Vector};
use tracing::trace;

use crate::error::{ConversionError, Result};
use crate::host::HostObject;
use crate::validate::{rejected, select_array, Target};

/// Alias a one-dimensional host array as a [`Vector`].
///
/// The vector borrows the array's element storage for `'a`; nothing is copied
/// and the array cannot be reshaped or dropped while the vector lives.
pub fn array_to_vector<'a>(input: Option<&'a mut HostObject>) -> Result<Vector<'a>> {
    let (array, shape) = select_array(input, Target::Vector)?;
    let data = array
        .view_mut::<Smpl>()
        .and_then(|view| view.into_slice())
        .ok_or(ConversionError::NonContiguous)
        .inspect_err(|err| rejected(Target::Vector, err))?;

    trace!(length = shape.length, "bound vector");
    Ok(Vector::new(data))
}

/// Expose a vector's samples as a one-dimensional host array view of
/// `vector.length()` elements. The view aliases the same storage.
pub fn vector_to_array(vector: Vector<'_>) -> ArrayViewMut1<'_, Smpl> {
    ArrayViewMut1::from(vector.into_slice())
}

//! Shape, dtype and size screening shared by the vector and matrix paths.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. an object was supplied,
//! 2. it is array-like (list-like and other inputs are rejected distinctly),
//! 3. it has between one and [`Target::max_rank`] dimensions,
//! 4. its elements are floating point of sample precision,
//! 5. every checked dimension is non-empty.

use core::fmt;

use tracing::debug;

use crate::error::{ConversionError, Result};
use crate::host::{Dtype, HostArray, HostObject, InputKind};

/// The structure a host array is being converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A one-dimensional [`sigbridge_core::Vector`].
    Vector,
    /// A row-major [`sigbridge_core::Matrix`].
    Matrix,
}

impl Target {
    /// Largest number of dimensions an input may have.
    pub const fn max_rank(self) -> usize {
        match self {
            Target::Vector => 1,
            Target::Matrix => 2,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Vector => f.write_str("vector"),
            Target::Matrix => f.write_str("matrix"),
        }
    }
}

/// Row layout an accepted array will be bound with.
///
/// One-dimensional input is always a single row, on either path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindShape {
    /// Number of rows.
    pub rows: usize,
    /// Samples per row.
    pub length: usize,
}

/// Check whether `input` can be bound to `target`, without binding it.
pub fn validate(input: Option<&HostObject>, target: Target) -> Result<BindShape> {
    let outcome = match input {
        None => Err(ConversionError::NotAnObject),
        Some(HostObject::Array(array)) => check_array(array, target),
        Some(other) => Err(reject_kind(other.kind(), target)),
    };
    outcome.inspect_err(|err| rejected(target, err))
}

/// Validate and hand back the array for binding.
pub(crate) fn select_array<'o>(
    input: Option<&'o mut HostObject>,
    target: Target,
) -> Result<(&'o mut HostArray, BindShape)> {
    let shape = validate(input.as_deref(), target)?;
    input
        .and_then(HostObject::as_array_mut)
        .map(|array| (array, shape))
        .ok_or(ConversionError::NotAnObject)
}

pub(crate) fn rejected(target: Target, err: &ConversionError) {
    debug!(path = %target, error = %err, "rejected host input");
}

fn reject_kind(kind: InputKind, target: Target) -> ConversionError {
    match (kind, target) {
        (InputKind::ListLike, Target::Vector) => ConversionError::ListConversionUnimplemented,
        (InputKind::ListLike, Target::Matrix) => ConversionError::ListConversionUnsupported,
        _ => ConversionError::UnsupportedInputKind { target },
    }
}

fn check_array(array: &HostArray, target: Target) -> Result<BindShape> {
    let shape = array.shape();
    let max = target.max_rank();
    match shape.len() {
        0 => return Err(ConversionError::ScalarArray),
        got if got > max => return Err(ConversionError::TooManyDimensions { max, got }),
        _ => {}
    }

    let dtype = array.dtype();
    if !dtype.is_float() {
        return Err(ConversionError::NonFloatDtype { dtype });
    }
    if dtype != Dtype::SAMPLE {
        return Err(ConversionError::WrongFloatPrecision { dtype });
    }

    match target {
        Target::Vector => {
            let length = array.len();
            if length == 0 {
                return Err(ConversionError::NonPositiveSize);
            }
            Ok(BindShape { rows: 1, length })
        }
        Target::Matrix => {
            let length = shape[shape.len() - 1];
            if length == 0 {
                return Err(ConversionError::NonPositiveFreeDimension);
            }
            let rows = if shape.len() == 2 { shape[0] } else { 1 };
            if rows == 0 {
                return Err(ConversionError::NonPositiveRowCount);
            }
            Ok(BindShape { rows, length })
        }
    }
}

use core::{error, fmt};

use crate::host::Dtype;
use crate::validate::Target;
use sigbridge_core::kernel::ConfigError;

/// Why a host object could not be converted.
///
/// Every conversion fails on the first check that does not hold; a failed
/// conversion never leaves a partially bound view behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// No object was supplied.
    NotAnObject,
    /// The object is neither array-like nor list-like.
    UnsupportedInputKind {
        /// What the caller was converting to.
        target: Target,
    },
    /// List-like input to the vector path. Not implemented yet.
    ListConversionUnimplemented,
    /// List-like input to the matrix path. Not supported.
    ListConversionUnsupported,
    /// The array has zero dimensions.
    ScalarArray,
    /// The array has more dimensions than the target accepts.
    TooManyDimensions {
        /// Largest accepted rank.
        max: usize,
        /// Rank of the array.
        got: usize,
    },
    /// The element type is not floating point.
    NonFloatDtype {
        /// Element type of the array.
        dtype: Dtype,
    },
    /// The element type is floating point but not the sample precision.
    WrongFloatPrecision {
        /// Element type of the array.
        dtype: Dtype,
    },
    /// The array holds no elements.
    NonPositiveSize,
    /// Dimension 1 (row length) is empty.
    NonPositiveFreeDimension,
    /// Dimension 0 (row count) is empty.
    NonPositiveRowCount,
    /// The array's row count differs from the matrix height.
    RowCountMismatch {
        /// Height of the pre-sized matrix.
        expected: usize,
        /// Rows in the array.
        actual: usize,
    },
    /// The object is not a spectrum handle.
    WrongHandleType,
    /// The array's elements are not laid out contiguously in row-major order.
    NonContiguous,
    /// A native structure rejected its inputs.
    Config(ConfigError),
}

/// Result alias for bridge conversions.
pub type Result<T> = core::result::Result<T, ConversionError>;

impl From<ConfigError> for ConversionError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotAnObject => write!(f, "input array is not an object"),
            ConversionError::UnsupportedInputKind { target } => {
                write!(f, "can only accept {target} of {} as input", Dtype::SAMPLE)
            }
            ConversionError::ListConversionUnimplemented => {
                write!(f, "conversion from list is not implemented yet")
            }
            ConversionError::ListConversionUnsupported => {
                write!(f, "can not convert list to matrix")
            }
            ConversionError::ScalarArray => write!(f, "input array is a scalar"),
            ConversionError::TooManyDimensions { max, got } => {
                write!(f, "input array has {got} dimensions, at most {max} accepted")
            }
            ConversionError::NonFloatDtype { dtype } => {
                write!(f, "input array should be float, got {dtype}")
            }
            ConversionError::WrongFloatPrecision { dtype } => {
                write!(f, "input array should be {}, got {dtype}", Dtype::SAMPLE)
            }
            ConversionError::NonPositiveSize => {
                write!(f, "input array size should be greater than 0")
            }
            ConversionError::NonPositiveFreeDimension => {
                write!(f, "input array dimension 1 should be greater than 0")
            }
            ConversionError::NonPositiveRowCount => {
                write!(f, "input array dimension 0 should be greater than 0")
            }
            ConversionError::RowCountMismatch { expected, actual } => {
                write!(f, "wrong number of rows, {expected} expected but got {actual}")
            }
            ConversionError::WrongHandleType => {
                write!(f, "input should be a complex spectrum handle")
            }
            ConversionError::NonContiguous => {
                write!(f, "input array is not contiguous in row-major order")
            }
            ConversionError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ConversionError::Config(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_mismatch_reports_both_counts() {
        let err = ConversionError::RowCountMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(err.to_string(), "wrong number of rows, 3 expected but got 4");
    }

    #[test]
    fn config_errors_keep_their_source() {
        let err = ConversionError::from(ConfigError::RowCount { height: 2, got: 3 });
        assert_eq!(err.to_string(), "matrix has 2 rows but 3 were offered");
        assert!(error::Error::source(&err).is_some());
    }
}

use core::fmt;

/// Why a native structure refused to be built, bound or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A size that has to be positive was zero.
    ZeroSize {
        /// Which size, e.g. `"matrix height"`.
        what: &'static str,
    },
    /// A matrix was offered a different number of rows than its height.
    RowCount {
        /// The matrix height.
        height: usize,
        /// Rows offered.
        got: usize,
    },
    /// One of the rows offered to a matrix has the wrong length.
    RowLength {
        /// Index of the first offending row.
        row: usize,
        /// Samples every row must have.
        expected: usize,
        /// Samples this row has.
        got: usize,
    },
    /// A magnitude or phase buffer does not have one value per bin.
    BinCount {
        /// `"norm"` or `"phas"`.
        buffer: &'static str,
        /// Bins in the spectrum.
        expected: usize,
        /// Values offered.
        got: usize,
    },
    /// Source samples are strided and cannot be lent as one slice.
    StridedSource,
    /// A spectrum buffer is borrowed elsewhere and cannot be overwritten.
    BufferInUse {
        /// `"norm"` or `"phas"`.
        buffer: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize { what } => write!(f, "{what} must be greater than 0"),
            ConfigError::RowCount { height, got } => {
                write!(f, "matrix has {height} rows but {got} were offered")
            }
            ConfigError::RowLength { row, expected, got } => {
                write!(f, "row {row} has {got} samples, {expected} expected")
            }
            ConfigError::BinCount {
                buffer,
                expected,
                got,
            } => write!(f, "`{buffer}` needs {expected} bins but got {got}"),
            ConfigError::StridedSource => write!(f, "source samples are not contiguous"),
            ConfigError::BufferInUse { buffer } => {
                write!(f, "`{buffer}` is borrowed elsewhere and cannot be written")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

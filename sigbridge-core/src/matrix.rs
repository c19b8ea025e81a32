use crate::kernel::{ConfigError, Lifecycle};
use crate::Smpl;

/// Constructor config for [`Matrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Number of rows. Fixed for the lifetime of the matrix.
    pub height: usize,
}

/// A fixed number of equally long sample rows, each borrowed from storage
/// owned elsewhere.
///
/// The row table has room for exactly `height` rows and is filled by
/// [`Matrix::bind_rows`]. Binding either succeeds for every row or leaves the
/// matrix as it was.
#[derive(Debug)]
pub struct Matrix<'a> {
    height: usize,
    length: usize,
    rows: Vec<&'a mut [Smpl]>,
}

impl Lifecycle for Matrix<'_> {
    type Config = MatrixConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.height == 0 {
            return Err(ConfigError::ZeroSize {
                what: "matrix height",
            });
        }
        Ok(Self {
            height: config.height,
            length: 0,
            rows: Vec::with_capacity(config.height),
        })
    }
}

impl<'a> Matrix<'a> {
    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples per row, `0` until bound.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether every row currently aliases storage.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.rows.len() == self.height
    }

    /// Alias `rows` as the matrix rows, in order.
    ///
    /// Exactly `height` rows of `length` samples each must be offered. They
    /// need not be adjacent in memory. Nothing is copied, and if any row is
    /// refused the previous binding is kept.
    pub fn bind_rows<I>(&mut self, length: usize, rows: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = &'a mut [Smpl]>,
    {
        if length == 0 {
            return Err(ConfigError::ZeroSize { what: "row length" });
        }

        let mut staged = Vec::with_capacity(self.height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != length {
                return Err(ConfigError::RowLength {
                    row: i,
                    expected: length,
                    got: row.len(),
                });
            }
            staged.push(row);
        }
        if staged.len() != self.height {
            return Err(ConfigError::RowCount {
                height: self.height,
                got: staged.len(),
            });
        }

        self.rows = staged;
        self.length = length;
        Ok(())
    }

    /// Borrow row `i`.
    pub fn row(&self, i: usize) -> Option<&[Smpl]> {
        self.rows.get(i).map(|row| &**row)
    }

    /// Mutably borrow row `i`.
    pub fn row_mut(&mut self, i: usize) -> Option<&mut [Smpl]> {
        self.rows.get_mut(i).map(|row| &mut **row)
    }

    /// Address of the first sample of row `i`.
    pub fn row_ptr(&self, i: usize) -> Option<*const Smpl> {
        self.rows.get(i).map(|row| row.as_ptr())
    }

    /// Iterate over bound rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Smpl]> + '_ {
        self.rows.iter().map(|row| &**row)
    }
}

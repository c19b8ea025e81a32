use ndarray::{Array1, ArrayView1};

use super::ConfigError;
use crate::{Smpl, Vector};

/// Something that can lend its samples as one contiguous run.
pub trait SampleSource {
    /// Borrow every sample in order.
    fn samples(&self) -> Result<&[Smpl], ConfigError>;
}

impl SampleSource for [Smpl] {
    fn samples(&self) -> Result<&[Smpl], ConfigError> {
        Ok(self)
    }
}

impl SampleSource for Vec<Smpl> {
    fn samples(&self) -> Result<&[Smpl], ConfigError> {
        Ok(self)
    }
}

impl SampleSource for Array1<Smpl> {
    fn samples(&self) -> Result<&[Smpl], ConfigError> {
        self.as_slice().ok_or(ConfigError::StridedSource)
    }
}

impl SampleSource for ArrayView1<'_, Smpl> {
    fn samples(&self) -> Result<&[Smpl], ConfigError> {
        self.as_slice().ok_or(ConfigError::StridedSource)
    }
}

impl SampleSource for Vector<'_> {
    fn samples(&self) -> Result<&[Smpl], ConfigError> {
        Ok(self.as_slice())
    }
}

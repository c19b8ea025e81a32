//! Polar complex spectrum with shareable magnitude and phase buffers.

use std::cell::RefCell;
use std::rc::Rc;

use ndarray::Array1;
use num_complex::Complex;

use crate::kernel::{ConfigError, Lifecycle, SampleSource};
use crate::Smpl;

/// A spectrum buffer shared between every value that aliases it.
pub type SpectrumBuffer = Rc<RefCell<Array1<Smpl>>>;

/// Constructor config for [`ComplexSpectrum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumConfig {
    /// Number of frequency bins.
    pub length: usize,
}

/// Magnitude (`norm`) and phase (`phas`) of `length` frequency bins.
///
/// Cloning is shallow: the clone aliases the same two buffers.
#[derive(Debug, Clone)]
pub struct ComplexSpectrum {
    /// Number of frequency bins in both buffers.
    pub length: usize,
    /// Magnitude per bin.
    pub norm: SpectrumBuffer,
    /// Phase per bin, in radians.
    pub phas: SpectrumBuffer,
}

impl Lifecycle for ComplexSpectrum {
    type Config = SpectrumConfig;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        if config.length == 0 {
            return Err(ConfigError::ZeroSize {
                what: "spectrum length",
            });
        }
        Ok(Self {
            length: config.length,
            norm: Rc::new(RefCell::new(Array1::zeros(config.length))),
            phas: Rc::new(RefCell::new(Array1::zeros(config.length))),
        })
    }
}

impl ComplexSpectrum {
    /// Adopt existing buffers. Both must be non-empty and equally long.
    pub fn from_parts(norm: SpectrumBuffer, phas: SpectrumBuffer) -> Result<Self, ConfigError> {
        let length = norm.borrow().len();
        if length == 0 {
            return Err(ConfigError::ZeroSize {
                what: "spectrum length",
            });
        }
        let got = phas.borrow().len();
        if got != length {
            return Err(ConfigError::BinCount {
                buffer: "phas",
                expected: length,
                got,
            });
        }
        Ok(Self { length, norm, phas })
    }

    /// Split rectangular bins into magnitude and phase.
    pub fn from_complex(bins: &[Complex<Smpl>]) -> Result<Self, ConfigError> {
        if bins.is_empty() {
            return Err(ConfigError::ZeroSize {
                what: "spectrum length",
            });
        }
        let norm = bins.iter().map(|c| c.norm()).collect::<Array1<Smpl>>();
        let phas = bins.iter().map(|c| c.arg()).collect::<Array1<Smpl>>();
        Ok(Self {
            length: bins.len(),
            norm: Rc::new(RefCell::new(norm)),
            phas: Rc::new(RefCell::new(phas)),
        })
    }

    /// Recombine magnitude and phase into rectangular bins.
    pub fn to_complex(&self) -> Vec<Complex<Smpl>> {
        let norm = self.norm.borrow();
        let phas = self.phas.borrow();
        norm.iter()
            .zip(phas.iter())
            .map(|(&r, &theta)| Complex::from_polar(r, theta))
            .collect()
    }

    /// Whether `other` aliases the same magnitude and phase buffers.
    pub fn shares_buffers_with(&self, other: &ComplexSpectrum) -> bool {
        Rc::ptr_eq(&self.norm, &other.norm) && Rc::ptr_eq(&self.phas, &other.phas)
    }

    /// Overwrite every magnitude bin from `src`.
    pub fn set_norm<I>(&self, src: &I) -> Result<(), ConfigError>
    where
        I: SampleSource + ?Sized,
    {
        copy_bins(&self.norm, "norm", src)
    }

    /// Overwrite every phase bin from `src`.
    pub fn set_phas<I>(&self, src: &I) -> Result<(), ConfigError>
    where
        I: SampleSource + ?Sized,
    {
        copy_bins(&self.phas, "phas", src)
    }
}

/// Copy `src` into `dst` bin for bin.
///
/// `src` may itself be a borrow of `dst`, through this spectrum or an alias of
/// it. Copying a buffer onto itself is a no-op.
fn copy_bins<I>(dst: &SpectrumBuffer, buffer: &'static str, src: &I) -> Result<(), ConfigError>
where
    I: SampleSource + ?Sized,
{
    let src = src.samples()?;
    let Ok(mut bins) = dst.try_borrow_mut() else {
        return match dst.try_borrow() {
            Ok(bins) if bins.as_ptr() == src.as_ptr() && bins.len() == src.len() => Ok(()),
            _ => Err(ConfigError::BufferInUse { buffer }),
        };
    };
    if src.len() != bins.len() {
        return Err(ConfigError::BinCount {
            buffer,
            expected: bins.len(),
            got: src.len(),
        });
    }
    bins.iter_mut().zip(src).for_each(|(d, &s)| *d = s);
    Ok(())
}

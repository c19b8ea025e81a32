//! Host-visible handles over shared complex spectra.
//!
//! A [`SpectrumHandle`] is a reference-counted slot holding one
//! `Rc<ComplexSpectrum>`. Every clone of a handle is the same slot, so
//! rebinding it with [`rewrap_spectrum`] is seen by all holders. Nothing here
//! is thread-safe; handles are `!Send`.

use std::cell::RefCell;
use std::rc::Rc;

use sigbridge_core::kernel::{ConfigError, Lifecycle, SampleSource};
use sigbridge_core::{ComplexSpectrum, SpectrumBuffer, SpectrumConfig};
use tracing::trace;

use crate::error::{ConversionError, Result};
use crate::host::HostObject;

#[derive(Debug)]
struct Slot {
    length: usize,
    spectrum: Rc<ComplexSpectrum>,
}

/// A shared, rebindable reference to a [`ComplexSpectrum`].
#[derive(Debug, Clone)]
pub struct SpectrumHandle {
    slot: Rc<RefCell<Slot>>,
}

impl Lifecycle for SpectrumHandle {
    type Config = SpectrumConfig;

    /// Allocate a fresh zeroed spectrum owned by the new handle.
    fn try_new(config: Self::Config) -> core::result::Result<Self, ConfigError> {
        let spectrum = ComplexSpectrum::try_new(config)?;
        Ok(Self::shared(Rc::new(spectrum)))
    }
}

impl SpectrumHandle {
    fn shared(spectrum: Rc<ComplexSpectrum>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                length: spectrum.length,
                spectrum,
            })),
        }
    }

    fn bind(&self, spectrum: Rc<ComplexSpectrum>) {
        let mut slot = self.slot.borrow_mut();
        slot.length = spectrum.length;
        slot.spectrum = spectrum;
    }

    /// Number of bins of the spectrum currently held.
    pub fn length(&self) -> usize {
        self.slot.borrow().length
    }

    /// The spectrum currently held.
    pub fn spectrum(&self) -> Rc<ComplexSpectrum> {
        Rc::clone(&self.slot.borrow().spectrum)
    }

    /// Shared magnitude buffer.
    pub fn norm(&self) -> SpectrumBuffer {
        Rc::clone(&self.slot.borrow().spectrum.norm)
    }

    /// Shared phase buffer.
    pub fn phas(&self) -> SpectrumBuffer {
        Rc::clone(&self.slot.borrow().spectrum.phas)
    }

    /// Overwrite the magnitude bins. `src` must have [`Self::length`] samples.
    pub fn set_norm<I>(&self, src: &I) -> Result<()>
    where
        I: SampleSource + ?Sized,
    {
        Ok(self.slot.borrow().spectrum.set_norm(src)?)
    }

    /// Overwrite the phase bins. `src` must have [`Self::length`] samples.
    pub fn set_phas<I>(&self, src: &I) -> Result<()>
    where
        I: SampleSource + ?Sized,
    {
        Ok(self.slot.borrow().spectrum.set_phas(src)?)
    }

    /// Number of live references to this handle.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.slot)
    }

    /// Whether `other` is the same handle.
    pub fn same_handle(&self, other: &SpectrumHandle) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

/// Wrap `spectrum` in a new handle that shares it.
pub fn wrap_spectrum(spectrum: Rc<ComplexSpectrum>) -> SpectrumHandle {
    trace!(length = spectrum.length, "wrapped spectrum");
    SpectrumHandle::shared(spectrum)
}

/// Point an existing handle at `spectrum` and return another reference to it.
///
/// The producer keeps `handle` for its next call while the caller owns the
/// returned clone. Both references are released by `Drop`.
pub fn rewrap_spectrum(spectrum: Rc<ComplexSpectrum>, handle: &SpectrumHandle) -> SpectrumHandle {
    trace!(length = spectrum.length, "rewrapped spectrum");
    handle.bind(spectrum);
    handle.clone()
}

/// Read a plain spectrum back out of a host object.
///
/// The result aliases the handle's `norm` and `phas` buffers; no bins are
/// copied.
pub fn unwrap_spectrum(input: &HostObject) -> Result<ComplexSpectrum> {
    match input {
        HostObject::Spectrum(handle) => {
            let spectrum = handle.spectrum();
            Ok(ComplexSpectrum {
                length: spectrum.length,
                norm: Rc::clone(&spectrum.norm),
                phas: Rc::clone(&spectrum.phas),
            })
        }
        _ => Err(ConversionError::WrongHandleType),
    }
}

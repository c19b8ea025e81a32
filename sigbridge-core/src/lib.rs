//! # sigbridge-core
//!
//! The fixed-shape structures the signal layer computes on: [`Vector`]
//! (a borrowed run of samples), [`Matrix`] (a fixed number of borrowed rows)
//! and [`ComplexSpectrum`] (shared magnitude and phase buffers).
//!
//! Vectors and matrices never own their samples. They borrow them for a
//! lifetime `'a` from whoever allocated them, so a view cannot outlive its
//! storage and binding one never touches a reference count.

#![warn(missing_docs)]

pub mod kernel;

mod matrix;
mod smpl;
mod spectrum;
mod vector;

pub use matrix::{Matrix, MatrixConfig};
pub use num_complex::Complex;
pub use smpl::Smpl;
pub use spectrum::{ComplexSpectrum, SpectrumBuffer, SpectrumConfig};
pub use vector::Vector;

//! # sigbridge
//!
//! Zero-copy conversions between host numeric arrays and the fixed-shape
//! structures in [`sigbridge_core`].
//!
//! | Conversion | Copies |
//! |---|---|
//! | [`array_to_vector`] / [`vector_to_array`] | never |
//! | [`array_to_matrix`] | never |
//! | [`matrix_to_array`] | rows are stacked into a new array |
//! | [`wrap_spectrum`] / [`rewrap_spectrum`] / [`unwrap_spectrum`] | never, buffers are shared |
//!
//! Every host array goes through [`validate`] first, which fixes the order in
//! which shape, dtype and size problems are reported.
//!
//! ```
//! use ndarray::array;
//! use sigbridge::kernel::Lifecycle;
//! use sigbridge::{array_to_matrix, HostObject, Matrix, MatrixConfig, Smpl};
//!
//! let mut host: HostObject = array![[1.0 as Smpl, 2.0], [3.0, 4.0]].into();
//! let mut mat = Matrix::try_new(MatrixConfig { height: 2 }).unwrap();
//! array_to_matrix(Some(&mut host), &mut mat).unwrap();
//! assert_eq!(mat.row(1).unwrap(), &[3.0, 4.0]);
//! ```

#![warn(missing_docs)]

mod error;
mod handle;
mod host;
mod matrix;
mod validate;
mod vector;

pub use error::{ConversionError, Result};
pub use handle::{rewrap_spectrum, unwrap_spectrum, wrap_spectrum, SpectrumHandle};
pub use host::{Dtype, HostArray, HostElement, HostObject, InputKind};
pub use matrix::{array_to_matrix, matrix_to_array};
pub use validate::{validate, BindShape, Target};
pub use vector::{array_to_vector, vector_to_array};

pub use sigbridge_core::{
    kernel, Complex, ComplexSpectrum, Matrix, MatrixConfig, Smpl, SpectrumBuffer, SpectrumConfig,
    Vector,
};

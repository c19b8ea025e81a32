//! Host-side objects handed to the bridge.
//!
//! The host side is a closed set of object kinds. Arrays carry their element
//! type as a runtime tag ([`Dtype`]) so that the bridge can tell integer,
//! wrong-precision and sample-precision arrays apart before binding.

use core::fmt;

use ndarray::{Array, ArrayD, ArrayViewD, ArrayViewMutD, Dimension};
use sigbridge_core::Smpl;

use crate::handle::SpectrumHandle;

/// Element type of a [`HostArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// `bool`
    Bool,
    /// `u8`
    UInt8,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
}

impl Dtype {
    /// The element type vectors and matrices bind to.
    pub const SAMPLE: Dtype = <Smpl as HostElement>::DTYPE;

    /// Whether this is a floating point type of any precision.
    pub const fn is_float(self) -> bool {
        matches!(self, Dtype::Float32 | Dtype::Float64)
    }

    /// Conventional short name, e.g. `float32`.
    pub const fn name(self) -> &'static str {
        match self {
            Dtype::Bool => "bool",
            Dtype::UInt8 => "uint8",
            Dtype::Int32 => "int32",
            Dtype::Int64 => "int64",
            Dtype::Float32 => "float32",
            Dtype::Float64 => "float64",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned, dynamically shaped host array tagged with its element type.
#[derive(Debug, Clone, PartialEq)]
pub enum HostArray {
    /// `bool` elements.
    Bool(ArrayD<bool>),
    /// `u8` elements.
    UInt8(ArrayD<u8>),
    /// `i32` elements.
    Int32(ArrayD<i32>),
    /// `i64` elements.
    Int64(ArrayD<i64>),
    /// `f32` elements.
    Float32(ArrayD<f32>),
    /// `f64` elements.
    Float64(ArrayD<f64>),
}

macro_rules! each_array {
    ($array:expr, $a:ident => $body:expr) => {
        match $array {
            HostArray::Bool($a) => $body,
            HostArray::UInt8($a) => $body,
            HostArray::Int32($a) => $body,
            HostArray::Int64($a) => $body,
            HostArray::Float32($a) => $body,
            HostArray::Float64($a) => $body,
        }
    };
}

impl HostArray {
    /// Element type tag.
    pub fn dtype(&self) -> Dtype {
        match self {
            HostArray::Bool(_) => Dtype::Bool,
            HostArray::UInt8(_) => Dtype::UInt8,
            HostArray::Int32(_) => Dtype::Int32,
            HostArray::Int64(_) => Dtype::Int64,
            HostArray::Float32(_) => Dtype::Float32,
            HostArray::Float64(_) => Dtype::Float64,
        }
    }

    /// Size of every dimension.
    pub fn shape(&self) -> &[usize] {
        each_array!(self, a => a.shape())
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        each_array!(self, a => a.ndim())
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        each_array!(self, a => a.len())
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the elements if they are of type `T`.
    pub fn view<T: HostElement>(&self) -> Option<ArrayViewD<'_, T>> {
        T::as_array(self).map(|a| a.view())
    }

    /// Mutably borrow the elements if they are of type `T`.
    pub fn view_mut<T: HostElement>(&mut self) -> Option<ArrayViewMutD<'_, T>> {
        T::as_array_mut(self).map(|a| a.view_mut())
    }
}

/// Element types a [`HostArray`] can hold.
pub trait HostElement: Copy + 'static {
    /// Runtime tag for this element type.
    const DTYPE: Dtype;

    /// Borrow the typed array if `array` holds `Self`.
    fn as_array(array: &HostArray) -> Option<&ArrayD<Self>>;

    /// Mutably borrow the typed array if `array` holds `Self`.
    fn as_array_mut(array: &mut HostArray) -> Option<&mut ArrayD<Self>>;

    /// Tag an owned array.
    fn into_host(array: ArrayD<Self>) -> HostArray;
}

macro_rules! host_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl HostElement for $ty {
            const DTYPE: Dtype = Dtype::$variant;

            fn as_array(array: &HostArray) -> Option<&ArrayD<Self>> {
                match array {
                    HostArray::$variant(a) => Some(a),
                    _ => None,
                }
            }

            fn as_array_mut(array: &mut HostArray) -> Option<&mut ArrayD<Self>> {
                match array {
                    HostArray::$variant(a) => Some(a),
                    _ => None,
                }
            }

            fn into_host(array: ArrayD<Self>) -> HostArray {
                HostArray::$variant(array)
            }
        }
    )*};
}

host_element! {
    bool => Bool,
    u8 => UInt8,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
}

impl<T, D> From<Array<T, D>> for HostArray
where
    T: HostElement,
    D: Dimension,
{
    fn from(array: Array<T, D>) -> Self {
        T::into_host(array.into_dyn())
    }
}

/// Coarse classification of a [`HostObject`], the only thing the bridge
/// dispatches on before looking at shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A typed n-dimensional array.
    ArrayLike,
    /// A heterogeneous sequence.
    ListLike,
    /// Anything else.
    Other,
}

/// An object owned by the host.
#[derive(Debug, Clone)]
pub enum HostObject {
    /// A typed array.
    Array(HostArray),
    /// A sequence of arbitrary objects.
    List(Vec<HostObject>),
    /// A shared complex spectrum handle.
    Spectrum(SpectrumHandle),
    /// A plain number.
    Scalar(f64),
    /// Any other host value, identified by its type name.
    Opaque(&'static str),
}

impl HostObject {
    /// Classify the object.
    pub fn kind(&self) -> InputKind {
        match self {
            HostObject::Array(_) => InputKind::ArrayLike,
            HostObject::List(_) => InputKind::ListLike,
            HostObject::Spectrum(_) | HostObject::Scalar(_) | HostObject::Opaque(_) => {
                InputKind::Other
            }
        }
    }

    /// Borrow the array if this is one.
    pub fn as_array(&self) -> Option<&HostArray> {
        match self {
            HostObject::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Mutably borrow the array if this is one.
    pub fn as_array_mut(&mut self) -> Option<&mut HostArray> {
        match self {
            HostObject::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<HostArray> for HostObject {
    fn from(array: HostArray) -> Self {
        HostObject::Array(array)
    }
}

impl<T, D> From<Array<T, D>> for HostObject
where
    T: HostElement,
    D: Dimension,
{
    fn from(array: Array<T, D>) -> Self {
        HostObject::Array(array.into())
    }
}

impl From<SpectrumHandle> for HostObject {
    fn from(handle: SpectrumHandle) -> Self {
        HostObject::Spectrum(handle)
    }
}

/// Sample type used by every vector, matrix and spectrum buffer.
#[cfg(not(feature = "double"))]
pub type Smpl = f32;

/// Sample type used by every vector, matrix and spectrum buffer.
#[cfg(feature = "double")]
pub type Smpl = f64;

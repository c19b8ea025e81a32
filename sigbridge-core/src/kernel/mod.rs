//! Shared substrate for validated construction and sample sources.
//!
//! Structures that need a checked constructor implement [`Lifecycle`].
//! Anything that can lend its samples as one contiguous run implements
//! [`SampleSource`], which is what the spectrum setters read from.

mod errors;
mod lifecycle;
mod source;

pub use errors::*;
pub use lifecycle::*;
pub use source::*;

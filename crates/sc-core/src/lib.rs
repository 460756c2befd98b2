//! sc-core: stable foundation for solarcap.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - sample (the (time, voltage) record every run produces)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod sample;

pub use error::{ScError, ScResult};
pub use numeric::*;
pub use sample::Sample;

//! The prelude exports the types which make up the codec's public
//! surface.  Providing this prelude is the main purpose of the
//! posit8 crate.
pub use super::p8;
pub use super::tapered::error::*;
pub use super::tapered::fields::*;
pub use super::tapered::Sign;

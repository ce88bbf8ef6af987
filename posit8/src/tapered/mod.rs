//! This module implements the 8-bit, es=0 tapered number format: the
//! bit-level field codec (in [`fields`]) and the conversions to and
//! from IEEE-754 floats (in [`float`]).

pub mod error;
pub mod fields;
pub(crate) mod float;

/// The sign of a number (mathematically, sgn(x)).  Zero is treated
/// separately to simplify working with native types and tapered
/// values together; NaR has no sign at all, which is why
/// [`fields::Posit8::signum`] returns an `Option`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Negative = -1, // <= minpos magnitude, negated
    Zero = 0,      // the reserved 0x00 pattern
    Positive = 1,  // >= minpos
}

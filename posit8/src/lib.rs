//! The `posit8` crate implements an 8-bit tapered binary number
//! format: a sign bit, a variable-length unary-coded "regime" run
//! encoding a power of two, and whatever fraction bits remain, all
//! packed into a single byte.  The exponent field width ("es") is
//! fixed at zero, so each regime step is worth a factor of two.
//!
//! The idea is that tools which only need to encode or decode values
//! (converters, table generators, test rigs) can depend on this crate
//! without pulling in anything else.

mod tapered;

pub mod prelude;

pub use crate::tapered::error::ConversionFailed;
pub use crate::tapered::fields::{DecodedFields, Posit8};
pub use crate::tapered::Sign;

#[macro_export]
macro_rules! p8 {
    ($n:expr) => {
        $crate::prelude::Posit8::new::<{ $n }>()
    };
}

#[test]
fn test_p8() {
    use prelude::Posit8;
    let m: Posit8 = p8!(0x40_u8);
    let n: Posit8 = Posit8::from_bits(0x40);
    assert_eq!(m, n);
    assert_eq!(m, Posit8::ONE);

    let p: Posit8 = p8!(0x80_u8);
    assert!(p.is_nar());
}

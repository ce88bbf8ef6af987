//! The bit-level field codec for the 8-bit, es=0 tapered format.
//!
//! A magnitude byte is laid out most-significant-bit first: bit 7 is
//! the sign position (clear in a magnitude), bit 6 starts the regime
//! run, and whatever positions remain below the run's terminator hold
//! the most significant bits of the fraction.  Negative values are
//! the two's complement of the whole magnitude byte.  Two patterns
//! are reserved: 0x00 is zero and 0x80 is NaR ("Not a Real"), the
//! format's single non-finite sentinel.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter, LowerHex};
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use serde::Serialize;

use super::error::ConversionFailed;
use super::Sign;


/// An 8-bit tapered-format value.  The byte is the sole stored
/// representation; values are immutable once produced and the codec
/// only ever derives new ones.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posit8 {
    pub(crate) bits: u8,
}

/// The transient result of decoding a [`Posit8`]; produced by
/// [`Posit8::unpack`] and never persisted.
///
/// `fraction` is 7-bit aligned: it counts the fractional remainder of
/// the significand in units of 1/128, independently of how many
/// fraction bits actually survived in the byte, and so is always
/// below 0x80.  `exponent` is always zero (the format has no exponent
/// field); [`Posit8::pack`] accepts it but ignores it, and it is kept
/// only for symmetry with wider formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedFields {
    pub sign: bool,
    pub regime: i8,
    pub exponent: u8,
    pub fraction: u8,
}

impl Posit8 {
    /// The reserved all-zero pattern; the only representation of zero
    /// (there is no negative zero).
    pub const ZERO: Self = Self { bits: 0x00 };

    /// "Not a Real": the single sentinel for NaN and infinities.
    pub const NAR: Self = Self { bits: 0x80 };

    pub const ONE: Self = Self { bits: 0x40 };

    /// The largest finite value, 2^6.
    pub const MAX: Self = Self { bits: 0x7f };

    /// The most negative finite value, -2^6.
    pub const MIN: Self = Self { bits: 0x81 };

    /// The smallest positive value, 2^-6.
    pub const MIN_POSITIVE: Self = Self { bits: 0x01 };

    /// Regime values representable in the seven bit positions which
    /// follow the sign.
    pub const REGIME_MIN: i8 = -6;
    pub const REGIME_MAX: i8 = 6;

    // It's pub so that it can be used in p8!().
    pub const fn new<const N: u8>() -> Posit8 {
        Posit8 { bits: N }
    }

    pub const fn from_bits(bits: u8) -> Posit8 {
        Posit8 { bits }
    }

    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn is_zero(&self) -> bool {
        self.bits == 0x00
    }

    pub const fn is_nar(&self) -> bool {
        self.bits == 0x80
    }

    pub const fn is_negative(&self) -> bool {
        self.bits & 0x80 != 0 && !self.is_nar()
    }

    pub const fn is_positive(&self) -> bool {
        self.bits & 0x80 == 0 && !self.is_zero()
    }

    /// The sign of the value; `None` for NaR, which has no sign.
    pub const fn signum(&self) -> Option<Sign> {
        if self.is_nar() {
            None
        } else if self.is_zero() {
            Some(Sign::Zero)
        } else if self.is_negative() {
            Some(Sign::Negative)
        } else {
            Some(Sign::Positive)
        }
    }

    pub const fn abs(self) -> Self {
        if self.is_negative() {
            Self {
                bits: self.bits.wrapping_neg(),
            }
        } else {
            self
        }
    }

    /// Pack decoded fields into a byte.
    ///
    /// Regime values beyond [`REGIME_MIN`](Self::REGIME_MIN) and
    /// [`REGIME_MAX`](Self::REGIME_MAX) cannot fit in the seven bit
    /// positions below the sign; they saturate silently, so a finite
    /// nonzero input never lands on the reserved 0x00/0x80 patterns.
    /// Fraction bits for which no room remains below the regime are
    /// likewise dropped silently; use the `TryFrom<DecodedFields>`
    /// conversion to reject out-of-range regimes instead.
    pub fn pack(fields: DecodedFields) -> Posit8 {
        let k = fields.regime.clamp(Self::REGIME_MIN, Self::REGIME_MAX);
        let mut mag: u8 = 0;
        // Bit positions consumed below the sign by the run and its
        // terminator.
        let used: u32 = if k >= 0 {
            let k = k as u32;
            // k+1 set bits starting at bit 6; the clear terminator is
            // already present in the zeroed byte.  For k=6 the run
            // fills bits 6..0 and the terminator is truncated at the
            // byte boundary.
            mag |= (0xff_u8 << (6 - k)) & 0x7f;
            if k == 6 {
                7
            } else {
                k + 2
            }
        } else {
            // |k| clear bits starting at bit 6, then a set terminator.
            let j = k.unsigned_abs() as u32;
            mag |= 0x40 >> j;
            j + 1
        };
        let frac_bits = 7 - used;
        // The fraction is 7-bit aligned; mask before shifting so that
        // a stray top bit cannot reach the regime field.
        mag |= (fields.fraction & 0x7f) >> (7 - frac_bits);
        if fields.sign {
            Posit8 {
                bits: mag.wrapping_neg(),
            }
        } else {
            Posit8 { bits: mag }
        }
    }

    /// Decode the byte into its fields.  This never fails: all 256
    /// patterns decode to something.  NaR decodes to all-zero fields
    /// and must be recognised by the caller via [`is_nar`](Self::is_nar)
    /// rather than by inspecting the decode.
    pub fn unpack(self) -> DecodedFields {
        if self.is_nar() {
            return DecodedFields {
                sign: false,
                regime: 0,
                exponent: 0,
                fraction: 0,
            };
        }
        let sign = self.bits & 0x80 != 0;
        let mag = if sign {
            self.bits.wrapping_neg()
        } else {
            self.bits
        };
        // The bit at position 6 defines the run; count how many bits
        // equal it, starting there.  The scan is bounded at bit 0:
        // running off the end of the byte means the regime consumes
        // the rest of it, not an error.
        let defining = mag & 0x40 != 0;
        let mut run: u32 = 1;
        while run < 7 && (mag & (0x40 >> run) != 0) == defining {
            run += 1;
        }
        let regime = if defining {
            run as i8 - 1
        } else {
            -(run as i8)
        };
        // The run's terminator occupies one more position; whatever
        // is left is fraction, left-aligned into the 1/128 units the
        // float bridge expects.
        let used = run + 1;
        let fraction = if used < 7 { (mag << (used + 1)) >> 1 } else { 0 };
        DecodedFields {
            sign,
            regime,
            exponent: 0,
            fraction,
        }
    }
}

/// The strict counterpart of [`Posit8::pack`]: out-of-range fields
/// are reported instead of saturating.
impl TryFrom<DecodedFields> for Posit8 {
    type Error = ConversionFailed;
    fn try_from(fields: DecodedFields) -> Result<Posit8, ConversionFailed> {
        if fields.regime > Posit8::REGIME_MAX {
            Err(ConversionFailed::TooLarge)
        } else if fields.regime < Posit8::REGIME_MIN {
            Err(ConversionFailed::TooSmall)
        } else if fields.fraction > 0x7f {
            Err(ConversionFailed::TooLarge)
        } else {
            Ok(Posit8::pack(fields))
        }
    }
}

// All 256 bit patterns are valid, so the raw-byte conversions are
// total in both directions.
impl From<u8> for Posit8 {
    fn from(bits: u8) -> Self {
        Posit8 { bits }
    }
}

impl From<Posit8> for u8 {
    fn from(p: Posit8) -> u8 {
        p.bits
    }
}

impl Default for Posit8 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Display for Posit8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{:#04x}", self.bits)
    }
}

impl LowerHex for Posit8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        LowerHex::fmt(&self.bits, f)
    }
}

impl Debug for Posit8 {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Posit8{{bits: {:#04x}}}", self.bits)
    }
}

impl Hash for Posit8 {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.bits.hash(state)
    }
}

impl PartialOrd<Posit8> for Posit8 {
    fn partial_cmp(&self, other: &Posit8) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Posit8 {
    fn cmp(&self, other: &Posit8) -> Ordering {
        // A hallmark of the tapered encoding: the byte compared as a
        // signed integer orders the values, with NaR (-128) before
        // every real value.
        let lhs = self.bits as i8;
        let rhs = other.bits as i8;
        lhs.cmp(&rhs)
    }
}

impl Neg for Posit8 {
    type Output = Posit8;
    fn neg(self) -> Posit8 {
        // Two's complement of the whole byte; zero and NaR are the
        // fixed points.
        Posit8 {
            bits: self.bits.wrapping_neg(),
        }
    }
}

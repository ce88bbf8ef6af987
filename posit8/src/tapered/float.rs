//! Conversions between [`Posit8`] and IEEE-754 floats.
//!
//! Encoding truncates toward zero rather than rounding to nearest:
//! the significand keeps its top six bits and drops the rest.  This
//! keeps the conversion exact to reason about at the cost of up to
//! one part in 64 of quantization error before packing (and more once
//! a long regime squeezes the surviving fraction bits).

use super::fields::{DecodedFields, Posit8};

#[cfg(test)]
mod tests;

impl From<f32> for Posit8 {
    fn from(x: f32) -> Posit8 {
        if x.is_nan() || x.is_infinite() {
            // An infinity has no integer floor(log2); like NaN it
            // maps to NaR rather than saturating.
            return Posit8::NAR;
        }
        if x == 0.0 {
            // Covers -0.0 too; the format has a single zero.
            return Posit8::ZERO;
        }
        let sign = x < 0.0;
        let bits = x.abs().to_bits();
        // floor(log2(a)) and the top six significand bits fall
        // straight out of the IEEE encoding; taking them from the
        // bits keeps the truncation exact across the whole range.
        let biased = ((bits >> 23) & 0xff) as i32;
        let (e, frac6) = if biased == 0 {
            // Subnormal: the true exponent is below -126, far outside
            // the regime range, so the value saturates to the minpos
            // magnitude and no fraction bit would survive anyway.
            (-126, 0)
        } else {
            (biased - 127, ((bits >> 17) & 0x3f) as u8)
        };
        let regime = e.clamp(i32::from(Posit8::REGIME_MIN), i32::from(Posit8::REGIME_MAX)) as i8;
        Posit8::pack(DecodedFields {
            sign,
            regime,
            exponent: 0,
            // Shift the six significand bits into the 1/128 units
            // used at the pack/unpack boundary.
            fraction: frac6 << 1,
        })
    }
}

impl From<Posit8> for f32 {
    fn from(p: Posit8) -> f32 {
        if p.is_zero() {
            return 0.0;
        }
        if p.is_nar() {
            // NaN is the closest thing f32 has to NaR.
            return f32::NAN;
        }
        let fields = p.unpack();
        let magnitude =
            f32::from(fields.regime).exp2() * (1.0 + f32::from(fields.fraction) / 128.0);
        if fields.sign {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<Posit8> for f64 {
    fn from(p: Posit8) -> f64 {
        f64::from(f32::from(p))
    }
}

use super::Posit8;

#[test]
fn test_zero_both_ways() {
    assert_eq!(Posit8::from(0.0_f32), Posit8::ZERO);
    assert_eq!(Posit8::from(-0.0_f32), Posit8::ZERO);
    assert_eq!(f32::from(Posit8::ZERO), 0.0);
    assert_eq!(f64::from(Posit8::ZERO), 0.0);
}

#[test]
fn test_nan_maps_to_nar_and_back() {
    assert_eq!(Posit8::from(f32::NAN), Posit8::NAR);
    assert!(f32::from(Posit8::NAR).is_nan());
    assert!(f64::from(Posit8::NAR).is_nan());
}

#[test]
fn test_infinities_map_to_nar() {
    assert_eq!(Posit8::from(f32::INFINITY), Posit8::NAR);
    assert_eq!(Posit8::from(f32::NEG_INFINITY), Posit8::NAR);
}

#[test]
fn test_powers_of_two_are_exact() {
    assert_eq!(Posit8::from(1.0_f32), Posit8::ONE);
    assert_eq!(f32::from(Posit8::ONE), 1.0);

    assert_eq!(Posit8::from(2.0_f32).bits(), 0x60);
    assert_eq!(f32::from(Posit8::from_bits(0x60)), 2.0);

    assert_eq!(Posit8::from(0.5_f32).bits(), 0x20);
    assert_eq!(f32::from(Posit8::from_bits(0x20)), 0.5);

    assert_eq!(Posit8::from(64.0_f32), Posit8::MAX);
    assert_eq!(f32::from(Posit8::MAX), 64.0);

    assert_eq!(Posit8::from(0.015625_f32), Posit8::MIN_POSITIVE);
    assert_eq!(f32::from(Posit8::MIN_POSITIVE), 0.015625);
}

#[test]
fn test_negative_values() {
    assert_eq!(Posit8::from(-1.0_f32).bits(), 0xc0);
    assert_eq!(f32::from(Posit8::from_bits(0xc0)), -1.0);
    assert_eq!(Posit8::from(-64.0_f32), Posit8::MIN);
    assert_eq!(f32::from(Posit8::MIN), -64.0);
}

#[test]
fn test_fraction_survives_where_room_remains() {
    // 1.5 keeps its single significant fraction bit exactly.
    assert_eq!(Posit8::from(1.5_f32).bits(), 0x50);
    assert_eq!(f32::from(Posit8::from_bits(0x50)), 1.5);

    // 3.14159: exponent 1, top six significand bits 100100, of which
    // four fit below the k=1 regime.
    assert_eq!(Posit8::from(3.14159_f32).bits(), 0x69);
    assert_eq!(f32::from(Posit8::from_bits(0x69)), 3.125);
}

#[test]
fn test_quantization_truncates_toward_zero() {
    // 1.99 keeps the five fraction bits that fit under a k=0 regime;
    // the encoder never rounds up to 2.0.
    let p = Posit8::from(1.99_f32);
    assert_eq!(p.bits(), 0x5f);
    assert_eq!(f32::from(p), 1.96875);
}

#[test]
fn test_out_of_range_exponents_saturate() {
    assert_eq!(Posit8::from(1.0e9_f32), Posit8::MAX);
    assert_eq!(Posit8::from(f32::MAX), Posit8::MAX);
    assert_eq!(Posit8::from(-1.0e9_f32), Posit8::MIN);
    assert_eq!(Posit8::from(1.0e-9_f32), Posit8::MIN_POSITIVE);
    assert_eq!(Posit8::from(-1.0e-9_f32).bits(), 0xff);
    // Subnormals are far below the representable range too.
    assert_eq!(Posit8::from(f32::from_bits(1)), Posit8::MIN_POSITIVE);
}

#[cfg(test)]
mod float_proptests {
    use super::Posit8;
    use test_strategy::{proptest, Arbitrary};

    // Magnitudes whose exponent is strictly inside the regime range,
    // so saturation never interferes with the properties below.
    #[derive(Debug, Arbitrary)]
    struct InRangeInput {
        #[strategy(0.0157_f32..63.9)]
        x: f32,
    }

    #[derive(Debug, Arbitrary)]
    struct OrderedPairInput {
        #[strategy(0.0157_f32..63.9)]
        smaller: f32,
        #[strategy(#smaller..63.9)]
        larger: f32,
    }

    #[proptest]
    fn encoding_is_sign_antisymmetric(input: InRangeInput) {
        let pos = Posit8::from(input.x);
        let neg = Posit8::from(-input.x);
        assert_eq!(neg, -pos);
        assert_eq!(neg.bits(), pos.bits().wrapping_neg());
    }

    #[proptest]
    fn encoding_is_monotonic(input: OrderedPairInput) {
        let smaller = Posit8::from(input.smaller);
        let larger = Posit8::from(input.larger);
        assert!(
            smaller <= larger,
            "{} encoded as {smaller} should not exceed {} encoded as {larger}",
            input.smaller,
            input.larger,
        );
    }

    #[proptest]
    fn recovered_value_never_exceeds_input(input: InRangeInput) {
        // Truncation toward zero: the recovered magnitude is at most
        // the input, and short by less than one regime-scaled
        // fraction step.
        let recovered = f32::from(Posit8::from(input.x));
        assert!(recovered <= input.x);
        assert!(recovered > input.x / 2.0);
    }

    #[derive(Debug, Arbitrary)]
    struct UnitRangeInput {
        #[strategy(1.0_f32..2.0)]
        x: f32,
    }

    #[proptest]
    fn round_trip_error_is_within_the_surviving_fraction_step(input: UnitRangeInput) {
        // Five fraction bits survive under a k=0 regime, so the
        // truncation error is below 1/32.
        let recovered = f32::from(Posit8::from(input.x));
        assert!(recovered <= input.x);
        assert!(input.x - recovered < 1.0 / 32.0);
    }
}

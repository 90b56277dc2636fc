//! Reciprocal square root by table interpolation.
//!
//! The table covers x in [0, 4] with `2^BITS` intervals; inputs are 1.0..4.0
//! with 22 fractional bits, so the top `BITS` of a 24-bit input select the
//! interval and the remaining bits are the interpolation position. This costs
//! one multiply and one divide, independent of the input, but only accepts
//! pre-scaled input. [`rsqrt_normalized`] does the scaling for any 20.12
//! value.

use crate::error::Error;
use crate::log2::log2_floor;
use crate::tables::{interpolate, DefaultRsqrtTable, LookupTable};
use crate::utils::mask;

/// The smallest valid input of [`rsqrt_table`], 1.0 with 22 fractional bits.
pub const TABLE_INPUT_MIN: u32 = 1 << 22;

/// The largest valid input of [`rsqrt_table`], just below 4.0.
pub const TABLE_INPUT_MAX: u32 = (1 << 24) - 1;

const INPUT_BITS: u32 = 24;

/// Returns 1/sqrt(`input`) in 20.12, for `input` in 1.0..4.0 with 22
/// fractional bits (`TABLE_INPUT_MIN..=TABLE_INPUT_MAX`).
///
/// Inputs outside of that range are not checked; they produce a meaningless
/// value read from within the table. Use [`try_rsqrt_table`] to validate the
/// input.
pub fn rsqrt_table(input: u32) -> u32 {
    rsqrt_table_with::<DefaultRsqrtTable>(input)
}

/// Same as [`rsqrt_table`], interpolating in the table `T`.
pub fn rsqrt_table_with<T: LookupTable>(input: u32) -> u32 {
    let interp_bits = INPUT_BITS - T::BITS;
    let index = ((input >> interp_bits) & mask(T::BITS)) as usize;
    let pos = input & mask(interp_bits);
    interpolate(T::SAMPLES, index, pos, interp_bits) as u32
}

/// Returns 1/sqrt(`input`) like [`rsqrt_table`], or an error if `input` is
/// outside of `TABLE_INPUT_MIN..=TABLE_INPUT_MAX`.
pub fn try_rsqrt_table(input: u32) -> Result<u32, Error> {
    if !(TABLE_INPUT_MIN..=TABLE_INPUT_MAX).contains(&input) {
        return Err(Error::OutOfDomain { input });
    }
    Ok(rsqrt_table(input))
}

/// Approximates 1/sqrt(`number`) in 20.12 for any input, using the table.
///
/// The input is shifted by an even number of bits so that its leading bit
/// lands on bit 22 or 23, and the table result is scaled back by half of the
/// shift. Zero saturates to `u32::MAX`, like [`crate::rsqrt`].
pub fn rsqrt_normalized(number: u32) -> u32 {
    if number == 0 {
        return u32::MAX;
    }

    let magn = log2_floor(number);
    let mut shift = 22 - magn;
    if shift % 2 != 0 {
        shift += 1;
    }

    let input = if shift >= 0 {
        number << shift
    } else {
        number >> -shift
    };
    let y = rsqrt_table(input);

    // x = input * 2^(10 - shift) in 22-bit scale, so the result is scaled by
    // 2^((shift - 10) / 2).
    let scale = (shift - 10) / 2;
    if scale >= 0 {
        y << scale
    } else {
        let drop = (-scale) as u32;
        (y + (1 << (drop - 1))) >> drop
    }
}

#[test]
fn test_table_exact_points() {
    // 1.0, 2.0 and the last interval.
    assert_eq!(rsqrt_table(1 << 22), 4096);
    assert_eq!(rsqrt_table(1 << 23), 2896);
    assert_eq!(rsqrt_table(3 << 22), 2365);
    assert_eq!(rsqrt_table(TABLE_INPUT_MAX), 2049);
    assert_eq!(rsqrt_table((1 << 22) + 12345), 4091);
}

#[test]
fn test_table_bits_agree_on_grid_points() {
    use crate::tables::{RsqrtTable5, RsqrtTable6, RsqrtTable8};

    // 1.0 and 2.0 are sample points of every table.
    for input in [1 << 22, 1 << 23] {
        let v = rsqrt_table(input);
        assert_eq!(rsqrt_table_with::<RsqrtTable5>(input), v);
        assert_eq!(rsqrt_table_with::<RsqrtTable6>(input), v);
        assert_eq!(rsqrt_table_with::<RsqrtTable8>(input), v);
    }
}

#[test]
fn test_table_out_of_domain_is_safe() {
    // Out-of-domain input is meaningless but never reads past the table.
    for input in [0, 1, TABLE_INPUT_MIN - 1, 1 << 24, u32::MAX] {
        let _ = rsqrt_table(input);
        assert_eq!(
            try_rsqrt_table(input),
            Err(Error::OutOfDomain { input })
        );
    }
    assert_eq!(try_rsqrt_table(TABLE_INPUT_MIN), Ok(4096));
    assert_eq!(try_rsqrt_table(TABLE_INPUT_MAX), Ok(2049));
}

#[test]
fn test_normalized_known_values() {
    assert_eq!(rsqrt_normalized(0), u32::MAX);
    // 1.0, 4.0, the smallest input and the largest.
    assert_eq!(rsqrt_normalized(4096), 4096);
    assert_eq!(rsqrt_normalized(16384), 2048);
    assert_eq!(rsqrt_normalized(1), 262144);
    assert_eq!(rsqrt_normalized(2), 185344);
    assert_eq!(rsqrt_normalized(u32::MAX), 4);
    assert_eq!(rsqrt_normalized(1 << 31), 6);
}

#[cfg(feature = "std")]
#[test]
fn test_table_accuracy() {
    use crate::tables::{RsqrtTable5, RsqrtTable6, RsqrtTable8};

    fn max_error<T: LookupTable>() -> f64 {
        let mut worst: f64 = 0.0;
        let mut input = TABLE_INPUT_MIN;
        while input <= TABLE_INPUT_MAX {
            let exact = 4096.0 / (input as f64 / (1 << 22) as f64).sqrt();
            let got = rsqrt_table_with::<T>(input) as f64;
            worst = worst.max((got - exact).abs());
            input += 97;
        }
        worst
    }

    assert!(max_error::<RsqrtTable5>() < 7.0);
    assert!(max_error::<RsqrtTable6>() < 3.5);
    assert!(max_error::<DefaultRsqrtTable>() < 2.5);
    assert!(max_error::<RsqrtTable8>() < 2.5);
}

#[cfg(feature = "std")]
#[test]
fn test_normalized_accuracy() {
    use super::utils::Lfsr;

    let check = |number: u32| {
        let exact = 4096.0 / (number as f64 / 4096.0).sqrt();
        let correct = exact.round() as u32;
        let got = rsqrt_normalized(number);
        assert!(
            got.abs_diff(correct) <= 1 + correct / 100,
            "rsqrt_normalized({number}) = {got}, expected {correct}"
        );
    };

    for number in 1..20_000 {
        check(number);
    }
    check(u32::MAX);
    for number in Lfsr::new_with_seed(5).take(50_000).filter(|n| *n != 0) {
        check(number);
    }
}

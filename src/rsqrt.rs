//! Fixed-point reciprocal square root by interval halving.
//!
//! Given x, find y = 1/sqrt(x). Both are encoded in 20.12 fixed point: x as
//! the integer X with N = log2_floor(X), y as the integer Y.
//!
//! Writing x = 2^n gives y = 2^(-n/2), so y is bounded by
//! `2^floor(-ceil(n) / 2) <= y <= 2^ceil(-floor(n) / 2)`. In 20.12 this turns
//! into `2^((3F - N - 1) / 2) <= Y <= 2^((3F - N + 1) / 2)` with F = 12, which
//! seeds the bisection within one or two bits of the answer.
//!
//! Each step checks whether `X * Y^2` is above or below 1.0, which is 2^(3F)
//! in the combined scale. The naive product reaches 2^(3F + 2) - 1 and would
//! overflow 32 bits, so some of the 6 excess bits are dropped before the
//! multiplication and the product is compared against 2^30:
//!
//! - for `N >= T`, compute `(X >> 6) * Y * Y`. Dropping the low bits of X
//!   costs at most `(2^6 - 1) / 2^T` relative error, which shrinks as T
//!   grows.
//! - for `N < T`, compute `X * (Y >> 3) * (Y >> 3)`. The dropped bits of Y
//!   cost `((2^3 - 1) * 2 * Y + (2^3 - 1)^2) / Y_min^2`, where Y_min is the
//!   smallest result for `X < 2^(T + 1)`; this grows with T.
//!
//! T = 13 minimizes the larger of the two errors (below 1%) for F = 12. The
//! shifts and the threshold are a matched set; `tuning::optimal_threshold`
//! recomputes T for a different F.

use crate::bisect::{
    Bracket, Estimate, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_BITS,
};
use crate::log2::log2_floor;

/// Number of fractional bits in the input and output of [`rsqrt`].
pub const RSQRT_FRAC_BITS: u32 = 12;

// Magnitude at which the input, rather than the guess, gets truncated.
pub(crate) const THRESHOLD: i32 = 13;
// Bits dropped from the input for large magnitudes.
pub(crate) const INPUT_SHIFT: u32 = 6;
// Bits dropped from each guess factor for small magnitudes.
pub(crate) const GUESS_SHIFT: u32 = 3;
// 1.0 after dropping the excess bits.
const ONE: u32 = 1 << 30;

/// Returns the exponents `(M_lb, M_ub)` of the seed bracket for an input of
/// magnitude `magn`: `2^M_lb <= Y <= 2^M_ub`.
pub(crate) const fn seed_exponents(magn: i32) -> (i32, i32) {
    let f = RSQRT_FRAC_BITS as i32;
    ((3 * f - magn - 1) / 2, (3 * f - magn + 1) / 2)
}

/// Returns true if `guess` is above 1/sqrt(number), evaluated with the
/// truncation that matches the magnitude `magn` of `number`.
pub(crate) fn overshoots(number: u32, magn: i32, guess: u32) -> bool {
    let squared = if magn >= THRESHOLD {
        guess.wrapping_mul(guess).wrapping_mul(number >> INPUT_SHIFT)
    } else {
        let g = guess >> GUESS_SHIFT;
        g.wrapping_mul(g).wrapping_mul(number)
    };
    squared > ONE
}

/// Approximates 1/sqrt(`number`) in 20.12 fixed point.
///
/// Zero has no reciprocal root and saturates to `u32::MAX`.
pub fn rsqrt(number: u32) -> u32 {
    rsqrt_with::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS>(number).value
}

/// Approximates 1/sqrt(`number`) in 20.12 fixed point, stopping when the
/// bracket is within `(lower >> TOLERANCE_BITS) + 1` or after
/// `MAX_ITERATIONS` halving steps.
pub fn rsqrt_with<const TOLERANCE_BITS: u32, const MAX_ITERATIONS: u32>(
    number: u32,
) -> Estimate {
    if number == 0 {
        return Estimate::exact(u32::MAX);
    }

    let magn = log2_floor(number);
    let (lb, ub) = seed_exponents(magn);
    let bracket = Bracket::new(1 << lb, 1 << ub);

    bracket.narrow::<TOLERANCE_BITS, MAX_ITERATIONS, _>(|guess| {
        overshoots(number, magn, guess)
    })
}

#[test]
fn test_rsqrt_zero() {
    assert_eq!(rsqrt(0), u32::MAX);
    let est = rsqrt_with::<6, 10>(0);
    assert_eq!(est.value, 0xffff_ffff);
    assert_eq!(est.iterations, 0);
}

#[test]
fn test_seed_exponents() {
    // 1.0 in 20.12 has N = 12, and 1/sqrt(1.0) = 2^12.
    assert_eq!(seed_exponents(12), (11, 12));
    assert_eq!(seed_exponents(0), (17, 18));
    assert_eq!(seed_exponents(31), (2, 3));
    for magn in 0..32 {
        let (lb, ub) = seed_exponents(magn);
        assert!(ub - lb <= 1 && lb <= ub);
    }
}

#[test]
fn test_rsqrt_known_values() {
    // 1/sqrt(1.0), 1/sqrt(4.0), 1/sqrt(16.0), 1/sqrt(0.25).
    assert_eq!(rsqrt(4096), 4080);
    assert_eq!(rsqrt(16384), 2040);
    assert_eq!(rsqrt(65536), 1020);
    assert_eq!(rsqrt(1024), 8160);
    // Both sides of the threshold.
    assert_eq!(rsqrt(8191), 2896);
    assert_eq!(rsqrt(8192), 2896);
    // The smallest and largest inputs.
    assert_eq!(rsqrt(1), 261120);
    assert_eq!(rsqrt(u32::MAX), 4);
}

#[test]
fn test_rsqrt_monotonic_bracket() {
    use super::utils::Lfsr;

    // The bracket only ever shrinks, and the default search converges.
    for number in Lfsr::new().take(10_000).filter(|n| *n != 0) {
        let magn = log2_floor(number);
        let (lb, ub) = seed_exponents(magn);
        let mut bracket = Bracket::new(1 << lb, 1 << ub);
        let tol = (bracket.lower >> DEFAULT_TOLERANCE_BITS) + 1;
        let mut steps = 0;
        while bracket.width() > tol {
            let before = bracket;
            bracket.step(|g| overshoots(number, magn, g));
            assert!(bracket.lower >= before.lower);
            assert!(bracket.upper <= before.upper);
            assert!(bracket.width() <= before.width() / 2 + 1);
            steps += 1;
        }
        assert!(steps <= DEFAULT_MAX_ITERATIONS);
        assert_eq!(rsqrt(number), bracket.midpoint());
    }
}

#[cfg(feature = "std")]
#[cfg(test)]
fn reference_rsqrt(number: u32) -> f64 {
    4096.0 / (number as f64 / 4096.0).sqrt()
}

#[cfg(feature = "std")]
#[test]
fn test_seed_bracket_contains_result() {
    use super::utils::Lfsr;

    let mut inputs: std::vec::Vec<u32> = (1..5000).collect();
    inputs.extend((0..32).map(|i| 1u32 << i));
    inputs.extend((1..32).map(|i| (1u32 << i) - 1));
    inputs.push(u32::MAX);
    inputs.extend(Lfsr::new_with_seed(3).take(50_000).filter(|n| *n != 0));

    for number in inputs {
        let y = reference_rsqrt(number);
        let (lb, ub) = seed_exponents(log2_floor(number));
        assert!(ub - lb <= 1);
        assert!((1u64 << lb) as f64 <= y, "number={number}");
        assert!((1u64 << ub) as f64 >= y, "number={number}");
    }
}

#[cfg(feature = "std")]
#[test]
fn test_rsqrt_accuracy() {
    use super::utils::Lfsr;

    let check = |number: u32| {
        let correct = reference_rsqrt(number).round() as u32;
        let got = rsqrt(number);
        assert!(
            got.abs_diff(correct) <= 1 + correct / 100,
            "rsqrt({number}) = {got}, expected {correct}"
        );
    };

    for number in 1..5000 {
        check(number);
    }
    for i in 0..32 {
        check(1 << i);
        check((1u32 << i) + 1);
    }
    check(u32::MAX);
    // Powers of ten in quarter-decade steps, from 10^-3.5 to 10^5.75.
    for i in -14..24 {
        let x = 10f64.powf(i as f64 * 0.25);
        check((x * 4096.0) as u32);
    }
    for number in Lfsr::new_with_seed(11).take(50_000).filter(|n| *n != 0) {
        check(number);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_rsqrt_bracket_tracks_root() {
    use super::utils::Lfsr;

    // Truncating X or Y can move a step to the wrong side of the root, but
    // never by more than the dropped-bit error.
    let check = |number: u32| {
        let y = reference_rsqrt(number);
        let magn = log2_floor(number);
        let (lb, ub) = seed_exponents(magn);
        let mut bracket = Bracket::new(1 << lb, 1 << ub);
        let tol = (bracket.lower >> DEFAULT_TOLERANCE_BITS) + 1;
        let mut steps = 0;
        while bracket.width() > tol && steps < DEFAULT_MAX_ITERATIONS {
            bracket.step(|g| overshoots(number, magn, g));
            steps += 1;
            let above = (bracket.lower as f64 - y) / y;
            let below = (y - bracket.upper as f64) / y;
            assert!(above < 0.005, "number={number} step={steps}");
            assert!(below < 0.005, "number={number} step={steps}");
        }
    };

    for number in 1..20_000 {
        check(number);
    }
    check((1 << THRESHOLD) - 1);
    check(1 << THRESHOLD);
    check(u32::MAX);
    for number in Lfsr::new_with_seed(17).take(100_000).filter(|n| *n != 0) {
        check(number);
    }
}

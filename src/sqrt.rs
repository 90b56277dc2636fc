//! Fixed-point square root by interval halving.

use crate::bisect::{
    Bracket, Estimate, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_BITS,
};
use crate::log2::log2_floor;

/// Approximates the square root of `number`.
///
/// The result is in the input's scale with half the fractional bits: an 8.24
/// input yields a 20.12 output. The error is about 1% of the result.
pub fn sqrt(number: u32) -> u32 {
    sqrt_with::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS>(number).value
}

/// Approximates the square root of `number`, stopping when the search
/// bracket is within `(lower >> TOLERANCE_BITS) + 1` or after
/// `MAX_ITERATIONS` halving steps.
///
/// The seed bracket is `[2^(n/2), 2^(n/2 + 1)]` with `n = log2_floor(number)`,
/// which always contains the root.
pub fn sqrt_with<const TOLERANCE_BITS: u32, const MAX_ITERATIONS: u32>(
    number: u32,
) -> Estimate {
    if number == 0 {
        // log2 of zero has no bracket.
        return Estimate::exact(0);
    }

    let magn = log2_floor(number) as u32;
    let lower = 1u32 << (magn / 2);
    let bracket = Bracket::new(lower, lower * 2);

    // guess < 2^16, so the square fits.
    bracket.narrow::<TOLERANCE_BITS, MAX_ITERATIONS, _>(|guess| {
        guess * guess > number
    })
}

#[cfg(test)]
fn rounded_root(number: u32) -> u32 {
    // Exact integer root, rounded to nearest.
    let n = number as u64;
    let (mut lo, mut hi) = (0u64, 1u64 << 16);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if mid * mid <= n {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    // Round up when n >= (lo + 0.5)^2, i.e. 4n >= 4lo^2 + 4lo + 1.
    if 4 * n >= 4 * lo * lo + 4 * lo + 1 {
        lo += 1;
    }
    lo as u32
}

#[cfg(test)]
fn check_sqrt(number: u32) {
    let got = sqrt(number);
    let correct = rounded_root(number);
    assert!(
        got.abs_diff(correct) <= 1 + correct / 100,
        "sqrt({number}) = {got}, expected {correct}"
    );
}

#[test]
fn test_sqrt_zero() {
    assert_eq!(sqrt(0), 0);
    assert_eq!(sqrt_with::<6, 10>(0), Estimate::exact(0));
}

#[test]
fn test_sqrt_small() {
    assert_eq!(sqrt(1), 1);
    assert_eq!(sqrt(2), 1);
    assert_eq!(sqrt(3), 1);
    assert_eq!(sqrt(4), 2);
    for n in 0..5000 {
        check_sqrt(n);
    }
}

#[test]
fn test_sqrt_fixed_point_values() {
    // 8.24 inputs from 0.0 to 3.8 in steps of 0.2.
    let inputs = [
        3355443, 6710886, 10066329, 13421772, 16777216, 20132659, 23488102,
        26843545, 30198988, 33554432, 36909875, 40265318, 43620761, 46976204,
        50331648, 53687091, 57042534, 60397977, 63753420, 167772160,
        1677721600, 4194304,
    ];
    for n in inputs {
        check_sqrt(n);
    }

    // sqrt(1.0) == 1.0 in 20.12.
    assert!(sqrt(1 << 24).abs_diff(4096) <= 41);
    assert_eq!(sqrt_with::<6, 10>(3355443).value, 1832);
}

#[test]
fn test_sqrt_full_range() {
    use super::utils::Lfsr;

    for i in 0..32 {
        check_sqrt(1 << i);
        check_sqrt((1u32 << i).wrapping_sub(1));
        check_sqrt((1u32 << i) + 1);
    }
    check_sqrt(u32::MAX);

    for n in Lfsr::new().take(50_000) {
        check_sqrt(n);
    }
}

#[test]
fn test_sqrt_iterations() {
    use super::utils::Lfsr;

    // The seed bracket is one bit wide, so reaching six tolerance bits takes
    // at most six steps.
    for n in Lfsr::new_with_seed(7).take(10_000) {
        let est = sqrt_with::<6, 10>(n);
        assert!(est.iterations <= 6);
        assert_eq!(est.value, sqrt(n));
    }

    // A tighter tolerance costs more steps and is at least as accurate.
    let n = 1_000_000_007;
    let loose = sqrt_with::<2, 10>(n);
    let tight = sqrt_with::<12, 20>(n);
    assert!(tight.iterations > loose.iterations);
    let correct = rounded_root(n);
    assert!(tight.value.abs_diff(correct) <= loose.value.abs_diff(correct));
    assert!(tight.value.abs_diff(correct) <= 2);
}

#[test]
fn test_sqrt_bracket_holds_root() {
    use super::utils::Lfsr;

    // lower^2 <= n < upper^2 before and after every step.
    let check = |number: u32| {
        let holds = |b: &Bracket| {
            let (lo, up) = (b.lower as u64, b.upper as u64);
            lo * lo <= number as u64 && (number as u64) < up * up
        };
        let lower = 1u32 << (log2_floor(number) / 2);
        let mut bracket = Bracket::new(lower, lower * 2);
        let tol = (lower >> DEFAULT_TOLERANCE_BITS) + 1;
        assert!(holds(&bracket), "number={number}");
        let mut steps = 0;
        while bracket.width() > tol && steps < DEFAULT_MAX_ITERATIONS {
            bracket.step(|guess| guess * guess > number);
            steps += 1;
            assert!(holds(&bracket), "number={number} step={steps}");
        }
        assert_eq!(bracket.midpoint(), sqrt(number));
    };

    for n in 1..5000 {
        check(n);
    }
    for i in 0..32 {
        check(1 << i);
        check((1u32 << i) + 1);
        check(u32::MAX >> i);
    }
    for n in Lfsr::new_with_seed(13).take(50_000).filter(|n| *n != 0) {
        check(n);
    }
}

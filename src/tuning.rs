//! Offline tuning and accuracy measurements.
//!
//! Nothing in here is needed at run time. These functions regenerate the
//! committed lookup tables, redo the error analysis behind the constants of
//! [`crate::rsqrt`], and measure the error of every primitive against `f64`.
//! Results are logged at the `debug` level.

use crate::bisect::Estimate;
use crate::log2::log2_floor;
use crate::rsqrt::rsqrt_with;
use crate::sqrt::sqrt_with;
use crate::tables::LookupTable;
use crate::trig::sin_with;
use crate::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_BITS};
use core::f64::consts::PI;
use std::vec::Vec;
use tracing::debug;

const OUTPUT_FRAC_BITS: i32 = 12;

/// Computes the quarter-wave sine table with `2^bits + 1` entries.
pub fn sin_table(bits: u32) -> Vec<u16> {
    let intervals = (1u32 << bits) as f64;
    (0..=1u32 << bits)
        .map(|i| {
            let x = i as f64 / intervals * PI * 0.5;
            let v = x.sin() * (1 << OUTPUT_FRAC_BITS) as f64;
            v.round_ties_even() as u16
        })
        .collect()
}

/// Computes the reciprocal square root table with `2^bits + 1` entries,
/// sampling 1/sqrt(x) for x in [0, 4] in 20.12. The first entry, 1/sqrt(0),
/// is clamped to the largest value below 1.0.
pub fn rsqrt_table(bits: u32) -> Vec<u16> {
    let intervals = (1u32 << bits) as f64;
    let one = (1 << OUTPUT_FRAC_BITS) as f64;
    (0..=1u32 << bits)
        .map(|i| {
            if i == 0 {
                return (1 << OUTPUT_FRAC_BITS) as u16 - 1;
            }
            let x = i as f64 / intervals * 4.0;
            (one / x.sqrt()).round_ties_even() as u16
        })
        .collect()
}

/// The worst-case relative error of both ways of keeping `X * Y^2` within
/// 32 bits, for one choice of the threshold magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftError {
    /// Inputs with `log2_floor(X) >= threshold` truncate X, the rest Y.
    pub threshold: u32,
    /// The error of truncating X, at the smallest X above the threshold.
    pub x_error: f64,
    /// The error of truncating both factors of Y^2, at the smallest Y below
    /// the threshold.
    pub y_error: f64,
}

impl ShiftError {
    /// The error of the worse of the two regimes.
    pub fn max_error(&self) -> f64 {
        self.x_error.max(self.y_error)
    }
}

/// Returns the number of bits that must be dropped from `X * Y^2` to fit
/// 32 bits, split as `(x_shift, y_shift_1, y_shift_2)`.
pub fn dropped_bits(frac_bits: u32) -> (u32, u32, u32) {
    let drop = (3 * frac_bits + 2).saturating_sub(32);
    let half = drop / 2;
    (drop, half, drop - half)
}

/// Computes the [`ShiftError`] of every threshold in `0..32` for a format
/// with `frac_bits` fractional bits.
pub fn shift_errors(frac_bits: u32) -> Vec<ShiftError> {
    let f = frac_bits as i32;
    let (drop, drop1, drop2) = dropped_bits(frac_bits);
    let lost_x = 2f64.powi(drop as i32) - 1.0;
    let lost_y1 = 2f64.powi(drop1 as i32) - 1.0;
    let lost_y2 = 2f64.powi(drop2 as i32) - 1.0;
    let scale = 2f64.powi(f);

    (0..32)
        .map(|t| {
            let ti = t as i32;
            // The smallest input at or above the threshold.
            let x_min = 2f64.powi(ti);
            // The largest input below it, as a real number.
            let x_max = 2f64.powi(ti + 1 - f) - 2f64.powi(-f);

            let y_min = (scale / x_max.sqrt()).floor();
            let y_max = (scale / 2f64.powi(ti - f).sqrt()).ceil();

            let x_error = lost_x / x_min;
            let lost_y2_total =
                lost_y1 * y_max + lost_y2 * y_max + lost_y1 * lost_y2;
            let y_error = lost_y2_total / (y_min * y_min);

            ShiftError {
                threshold: t,
                x_error,
                y_error,
            }
        })
        .collect()
}

/// Returns the threshold that minimizes the larger of the two truncation
/// errors.
pub fn optimal_threshold(frac_bits: u32) -> u32 {
    let best = shift_errors(frac_bits)
        .into_iter()
        .min_by(|a, b| a.max_error().total_cmp(&b.max_error()));
    let threshold = best.map_or(0, |e| e.threshold);
    debug!(frac_bits, threshold, "selected rsqrt threshold");
    threshold
}

/// Absolute error statistics of an approximation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorStats {
    /// The sum of the absolute errors.
    pub total_error: f64,
    /// The sum of the signed errors.
    pub total_bias: f64,
    /// The largest absolute error.
    pub max_error: f64,
    /// The input with the largest absolute error.
    pub worst_input: i64,
    /// The number of inputs measured.
    pub samples: u64,
}

impl ErrorStats {
    /// Accounts for one measurement.
    pub fn record(&mut self, input: i64, got: f64, exact: f64) {
        let error = got - exact;
        self.total_error += error.abs();
        self.total_bias += error;
        if error.abs() > self.max_error {
            self.max_error = error.abs();
            self.worst_input = input;
        }
        self.samples += 1;
    }

    /// The mean absolute error.
    pub fn mean_error(&self) -> f64 {
        if self.samples == 0 {
            return 0.0;
        }
        self.total_error / self.samples as f64
    }
}

/// Measures [`sin_with`] over a full turn. Angles wider than 16 bits are
/// sampled at `2^16` evenly spaced points.
pub fn sin_error<const ANGLE_BITS: u32, T: LookupTable>() -> ErrorStats {
    let turn = 1i64 << ANGLE_BITS;
    let step = 1usize << ANGLE_BITS.saturating_sub(16);
    let mut stats = ErrorStats::default();
    for angle in (0..turn).step_by(step) {
        let got = sin_with::<ANGLE_BITS, T>(angle) as f64;
        let exact =
            (angle as f64 * 2.0 * PI / turn as f64).sin() * 4096.0;
        stats.record(angle, got, exact);
    }
    debug!(
        angle_bits = ANGLE_BITS,
        table_bits = T::BITS,
        total_error = stats.total_error,
        total_bias = stats.total_bias,
        max_error = stats.max_error,
        "sin error"
    );
    stats
}

/// Measures [`crate::rsqrt_table_with`] over its domain, every 256th input.
pub fn rsqrt_table_error<T: LookupTable>() -> ErrorStats {
    use crate::rsqrt_table::{rsqrt_table_with, TABLE_INPUT_MAX, TABLE_INPUT_MIN};

    let mut stats = ErrorStats::default();
    for input in (TABLE_INPUT_MIN..=TABLE_INPUT_MAX).step_by(256) {
        let got = rsqrt_table_with::<T>(input) as f64;
        let exact = 4096.0 / (input as f64 / (1 << 22) as f64).sqrt();
        stats.record(input as i64, got, exact);
    }
    debug!(
        table_bits = T::BITS,
        total_error = stats.total_error,
        total_bias = stats.total_bias,
        max_error = stats.max_error,
        "rsqrt table error"
    );
    stats
}

/// Error and cost of an iterative approximation over a set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IterativeReport {
    /// Absolute error in output units.
    pub errors: ErrorStats,
    /// The largest relative error.
    pub max_relative_error: f64,
    /// The input with the largest relative error.
    pub worst_relative_input: u32,
    /// The most halving steps taken.
    pub max_iterations: u32,
    /// The input that took the most steps.
    pub slowest_input: u32,
}

impl IterativeReport {
    fn record(&mut self, input: u32, est: Estimate, exact: f64) {
        self.errors.record(input as i64, est.value as f64, exact);
        if exact > 0.0 {
            let relative = (est.value as f64 - exact).abs() / exact;
            if relative > self.max_relative_error {
                self.max_relative_error = relative;
                self.worst_relative_input = input;
            }
        }
        if est.iterations > self.max_iterations {
            self.max_iterations = est.iterations;
            self.slowest_input = input;
        }
    }
}

/// Measures [`crate::sqrt`] over `inputs`.
pub fn sqrt_report<I: IntoIterator<Item = u32>>(inputs: I) -> IterativeReport {
    let mut report = IterativeReport::default();
    for input in inputs {
        let est =
            sqrt_with::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS>(input);
        report.record(input, est, (input as f64).sqrt());
    }
    debug!(
        max_error = report.errors.max_error,
        max_relative_error = report.max_relative_error,
        max_iterations = report.max_iterations,
        "sqrt report"
    );
    report
}

/// Measures [`crate::rsqrt`] over `inputs`. Zero is skipped.
pub fn rsqrt_report<I: IntoIterator<Item = u32>>(inputs: I) -> IterativeReport {
    let mut report = IterativeReport::default();
    for input in inputs.into_iter().filter(|x| *x != 0) {
        let est =
            rsqrt_with::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS>(input);
        let exact = 4096.0 / (input as f64 / 4096.0).sqrt();
        report.record(input, est, exact);
    }
    debug!(
        max_error = report.errors.max_error,
        max_relative_error = report.max_relative_error,
        max_iterations = report.max_iterations,
        "rsqrt report"
    );
    report
}

/// Returns the magnitude regime that [`crate::rsqrt`] uses for `number`.
pub fn truncates_input(number: u32) -> bool {
    log2_floor(number) >= crate::rsqrt::THRESHOLD
}

#[test]
fn test_tables_match_generator() {
    use crate::tables::*;

    assert_eq!(sin_table(5), SinTable5::SAMPLES);
    assert_eq!(sin_table(6), SinTable6::SAMPLES);
    assert_eq!(sin_table(7), SinTable7::SAMPLES);
    assert_eq!(sin_table(8), SinTable8::SAMPLES);
    assert_eq!(rsqrt_table(5), RsqrtTable5::SAMPLES);
    assert_eq!(rsqrt_table(6), RsqrtTable6::SAMPLES);
    assert_eq!(rsqrt_table(7), RsqrtTable7::SAMPLES);
    assert_eq!(rsqrt_table(8), RsqrtTable8::SAMPLES);
}

#[test]
fn test_rsqrt_constants() {
    use crate::rsqrt::{GUESS_SHIFT, INPUT_SHIFT, RSQRT_FRAC_BITS, THRESHOLD};

    let (drop, drop1, drop2) = dropped_bits(RSQRT_FRAC_BITS);
    assert_eq!(drop, INPUT_SHIFT);
    assert_eq!(drop1, GUESS_SHIFT);
    assert_eq!(drop2, GUESS_SHIFT);
    assert_eq!(optimal_threshold(RSQRT_FRAC_BITS), THRESHOLD as u32);

    let errors = shift_errors(RSQRT_FRAC_BITS);
    let at = errors[THRESHOLD as usize];
    assert!(at.max_error() < 0.01);
    // Moving the threshold either way makes the worse regime worse.
    assert!(errors[12].max_error() > at.max_error());
    assert!(errors[14].max_error() > at.max_error());
    // Truncating X gets better with magnitude, truncating Y worse.
    assert!(errors[12].x_error > at.x_error);
    assert!(errors[14].y_error > at.y_error);

    assert!(truncates_input(1 << 13));
    assert!(!truncates_input((1 << 13) - 1));
}

#[test]
fn test_no_drop_for_small_formats() {
    assert_eq!(dropped_bits(8), (0, 0, 0));
    assert_eq!(dropped_bits(16), (18, 9, 9));
    assert!(shift_errors(8).iter().all(|e| e.x_error == 0.0));
}

#[test]
fn test_sin_error_stats() {
    use crate::tables::{SinTable5, SinTable6, SinTable7};

    let six = sin_error::<12, SinTable6>();
    assert_eq!(six.samples, 4096);
    assert!((six.total_error - 1239.93).abs() < 0.01);
    assert!((six.max_error - 1.0495).abs() < 0.001);
    assert!(six.total_bias.abs() < 1e-6);

    let five = sin_error::<12, SinTable5>();
    let seven = sin_error::<12, SinTable7>();
    assert!(five.total_error > six.total_error);
    assert!(seven.total_error < six.total_error);

    let wide = sin_error::<20, SinTable6>();
    assert_eq!(wide.samples, 1 << 16);
    assert!(wide.max_error < 1.2);
}

#[test]
fn test_rsqrt_table_error_stats() {
    use crate::tables::{RsqrtTable5, RsqrtTable6, RsqrtTable7, RsqrtTable8};

    let five = rsqrt_table_error::<RsqrtTable5>();
    let six = rsqrt_table_error::<RsqrtTable6>();
    let seven = rsqrt_table_error::<RsqrtTable7>();
    let eight = rsqrt_table_error::<RsqrtTable8>();
    assert_eq!(seven.samples, (3 << 22) / 256);
    assert!(five.max_error > six.max_error);
    assert!(six.max_error > seven.max_error);
    assert!(seven.max_error > eight.max_error);
    // The figures quoted by the tables module.
    assert!((five.max_error - 6.78).abs() < 0.01);
    assert!((six.max_error - 3.03).abs() < 0.01);
    assert!((seven.max_error - 2.19).abs() < 0.01);
    assert!((eight.max_error - 1.96).abs() < 0.01);
    // Chords of a convex function lie above it.
    assert!(seven.total_bias > 0.0);
}

#[test]
fn test_iterative_reports() {
    let sqrt = sqrt_report((1001..1 << 20).step_by(13));
    assert!(sqrt.max_relative_error < 0.03);
    assert_eq!(sqrt.max_iterations, 6);
    let slowest = sqrt_with::<6, 10>(sqrt.slowest_input);
    assert_eq!(slowest.iterations, sqrt.max_iterations);
    let worst = sqrt_with::<6, 10>(sqrt.worst_relative_input).value as f64;
    let exact = (sqrt.worst_relative_input as f64).sqrt();
    assert_eq!((worst - exact).abs() / exact, sqrt.max_relative_error);

    let rsqrt = rsqrt_report((0..1 << 20).step_by(13));
    assert!(rsqrt.max_relative_error < 0.01);
    assert!(rsqrt.max_iterations <= 6);
    let slowest = rsqrt_with::<6, 10>(rsqrt.slowest_input);
    assert_eq!(slowest.iterations, rsqrt.max_iterations);
    assert_ne!(rsqrt.worst_relative_input, 0);
    assert_eq!(rsqrt.errors.samples, ((1 << 20) - 1) / 13);
}

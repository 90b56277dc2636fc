//! Interval halving shared by the square root and reciprocal square root.
//!
//! Both primitives seed a bracket `[lower, upper]` from the binary logarithm
//! of their input, so the bracket already holds the answer to within one bit.
//! Each step halves the bracket, which gives one bit of precision per
//! iteration regardless of the starting error.

/// Default number of bits below the seed's lower bound that the bracket is
/// narrowed to: the search stops once `upper - lower <= (lower >> 6) + 1`.
pub const DEFAULT_TOLERANCE_BITS: u32 = 6;

/// Default cap on the number of halving steps.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// The result of an iterative approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// The approximated value.
    pub value: u32,
    /// The number of halving steps that were taken. This is informational
    /// and never affects `value`.
    pub iterations: u32,
}

impl Estimate {
    /// An estimate that was produced without iterating.
    pub const fn exact(value: u32) -> Self {
        Estimate {
            value,
            iterations: 0,
        }
    }
}

/// An interval that contains the true result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bracket {
    pub lower: u32,
    pub upper: u32,
}

impl Bracket {
    pub fn new(lower: u32, upper: u32) -> Self {
        debug_assert!(lower <= upper);
        Bracket { lower, upper }
    }

    pub fn width(&self) -> u32 {
        self.upper - self.lower
    }

    /// Returns floor((lower + upper) / 2) without overflowing.
    pub fn midpoint(&self) -> u32 {
        self.lower + self.width() / 2
    }

    /// Halve the bracket. `overshoots(guess)` reports whether the guess lies
    /// above the true result.
    pub fn step<F: Fn(u32) -> bool>(&mut self, overshoots: F) {
        let guess = self.midpoint();
        if overshoots(guess) {
            self.upper = guess;
        } else {
            self.lower = guess;
        }
    }

    /// Halve the bracket until it is within the tolerance derived from the
    /// seed's lower bound, or until `MAX_ITERATIONS` steps were taken, and
    /// return the midpoint.
    pub fn narrow<const TOLERANCE_BITS: u32, const MAX_ITERATIONS: u32, F>(
        mut self,
        overshoots: F,
    ) -> Estimate
    where
        F: Fn(u32) -> bool,
    {
        let tol = self.lower.checked_shr(TOLERANCE_BITS).unwrap_or(0) + 1;
        let mut iterations = 0;

        while self.width() > tol && iterations < MAX_ITERATIONS {
            self.step(&overshoots);
            iterations += 1;
        }

        Estimate {
            value: self.midpoint(),
            iterations,
        }
    }
}

#[test]
fn test_midpoint() {
    assert_eq!(Bracket::new(0, 0).midpoint(), 0);
    assert_eq!(Bracket::new(4, 8).midpoint(), 6);
    assert_eq!(Bracket::new(4, 7).midpoint(), 5);
    let top = Bracket::new(u32::MAX - 1, u32::MAX);
    assert_eq!(top.midpoint(), u32::MAX - 1);
}

#[test]
fn test_step_keeps_target() {
    // Search for 1000 in [512, 1024]; the target stays in the bracket.
    let target = 1000;
    let mut bracket = Bracket::new(512, 1024);
    for _ in 0..9 {
        bracket.step(|g| g > target);
        assert!(bracket.lower <= target && target <= bracket.upper);
    }
    assert_eq!(bracket.width(), 1);
}

#[test]
fn test_narrow_tolerance() {
    let target = 700;
    let est = Bracket::new(512, 1024)
        .narrow::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS, _>(|g| {
            g > target
        });
    // tol = (512 >> 6) + 1 = 9, so the width drops from 512 to 8 in 6 steps.
    assert_eq!(est.iterations, 6);
    assert!(est.value.abs_diff(target) <= 8);
}

#[test]
fn test_narrow_iteration_cap() {
    let est = Bracket::new(1 << 20, 1 << 21).narrow::<31, 3, _>(|_| false);
    assert_eq!(est.iterations, 3);
    // Every step raised the lower bound.
    assert_eq!(est.value, (1 << 21) - (1 << 17) / 2);

    let est = Bracket::new(8, 16).narrow::<6, 0, _>(|_| true);
    assert_eq!(est, Estimate { value: 12, iterations: 0 });
}

#[test]
fn test_narrow_huge_tolerance_bits() {
    // A shift larger than the word is a tolerance of one.
    let est = Bracket::new(4, 8).narrow::<40, 10, _>(|g| g > 5);
    assert_eq!(est.iterations, 2);
    assert_eq!(est.value, 5);
}

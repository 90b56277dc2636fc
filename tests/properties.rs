use fixmath::{
    cos, log2_ceil, log2_floor, rsqrt, rsqrt_table, rsqrt_with, sin, sqrt,
    sqrt_with, try_rsqrt_table, Error, SIN_ONE, TABLE_INPUT_MAX,
    TABLE_INPUT_MIN,
};
use proptest::prelude::*;

// log2_floor brackets its input, and log2_ceil only differs from it for
// values that are not a power of two.
proptest! {
    #[test]
    fn prop_log2_brackets(v in 1u32..) {
        let floor = log2_floor(v);
        let ceil = log2_ceil(v);
        prop_assert!((0..32).contains(&floor));
        prop_assert!(1u64 << floor <= v as u64);
        prop_assert!((v as u64) < 2u64 << floor);
        prop_assert_eq!(ceil == floor, v.is_power_of_two());
        prop_assert!(ceil == floor || ceil == floor + 1);
    }
}

proptest! {
    #[test]
    fn prop_sin_periodic_and_odd(a in -1_000_000i32..1_000_000) {
        let s = sin::<12>(a);
        prop_assert!((-SIN_ONE..=SIN_ONE).contains(&s));
        prop_assert_eq!(sin::<12>(a + 4096), s);
        prop_assert_eq!(sin::<12>(-a), -s);
        prop_assert_eq!(cos::<12>(a), sin::<12>(a + 1024));
    }
}

proptest! {
    #[test]
    fn prop_sin_odd_wide(a in any::<u32>()) {
        prop_assert_eq!(sin::<16>(a.wrapping_neg()), -sin::<16>(a));
        prop_assert_eq!(sin::<32>(a.wrapping_neg()), -sin::<32>(a));
        prop_assert_eq!(sin::<16>(a), sin::<16>(a & 0xffff));
    }
}

// The result never leaves the seed bracket and the search is capped.
proptest! {
    #[test]
    fn prop_sqrt_within_seed(n in 1u32..) {
        let est = sqrt_with::<6, 10>(n);
        let lower = 1u32 << (log2_floor(n) / 2);
        prop_assert!(est.value >= lower && est.value <= 2 * lower);
        prop_assert!(est.iterations <= 10);
        prop_assert_eq!(est.value, sqrt(n));
    }
}

proptest! {
    #[test]
    fn prop_rsqrt_within_seed(n in 1u32..) {
        let magn = log2_floor(n);
        let est = rsqrt_with::<6, 10>(n);
        prop_assert!(est.value >= 1 << ((35 - magn) / 2));
        prop_assert!(est.value <= 1 << ((37 - magn) / 2));
        prop_assert!(est.iterations <= 10);
        prop_assert_eq!(est.value, rsqrt(n));
    }
}

proptest! {
    #[test]
    fn prop_rsqrt_table_domain(input in any::<u32>()) {
        if (TABLE_INPUT_MIN..=TABLE_INPUT_MAX).contains(&input) {
            let y = rsqrt_table(input);
            prop_assert_eq!(try_rsqrt_table(input), Ok(y));
            // 1/sqrt of [1.0, 4.0) lies in (0.5, 1.0].
            prop_assert!((2048..=4096).contains(&y));
        } else {
            prop_assert_eq!(
                try_rsqrt_table(input),
                Err(Error::OutOfDomain { input })
            );
        }
    }
}

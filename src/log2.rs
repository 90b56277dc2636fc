//! Integer binary logarithm.

/// Holds floor(log2(i)) for every byte value, with -1 for zero.
const LOG_TABLE_256: [i8; 256] = {
    let mut table = [0i8; 256];
    table[0] = -1;
    let mut i = 2;
    while i < 256 {
        table[i] = table[i / 2] + 1;
        i += 1;
    }
    table
};

/// Returns floor(log2(v)), the index of the highest set bit of `v`.
/// Returns -1 for zero, so callers can treat zero without a branch.
///
/// The lookup inspects at most two bytes of `v` and never loops.
/// See: https://graphics.stanford.edu/~seander/bithacks.html#IntegerLogLookup
pub const fn log2_floor(v: u32) -> i32 {
    let high = v >> 16;
    if high != 0 {
        let t = high >> 8;
        if t != 0 {
            24 + LOG_TABLE_256[t as usize] as i32
        } else {
            16 + LOG_TABLE_256[high as usize] as i32
        }
    } else {
        let t = v >> 8;
        if t != 0 {
            8 + LOG_TABLE_256[t as usize] as i32
        } else {
            LOG_TABLE_256[v as usize] as i32
        }
    }
}

/// Returns ceil(log2(v)). Like [`log2_floor`], zero maps to -1.
pub const fn log2_ceil(v: u32) -> i32 {
    if v == 0 {
        return -1;
    }
    log2_floor(v - 1) + 1
}

#[test]
fn test_log_table() {
    assert_eq!(LOG_TABLE_256[0], -1);
    assert_eq!(LOG_TABLE_256[1], 0);
    assert_eq!(LOG_TABLE_256[2], 1);
    assert_eq!(LOG_TABLE_256[3], 1);
    assert_eq!(LOG_TABLE_256[15], 3);
    assert_eq!(LOG_TABLE_256[16], 4);
    assert_eq!(LOG_TABLE_256[128], 7);
    assert_eq!(LOG_TABLE_256[255], 7);
}

#[test]
fn test_log2_zero() {
    assert_eq!(log2_floor(0), -1);
    assert_eq!(log2_ceil(0), -1);
    assert_eq!(log2_ceil(1), 0);
    assert_eq!(log2_floor(1), 0);
}

#[test]
fn test_log2_power_of_two_boundaries() {
    for i in 0..32 {
        let p = 1u32 << i;
        assert_eq!(log2_floor(p), i);
        assert_eq!(log2_ceil(p), i);
        if p > 2 {
            assert_eq!(log2_floor(p - 1), i - 1);
            assert_eq!(log2_ceil(p - 1), i);
        }
        if i > 0 {
            assert_eq!(log2_floor(p + 1), i);
            assert_eq!(log2_ceil(p + 1), i + 1);
        }
    }
    assert_eq!(log2_floor(u32::MAX), 31);
    assert_eq!(log2_ceil(u32::MAX), 32);
}

#[test]
fn test_log2_matches_leading_zeros() {
    use super::utils::Lfsr;

    // Dense prefix, then pseudorandom values from every magnitude.
    for v in 1..0x10000u32 {
        assert_eq!(log2_floor(v), 31 - v.leading_zeros() as i32);
    }

    let mut lfsr = Lfsr::new();
    for i in 0..100_000 {
        let v = lfsr.get() >> (i % 32);
        if v == 0 {
            continue;
        }
        let floor = log2_floor(v);
        let ceil = log2_ceil(v);
        assert_eq!(floor, 31 - v.leading_zeros() as i32, "v={v}");
        assert_eq!(floor == ceil, v.is_power_of_two(), "v={v}");
        assert!(ceil - floor <= 1);
    }
}

//! Fixed-point sine and cosine over a quarter-wave table.
//!
//! An angle of `ANGLE_BITS` bits covers one full turn. The top bit selects the
//! half turn (the result is negated in the second half), the next bit the
//! quarter within it: in the first quarter the table is read forward, in the
//! second it is read backward with the interpolation position mirrored. The
//! next `T::BITS` bits index the table and the rest interpolate between two
//! neighboring samples. The output has 12 fractional bits, so it lies in
//! `[-4096, 4096]`.

use crate::tables::{interpolate, DefaultSinTable, LookupTable};
use crate::utils::mask;

/// 1.0 in the output format of [`sin`] and [`cos`].
pub const SIN_ONE: i32 = 1 << 12;

/// An integer that can be used as an angle. Only the low `ANGLE_BITS` of the
/// two's complement representation are used, so every value is valid and
/// the functions are periodic.
pub trait Angle: Copy {
    /// Returns the low 32 bits of the two's complement representation.
    fn to_bits(self) -> u32;
}

macro_rules! impl_angle {
    ($($t:ty),*) => {
        $(
            impl Angle for $t {
                fn to_bits(self) -> u32 {
                    self as u32
                }
            }
        )*
    };
}

impl_angle!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Returns sin(`angle`), where `2^ANGLE_BITS` is a full turn, scaled by 4096.
///
/// `ANGLE_BITS` must be in `4..=32`.
pub fn sin<const ANGLE_BITS: u32>(angle: impl Angle) -> i32 {
    sin_with::<ANGLE_BITS, DefaultSinTable>(angle)
}

/// Returns cos(`angle`), where `2^ANGLE_BITS` is a full turn, scaled by 4096.
pub fn cos<const ANGLE_BITS: u32>(angle: impl Angle) -> i32 {
    cos_with::<ANGLE_BITS, DefaultSinTable>(angle)
}

/// Same as [`sin`], interpolating in the quarter-wave table `T`.
pub fn sin_with<const ANGLE_BITS: u32, T: LookupTable>(angle: impl Angle) -> i32 {
    const {
        assert!(
            ANGLE_BITS >= 4 && ANGLE_BITS <= 32,
            "angles must have between 4 and 32 bits"
        )
    };

    let angle = angle.to_bits();
    let half_bit = 1u32 << (ANGLE_BITS - 1);
    let quarter_bit = 1u32 << (ANGLE_BITS - 2);
    let last = T::SAMPLES.len() - 1;

    // Bits of a quarter turn below the table index. With a coarse angle
    // there are none, and the angle steps over several samples at a time.
    let fine_bits = ANGLE_BITS as i32 - 2 - T::BITS as i32;
    let (idx, frac, interp_bits) = if fine_bits >= 0 {
        let fine = fine_bits as u32;
        ((angle >> fine) & mask(T::BITS), angle & mask(fine), fine)
    } else {
        ((angle << -fine_bits) & mask(T::BITS), 0, 0)
    };

    let (index, pos) = if angle & quarter_bit == 0 {
        (idx as usize, frac)
    } else {
        // Mirror: read backward from the end of the table.
        (last - 1 - idx as usize, (1 << interp_bits) - frac)
    };

    let value = interpolate(T::SAMPLES, index, pos, interp_bits);
    if angle & half_bit == 0 {
        value
    } else {
        -value
    }
}

/// Same as [`cos`], interpolating in the quarter-wave table `T`.
pub fn cos_with<const ANGLE_BITS: u32, T: LookupTable>(angle: impl Angle) -> i32 {
    let quarter_turn = 1u32 << (ANGLE_BITS - 2);
    sin_with::<ANGLE_BITS, T>(angle.to_bits().wrapping_add(quarter_turn))
}

// Expected values for a 12-bit angle and the default table.
#[cfg(test)]
const SIN_EXPECTED_12: [(i32, i32); 56] = [
    (0, 0), (1, 6), (2, 13), (3, 19), (4, 25), (5, 32), (6, 38), (7, 44),
    (8, 51), (9, 57), (10, 63), (11, 69), (12, 76), (13, 82), (14, 88),
    (15, 95), (16, 101), (1013, 4095), (1014, 4095), (1015, 4095), (1016, 4096),
    (1017, 4096), (1018, 4096), (1019, 4096), (1020, 4096), (1021, 4096),
    (1022, 4096), (1023, 4096), (1024, 4096), (1025, 4096), (1026, 4096),
    (1027, 4096), (2044, 25), (2045, 19), (2046, 13), (2047, 6), (2048, 0),
    (2049, -6), (2050, -13), (2051, -19), (3068, -4096), (3069, -4096),
    (3070, -4096), (3071, -4096), (3072, -4096), (3073, -4096), (3074, -4096),
    (3075, -4096), (4092, -25), (4093, -19), (4094, -13), (4095, -6), (4096, 0),
    (4097, 6), (4098, 13), (4099, 19),
];

#[cfg(test)]
const COS_EXPECTED_12: [(i32, i32); 56] = [
    (0, 4096), (1, 4096), (2, 4096), (3, 4096), (4, 4096), (5, 4096), (6, 4096),
    (7, 4096), (8, 4096), (9, 4095), (10, 4095), (11, 4095), (12, 4095),
    (13, 4095), (14, 4095), (15, 4095), (16, 4095), (1013, 69), (1014, 63),
    (1015, 57), (1016, 51), (1017, 44), (1018, 38), (1019, 32), (1020, 25),
    (1021, 19), (1022, 13), (1023, 6), (1024, 0), (1025, -6), (1026, -13),
    (1027, -19), (2044, -4096), (2045, -4096), (2046, -4096), (2047, -4096),
    (2048, -4096), (2049, -4096), (2050, -4096), (2051, -4096), (3068, -25),
    (3069, -19), (3070, -13), (3071, -6), (3072, 0), (3073, 6), (3074, 13),
    (3075, 19), (4092, 4096), (4093, 4096), (4094, 4096), (4095, 4096),
    (4096, 4096), (4097, 4096), (4098, 4096), (4099, 4096),
];

#[test]
fn test_sin_12_bits() {
    for (angle, expected) in SIN_EXPECTED_12 {
        assert_eq!(sin::<12>(angle), expected, "sin({angle})");
    }
}

#[test]
fn test_cos_12_bits() {
    for (angle, expected) in COS_EXPECTED_12 {
        assert_eq!(cos::<12>(angle), expected, "cos({angle})");
    }
}

#[test]
fn test_peaks() {
    assert_eq!(sin::<12>(0), 0);
    assert_eq!(sin::<12>(1024), SIN_ONE);
    assert_eq!(sin::<12>(2048), 0);
    assert_eq!(sin::<12>(3072), -SIN_ONE);

    assert_eq!(sin::<16>(0x4000), SIN_ONE);
    assert_eq!(sin::<16>(0xc000), -SIN_ONE);
    assert_eq!(cos::<16>(0), SIN_ONE);
    assert_eq!(cos::<16>(0x8000), -SIN_ONE);

    assert_eq!(sin::<32>(1u32 << 30), SIN_ONE);
    assert_eq!(sin::<32>(3u32 << 30), -SIN_ONE);
    assert_eq!(cos::<32>(i32::MIN), -SIN_ONE);

    assert_eq!(sin_with::<12, crate::SinTable5>(1024), SIN_ONE);
    assert_eq!(sin_with::<12, crate::SinTable7>(3072), -SIN_ONE);
    assert_eq!(cos_with::<12, crate::SinTable8>(2048), -SIN_ONE);
}

#[test]
fn test_symmetry() {
    for a in -8192..8192i32 {
        let s = sin::<12>(a);
        assert!((-SIN_ONE..=SIN_ONE).contains(&s));
        assert_eq!(sin::<12>(a + 4096), s, "period at {a}");
        assert_eq!(sin::<12>(-a), -s, "odd at {a}");
        assert_eq!(cos::<12>(a), sin::<12>(a + 1024), "cos at {a}");
    }
}

#[test]
fn test_angle_types() {
    // The same angle through different integer types.
    for a in -128..128i32 {
        assert_eq!(sin::<8>(a as i8), sin::<8>(a));
        assert_eq!(sin::<12>(a as i16), sin::<12>(a));
        assert_eq!(sin::<12>(a as i64), sin::<12>(a));
    }
    assert_eq!(sin::<16>(0x4000u16), SIN_ONE);
    assert_eq!(sin::<16>(-0x4000i16), -SIN_ONE);
    assert_eq!(sin::<12>(1024usize), SIN_ONE);
    // Bits above the angle width are ignored.
    assert_eq!(sin::<12>(0x1_0000_0400u64), SIN_ONE);
}

#[test]
fn test_coarse_angles() {
    // Fewer angle bits than table bits: every angle hits a sample.
    let expected = [0, 1567, 2896, 3784, 4096, 3784, 2896, 1567];
    for (a, e) in expected.iter().enumerate() {
        assert_eq!(sin::<4>(a as i32), *e);
        assert_eq!(sin::<4>(a as i32 + 8), -*e);
    }
    assert_eq!(sin::<5>(1), 799);
    assert_eq!(sin::<5>(9), 4017);
    assert_eq!(cos::<4>(0), SIN_ONE);
    assert_eq!(cos::<4>(4), 0);
}

#[test]
fn test_8_bit_angle() {
    assert_eq!(sin::<8>(1), 101);
    assert_eq!(sin::<8>(7), 700);
    assert_eq!(sin::<8>(63), 4095);
    assert_eq!(sin::<8>(64), 4096);
    assert_eq!(sin::<8>(65), 4095);
    assert_eq!(sin::<8>(-1i8), -101);
}

#[cfg(feature = "std")]
#[test]
fn test_sin_accuracy() {
    use core::f64::consts::PI;

    let check = |bits: u32, angle: i64, got: i32| {
        let turn = (1u64 << bits) as f64;
        let exact = (angle as f64 * 2.0 * PI / turn).sin() * 4096.0;
        assert!((got as f64 - exact).abs() <= 2.0, "sin({angle}) = {got}");
    };

    for a in 0..4096 {
        check(12, a, sin::<12>(a));
    }
    for a in (0..65536).step_by(7) {
        check(16, a, sin::<16>(a));
    }
    for a in (0..(1i64 << 32)).step_by(999_983) {
        check(32, a, sin::<32>(a));
    }
}

//! Integer-only fixed-point approximations of log2, sqrt, 1/sqrt, sin and cos.
//!
//! Every function in this crate operates on plain integers that encode
//! fixed-point values (`real = integer / 2^F`) and returns an approximation
//! with a bounded error. There is no floating point on any of the evaluation
//! paths, which makes the library usable on targets without an FPU.
//!
//! ```
//! use fixmath::{cos, log2_floor, rsqrt, sin, sqrt};
//!
//! assert_eq!(log2_floor(1000), 9);
//! // 1.0 in 8.24 is 1.0 in 20.12 after the square root.
//! assert!(sqrt(1 << 24).abs_diff(4096) <= 41);
//! // 1/sqrt(4.0) == 0.5 in 20.12.
//! assert!(rsqrt(4 << 12).abs_diff(2048) <= 21);
//! // A quarter turn of a 12-bit angle.
//! assert_eq!(sin::<12>(1024), 4096);
//! assert_eq!(cos::<12>(1024), 0);
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod bisect;
mod error;
mod log2;
mod rsqrt;
mod rsqrt_table;
mod sqrt;
mod tables;
mod trig;
mod utils;

#[cfg(feature = "std")]
pub mod tuning;

#[cfg(feature = "python")]
mod py;

pub use self::bisect::{Estimate, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE_BITS};
pub use self::error::Error;
pub use self::log2::{log2_ceil, log2_floor};
pub use self::rsqrt::{rsqrt, rsqrt_with, RSQRT_FRAC_BITS};
pub use self::rsqrt_table::{
    rsqrt_normalized, rsqrt_table, rsqrt_table_with, try_rsqrt_table,
    TABLE_INPUT_MAX, TABLE_INPUT_MIN,
};
pub use self::sqrt::{sqrt, sqrt_with};
pub use self::tables::{
    DefaultRsqrtTable, DefaultSinTable, LookupTable, RsqrtTable5, RsqrtTable6,
    RsqrtTable7, RsqrtTable8, SinTable5, SinTable6, SinTable7, SinTable8,
};
pub use self::trig::{cos, cos_with, sin, sin_with, Angle, SIN_ONE};

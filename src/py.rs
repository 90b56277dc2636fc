use crate::{
    cos, log2_ceil, log2_floor, rsqrt, rsqrt_normalized, rsqrt_with, sin,
    sqrt, sqrt_with, try_rsqrt_table, DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE_BITS,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::string::ToString;
use tracing::trace;

/// Returns floor(log2(v)), or -1 for zero.
#[pyfunction(name = "log2_floor")]
fn py_log2_floor(v: u32) -> i32 {
    log2_floor(v)
}

/// Returns ceil(log2(v)), or -1 for zero.
#[pyfunction(name = "log2_ceil")]
fn py_log2_ceil(v: u32) -> i32 {
    log2_ceil(v)
}

/// Returns the square root of an 8.24 number as 20.12.
#[pyfunction(name = "sqrt")]
fn py_sqrt(number: u32) -> u32 {
    sqrt(number)
}

/// Returns the square root of an 8.24 number and the number of halving
/// steps it took.
///
/// Returns:
///     A tuple (value, iterations)
#[pyfunction]
fn sqrt_iterations(number: u32) -> (u32, u32) {
    let est =
        sqrt_with::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS>(number);
    (est.value, est.iterations)
}

/// Returns 1/sqrt of a 20.12 number as 20.12. Zero maps to 0xFFFFFFFF.
#[pyfunction(name = "rsqrt")]
fn py_rsqrt(number: u32) -> u32 {
    rsqrt(number)
}

/// Returns 1/sqrt of a 20.12 number and the number of halving steps it
/// took.
///
/// Returns:
///     A tuple (value, iterations)
#[pyfunction]
fn rsqrt_iterations(number: u32) -> (u32, u32) {
    let est =
        rsqrt_with::<DEFAULT_TOLERANCE_BITS, DEFAULT_MAX_ITERATIONS>(number);
    (est.value, est.iterations)
}

/// Returns 1/sqrt of a number in [1.0, 4.0) with 22 fractional bits, read
/// from the lookup table.
///
/// Raises:
///     ValueError: if the input is outside of [0x400000, 0x1000000)
#[pyfunction(name = "rsqrt_table")]
fn py_rsqrt_table(input: u32) -> PyResult<u32> {
    try_rsqrt_table(input).map_err(|err| {
        trace!(input, "rejected rsqrt_table input");
        PyValueError::new_err(err.to_string())
    })
}

/// Returns 1/sqrt of any 20.12 number, using the lookup table.
#[pyfunction(name = "rsqrt_normalized")]
fn py_rsqrt_normalized(number: u32) -> u32 {
    rsqrt_normalized(number)
}

/// Returns sin of a 12-bit angle (4096 units per turn), scaled by 4096.
#[pyfunction]
fn sin12(angle: i64) -> i32 {
    sin::<12>(angle)
}

/// Returns cos of a 12-bit angle (4096 units per turn), scaled by 4096.
#[pyfunction]
fn cos12(angle: i64) -> i32 {
    cos::<12>(angle)
}

/// Returns sin of a 16-bit angle (65536 units per turn), scaled by 4096.
#[pyfunction]
fn sin16(angle: i64) -> i32 {
    sin::<16>(angle)
}

/// Returns cos of a 16-bit angle (65536 units per turn), scaled by 4096.
#[pyfunction]
fn cos16(angle: i64) -> i32 {
    cos::<16>(angle)
}

#[pymodule]
fn _fixmath(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_log2_floor, m)?)?;
    m.add_function(wrap_pyfunction!(py_log2_ceil, m)?)?;
    m.add_function(wrap_pyfunction!(py_sqrt, m)?)?;
    m.add_function(wrap_pyfunction!(sqrt_iterations, m)?)?;
    m.add_function(wrap_pyfunction!(py_rsqrt, m)?)?;
    m.add_function(wrap_pyfunction!(rsqrt_iterations, m)?)?;
    m.add_function(wrap_pyfunction!(py_rsqrt_table, m)?)?;
    m.add_function(wrap_pyfunction!(py_rsqrt_normalized, m)?)?;
    m.add_function(wrap_pyfunction!(sin12, m)?)?;
    m.add_function(wrap_pyfunction!(cos12, m)?)?;
    m.add_function(wrap_pyfunction!(sin16, m)?)?;
    m.add_function(wrap_pyfunction!(cos16, m)?)?;
    Ok(())
}

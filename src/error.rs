//! Errors reported by the checked entry points.

/// The primitives themselves are total; this is only returned by the checked
/// variants that validate a caller-side precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input lies outside of the domain of the reciprocal square root
    /// table, `[2^22, 2^24)`.
    #[error("input {input:#x} is outside of the table domain [0x400000, 0x1000000)")]
    OutOfDomain { input: u32 },
}

#[cfg(feature = "std")]
#[test]
fn test_error_display() {
    use std::string::ToString;

    let err = Error::OutOfDomain { input: 0x10 };
    assert_eq!(
        err.to_string(),
        "input 0x10 is outside of the table domain [0x400000, 0x1000000)"
    );
}

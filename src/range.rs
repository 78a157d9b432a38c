/// Size of the unsigned 32-bit domain, `2^32`.
pub const UINT32_DOMAIN: i128 = 1 << 32;

/// A decoded unsigned 32-bit field whose observed value lies outside `[0, 2^32 - 1]`.
///
/// Carries the raw signed value as read from the input. The message shows both the
/// value wrapped back into the unsigned domain and the raw value:
/// `Excepted:4294967295(-1)`.
///
/// Construction performs no range check; whether a value is a violation is the
/// decoder's call.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("Excepted:{}({observed})", i128::from(*observed) + UINT32_DOMAIN)]
pub struct RangeViolation {
    observed: i64,
}

impl RangeViolation {
    pub fn new(observed: i64) -> Self {
        Self { observed }
    }

    /// Raw value read from the input.
    pub fn observed(&self) -> i64 {
        self.observed
    }

    /// `observed + 2^32`, computed without overflow.
    pub fn adjusted_magnitude(&self) -> i128 {
        i128::from(self.observed) + UINT32_DOMAIN
    }
}

impl From<i32> for RangeViolation {
    fn from(raw: i32) -> Self {
        Self::new(i64::from(raw))
    }
}

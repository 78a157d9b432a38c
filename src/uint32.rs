use crate::range::RangeViolation;

/// Narrow a decoded value into an unsigned 32-bit field.
///
/// Anything outside `[0, 2^32 - 1]` is a [`RangeViolation`] carrying the value as read.
pub fn checked_uint32(value: i64) -> Result<u32, RangeViolation> {
    u32::try_from(value).map_err(|_| raise(RangeViolation::new(value)))
}

/// Reinterpret a signed 32-bit read as an unsigned 32-bit field.
///
/// Negative input is rejected rather than wrapped; the violation message shows the
/// wrapped value the encoder most likely meant.
pub fn uint32_from_i32(raw: i32) -> Result<u32, RangeViolation> {
    u32::try_from(raw).map_err(|_| raise(RangeViolation::from(raw)))
}

fn raise(violation: RangeViolation) -> RangeViolation {
    tracing::debug!(
        observed = violation.observed(),
        adjusted = violation.adjusted_magnitude(),
        "uint32 range violation"
    );
    violation
}

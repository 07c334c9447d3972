//! Counter codec and time quantizer.
//!
//! A counter is `floor(unix_seconds / period)` shifted by a signed number of
//! whole periods. Callers never supply a counter directly, only the offset.

use crate::clock::Clock;
use crate::error::CryptoError;

/// Canonical TOTP period in seconds (RFC 6238 §4).
pub const DEFAULT_PERIOD: u32 = 30;

/// Encode a counter as 8 big-endian bytes (RFC 4226 §5.2).
#[must_use]
pub const fn encode_counter(counter: u64) -> [u8; 8] {
    counter.to_be_bytes()
}

/// Base-10 rendering of a counter, the message signed by time signatures.
#[must_use]
pub fn counter_message(counter: u64) -> String {
    counter.to_string()
}

/// Quantize a Unix timestamp into a counter and apply `offset_windows`.
///
/// # Errors
///
/// Returns [`CryptoError::InvalidInput`] if `period` is 0 or the offset moves
/// the counter outside `0..=u64::MAX`.
pub fn quantize(unix_seconds: u64, period: u32, offset_windows: i64) -> Result<u64, CryptoError> {
    const OP: &str = "counter::quantize";

    let period = std::num::NonZeroU64::new(u64::from(period))
        .ok_or_else(|| CryptoError::invalid_input(OP, "period must be > 0"))?;
    let base = unix_seconds / period;
    base.checked_add_signed(offset_windows).ok_or_else(|| {
        CryptoError::invalid_input(
            OP,
            format!("offset {offset_windows} moves counter {base} out of range"),
        )
    })
}

/// Read `clock` once and quantize it.
///
/// # Errors
///
/// Same as [`quantize`].
pub fn current_counter<C: Clock>(
    clock: &C,
    period: u32,
    offset_windows: i64,
) -> Result<u64, CryptoError> {
    quantize(clock.unix_seconds(), period, offset_windows)
}

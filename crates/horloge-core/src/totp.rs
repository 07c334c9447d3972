//! Time-based numeric proofs (RFC 6238 TOTP over the HOTP generator).
//!
//! The counter is `floor(now / period)`; verification probes the windows at
//! offsets -1, 0 and +1 from a single clock reading, in that order.

use crate::clock::{Clock, SystemClock};
use crate::config::ProofConfig;
use crate::counter::{current_counter, DEFAULT_PERIOD};
use crate::error::CryptoError;
use crate::hotp::compute_hotp;

/// Window offsets probed by [`Totp::verify`], in probe order.
pub const PROBE_OFFSETS: [i64; 3] = [-1, 0, 1];

/// Constant-time byte comparison for OTP codes.
///
/// The early return on length mismatch only leaks the length, which is
/// public (always 6).
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

/// TOTP generator/verifier bound to a clock and a period.
#[derive(Clone, Debug)]
pub struct Totp<C = SystemClock> {
    clock: C,
    period: u32,
}

impl Totp<SystemClock> {
    /// System clock, 30-second period.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Totp<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Totp<C> {
    /// Use `clock` with the canonical 30-second period.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            clock,
            period: DEFAULT_PERIOD,
        }
    }

    /// Use `clock` with the period from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidInput`] if `config` fails validation.
    pub fn from_config(clock: C, config: &ProofConfig) -> Result<Self, CryptoError> {
        config.validate()?;
        Ok(Self {
            clock,
            period: config.totp_period,
        })
    }

    /// Period in seconds.
    #[must_use]
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Code for the current window shifted by `offset_windows` periods.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidInput`] if `secret` is empty or the offset
    ///   moves the counter out of range.
    /// - [`CryptoError::Internal`] on HMAC truncation failure.
    #[must_use = "OTP code should be used or compared"]
    pub fn generate(&self, secret: &[u8], offset_windows: i64) -> Result<String, CryptoError> {
        let counter = current_counter(&self.clock, self.period, offset_windows)?;
        compute_hotp(secret, counter)
    }

    /// Offset of the first window in [`PROBE_OFFSETS`] whose code equals
    /// `token`, or `None`.
    ///
    /// The clock is read once; windows that would fall below counter 0 are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Propagates the first generation error; later windows are not probed.
    pub fn matching_offset(&self, token: &str, secret: &[u8]) -> Result<Option<i64>, CryptoError> {
        let now = current_counter(&self.clock, self.period, 0)?;

        for offset in PROBE_OFFSETS {
            let Some(counter) = now.checked_add_signed(offset) else {
                tracing::trace!(offset, "TOTP window out of counter range, skipped");
                continue;
            };
            let expected = compute_hotp(secret, counter)?;
            if constant_time_eq(expected.as_bytes(), token.as_bytes()) {
                return Ok(Some(offset));
            }
        }

        Ok(None)
    }

    /// Accept `token` if it matches the window at offset -1, 0 or +1.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidToken`] if no window matches.
    /// - Any generation error, unchanged.
    pub fn verify(&self, token: &str, secret: &[u8]) -> Result<(), CryptoError> {
        match self.matching_offset(token, secret)? {
            Some(0) => Ok(()),
            Some(offset) => {
                tracing::debug!(offset, "TOTP token accepted from drifted window");
                Ok(())
            }
            None => Err(CryptoError::InvalidToken { op: "totp::verify" }),
        }
    }
}

/// [`Totp::generate`] with the system clock and a 30-second period.
///
/// # Errors
///
/// See [`Totp::generate`].
#[must_use = "OTP code should be used or compared"]
pub fn generate_totp(secret: &[u8], offset_windows: i64) -> Result<String, CryptoError> {
    Totp::new().generate(secret, offset_windows)
}

/// [`Totp::verify`] with the system clock and a 30-second period.
///
/// # Errors
///
/// See [`Totp::verify`].
pub fn verify_totp(token: &str, secret: &[u8]) -> Result<(), CryptoError> {
    Totp::new().verify(token, secret)
}

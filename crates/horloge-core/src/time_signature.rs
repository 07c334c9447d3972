//! Time-windowed Ed25519 signatures.
//!
//! The signed message is the base-10 string of `floor(now / period)`.
//! Verification accepts the current counter and, failing that, exactly one
//! previous counter. A signature from a later counter is never accepted:
//! the signer's clock is assumed to lag the verifier's, not lead it.

use crate::clock::{Clock, SystemClock};
use crate::counter::{counter_message, current_counter};
use crate::error::CryptoError;
use crate::signing::{verify_signature, SigningKeyPair, SigningPublicKey};

/// Generator/verifier of time signatures bound to a clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeSigner<C = SystemClock> {
    clock: C,
}

impl TimeSigner<SystemClock> {
    /// Read the system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TimeSigner<C> {
    /// Read `clock` instead of the system clock.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Sign the current counter for `period`.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidState`] if `key_pair` has no private key.
    /// - [`CryptoError::InvalidInput`] if `period` is 0.
    /// - [`CryptoError::Internal`] if the Ed25519 primitive fails.
    pub fn generate(&self, key_pair: &SigningKeyPair, period: u32) -> Result<Vec<u8>, CryptoError> {
        if !key_pair.has_private_key() {
            return Err(CryptoError::invalid_state(
                "time_signature::generate",
                "a signature can not be generated without the private key",
            ));
        }

        let counter = current_counter(&self.clock, period, 0)?;
        key_pair.sign(counter_message(counter).as_bytes())
    }

    /// `true` if `signature` covers the current counter or the one before it.
    ///
    /// A zero `period` verifies nothing.
    #[must_use]
    pub fn verify(&self, signature: &[u8], public_key: &SigningPublicKey, period: u32) -> bool {
        let Ok(counter) = current_counter(&self.clock, period, 0) else {
            tracing::debug!(period, "time signature rejected: invalid period");
            return false;
        };

        if verify_signature(public_key, counter_message(counter).as_bytes(), signature) {
            return true;
        }

        let Some(previous) = counter.checked_sub(1) else {
            return false;
        };
        let accepted =
            verify_signature(public_key, counter_message(previous).as_bytes(), signature);
        if accepted {
            tracing::debug!(counter, "time signature accepted from previous period");
        }
        accepted
    }
}

/// [`TimeSigner::generate`] with the system clock.
///
/// # Errors
///
/// See [`TimeSigner::generate`].
pub fn generate_time_signature(
    key_pair: &SigningKeyPair,
    period: u32,
) -> Result<Vec<u8>, CryptoError> {
    TimeSigner::new().generate(key_pair, period)
}

/// [`TimeSigner::verify`] with the system clock.
#[must_use]
pub fn verify_time_signature(
    signature: &[u8],
    public_key: &SigningPublicKey,
    period: u32,
) -> bool {
    TimeSigner::new().verify(signature, public_key, period)
}

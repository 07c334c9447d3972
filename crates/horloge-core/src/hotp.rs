//! RFC 4226 HOTP generation (HMAC-SHA1, 6 digits).
//!
//! Uses `ring::hmac` for the HMAC computation. Codes are always rendered
//! as exactly [`DIGITS`] characters, left-padded with zeros.

use ring::hmac;

use crate::counter::encode_counter;
use crate::error::CryptoError;

/// Number of digits in a numeric proof.
pub const DIGITS: usize = 6;

/// `10^DIGITS`, the truncation modulus.
const MODULUS: u32 = 1_000_000;

/// Generate a 6-digit HOTP code for `counter` per RFC 4226.
///
/// # Errors
///
/// - [`CryptoError::InvalidInput`] if `secret` is empty.
/// - [`CryptoError::Internal`] if dynamic truncation would read outside the
///   digest.
#[must_use = "OTP code should be used or compared"]
pub fn compute_hotp(secret: &[u8], counter: u64) -> Result<String, CryptoError> {
    const OP: &str = "hotp::compute";

    if secret.is_empty() {
        return Err(CryptoError::invalid_input(OP, "secret must not be empty"));
    }

    // HMAC(K, C) where C is the counter as 8 big-endian bytes (RFC 4226 §5.2).
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, secret);
    let tag = hmac::sign(&key, &encode_counter(counter));
    let binary_code = dynamic_truncate(tag.as_ref())
        .ok_or_else(|| CryptoError::internal(OP, "truncation offset past end of digest"))?;

    // MODULUS is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    let code = binary_code % MODULUS;

    Ok(format!("{code:0>DIGITS$}"))
}

/// Dynamic truncation (RFC 4226 §5.3): low nibble of the last byte selects a
/// 4-byte big-endian window, whose top bit is masked off.
fn dynamic_truncate(digest: &[u8]) -> Option<u32> {
    let offset = usize::from(digest.last()? & 0x0F);
    let window: [u8; 4] = digest.get(offset..offset.checked_add(4)?)?.try_into().ok()?;
    Some(u32::from_be_bytes(window) & 0x7FFF_FFFF)
}

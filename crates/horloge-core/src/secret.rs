//! Shared-secret codec for HOTP/TOTP.
//!
//! The canonical encoded form of a secret is exactly 16 base32 characters
//! (RFC 4648 alphabet, no padding), which decodes to 10 raw key bytes.
//! Decoding is case-insensitive.

use std::fmt;

use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::{ExposeSecret, SecretSlice};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Length of the canonical encoded secret, in characters.
pub const ENCODED_SECRET_LEN: usize = 16;

/// Length of a decoded canonical secret, in bytes.
pub const SECRET_LEN: usize = 10;

/// Decoded HOTP/TOTP key material.
///
/// Zeroized on drop; `Debug` output is masked.
pub struct OtpSecret {
    inner: SecretSlice<u8>,
}

impl OtpSecret {
    /// Wrap raw key bytes. The caller should zeroize its own copy.
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            inner: bytes.to_vec().into(),
        }
    }

    /// Raw key bytes, for passing to [`crate::hotp`] / [`crate::totp`].
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }

    /// Number of key bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expose().len()
    }

    /// Returns `true` if the secret holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for OtpSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpSecret(***)")
    }
}

/// Decode a canonical 16-character base32 secret into raw key bytes.
///
/// # Errors
///
/// - [`CryptoError::InvalidInput`] if `input` is not exactly 16 bytes long.
/// - [`CryptoError::Decode`] if `input` contains a character outside the
///   base32 alphabet (padding `=` included).
pub fn decode_secret(input: &str) -> Result<OtpSecret, CryptoError> {
    const OP: &str = "secret::decode";

    if input.len() != ENCODED_SECRET_LEN {
        return Err(CryptoError::invalid_input(
            OP,
            format!(
                "secret must be {ENCODED_SECRET_LEN} characters long, got {}",
                input.len()
            ),
        ));
    }

    let mut upper = input.to_ascii_uppercase();
    let decoded = BASE32_NOPAD.decode(upper.as_bytes());
    upper.zeroize();

    let mut bytes = decoded.map_err(|source| CryptoError::Decode { op: OP, source })?;
    let secret = OtpSecret::new(&bytes);
    bytes.zeroize();
    Ok(secret)
}

/// Canonical 16-character uppercase base32 form of a 10-byte secret.
#[must_use]
pub fn encode_secret(bytes: &[u8; SECRET_LEN]) -> String {
    BASE32_NOPAD.encode(bytes)
}

/// Generate a fresh secret in canonical encoded form.
///
/// # Errors
///
/// Returns [`CryptoError::Internal`] if the CSPRNG fails.
pub fn generate_secret() -> Result<String, CryptoError> {
    let mut bytes = [0u8; SECRET_LEN];
    fill_random("secret::generate", &mut bytes)?;
    let encoded = encode_secret(&bytes);
    bytes.zeroize();
    Ok(encoded)
}

/// `len` bytes from the operating system CSPRNG.
///
/// # Errors
///
/// Returns [`CryptoError::Internal`] if the CSPRNG fails.
pub fn random_bytes(len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut bytes = vec![0u8; len];
    fill_random("secret::random_bytes", &mut bytes)?;
    Ok(bytes)
}

pub(crate) fn fill_random(op: &'static str, dest: &mut [u8]) -> Result<(), CryptoError> {
    OsRng
        .try_fill_bytes(dest)
        .map_err(|e| CryptoError::internal(op, format!("CSPRNG fill failed: {e}")))
}

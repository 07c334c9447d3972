//! Ed25519 signing key pairs.
//!
//! This module provides:
//! - [`SigningKeyPair::generate`] — a fresh key pair from 32 CSPRNG bytes
//! - [`SigningKeyPair::from_keys`] — load existing keys, optionally verify-only
//! - [`SigningKeyPair::sign`] — sign a message (requires the private key)
//! - [`verify_signature`] — check a signature against a public key
//!
//! Signing and verification go through `ring::signature`. Private keys are
//! accepted as the 32-byte seed or the 64-byte `seed || public` form.

use std::fmt;

use ring::signature::{self, Ed25519KeyPair, KeyPair};
use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{guard_primitive, CryptoError};
use crate::secret::fill_random;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Ed25519 seed length in bytes.
pub const SEED_LEN: usize = 32;

/// Length of the `seed || public` private key form.
pub const EXPANDED_PRIVATE_KEY_LEN: usize = 64;

/// Ed25519 signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Ed25519 public key. Safe to share.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SigningPublicKey([u8; PUBLIC_KEY_LEN]);

impl SigningPublicKey {
    /// Wrap raw public key bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw public key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    fn parse(op: &'static str, bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::invalid_input(
                op,
                format!(
                    "invalid public key length: {} bytes (expected {PUBLIC_KEY_LEN})",
                    bytes.len()
                ),
            )
        })?;
        Ok(Self(array))
    }
}

impl TryFrom<&[u8]> for SigningPublicKey {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::parse("signing::public_key", bytes)
    }
}

impl AsRef<[u8]> for SigningPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Ed25519 key pair. The private half is optional: holders that only
/// verify carry the public key alone.
///
/// The seed is zeroized on drop. Not `Serialize`; use
/// [`export_private_key`](Self::export_private_key) to persist it.
pub struct SigningKeyPair {
    seed: Option<SecretBox<[u8; SEED_LEN]>>,
    public: SigningPublicKey,
}

impl fmt::Debug for SigningKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKeyPair(***)")
    }
}

impl SigningKeyPair {
    /// Generate a key pair from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Internal`] if the CSPRNG or key derivation fails.
    pub fn generate() -> Result<Self, CryptoError> {
        const OP: &str = "signing::generate";

        let mut seed = [0u8; SEED_LEN];
        fill_random(OP, &mut seed)?;

        let key_pair = Ed25519KeyPair::from_seed_unchecked(&seed).map_err(|e| {
            seed.zeroize();
            CryptoError::internal(OP, format!("Ed25519 key generation failed: {e}"))
        })?;
        let public = SigningPublicKey::parse(OP, key_pair.public_key().as_ref())?;

        let boxed = SecretBox::new(Box::new(seed));
        seed.zeroize();

        tracing::debug!("generated Ed25519 signing key pair");
        Ok(Self {
            seed: Some(boxed),
            public,
        })
    }

    /// Load a key pair from existing key bytes.
    ///
    /// `private` may be the 32-byte seed, the 64-byte `seed || public` form,
    /// or `None` for a verify-only holder.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidInput`] on a wrong length or if the
    /// private key does not belong to `public`.
    pub fn from_keys(public: &[u8], private: Option<&[u8]>) -> Result<Self, CryptoError> {
        const OP: &str = "signing::from_keys";

        let public = SigningPublicKey::parse(OP, public)?;
        let Some(private) = private else {
            return Ok(Self::verify_only(public));
        };

        let seed = match private.len() {
            SEED_LEN => private,
            EXPANDED_PRIVATE_KEY_LEN => {
                let (seed, embedded_public) = private.split_at(SEED_LEN);
                if embedded_public != public.as_bytes() {
                    return Err(CryptoError::invalid_input(
                        OP,
                        "private key embeds a different public key",
                    ));
                }
                seed
            }
            other => {
                return Err(CryptoError::invalid_input(
                    OP,
                    format!(
                        "invalid private key length: {other} bytes \
                         (expected {SEED_LEN} or {EXPANDED_PRIVATE_KEY_LEN})"
                    ),
                ));
            }
        };

        Ed25519KeyPair::from_seed_and_public_key(seed, public.as_bytes()).map_err(|e| {
            CryptoError::invalid_input(OP, format!("private key does not match public key: {e}"))
        })?;

        let mut array = [0u8; SEED_LEN];
        array.copy_from_slice(seed);
        let boxed = SecretBox::new(Box::new(array));
        array.zeroize();

        Ok(Self {
            seed: Some(boxed),
            public,
        })
    }

    /// A holder that can verify but not sign.
    #[must_use]
    pub const fn verify_only(public: SigningPublicKey) -> Self {
        Self { seed: None, public }
    }

    /// The public half.
    #[must_use]
    pub const fn public_key(&self) -> &SigningPublicKey {
        &self.public
    }

    /// Returns `true` if this holder can sign.
    #[must_use]
    pub const fn has_private_key(&self) -> bool {
        self.seed.is_some()
    }

    /// The private key in 64-byte `seed || public` form, or `None` for a
    /// verify-only holder.
    #[must_use]
    pub fn export_private_key(&self) -> Option<Zeroizing<Vec<u8>>> {
        let seed = self.seed.as_ref()?;
        let mut out = Zeroizing::new(Vec::with_capacity(EXPANDED_PRIVATE_KEY_LEN));
        out.extend_from_slice(seed.expose_secret());
        out.extend_from_slice(self.public.as_bytes());
        Some(out)
    }

    /// Sign `message`.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidState`] if this holder has no private key.
    /// - [`CryptoError::Internal`] if the Ed25519 primitive fails.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        const OP: &str = "signing::sign";

        let seed = self.seed.as_ref().ok_or_else(|| {
            CryptoError::invalid_state(
                OP,
                "a signature can not be generated without the private key",
            )
        })?;

        let public = self.public.as_bytes();
        guard_primitive(OP, || {
            Ed25519KeyPair::from_seed_and_public_key(seed.expose_secret(), public)
                .map(|key_pair| key_pair.sign(message).as_ref().to_vec())
        })?
        .map_err(|e| CryptoError::internal(OP, format!("Ed25519 key reconstruction failed: {e}")))
    }

    /// Verify `signature` over `message` with this holder's public key.
    #[must_use]
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        verify_signature(&self.public, message, signature)
    }
}

/// Verify an Ed25519 `signature` over `message`.
///
/// Malformed signatures (wrong length, non-canonical) verify as `false`.
#[must_use]
pub fn verify_signature(public_key: &SigningPublicKey, message: &[u8], signature: &[u8]) -> bool {
    signature::UnparsedPublicKey::new(&signature::ED25519, public_key.as_bytes())
        .verify(message, signature)
        .is_ok()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

//! Error types for `horloge-core`.
//!
//! Every error carries the operation tag (`op`) of the function that
//! produced it, e.g. `"totp::verify"`.

use thiserror::Error;

/// Errors produced by proof generation, verification and key handling.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// A constraint on the caller's input was violated before any
    /// cryptographic work began (wrong secret length, zero period, ...).
    #[error("{op}: invalid input: {reason}")]
    InvalidInput {
        /// Originating operation.
        op: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Malformed base32 input.
    #[error("{op}: malformed base32: {source}")]
    Decode {
        /// Originating operation.
        op: &'static str,
        /// Underlying decoder failure.
        #[source]
        source: data_encoding::DecodeError,
    },

    /// The operation needs key material the caller's object does not hold.
    #[error("{op}: invalid state: {reason}")]
    InvalidState {
        /// Originating operation.
        op: &'static str,
        /// What was missing.
        reason: String,
    },

    /// Verification exhausted its tolerance window without a match.
    #[error("{op}: token does not match any accepted time window")]
    InvalidToken {
        /// Originating operation.
        op: &'static str,
    },

    /// Unexpected failure inside an underlying primitive (RNG, HMAC, Ed25519).
    #[error("{op}: internal error: {reason}")]
    Internal {
        /// Originating operation.
        op: &'static str,
        /// Description of the primitive failure.
        reason: String,
    },
}

/// Discriminant of [`CryptoError`], for callers that branch on the kind only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`CryptoError::InvalidInput`].
    InvalidInput,
    /// See [`CryptoError::Decode`].
    Decode,
    /// See [`CryptoError::InvalidState`].
    InvalidState,
    /// See [`CryptoError::InvalidToken`].
    InvalidToken,
    /// See [`CryptoError::Internal`].
    Internal,
}

impl CryptoError {
    pub(crate) fn invalid_input(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            op,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(op: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidState {
            op,
            reason: reason.into(),
        }
    }

    pub(crate) fn internal(op: &'static str, reason: impl Into<String>) -> Self {
        Self::Internal {
            op,
            reason: reason.into(),
        }
    }

    /// Operation tag identifying where the error originated.
    #[must_use]
    pub const fn op(&self) -> &'static str {
        match self {
            Self::InvalidInput { op, .. }
            | Self::Decode { op, .. }
            | Self::InvalidState { op, .. }
            | Self::InvalidToken { op }
            | Self::Internal { op, .. } => op,
        }
    }

    /// Kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::InvalidToken { .. } => ErrorKind::InvalidToken,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }
}

/// Run a call into an external primitive, converting a panic into
/// [`CryptoError::Internal`] so it never crosses the crate boundary.
pub(crate) fn guard_primitive<T>(
    op: &'static str,
    f: impl FnOnce() -> T + std::panic::UnwindSafe,
) -> Result<T, CryptoError> {
    std::panic::catch_unwind(f).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "primitive aborted".to_owned());
        CryptoError::internal(op, reason)
    })
}

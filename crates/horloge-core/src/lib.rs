//! `horloge-core` — time-windowed one-time proofs.
//!
//! Two schemes share one shape: derive a counter from quantized wall-clock
//! time, produce a deterministic proof for it, and verify a caller's proof by
//! scanning a short, fixed list of candidate counters.
//!
//! - Numeric: RFC 4226 HOTP codes over RFC 6238 time steps ([`totp`]),
//!   accepting windows -1, 0 and +1.
//! - Signature: Ed25519 over the decimal counter string ([`time_signature`]),
//!   accepting the current and the previous window only.
//!
//! Zero network, zero async. Time is read through the [`Clock`] trait.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod clock;
pub mod config;
pub mod counter;

pub mod secret;

pub mod hotp;
pub mod totp;

pub mod signing;
pub mod time_signature;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::ProofConfig;
pub use counter::{counter_message, current_counter, encode_counter, quantize, DEFAULT_PERIOD};
pub use error::{CryptoError, ErrorKind};
pub use hotp::{compute_hotp, DIGITS};
pub use secret::{
    decode_secret, encode_secret, generate_secret, random_bytes, OtpSecret, ENCODED_SECRET_LEN,
    SECRET_LEN,
};
pub use signing::{verify_signature, SigningKeyPair, SigningPublicKey, SIGNATURE_LEN};
pub use time_signature::{generate_time_signature, verify_time_signature, TimeSigner};
pub use totp::{generate_totp, verify_totp, Totp, PROBE_OFFSETS};

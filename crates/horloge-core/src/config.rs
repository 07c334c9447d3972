//! Deployment configuration for the time-windowed proof schemes.
//!
//! Periods are fixed per deployment. Both default to 30 seconds.

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_PERIOD;
use crate::error::CryptoError;

/// Period settings, loadable from JSON.
///
/// Missing fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofConfig {
    /// Width of one TOTP window, in seconds.
    pub totp_period: u32,
    /// Width of one time-signature window, in seconds.
    pub signature_period: u32,
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            totp_period: DEFAULT_PERIOD,
            signature_period: DEFAULT_PERIOD,
        }
    }
}

impl ProofConfig {
    /// Check that both periods are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> Result<(), CryptoError> {
        const OP: &str = "config::validate";

        if self.totp_period == 0 {
            return Err(CryptoError::invalid_input(OP, "totp_period must be > 0"));
        }
        if self.signature_period == 0 {
            return Err(CryptoError::invalid_input(
                OP,
                "signature_period must be > 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidInput`] on malformed JSON or a failed
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, CryptoError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CryptoError::invalid_input("config::from_json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

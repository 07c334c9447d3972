//! Integration tests for loading `ProofConfig`.

use horloge_core::{ErrorKind, FixedClock, ProofConfig, Totp};

#[test]
fn json_roundtrip_preserves_periods() {
    let config = ProofConfig {
        totp_period: 60,
        signature_period: 120,
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let back = ProofConfig::from_json(&json).expect("parse");
    assert_eq!(back, config);
}

#[test]
fn unknown_fields_are_ignored() {
    let config =
        ProofConfig::from_json(r#"{ "totp_period": 30, "comment": "prod" }"#).expect("parse");
    assert_eq!(config, ProofConfig::default());
}

#[test]
fn totp_from_loaded_config() {
    let config = ProofConfig::from_json(r#"{ "totp_period": 60 }"#).expect("parse");
    let secret = b"12345678901234567890";

    let code = Totp::from_config(FixedClock(1_700_000_000), &config)
        .expect("totp")
        .generate(secret, 0)
        .expect("generate");
    // 60 seconds later is the next 60s window, one step of drift.
    Totp::from_config(FixedClock(1_700_000_060), &config)
        .expect("totp")
        .verify(&code, secret)
        .expect("one window later");
}

#[test]
fn zero_signature_period_is_rejected() {
    let err = ProofConfig::from_json(r#"{ "signature_period": 0 }"#).expect_err("zero");
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

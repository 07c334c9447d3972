//! Integration tests for the TOTP generator/verifier.
//!
//! Tests the full lifecycle: decode secret → generate → verify, and the
//! drift tolerance at window boundaries.

use horloge_core::{
    compute_hotp, decode_secret, generate_secret, generate_totp, verify_totp, ErrorKind,
    FixedClock, Totp,
};

const TIME: u64 = 1_700_000_000;

/// Generate at T, verify at T.
#[test]
fn generate_then_verify_same_time() {
    let secret = decode_secret("CHICKENISCHICKEN").expect("decode");
    let totp = Totp::with_clock(FixedClock(TIME));
    let code = totp.generate(secret.expose(), 0).expect("generate");
    totp.verify(&code, secret.expose()).expect("same window");
}

/// Generate at T, verify one period later (signer clock behind).
#[test]
fn generate_then_verify_one_step_later() {
    let secret = decode_secret("CHICKENISCHICKEN").expect("decode");
    let code = Totp::with_clock(FixedClock(TIME))
        .generate(secret.expose(), 0)
        .expect("generate");
    Totp::with_clock(FixedClock(TIME + 30))
        .verify(&code, secret.expose())
        .expect("previous window accepted");
}

/// Generate at T, verify one period earlier (signer clock ahead).
#[test]
fn generate_then_verify_one_step_earlier() {
    let secret = decode_secret("CHICKENISCHICKEN").expect("decode");
    let code = Totp::with_clock(FixedClock(TIME))
        .generate(secret.expose(), 0)
        .expect("generate");
    Totp::with_clock(FixedClock(TIME - 30))
        .verify(&code, secret.expose())
        .expect("next window accepted");
}

/// Generate at T, verify three periods later.
#[test]
fn generate_then_verify_three_steps_later_fails() {
    let secret = decode_secret("CHICKENISCHICKEN").expect("decode");
    let code = Totp::with_clock(FixedClock(TIME))
        .generate(secret.expose(), 0)
        .expect("generate");
    let err = Totp::with_clock(FixedClock(TIME + 90))
        .verify(&code, secret.expose())
        .expect_err("three windows later");
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

/// Window boundaries follow floor(t / 30), not elapsed seconds.
#[test]
fn window_boundary_is_floor_of_time() {
    let secret = b"12345678901234567890";
    // 1_699_999_980 is the first second of counter 56_666_666.
    let first = Totp::with_clock(FixedClock(1_699_999_980))
        .generate(secret, 0)
        .expect("generate");
    let last = Totp::with_clock(FixedClock(1_700_000_009))
        .generate(secret, 0)
        .expect("generate");
    let next = Totp::with_clock(FixedClock(1_700_000_010))
        .generate(secret, 0)
        .expect("generate");
    assert_eq!(first, last);
    assert_eq!(first, compute_hotp(secret, 56_666_666).expect("hotp"));
    assert_eq!(next, compute_hotp(secret, 56_666_667).expect("hotp"));
}

/// A fresh secret round-trips through the system clock.
#[test]
fn fresh_secret_system_clock_roundtrip() {
    let encoded = generate_secret().expect("generate secret");
    let secret = decode_secret(&encoded).expect("decode");

    for offset in [-1, 0, 1] {
        let code = generate_totp(secret.expose(), offset).expect("generate");
        assert_eq!(code.len(), 6);
        verify_totp(&code, secret.expose()).expect("adjacent window accepted");
    }
}

/// Codes from different secrets do not cross-verify at a fixed time.
#[test]
fn codes_are_bound_to_their_secret() {
    let totp = Totp::with_clock(FixedClock(TIME));
    let a = decode_secret("CHICKENISCHICKEN").expect("decode");
    let b = decode_secret("ONXW2ZJAMRQXIYJA").expect("decode");

    let code_a = totp.generate(a.expose(), 0).expect("generate");
    let codes_b: Vec<String> = [-1, 0, 1]
        .into_iter()
        .map(|o| totp.generate(b.expose(), o).expect("generate"))
        .collect();
    assert!(!codes_b.contains(&code_a), "fixture codes must not collide");

    let err = totp
        .verify(&code_a, b.expose())
        .expect_err("other secret");
    assert_eq!(err.kind(), ErrorKind::InvalidToken);
}

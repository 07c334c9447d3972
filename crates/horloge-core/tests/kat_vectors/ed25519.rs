//! RFC 8032 Section 7.1 — Ed25519 Known-Answer Tests through
//! [`SigningKeyPair`].

use data_encoding::HEXLOWER;
use horloge_core::{verify_signature, SigningKeyPair, SigningPublicKey};

fn hex(s: &str) -> Vec<u8> {
    HEXLOWER.decode(s.as_bytes()).expect("valid hex")
}

/// RFC 8032 Section 7.1, Test Vector #1 (empty message).
#[test]
fn rfc8032_test_vector_1_empty_message() {
    let seed = hex("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let public = hex("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");
    let expected_sig = hex(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
    );

    let kp = SigningKeyPair::from_keys(&public, Some(seed.as_slice())).expect("load RFC keys");
    let sig = kp.sign(b"").expect("sign");
    assert_eq!(sig, expected_sig, "Ed25519 signature must match RFC 8032");

    let pk = SigningPublicKey::try_from(public.as_slice()).expect("public key");
    assert!(verify_signature(&pk, b"", &sig));
}

/// RFC 8032 Section 7.1, Test Vector #2 (single byte `0x72`).
#[test]
fn rfc8032_test_vector_2_single_byte() {
    let seed = hex("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb");
    let public = hex("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
    let expected_sig = hex(
        "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
    );

    let kp = SigningKeyPair::from_keys(&public, Some(seed.as_slice())).expect("load RFC keys");
    let sig = kp.sign(&[0x72]).expect("sign");
    assert_eq!(sig, expected_sig, "Ed25519 signature must match RFC 8032");
    assert!(kp.verify(&[0x72], &sig));
}

/// The RFC seed with a public key from another vector is rejected.
#[test]
fn rfc8032_seed_with_foreign_public_key_is_rejected() {
    let seed = hex("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60");
    let foreign = hex("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c");
    assert!(SigningKeyPair::from_keys(&foreign, Some(seed.as_slice())).is_err());
}

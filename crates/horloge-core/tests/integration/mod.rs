mod config_roundtrip;
mod totp_roundtrip;

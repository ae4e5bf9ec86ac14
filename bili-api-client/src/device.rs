//! Fake device fingerprint generation.
//!
//! The order endpoints expect a `deviceId` token that normally comes from
//! the web player's fingerprint script. The upstream format is not
//! documented; this mimics the observed shape: 32 random hex characters,
//! the low five digits of the current millisecond timestamp, and a
//! two-digit checksum over the hex pairs.

use rand::RngExt;

const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Generate an opaque device fingerprint token.
#[must_use]
pub fn gen_device_id() -> String {
    let mut rng = rand::rng();
    let fp: String = (0..32)
        .map(|_| HEX_CHARS[rng.random_range(0..HEX_CHARS.len())] as char)
        .collect();

    let millis = chrono::Utc::now().timestamp_millis();

    let checksum: u32 = fp
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u32::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        })
        .sum();

    format!("{fp}{:05}{:02}", millis % 100_000, checksum % 100)
}

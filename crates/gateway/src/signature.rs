//! Slack request signature verification.
//!
//! Slack signs every delivery with `v0=hex(hmac_sha256(secret,
//! "v0:{timestamp}:{body}"))` and sends the signature plus the timestamp as
//! headers. Requests older than the replay window are rejected regardless
//! of signature.

use {
    hmac::{Hmac, Mac},
    sha2::Sha256,
};

type HmacSha256 = Hmac<Sha256>;

pub const SIGNATURE_HEADER: &str = "x-slack-signature";
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Maximum accepted clock skew for the request timestamp (5 minutes).
const MAX_SKEW_SECS: i64 = 60 * 5;

fn mac_for(secret: &str, timestamp: &str, body: &[u8]) -> Option<HmacSha256> {
    // The Mac constructor is fallible for fixed-key algorithms; HMAC takes
    // any key length, so in practice this never fails.
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(b"v0:");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    Some(mac)
}

/// Compute the `v0=` signature for a timestamp and raw body.
pub fn sign(secret: &str, timestamp: &str, body: &[u8]) -> String {
    mac_for(secret, timestamp, body)
        .map(|mac| format!("v0={}", hex::encode(mac.finalize().into_bytes())))
        .unwrap_or_default()
}

/// Verify a delivery against the signing scheme.
///
/// `now` is the current unix time in seconds, injected so the replay-window
/// check is testable.
pub fn verify(secret: &str, timestamp: &str, signature: &str, body: &[u8], now: i64) -> bool {
    let Ok(ts) = timestamp.parse::<i64>() else {
        return false;
    };
    if (now - ts).abs() > MAX_SKEW_SECS {
        return false;
    }
    let Some(sig_hex) = signature.strip_prefix("v0=") else {
        return false;
    };
    let Ok(sig_bytes) = hex::decode(sig_hex) else {
        return false;
    };
    match mac_for(secret, timestamp, body) {
        // verify_slice is constant-time.
        Some(mac) => mac.verify_slice(&sig_bytes).is_ok(),
        None => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
    const TS: &str = "1531420618";
    const NOW: i64 = 1_531_420_620;

    #[test]
    fn signed_body_verifies() {
        let body = b"payload=%7B%22type%22%3A%22shortcut%22%7D";
        let sig = sign(SECRET, TS, body);
        assert!(sig.starts_with("v0="));
        assert!(verify(SECRET, TS, &sig, body, NOW));
    }

    #[test]
    fn tampered_body_is_rejected() {
        let sig = sign(SECRET, TS, b"original");
        assert!(!verify(SECRET, TS, &sig, b"tampered", NOW));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let sig = sign(SECRET, TS, b"body");
        assert!(!verify("other-secret", TS, &sig, b"body", NOW));
    }

    #[test]
    fn stale_timestamp_is_rejected() {
        let sig = sign(SECRET, TS, b"body");
        let an_hour_later = NOW + 3600;
        assert!(!verify(SECRET, TS, &sig, b"body", an_hour_later));
    }

    #[test]
    fn malformed_signature_is_rejected() {
        assert!(!verify(SECRET, TS, "not-a-signature", b"body", NOW));
        assert!(!verify(SECRET, TS, "v0=zz", b"body", NOW));
        assert!(!verify(SECRET, "not-a-number", "v0=00", b"body", NOW));
    }
}

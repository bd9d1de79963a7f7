//! Webhook signature generation and verification

use hmac::{Hmac, Mac};
use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::time::Duration;
use tracing::debug;

use super::Event;
use crate::{Result, SignatureError};

type HmacSha256 = Hmac<Sha256>;

/// Name of the header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "Payrex-Signature";

/// Verifies signed webhook deliveries for one endpoint secret.
#[derive(Debug, Clone)]
pub struct WebhookVerifier {
    secret: SecretString,
    tolerance: Option<Duration>,
}

impl WebhookVerifier {
    /// Create a verifier for the endpoint's signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret: String = secret.into();
        Self {
            secret: SecretString::new(secret.into_boxed_str()),
            tolerance: None,
        }
    }

    /// Reject deliveries whose timestamp is further than `tolerance` from
    /// now. Disabled unless set.
    pub fn with_tolerance(mut self, tolerance: Duration) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Check `header` against the raw `payload`.
    ///
    /// The live-mode signature (`v1`) is compared when non-empty, otherwise
    /// the test-mode signature (`v0`).
    pub fn verify(&self, payload: &[u8], header: &str) -> std::result::Result<(), SignatureError> {
        let parts = SignatureHeader::parse(header)?;

        if let Some(tolerance) = self.tolerance {
            check_tolerance(parts.timestamp, tolerance)?;
        }

        let expected = parts.signature()?;
        let expected = hex::decode(expected).map_err(|_| SignatureError::Mismatch)?;

        self.mac(parts.timestamp, payload)?
            .verify_slice(&expected)
            .map_err(|_| {
                debug!(timestamp = parts.timestamp, "Webhook signature mismatch");
                SignatureError::Mismatch
            })
    }

    /// Verify and decode a delivery.
    pub fn construct_event(&self, payload: &[u8], header: &str) -> Result<Event> {
        self.verify(payload, header)?;
        Event::from_slice(payload)
    }

    /// Verify and decode a delivery, reading the signature from `headers`.
    pub fn construct_event_from_headers(&self, payload: &[u8], headers: &HeaderMap) -> Result<Event> {
        let header = headers
            .get(SIGNATURE_HEADER)
            .ok_or(SignatureError::Missing)?
            .to_str()
            .map_err(|_| SignatureError::Malformed("header is not visible ASCII".to_string()))?;

        self.construct_event(payload, header)
    }

    /// Produce a live-mode signature header for `payload`, as PayRex would
    /// send it. Useful for tests and local tooling.
    pub fn sign(&self, payload: &[u8], timestamp: i64) -> std::result::Result<String, SignatureError> {
        let timestamp = timestamp.to_string();
        let signature = hex::encode(self.mac(&timestamp, payload)?.finalize().into_bytes());
        Ok(format!("t={timestamp},v0=,v1={signature}"))
    }

    fn mac(&self, timestamp: &str, payload: &[u8]) -> std::result::Result<HmacSha256, SignatureError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| SignatureError::Malformed("unusable webhook secret".to_string()))?;
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(payload);
        Ok(mac)
    }
}

/// Verify `payload` against `header` with `secret`, then decode the event.
pub fn verify_and_decode(payload: &[u8], header: &str, secret: &str) -> Result<Event> {
    WebhookVerifier::new(secret).construct_event(payload, header)
}

/// Borrowed fields of `t=<ts>,v0=<hex>,v1=<hex>`.
#[derive(Debug, PartialEq, Eq)]
struct SignatureHeader<'a> {
    timestamp: &'a str,
    test: &'a str,
    live: &'a str,
}

impl<'a> SignatureHeader<'a> {
    fn parse(header: &'a str) -> std::result::Result<Self, SignatureError> {
        let parts: Vec<&str> = header.split(',').collect();
        if parts.len() != 3 {
            return Err(SignatureError::Malformed(format!(
                "expected 3 comma-separated fields, found {}",
                parts.len()
            )));
        }

        let timestamp = field(parts[0], "t")?;
        if timestamp.is_empty() || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SignatureError::Malformed("timestamp is not a Unix time".to_string()));
        }

        Ok(Self {
            timestamp,
            test: field(parts[1], "v0")?,
            live: field(parts[2], "v1")?,
        })
    }

    fn signature(&self) -> std::result::Result<&'a str, SignatureError> {
        match (self.live, self.test) {
            (live, _) if !live.is_empty() => Ok(live),
            (_, test) if !test.is_empty() => Ok(test),
            _ => Err(SignatureError::Malformed("no signature present".to_string())),
        }
    }
}

fn field<'a>(part: &'a str, name: &str) -> std::result::Result<&'a str, SignatureError> {
    part.trim()
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| SignatureError::Malformed(format!("expected field '{name}'")))
}

fn check_tolerance(timestamp: &str, tolerance: Duration) -> std::result::Result<(), SignatureError> {
    let timestamp: i64 = timestamp
        .parse()
        .map_err(|_| SignatureError::Malformed("timestamp out of range".to_string()))?;
    let age_secs = (chrono::Utc::now().timestamp() - timestamp).unsigned_abs();

    if age_secs > tolerance.as_secs() {
        return Err(SignatureError::TimestampOutOfTolerance {
            age_secs,
            tolerance_secs: tolerance.as_secs(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "whsec_test";
    const BODY: &[u8] = br#"{"a":1}"#;

    fn test_mode_header(verifier: &WebhookVerifier, timestamp: &str, payload: &[u8]) -> String {
        let mac = verifier.mac(timestamp, payload).unwrap();
        let hex = hex::encode(mac.finalize().into_bytes());
        format!("t={timestamp},v0={hex},v1=")
    }

    #[test]
    fn test_verify_test_mode_signature() {
        let verifier = WebhookVerifier::new(SECRET);
        let header = test_mode_header(&verifier, "1700000000", BODY);

        assert!(verifier.verify(BODY, &header).is_ok());
    }

    #[test]
    fn test_verify_live_mode_signature() {
        let verifier = WebhookVerifier::new(SECRET);
        let header = verifier.sign(BODY, 1_700_000_000).unwrap();

        assert!(header.starts_with("t=1700000000,v0=,v1="));
        assert!(verifier.verify(BODY, &header).is_ok());
    }

    #[test]
    fn test_live_signature_preferred_over_test() {
        let verifier = WebhookVerifier::new(SECRET);
        let good = verifier.sign(BODY, 1_700_000_000).unwrap();
        let live = good.rsplit("v1=").next().unwrap();

        // Valid v0, bogus v1: v1 wins and fails.
        let test = test_mode_header(&verifier, "1700000000", BODY);
        let v0 = test.split(',').nth(1).unwrap();
        let header = format!("t=1700000000,{v0},v1={}", "0".repeat(64));
        assert_eq!(verifier.verify(BODY, &header), Err(SignatureError::Mismatch));

        let header = format!("t=1700000000,v0=,v1={live}");
        assert!(verifier.verify(BODY, &header).is_ok());
    }

    #[test]
    fn test_flipped_hex_character_fails() {
        let verifier = WebhookVerifier::new(SECRET);
        let header = test_mode_header(&verifier, "1700000000", BODY);
        let start = header.find("v0=").unwrap() + 3;

        for i in start..start + 64 {
            let mut bytes = header.clone().into_bytes();
            bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(bytes).unwrap();

            assert_eq!(
                verifier.verify(BODY, &tampered),
                Err(SignatureError::Mismatch),
                "position {i}"
            );
        }
    }

    #[test]
    fn test_two_part_header_is_malformed() {
        let verifier = WebhookVerifier::new(SECRET);
        let result = verifier.verify(BODY, "t=1700000000,v1=abcdef");

        assert!(matches!(result, Err(SignatureError::Malformed(_))));
    }

    #[test]
    fn test_header_field_order_is_fixed() {
        let verifier = WebhookVerifier::new(SECRET);
        let result = verifier.verify(BODY, "v0=,t=1700000000,v1=ab");

        assert!(matches!(result, Err(SignatureError::Malformed(_))));
    }

    #[test]
    fn test_empty_signatures_are_malformed() {
        let verifier = WebhookVerifier::new(SECRET);
        let result = verifier.verify(BODY, "t=1700000000,v0=,v1=");

        assert!(matches!(result, Err(SignatureError::Malformed(_))));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let signer = WebhookVerifier::new("whsec_other");
        let header = signer.sign(BODY, 1_700_000_000).unwrap();

        let verifier = WebhookVerifier::new(SECRET);
        assert_eq!(verifier.verify(BODY, &header), Err(SignatureError::Mismatch));
    }

    #[test]
    fn test_tampered_body_fails() {
        let verifier = WebhookVerifier::new(SECRET);
        let header = verifier.sign(BODY, 1_700_000_000).unwrap();

        assert_eq!(
            verifier.verify(br#"{"a":2}"#, &header),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn test_tolerance_window() {
        let verifier = WebhookVerifier::new(SECRET).with_tolerance(Duration::from_secs(300));

        let now = chrono::Utc::now().timestamp();
        let fresh = verifier.sign(BODY, now).unwrap();
        assert!(verifier.verify(BODY, &fresh).is_ok());

        let stale = verifier.sign(BODY, now - 3_600).unwrap();
        assert!(matches!(
            verifier.verify(BODY, &stale),
            Err(SignatureError::TimestampOutOfTolerance { tolerance_secs: 300, .. })
        ));
    }

    #[test]
    fn test_no_tolerance_by_default() {
        let verifier = WebhookVerifier::new(SECRET);
        let ancient = verifier.sign(BODY, 1).unwrap();

        assert!(verifier.verify(BODY, &ancient).is_ok());
    }

    #[test]
    fn test_missing_header() {
        let verifier = WebhookVerifier::new(SECRET);
        let result = verifier.construct_event_from_headers(BODY, &HeaderMap::new());

        assert!(matches!(
            result,
            Err(crate::PayrexError::Signature(SignatureError::Missing))
        ));
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        let verifier = WebhookVerifier::new("whsec_supersecret");
        assert!(!format!("{verifier:?}").contains("supersecret"));
    }
}

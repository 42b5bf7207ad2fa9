//! Signature verification for inbound webhook deliveries.

use std::time::{Duration, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::WebhookError;
use crate::time::{Clock, SystemClock};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex-encoded HMAC-SHA-256 signature.
pub const SIGNATURE_HEADER: &str = "Inkpost-Signature";

/// Header carrying the delivery time as decimal milliseconds since the
/// Unix epoch.
pub const TIMESTAMP_HEADER: &str = "Inkpost-Signature-Timestamp";

/// Verifier for webhook deliveries signed by Inkpost.
///
/// Holds the shared secret and the maximum accepted delivery age. The
/// verifier is stateless per call and safe to share across tasks.
///
/// Checks run in a fixed order, first failure wins:
///
/// 1. empty signature header → [`WebhookError::NotSigned`]
/// 2. empty timestamp header → [`WebhookError::NotTimestamped`]
/// 3. timestamp not a base-10 integer → [`WebhookError::InvalidHeader`]
/// 4. delivery older than the tolerance → [`WebhookError::TooOld`]
/// 5. signature not valid hex → [`WebhookError::InvalidHeader`]
/// 6. signature mismatch → [`WebhookError::NoValidSignature`]
///
/// The age check is one-sided: a timestamp in the future is accepted.
///
/// # Example
///
/// ```
/// use std::time::{Duration, SystemTime, UNIX_EPOCH};
/// use inkpost::webhook::{SignatureVerifier, compute_signature};
///
/// let secret = "whsec_shh";
/// let payload = br#"{"event":"letter.delivered"}"#;
/// let timestamp = SystemTime::now()
///     .duration_since(UNIX_EPOCH)
///     .unwrap()
///     .as_millis()
///     .to_string();
/// let signature = hex::encode(compute_signature(secret, &timestamp, payload));
///
/// let verifier = SignatureVerifier::new(secret, Duration::from_secs(300));
/// assert!(verifier.verify(payload, &timestamp, &signature).is_ok());
/// ```
#[derive(Clone)]
pub struct SignatureVerifier<C = SystemClock> {
    secret: Vec<u8>,
    tolerance: Duration,
    clock: C,
}

impl SignatureVerifier<SystemClock> {
    /// Creates a verifier using the system clock.
    ///
    /// `tolerance` is the maximum accepted age of a delivery; deliveries
    /// whose timestamp is older are rejected with [`WebhookError::TooOld`].
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>, tolerance: Duration) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            tolerance,
            clock: SystemClock,
        }
    }
}

impl<C> SignatureVerifier<C> {
    /// Replaces the clock used for the freshness check.
    ///
    /// This is primarily useful for testing with controlled time.
    #[must_use]
    pub fn with_clock<C2: Clock>(self, clock: C2) -> SignatureVerifier<C2> {
        SignatureVerifier {
            secret: self.secret,
            tolerance: self.tolerance,
            clock,
        }
    }

    /// Returns the configured tolerance.
    #[must_use]
    pub const fn tolerance(&self) -> Duration {
        self.tolerance
    }
}

impl<C: Clock> SignatureVerifier<C> {
    /// Verifies a webhook delivery.
    ///
    /// # Arguments
    ///
    /// * `payload` - The raw, unmodified request body bytes
    /// * `timestamp_header` - The `Inkpost-Signature-Timestamp` header value
    /// * `signature_header` - The `Inkpost-Signature` header value
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a [`WebhookError`]; see the type
    /// docs for the check order. The signature comparison is constant-time.
    pub fn verify(
        &self,
        payload: &[u8],
        timestamp_header: &str,
        signature_header: &str,
    ) -> Result<(), WebhookError> {
        if signature_header.is_empty() {
            return Err(WebhookError::NotSigned);
        }

        self.check_freshness(timestamp_header)?;

        let signature = hex::decode(signature_header).map_err(|_| WebhookError::InvalidHeader)?;

        // The signed message reuses the literal header string, not a
        // re-serialized integer.
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(timestamp_header.as_bytes());
        mac.update(b".");
        mac.update(payload);

        mac.verify_slice(&signature)
            .map_err(|_| WebhookError::NoValidSignature)
    }

    fn check_freshness(&self, timestamp_header: &str) -> Result<(), WebhookError> {
        if timestamp_header.is_empty() {
            return Err(WebhookError::NotTimestamped);
        }

        let sent_ms: i64 = timestamp_header
            .parse()
            .map_err(|_| WebhookError::InvalidHeader)?;

        let now_ms = self
            .clock
            .now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));

        let tolerance_ms = i64::try_from(self.tolerance.as_millis()).unwrap_or(i64::MAX);

        // One-sided: a future-dated delivery has negative age and passes.
        if now_ms.saturating_sub(sent_ms) > tolerance_ms {
            return Err(WebhookError::TooOld);
        }

        Ok(())
    }
}

impl<C> std::fmt::Debug for SignatureVerifier<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"[REDACTED]")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

/// Computes the expected signature for a delivery.
///
/// The signed message is `timestamp_header ++ "." ++ payload`, keyed with
/// HMAC-SHA-256 over the shared secret. Exposed so senders and test
/// fixtures can produce valid signatures.
#[must_use]
pub fn compute_signature(
    secret: impl AsRef<[u8]>,
    timestamp_header: &str,
    payload: &[u8],
) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_ref()).expect("HMAC can take key of any size");
    mac.update(timestamp_header.as_bytes());
    mac.update(b".");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

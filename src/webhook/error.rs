//! Error types for webhook verification.

use thiserror::Error;

/// Error type for webhook signature verification.
///
/// Variants are mutually exclusive and terminal: the verifier reports the
/// first failed check and stops. None of these are retryable; a delivery
/// that fails verification must be rejected by the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WebhookError {
    /// The signature header was empty or missing.
    #[error("no Inkpost-Signature header provided")]
    NotSigned,

    /// The timestamp header was empty or missing.
    #[error("no Inkpost-Signature-Timestamp header provided")]
    NotTimestamped,

    /// A header was present but malformed: the timestamp was not a base-10
    /// integer, or the signature was not valid hex.
    #[error("webhook has invalid Inkpost-Signature header(s)")]
    InvalidHeader,

    /// The delivery timestamp is older than the configured tolerance.
    #[error("timestamp wasn't within tolerance")]
    TooOld,

    /// The signature decoded cleanly but does not match the payload.
    #[error("webhook has no valid signature")]
    NoValidSignature,
}

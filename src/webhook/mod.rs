//! Webhook signature verification.
//!
//! Inkpost signs every webhook delivery with HMAC-SHA-256 over the raw
//! request body and a millisecond timestamp, carried in the
//! `Inkpost-Signature` and `Inkpost-Signature-Timestamp` headers. This
//! module checks those signatures ([`SignatureVerifier`]) and exposes the
//! signing primitive ([`compute_signature`]) for test fixtures and senders.
//!
//! The verifier never parses HTTP itself: callers extract the two header
//! values and hand over the raw, unmodified body bytes.

mod error;
mod verify;


pub use error::WebhookError;
pub use verify::{SIGNATURE_HEADER, SignatureVerifier, TIMESTAMP_HEADER, compute_signature};

//! Webhook signature verification using HMAC-SHA256.
//!
//! The judging service signs each delivery by computing HMAC-SHA256 over the
//! exact bytes of the request body with a shared secret, and sends the digest
//! hex-encoded in the `X-Judge-Signature` header (bare hex, no algorithm
//! prefix).
//!
//! Verification is the first step of webhook processing; deliveries with an
//! invalid signature must be rejected before the payload is even parsed. The
//! comparison is constant-time so response latency does not reveal where a
//! forged signature first diverges from the correct one.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 signature of a payload using the given secret.
///
/// This is what the sender computes before delivery; the receiver uses it in
/// tests to construct validly signed requests.
pub fn compute_signature(payload: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

/// Formats a signature as the header value the sender transmits.
///
/// The wire format is lowercase hex with no prefix.
pub fn encode_signature(signature: &[u8]) -> String {
    hex::encode(signature)
}

/// Verifies a webhook signature against the raw payload bytes.
///
/// Returns `true` if the signature is valid, `false` otherwise. Uses
/// constant-time comparison to prevent timing attacks. Malformed hex input is
/// treated as a verification failure, never an error.
///
/// A `secret` of `None` means verification is disabled: this always returns
/// `true`, and the caller is responsible for logging that the delivery was
/// accepted unauthenticated.
///
/// # Arguments
///
/// * `payload` - The raw request body bytes, exactly as received
/// * `signature_hex` - The value of the `X-Judge-Signature` header
/// * `secret` - The shared webhook secret, or `None` if not configured
///
/// # Examples
///
/// ```
/// use judge_webhook::webhooks::{compute_signature, encode_signature, verify_signature};
///
/// let payload = b"{\"submission\":{\"id\":\"abc123\"}}";
/// let secret = b"my-secret-key";
///
/// let header = encode_signature(&compute_signature(payload, secret));
///
/// assert!(verify_signature(payload, &header, Some(secret)));
/// assert!(!verify_signature(payload, &header, Some(b"wrong-secret")));
///
/// // No secret configured: open mode, everything passes.
/// assert!(verify_signature(payload, "", None));
/// ```
pub fn verify_signature(payload: &[u8], signature_hex: &str, secret: Option<&[u8]>) -> bool {
    let Some(secret) = secret else {
        // Verification disabled. The caller logs this mode loudly.
        return true;
    };

    // A signature that is not valid hex can never match a real digest.
    let provided = match hex::decode(signature_hex) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);

    // Constant-time comparison via the HMAC library. A length mismatch fails
    // immediately, which leaks only the length (public), not the content.
    mac.verify_slice(&provided).is_ok()
}

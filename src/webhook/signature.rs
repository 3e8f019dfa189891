use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verify the `x-hub-signature-256` header against the raw request bytes.
///
/// Must run on the bytes as received from the wire: re-serializing a parsed
/// body changes whitespace and field order, which changes the digest.
/// An empty secret disables verification entirely (explicit operational
/// mode, not a failure).
pub fn verify_signature(raw_body: &[u8], header: Option<&str>, secret: &str) -> bool {
    if secret.is_empty() {
        return true;
    }
    let Some(header) = header else {
        return false;
    };
    let Some(hex_digest) = header.strip_prefix("sha256=") else {
        return false;
    };
    let Ok(digest) = hex::decode(hex_digest) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(raw_body);
    // Constant-time comparison; also rejects truncated digests.
    mac.verify_slice(&digest).is_ok()
}

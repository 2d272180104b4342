use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::SubmitError;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 tag of `message` under `secret`, rendered as
/// lowercase hexadecimal (64 characters, untruncated).
pub fn sign(message: &[u8], secret: &str) -> Result<String, SubmitError> {
    if secret.trim().is_empty() {
        return Err(SubmitError::MissingSecret);
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Value of the `X-Signature-256` request header for a given tag.
pub fn signature_header(tag: &str) -> String {
    format!("sha256={tag}")
}

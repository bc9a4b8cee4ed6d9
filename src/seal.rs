//! Sealing: serialize, encrypt, authenticate, and pack a payload into the
//! four-segment wire string.

use serde_json::Value;

use crate::cipher;
use crate::error::TokenError;
use crate::keys::KeySet;
use crate::serialize;
use crate::types::TokenSegments;

/// Seal `payload` under `keyset` into a compact URL-safe token.
///
/// A fresh IV is drawn per call, so sealing the same payload twice never
/// yields the same token. The tag is computed over the ciphertext and IV
/// (encrypt-then-MAC); nothing is authenticated before it is encrypted.
///
/// # Errors
///
/// `InvalidArgument` for a null payload; `InvalidKeyLength` when the
/// encryption key is not exactly 32 bytes.
pub fn seal(payload: &Value, keyset: &KeySet) -> Result<String, TokenError> {
    if payload.is_null() {
        return Err(TokenError::InvalidArgument("payload must not be null"));
    }
    keyset.validate_for_seal()?;

    let header = serialize::encode_header(&keyset.id)?;
    let plaintext = serde_json::to_vec(payload)
        .map_err(|_| TokenError::InvalidArgument("payload is not serializable"))?;

    let iv = cipher::random_iv();
    let ciphertext = cipher::encrypt(&keyset.encryption_key, &iv, &plaintext)?;
    let tag = cipher::compute_tag(&keyset.signing_key, &ciphertext, &iv)
        .map_err(|_| TokenError::InvalidArgument("signing key rejected by MAC"))?;

    Ok(serialize::encode_token(&TokenSegments {
        header,
        ciphertext,
        iv: iv.to_vec(),
        tag: tag.to_vec(),
    }))
}

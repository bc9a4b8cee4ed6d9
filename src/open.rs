//! Opening: the parse, resolve, authenticate, decrypt pipeline.
//!
//! Each stage is terminal on failure and maps to exactly one error kind.
//! Authentication completes before the cipher sees any input, so corrupt
//! ciphertext never reaches decryption (no padding oracle).

use crate::cipher;
use crate::error::TokenError;
use crate::keys::KeySetRegistry;
use crate::serialize;

/// Result of a successful `open`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OpenedToken {
    /// Id of the key-set that sealed the token.
    pub id: String,
    /// The decrypted payload.
    pub payload: serde_json::Value,
}

/// Open a sealed token against a registry of key-sets.
///
/// # Errors
///
/// `MalformedToken` when the token does not parse into four valid segments
/// and a `{kid}` header; `UnknownKeySet` when the header's key id is not in
/// the registry; `AuthenticationFailed` on tag mismatch; `DecryptionFailed`
/// when the cipher or payload decoding fails after authentication.
pub fn open(token: &str, registry: &KeySetRegistry) -> Result<OpenedToken, TokenError> {
    // Parse
    let segments = serialize::decode_token(token)?;
    let header = serialize::decode_header(&segments.header)?;

    // Resolve
    let keyset = registry.get(&header.kid).ok_or_else(|| TokenError::UnknownKeySet {
        kid: header.kid.clone(),
    })?;

    // Authenticate. Must fully succeed before any decryption is attempted.
    let expected = cipher::compute_tag(&keyset.signing_key, &segments.ciphertext, &segments.iv)
        .map_err(|_| TokenError::AuthenticationFailed)?;
    if !cipher::tag_matches(&expected, &segments.tag) {
        return Err(TokenError::AuthenticationFailed);
    }

    // Decrypt
    let plaintext = cipher::decrypt(&keyset.encryption_key, &segments.iv, &segments.ciphertext)?;
    let payload = serde_json::from_slice(&plaintext).map_err(|_| TokenError::DecryptionFailed)?;

    Ok(OpenedToken {
        id: header.kid,
        payload,
    })
}

use serde::{Deserialize, Serialize};

/// Token header, JSON-encoded into the first wire segment.
///
/// Exactly one field: the id of the key-set that sealed the token. Unknown
/// fields are rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    pub kid: String,
}

/// The four decoded byte segments of a token, in wire order.
///
/// The header travels in the clear and is not covered by the tag; the tag
/// covers ciphertext followed by IV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSegments {
    pub header: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub iv: Vec<u8>,
    pub tag: Vec<u8>,
}

/// Constant: AES-256 encryption key length in bytes.
pub const ENCRYPTION_KEY_LEN: usize = 32;

/// Constant: AES-CBC initialization vector length in bytes.
pub const IV_LEN: usize = 16;

/// Constant: HMAC-SHA256 tag length in bytes.
pub const TAG_LEN: usize = 32;

/// Constant: number of dot-separated segments in a token.
pub const TOKEN_SEGMENTS: usize = 4;

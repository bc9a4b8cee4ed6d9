use thiserror::Error;

/// Failure taxonomy for sealing and opening tokens.
///
/// Kinds are mutually exclusive: `open` reports the first stage that fails
/// and never returns partial results. Messages carry no key material,
/// plaintext, or comparison positions; the key id is public (it travels in
/// the clear in every token) and is the only context worth surfacing.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid encryption key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("malformed token")]
    MalformedToken,

    #[error("token sealed with unknown key-set: {kid}")]
    UnknownKeySet { kid: String },

    #[error("token authentication failed")]
    AuthenticationFailed,

    #[error("token decryption failed")]
    DecryptionFailed,
}

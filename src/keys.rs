//! Key-sets: named signing/encryption key pairs, and the registry that
//! resolves a token's `kid` back to its keys.
//!
//! The core never persists or rotates key material; key-sets are values the
//! caller owns and passes in per call.

use std::collections::HashMap;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::TokenError;
use crate::types::ENCRYPTION_KEY_LEN;

/// A named key pair. `signing_key` feeds the HMAC, `encryption_key` feeds
/// the cipher. Both are wrapped in `Zeroizing` so the material is wiped from
/// memory when the key-set is dropped.
#[derive(Debug, Clone)]
pub struct KeySet {
    pub id: String,
    pub signing_key: Zeroizing<Vec<u8>>,
    pub encryption_key: Zeroizing<Vec<u8>>,
}

impl KeySet {
    pub fn new(id: impl Into<String>, signing_key: Vec<u8>, encryption_key: Vec<u8>) -> KeySet {
        KeySet {
            id: id.into(),
            signing_key: Zeroizing::new(signing_key),
            encryption_key: Zeroizing::new(encryption_key),
        }
    }

    /// Generate a fresh key-set with random 32-byte signing and encryption
    /// keys drawn from the OS CSPRNG.
    pub fn generate(id: impl Into<String>) -> KeySet {
        let mut signing_key = vec![0u8; ENCRYPTION_KEY_LEN];
        let mut encryption_key = vec![0u8; ENCRYPTION_KEY_LEN];
        OsRng.fill_bytes(&mut signing_key);
        OsRng.fill_bytes(&mut encryption_key);
        KeySet::new(id, signing_key, encryption_key)
    }

    /// Check the invariant `seal` relies on: the encryption key must match
    /// the cipher's key size exactly. The signing key may be any length
    /// (HMAC-SHA256 is defined for arbitrary key sizes).
    pub fn validate_for_seal(&self) -> Result<(), TokenError> {
        if self.encryption_key.len() != ENCRYPTION_KEY_LEN {
            return Err(TokenError::InvalidKeyLength {
                expected: ENCRYPTION_KEY_LEN,
                actual: self.encryption_key.len(),
            });
        }
        Ok(())
    }
}

/// Maps a key identifier to its key-set. Supplied by the caller per `open`
/// call; the core never mutates it beyond the caller's own inserts.
#[derive(Debug, Clone, Default)]
pub struct KeySetRegistry {
    keysets: HashMap<String, KeySet>,
}

impl KeySetRegistry {
    pub fn new() -> KeySetRegistry {
        KeySetRegistry::default()
    }

    /// Insert a key-set, keyed by its id. Replaces any previous entry with
    /// the same id.
    pub fn insert(&mut self, keyset: KeySet) {
        self.keysets.insert(keyset.id.clone(), keyset);
    }

    pub fn get(&self, kid: &str) -> Option<&KeySet> {
        self.keysets.get(kid)
    }

    pub fn len(&self) -> usize {
        self.keysets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keysets.is_empty()
    }
}

impl FromIterator<KeySet> for KeySetRegistry {
    fn from_iter<I: IntoIterator<Item = KeySet>>(iter: I) -> KeySetRegistry {
        let mut registry = KeySetRegistry::new();
        for keyset in iter {
            registry.insert(keyset);
        }
        registry
    }
}

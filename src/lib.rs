//! Sealtoken: compact encrypted tokens with identifiable key-sets.
//!
//! A structured payload is encrypted with AES-256-CBC, authenticated with
//! HMAC-SHA256 over ciphertext and IV (encrypt-then-MAC), and packed into a
//! URL-safe `header.ciphertext.iv.tag` string. The header carries the id of
//! the key-set that sealed the token, so `open` can resolve the matching
//! keys out of a caller-supplied registry.

pub mod cipher;
pub mod error;
pub mod keys;
pub mod open;
pub mod seal;
pub mod serialize;
pub mod types;

//! Cryptographic primitives for sealed tokens: AES-256-CBC with PKCS#7
//! padding, HMAC-SHA256 tags over ciphertext followed by IV, and
//! constant-time tag comparison.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::TokenError;
use crate::types::{ENCRYPTION_KEY_LEN, IV_LEN, TAG_LEN};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Draw a fresh random IV from the OS CSPRNG.
///
/// An unusable platform CSPRNG aborts the process; it is not a per-call
/// recoverable condition.
pub fn random_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt plaintext with AES-256-CBC under `key` and `iv`.
///
/// # Errors
///
/// `InvalidKeyLength` when `key` is not exactly [`ENCRYPTION_KEY_LEN`] bytes.
pub fn encrypt(key: &[u8], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Result<Vec<u8>, TokenError> {
    let enc = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| TokenError::InvalidKeyLength {
        expected: ENCRYPTION_KEY_LEN,
        actual: key.len(),
    })?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt ciphertext with AES-256-CBC under `key` and `iv`.
///
/// Wrong key sizes, wrong IV sizes, partial blocks, and corrupt padding all
/// collapse to `DecryptionFailed`; after authentication this path signals
/// wrong or rotated key material, not tampering.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, TokenError> {
    let dec = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| TokenError::DecryptionFailed)?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| TokenError::DecryptionFailed)
}

/// HMAC-SHA256 over ciphertext then IV, in that order. Covering the IV binds
/// it to the ciphertext so neither segment can be substituted independently.
pub fn compute_tag(
    signing_key: &[u8],
    ciphertext: &[u8],
    iv: &[u8],
) -> Result<[u8; TAG_LEN], InvalidLength> {
    let mut mac = HmacSha256::new_from_slice(signing_key)?;
    mac.update(ciphertext);
    mac.update(iv);
    let digest = mac.finalize().into_bytes();
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&digest);
    Ok(tag)
}

/// Constant-time tag comparison.
///
/// Length mismatch takes a fast path (tag length is public); equal-length
/// buffers are compared in full with no early exit on the first differing
/// byte.
pub fn tag_matches(expected: &[u8], candidate: &[u8]) -> bool {
    if expected.len() != candidate.len() {
        return false;
    }
    expected.ct_eq(candidate).into()
}

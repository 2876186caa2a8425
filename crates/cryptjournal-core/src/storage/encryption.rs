//! Entry encryption/decryption.
//!
//! One opaque blob per entry: `nonce (12) || ciphertext || tag (16)`,
//! AES-128-GCM under a key from [`crate::crypto::normalize_password`].
//! There is no header and no version field; the blob layout is the format.
//!
//! Wrong-password detection rides on the GCM authentication tag: decrypting
//! with the wrong key fails the tag check, which is surfaced as
//! `JournalError::BadPassword`.

use aes_gcm::{
    aead::{generic_array::GenericArray, Aead, KeyInit},
    Aes128Gcm,
};
use rand::RngCore;

use crate::crypto::EntryKey;
use crate::error::{JournalError, Result};

/// Nonce length in bytes (96-bit GCM nonce).
pub const NONCE_LENGTH: usize = 12;

/// Authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

/// Encrypt an entry payload.
///
/// A fresh random nonce is generated per call and prepended to the
/// ciphertext, so encrypting the same payload twice yields different blobs.
///
/// # Examples
///
/// ```
/// use cryptjournal_core::crypto::normalize_password;
/// use cryptjournal_core::storage::encryption::{decrypt, encrypt};
///
/// let key = normalize_password("secret").unwrap();
/// let blob = encrypt(b"<p>hello</p>", &key).unwrap();
/// assert_eq!(decrypt(&blob, &key).unwrap(), b"<p>hello</p>");
/// ```
pub fn encrypt(plaintext: &[u8], key: &EntryKey) -> Result<Vec<u8>> {
    let mut nonce_bytes = [0u8; NONCE_LENGTH];
    rand::rng().fill_bytes(&mut nonce_bytes);

    let cipher = Aes128Gcm::new(GenericArray::from_slice(key.as_bytes()));
    let ciphertext = cipher
        .encrypt(GenericArray::from_slice(&nonce_bytes), plaintext)
        .map_err(|_| JournalError::Crypto("Encryption failed".to_string()))?;

    let mut blob = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypt an entry blob.
///
/// # Errors
///
/// - `JournalError::Crypto` if the blob is too short to contain a nonce and
///   tag (truncated or foreign file)
/// - `JournalError::BadPassword` if tag verification fails; a wrong key
///   and a tampered blob are indistinguishable here, and no partial
///   plaintext is ever released
pub fn decrypt(blob: &[u8], key: &EntryKey) -> Result<Vec<u8>> {
    if blob.len() < NONCE_LENGTH + TAG_LENGTH {
        return Err(JournalError::Crypto(
            "Entry file too short to decrypt".to_string(),
        ));
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LENGTH);
    let cipher = Aes128Gcm::new(GenericArray::from_slice(key.as_bytes()));
    cipher
        .decrypt(GenericArray::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| JournalError::BadPassword)
}

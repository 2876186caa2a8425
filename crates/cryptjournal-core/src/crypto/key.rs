//! Key material normalization.
//!
//! Maps a user-typed password to exactly the 16 bytes of AES-128 key
//! material: passwords shorter than the key are right-padded with a fixed
//! filler byte, longer ones are rejected. This is intentionally not a
//! hardened KDF; it is the single seam to replace with one, without
//! touching the store contract.

use zeroize::ZeroizeOnDrop;

use crate::error::{JournalError, Result};

/// Key length in bytes (16 bytes = 128-bit AES key).
pub const KEY_LENGTH: usize = 16;

/// Fixed, non-secret filler byte for short passwords.
pub const PAD_BYTE: u8 = b'=';

/// Key material derived from an entry password.
///
/// Zeroized from memory when dropped, reducing the window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct EntryKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl EntryKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate
    /// encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for EntryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Normalize a password into AES-128 key material.
///
/// Length is measured in UTF-8 bytes, matching what the cipher consumes.
///
/// # Errors
///
/// - `JournalError::NoPassword` for an empty password (the user cancelled
///   the prompt; callers abort silently)
/// - `JournalError::PasswordTooLong` for more than 16 bytes
///
/// # Examples
///
/// ```
/// use cryptjournal_core::crypto::normalize_password;
///
/// let key = normalize_password("abc").unwrap();
/// assert_eq!(key.as_bytes(), b"abc=============");
/// ```
pub fn normalize_password(password: &str) -> Result<EntryKey> {
    if password.is_empty() {
        return Err(JournalError::NoPassword);
    }

    let bytes = password.as_bytes();
    if bytes.len() > KEY_LENGTH {
        return Err(JournalError::PasswordTooLong {
            length: bytes.len(),
        });
    }

    let mut key = [PAD_BYTE; KEY_LENGTH];
    key[..bytes.len()].copy_from_slice(bytes);
    Ok(EntryKey::from_bytes(key))
}

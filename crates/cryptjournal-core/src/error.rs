//! Error types for CryptJournal core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Several variants are expected user-input outcomes rather than faults:
//! the UI layer matches on them and turns them into prompts or messages.

use thiserror::Error;

/// Result type alias for CryptJournal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for CryptJournal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Decryption integrity check failed: wrong password, or a tampered
    /// file (the two are deliberately indistinguishable)
    #[error("Bad password")]
    BadPassword,

    /// The user submitted an empty password, i.e. cancelled the prompt.
    /// Signals "abort the operation", not "bad input"
    #[error("No password provided")]
    NoPassword,

    /// Password exceeds the key size and cannot be used
    #[error("Password too long ({length} bytes, max 16)")]
    PasswordTooLong { length: usize },

    /// An entry with this name already exists
    #[error("Entry already exists: {0}")]
    NameConflict(String),

    /// No backing file for this entry
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Entry name cannot be mapped to a single file in the store
    #[error("Invalid entry name: {0}")]
    InvalidName(String),

    /// Encryption or decryption error unrelated to the password
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

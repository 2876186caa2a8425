//! Cryptographic operations for journal entries.
//!
//! This module turns user-typed passwords into fixed-size key material for
//! the entry codec:
//! - **AES-128-GCM**: authenticated encryption of entry payloads
//! - **Padded-password keys**: a password of 1..=16 bytes maps
//!   deterministically to a 128-bit key
//!
//! ## Security Model
//!
//! - Each entry is protected by its own password; there is no master key
//! - Key material is zeroized from memory on drop
//! - Wrong passwords are detected through the GCM authentication tag
//!
//! ## Threat Model
//!
//! We defend against:
//! - Casual reading of journal files by another user of the machine
//!
//! We do NOT defend against:
//! - Offline brute force by an attacker with a copy of the files (the
//!   16-byte password ceiling caps key entropy)
//! - Compromised OS / keylogger

pub mod key;

pub use key::{normalize_password, EntryKey, KEY_LENGTH, PAD_BYTE};

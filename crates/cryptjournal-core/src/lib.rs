//! # CryptJournal Core
//!
//! Core library for CryptJournal - a private, password-gated journal kept
//! as encrypted files on local disk.
//!
//! Each entry is one file under the store directory, encrypted under a key
//! derived from that entry's own password. This crate provides the entry
//! store and codec; prompting, message rendering, and everything else
//! user-facing belongs to the consuming UI layer.
//!
//! ## Architecture
//!
//! - **crypto**: password-to-key normalization
//! - **storage**: entry store, per-entry encryption, listing
//! - **error**: the outcome taxonomy callers match on
//! - **fs**: atomic file replacement
//!
//! ## Usage
//!
//! ```no_run
//! use cryptjournal_core::JournalStore;
//!
//! # fn main() -> cryptjournal_core::Result<()> {
//! let store = JournalStore::open_default()?;
//! let entry = store.create("diary")?;
//! store.write(&entry, "<p>hello</p>", "secret")?;
//! let content = store.read(&entry, "secret")?;
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod error;
pub mod fs;
pub mod storage;

pub use error::{JournalError, Result};
pub use storage::{Entry, JournalStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

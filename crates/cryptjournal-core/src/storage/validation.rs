//! Entry name validation.
//!
//! An entry name doubles as the backing filename, so it must map 1:1 to a
//! single file inside the store directory and nowhere else.

use crate::error::{JournalError, Result};

/// Maximum bytes per entry name.
pub const MAX_NAME_BYTES: usize = 128;

/// Validate an entry name before binding it to a backing file.
///
/// - Must not be empty or only whitespace
/// - Must not exceed [`MAX_NAME_BYTES`]
/// - Must not contain path separators or NUL
/// - Must not start with `.` (hidden files, `.` and `..` traversal)
pub fn validate_entry_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(JournalError::InvalidName(
            "Entry name cannot be empty".to_string(),
        ));
    }

    if name.len() > MAX_NAME_BYTES {
        return Err(JournalError::InvalidName(format!(
            "Entry name too long (max {} bytes)",
            MAX_NAME_BYTES
        )));
    }

    if name.contains(['/', '\\', '\0']) {
        return Err(JournalError::InvalidName(
            "Entry name cannot contain path separators".to_string(),
        ));
    }

    if name.starts_with('.') {
        return Err(JournalError::InvalidName(
            "Entry name cannot start with '.'".to_string(),
        ));
    }

    Ok(())
}

//! Password-gated entry store over a plain directory.
//!
//! One backing file per entry at `<root>/<name>.journal`. The directory is
//! the index: `list` rescans it on every call, and a file's existence is
//! the only record that an entry exists.
//!
//! All operations are synchronous and assume exclusive single-process
//! access to the store directory; concurrent external modification is
//! undefined behavior, not a guarded case.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::crypto::normalize_password;
use crate::error::{JournalError, Result};
use crate::storage::encryption::{decrypt, encrypt};
use crate::storage::types::Entry;
use crate::storage::validation::validate_entry_name;

/// Default store directory, relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = "Journals";

/// Extension of entry backing files.
pub const ENTRY_EXTENSION: &str = "journal";

/// Encrypted entry store rooted at a single directory.
pub struct JournalStore {
    root: PathBuf,
}

impl JournalStore {
    /// Open a store at `root`, creating the directory if absent.
    ///
    /// No in-memory index is built; opening an existing store is just a
    /// directory handle.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open the store at [`DEFAULT_STORE_DIR`].
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_STORE_DIR)
    }

    /// Store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, ENTRY_EXTENSION))
    }

    /// Register a new entry identity.
    ///
    /// Writes nothing to disk; content arrives with a later [`write`].
    ///
    /// # Errors
    ///
    /// - `JournalError::InvalidName` if the name cannot be a filename
    /// - `JournalError::NameConflict` if a backing file already exists.
    ///   `create` never silently claims another entry's ciphertext; use
    ///   [`entry`] when replacement is intended
    ///
    /// [`write`]: JournalStore::write
    /// [`entry`]: JournalStore::entry
    pub fn create(&self, name: &str) -> Result<Entry> {
        validate_entry_name(name)?;
        let path = self.entry_path(name);
        if path.exists() {
            return Err(JournalError::NameConflict(name.to_string()));
        }
        Ok(Entry::new(name, path))
    }

    /// Bind a handle to an entry name without the conflict check.
    ///
    /// This is the open-existing / explicit-replacement path; the name is
    /// still validated.
    pub fn entry(&self, name: &str) -> Result<Entry> {
        validate_entry_name(name)?;
        Ok(Entry::new(name, self.entry_path(name)))
    }

    /// List entries by scanning the store directory.
    ///
    /// Returns one entry per `*.journal` file, in directory order (not
    /// semantically meaningful). Every call is a fresh snapshot of the
    /// filesystem; nothing is cached.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&self.root)? {
            let path = dir_entry?.path();
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(ENTRY_EXTENSION)
            {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(Entry::new(name, path.clone()));
            }
        }

        Ok(entries)
    }

    /// Encrypt `plaintext` under `password` and replace the backing file.
    ///
    /// The file is replaced through a synced temp file and rename, so a
    /// reader never sees a torn blob; a crash between sync and rename can
    /// still lose the new revision.
    ///
    /// # Errors
    ///
    /// Propagates `NoPassword` / `PasswordTooLong` from normalization and
    /// `JournalError::Io` for filesystem faults.
    pub fn write(&self, entry: &Entry, plaintext: &str, password: &str) -> Result<()> {
        let key = normalize_password(password)?;
        let blob = encrypt(plaintext.as_bytes(), &key)?;
        crate::fs::write_atomic(entry.path(), &blob)?;
        Ok(())
    }

    /// Decrypt the backing file and return the entry content.
    ///
    /// # Errors
    ///
    /// - `NoPassword` / `PasswordTooLong` from normalization, before the
    ///   file is touched
    /// - `JournalError::NotFound` if the backing file does not exist
    /// - `JournalError::BadPassword` if tag verification fails; no partial
    ///   content is ever returned
    /// - `JournalError::Crypto` if the file is truncated, or decrypts to
    ///   non-UTF-8 (possible only for blobs this store did not produce)
    pub fn read(&self, entry: &Entry, password: &str) -> Result<String> {
        let key = normalize_password(password)?;

        let blob = match fs::read(entry.path()) {
            Ok(blob) => blob,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(JournalError::NotFound(entry.name().to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let plaintext = decrypt(&blob, &key)?;
        String::from_utf8(plaintext)
            .map_err(|_| JournalError::Crypto("Entry payload is not valid UTF-8".to_string()))
    }

    /// Remove the entry's backing file.
    ///
    /// Deleting a missing entry is a no-op success, so callers never need
    /// an existence check first.
    pub fn delete(&self, entry: &Entry) -> Result<()> {
        match fs::remove_file(entry.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_store_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("Journals");
        assert!(!root.exists());

        let store = JournalStore::open(&root).unwrap();

        assert!(root.is_dir());
        assert_eq!(store.root(), root.as_path());
    }

    #[test]
    fn test_open_existing_directory_is_fine() {
        let dir = tempdir().unwrap();

        JournalStore::open(dir.path()).unwrap();
        JournalStore::open(dir.path()).unwrap();
    }

    #[test]
    fn test_create_binds_backing_path() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        let entry = store.create("diary").unwrap();

        assert_eq!(entry.name(), "diary");
        assert_eq!(entry.path(), dir.path().join("diary.journal"));
        // Identity only; nothing on disk yet
        assert!(!entry.exists());
    }

    #[test]
    fn test_create_existing_name_conflicts() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        let entry = store.create("diary").unwrap();
        store.write(&entry, "content", "pw").unwrap();

        let result = store.create("diary");
        assert!(matches!(result, Err(JournalError::NameConflict(name)) if name == "diary"));
    }

    #[test]
    fn test_entry_binding_skips_conflict_check() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        let entry = store.create("diary").unwrap();
        store.write(&entry, "first", "pw").unwrap();

        // Explicit replacement path: rebind and overwrite
        let again = store.entry("diary").unwrap();
        store.write(&again, "second", "pw").unwrap();

        assert_eq!(store.read(&again, "pw").unwrap(), "second");
    }

    #[test]
    fn test_create_rejects_invalid_names() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.create(""),
            Err(JournalError::InvalidName(_))
        ));
        assert!(matches!(
            store.create("../escape"),
            Err(JournalError::InvalidName(_))
        ));
        assert!(matches!(
            store.entry("a/b"),
            Err(JournalError::InvalidName(_))
        ));
    }

    #[test]
    fn test_list_reflects_filesystem() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        assert!(store.list().unwrap().is_empty());

        let entry = store.create("foo").unwrap();
        store.write(&entry, "content", "pw").unwrap();

        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["foo".to_string()]);

        store.delete(&entry).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_list_ignores_foreign_files() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        fs::write(dir.path().join("notes.txt"), b"not an entry").unwrap();
        fs::create_dir(dir.path().join("subdir.journal")).unwrap();

        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        let entry = store.create("diary").unwrap();
        store.write(&entry, "content", "pw").unwrap();

        store.delete(&entry).unwrap();
        // Second delete of the same entry must not fault
        store.delete(&entry).unwrap();

        // Never-created entry deletes cleanly too
        let ghost = store.entry("ghost").unwrap();
        store.delete(&ghost).unwrap();
    }

    #[test]
    fn test_read_missing_entry_is_not_found() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        let entry = store.entry("ghost").unwrap();
        let result = store.read(&entry, "pw");

        assert!(matches!(result, Err(JournalError::NotFound(name)) if name == "ghost"));
    }

    #[test]
    fn test_password_check_precedes_file_access() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        // Missing file, but the over-long password is reported first
        let entry = store.entry("ghost").unwrap();
        let result = store.read(&entry, "0123456789abcdefg");
        assert!(matches!(result, Err(JournalError::PasswordTooLong { .. })));
    }

    #[test]
    fn test_names_with_dots_round_trip_through_list() {
        let dir = tempdir().unwrap();
        let store = JournalStore::open(dir.path()).unwrap();

        let entry = store.create("notes.v2").unwrap();
        store.write(&entry, "content", "pw").unwrap();

        let names: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["notes.v2".to_string()]);
    }
}

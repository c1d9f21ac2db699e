use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies raw document text by name.
pub trait Storage {
    fn exists(&self, name: &str) -> bool;
    fn read(&self, name: &str) -> Result<String>;
}

/// True when `name` has a `.txt` extension, in any case.
pub fn is_text_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("txt"))
}

/// Reads UTF-8 files from disk, relative to `root` when one is given.
#[derive(Debug, Clone, Default)]
pub struct FsStorage {
    root: Option<PathBuf>,
}

impl FsStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self { root: Some(root.as_ref().to_path_buf()) }
    }

    fn path(&self, name: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl Storage for FsStorage {
    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn read(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.path(name)).map_err(|source| Error::SourceUnavailable {
            name: name.to_string(),
            source,
        })
    }
}

/// In-memory named buffers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(name.into(), text.into());
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn read(&self, name: &str) -> Result<String> {
        self.files.get(name).cloned().ok_or_else(|| Error::SourceUnavailable {
            name: name.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such buffer"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_filter_ignores_case() {
        assert!(is_text_file("notes.TXT"));
        assert!(is_text_file("dir/notes.txt"));
        assert!(is_text_file("a.TxT"));
        assert!(!is_text_file("notes.md"));
        assert!(!is_text_file("txt"));
        assert!(!is_text_file("notes.txt.bak"));
    }

    #[test]
    fn fs_storage_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "hello").unwrap();
        let storage = FsStorage::with_root(dir.path());
        assert!(storage.exists("a.txt"));
        assert_eq!(storage.read("a.txt").unwrap(), "hello");
        assert!(!storage.exists("b.txt"));
        assert!(matches!(storage.read("b.txt"), Err(Error::SourceUnavailable { .. })));
    }
}

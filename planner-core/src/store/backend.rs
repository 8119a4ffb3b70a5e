//! Persistence backends for the event store.
//!
//! A backend holds one serialized blob. The store decides what goes in it.

use std::path::{Path, PathBuf};

use crate::error::{PlannerError, PlannerResult};

/// A durable slot for the serialized event store.
pub trait Backend {
    /// Read the stored blob, `None` when nothing has been saved yet.
    fn load(&self) -> PlannerResult<Option<String>>;

    /// Replace the stored blob.
    fn save(&mut self, blob: &str) -> PlannerResult<()>;
}

/// Backend that keeps the blob in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    blob: Option<String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        MemoryBackend {
            blob: Some(blob.into()),
            fail_writes: false,
        }
    }

    /// Make every following `save` fail, leaving the last blob in place.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> PlannerResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> PlannerResult<()> {
        if self.fail_writes {
            return Err(PlannerError::Persistence("memory backend is read-only".into()));
        }
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

/// Backend that stores the blob in a single JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Backend for FileBackend {
    fn load(&self) -> PlannerResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(content))
    }

    fn save(&mut self, blob: &str) -> PlannerResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, blob)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let mut backend = MemoryBackend::new();
        assert_eq!(backend.load().unwrap(), None);

        backend.save("{}").unwrap();
        assert_eq!(backend.load().unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_memory_backend_failing_writes_keep_old_blob() {
        let mut backend = MemoryBackend::with_blob("old");
        backend.set_fail_writes(true);

        assert!(matches!(backend.save("new"), Err(PlannerError::Persistence(_))));
        assert_eq!(backend.blob(), Some("old"));
    }

    #[test]
    fn test_file_backend_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("events.json"));
        assert_eq!(backend.load().unwrap(), None);
    }

    #[test]
    fn test_file_backend_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/planner/events.json");
        let mut backend = FileBackend::new(&path);

        backend.save(r#"{"2026-03-02":[]}"#).unwrap();

        assert_eq!(
            backend.load().unwrap().as_deref(),
            Some(r#"{"2026-03-02":[]}"#)
        );
        assert!(!dir.path().join("nested/planner/events.json.tmp").exists());
    }

    #[test]
    fn test_file_backend_unreadable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());

        assert!(matches!(backend.load(), Err(PlannerError::Io(_))));
    }
}

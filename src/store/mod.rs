//! # Persistent Store
//!
//! JSON document persistence with crash-safe overwrite semantics. Every
//! document is loaded and saved whole; `save` writes to a sibling temp file
//! and renames over the target so a crash mid-write never leaves a partial
//! document behind.
//!
//! There is no locking between separate load/modify/save cycles. Two tasks
//! racing on the same document can lose one update (last write wins); this is
//! accepted for the single-operator, low-concurrency deployment.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod documents;

use crate::core::StoreError;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tokio::fs;

pub use documents::{LogEntry, ProgressEntry, ReminderDoc, StudyLog};

/// Handle to one JSON-backed document of type `T`.
///
/// The handle holds only the path; callers reload before each mutation so
/// concurrent command invocations observe each other's committed writes.
pub struct JsonStore<T> {
    path: PathBuf,
    _doc: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            _doc: PhantomData,
        }
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _doc: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, initializing a missing file to the empty-but-valid
    /// default shape.
    ///
    /// A file that exists but cannot be read or parsed is an error, never a
    /// default: corrupt state must not be mistaken for "no data yet".
    pub async fn load(&self) -> Result<T, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("initializing empty document at {}", self.path.display());
                let doc = T::default();
                self.save(&doc).await?;
                Ok(doc)
            }
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the document atomically (write temp file, then rename).
    pub async fn save(&self, doc: &T) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(doc).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::Write {
                        path: self.path.clone(),
                        source,
                    })?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json)
            .await
            .map_err(|source| StoreError::Write {
                path: tmp.clone(),
                source,
            })?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct TestDoc {
        entries: Vec<String>,
    }

    #[tokio::test]
    async fn test_load_missing_initializes_default() {
        let dir = tempdir().unwrap();
        let store: JsonStore<TestDoc> = JsonStore::new(dir.path().join("doc.json"));

        let doc = store.load().await.unwrap();
        assert_eq!(doc, TestDoc::default());
        // The backing file is created so the next reader sees a valid shape
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store: JsonStore<TestDoc> = JsonStore::new(dir.path().join("doc.json"));

        let doc = TestDoc {
            entries: vec!["one".to_string(), "two".to_string()],
        };
        store.save(&doc).await.unwrap();
        assert_eq!(store.load().await.unwrap(), doc);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_error_not_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, b"{not valid json").unwrap();

        let store: JsonStore<TestDoc> = JsonStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        // The corrupt file is left untouched
        assert_eq!(std::fs::read(&path).unwrap(), b"{not valid json");
    }

    #[tokio::test]
    async fn test_overwrite_stays_parseable() {
        let dir = tempdir().unwrap();
        let store: JsonStore<TestDoc> = JsonStore::new(dir.path().join("doc.json"));

        store
            .save(&TestDoc {
                entries: vec!["a".repeat(1000)],
            })
            .await
            .unwrap();
        store
            .save(&TestDoc {
                entries: vec!["b".to_string()],
            })
            .await
            .unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.entries, vec!["b".to_string()]);
        // No temp file left behind after the rename
        assert!(!dir.path().join("doc.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let store: JsonStore<TestDoc> = JsonStore::new(dir.path().join("nested/data/doc.json"));
        store.save(&TestDoc::default()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_documents_are_pretty_printed() {
        let dir = tempdir().unwrap();
        let store: JsonStore<TestDoc> = JsonStore::new(dir.path().join("doc.json"));
        store
            .save(&TestDoc {
                entries: vec!["x".to_string()],
            })
            .await
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'), "expected pretty-printed JSON: {raw}");
    }
}

//! Externally hosted media assets
//!
//! Content entities never hold file bytes; they hold a [`MediaRef`]
//! pointing at an asset in the external media store. The store is behind
//! the [`MediaStore`] trait so route handlers and services stay testable.
//!
//! Replacement protocol: install the ref returned by the upload, persist
//! the document, and only then release the superseded handle. Releasing
//! after the write commits keeps a rejected save from leaving the stored
//! document pointing at deleted assets. Delete failures are non-blocking
//! (a transient media-store hiccup never prevents a content edit); upload
//! failures abort the enclosing mutation before any document write.

pub mod cloudinary;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{Result, VitrineError};

pub use cloudinary::CloudinaryClient;

/// Upload folder hints, mirrored across the admin surfaces
pub mod folders {
    pub const HERO: &str = "realestate/hero";
    pub const ABOUT: &str = "realestate/about";
    pub const PROJECTS: &str = "realestate/projects";
    pub const PROJECT_GALLERY: &str = "realestate/projects/gallery";
    pub const BLOGS: &str = "realestate/blogs";
    pub const NEWS: &str = "realestate/news";
    pub const LEADERS: &str = "realestate/leaders";
}

/// Pointer to an externally hosted asset
///
/// `url` is what clients are served; `file_id` is the store handle used
/// for deletion. A ref with an empty `file_id` is absent and must never
/// trigger a delete call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MediaRef {
    #[serde(default)]
    pub url: String,
    #[serde(default, rename = "fileId")]
    pub file_id: String,
}

impl MediaRef {
    pub fn new(url: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            file_id: file_id.into(),
        }
    }

    /// True when no stored asset is referenced
    pub fn is_absent(&self) -> bool {
        self.file_id.is_empty()
    }
}

/// A file received at the HTTP boundary, already decoded from base64
#[derive(Debug, Clone, Deserialize)]
pub struct FilePayload {
    pub filename: String,
    pub data: Vec<u8>,
}

impl FilePayload {
    /// Decode the boundary JSON form `{"filename": "...", "data": "<base64>"}`
    pub fn from_json(field: &str, value: &serde_json::Value) -> Result<Self> {
        use base64::Engine;

        let obj = value.as_object().ok_or_else(|| {
            VitrineError::Validation(format!("Invalid {field}: expected a file object"))
        })?;

        let filename = obj
            .get("filename")
            .and_then(|v| v.as_str())
            .unwrap_or("upload")
            .to_string();

        let encoded = obj.get("data").and_then(|v| v.as_str()).ok_or_else(|| {
            VitrineError::Validation(format!("Invalid {field}: missing base64 'data'"))
        })?;

        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| VitrineError::Validation(format!("Invalid {field}: bad base64: {e}")))?;

        if data.is_empty() {
            return Err(VitrineError::Validation(format!(
                "Invalid {field}: empty file"
            )));
        }

        Ok(Self { filename, data })
    }
}

/// External media store collaborator
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload an image, returning the served URL and store handle
    async fn upload(&self, file: &FilePayload, folder: &str) -> Result<MediaRef>;

    /// Upload a video, returning the served URL and store handle
    async fn upload_video(&self, file: &FilePayload, folder: &str) -> Result<MediaRef>;

    /// Delete a stored asset by handle
    async fn delete(&self, file_id: &str) -> Result<()>;
}

/// Release a stored asset if one is referenced.
///
/// No-op for absent refs. Delete failures are logged and swallowed so a
/// media-store outage never blocks the enclosing content edit; the leaked
/// handle is reported in the log for later cleanup.
pub async fn release(store: &dyn MediaStore, media_ref: &MediaRef) {
    if media_ref.is_absent() {
        return;
    }
    if let Err(e) = store.delete(&media_ref.file_id).await {
        warn!(
            file_id = %media_ref.file_id,
            error = %e,
            "Media delete failed; asset may be orphaned"
        );
    }
}

/// Release every ref in a superseded or cascade set.
///
/// Callers collect the old refs while mutating and hand them over only
/// after the document write has committed.
pub async fn release_all(store: &dyn MediaStore, refs: &[MediaRef]) {
    for media_ref in refs {
        release(store, media_ref).await;
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory media store double recording calls for protocol tests

    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct RecordingStore {
        pub uploads: AtomicUsize,
        pub deletes: Mutex<Vec<String>>,
        pub fail_deletes: bool,
    }

    impl RecordingStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_deletes() -> Self {
            Self {
                fail_deletes: true,
                ..Self::default()
            }
        }

        pub fn delete_count(&self) -> usize {
            self.deletes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MediaStore for RecordingStore {
        async fn upload(&self, file: &FilePayload, folder: &str) -> Result<MediaRef> {
            let n = self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(MediaRef::new(
                format!("https://media.test/{folder}/{}", file.filename),
                format!("{folder}/file-{n}"),
            ))
        }

        async fn upload_video(&self, file: &FilePayload, folder: &str) -> Result<MediaRef> {
            self.upload(file, folder).await
        }

        async fn delete(&self, file_id: &str) -> Result<()> {
            self.deletes.lock().unwrap().push(file_id.to_string());
            if self.fail_deletes {
                return Err(VitrineError::Asset("simulated delete failure".into()));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingStore;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_release_skips_absent_refs() {
        let store = RecordingStore::new();
        release(&store, &MediaRef::default()).await;
        assert_eq!(store.delete_count(), 0);
    }

    #[tokio::test]
    async fn test_release_deletes_exactly_once() {
        let store = RecordingStore::new();
        release(&store, &MediaRef::new("https://x/y.jpg", "abc")).await;
        assert_eq!(store.deletes.lock().unwrap().as_slice(), ["abc"]);
    }

    #[tokio::test]
    async fn test_release_all_skips_absent_refs_in_a_cascade() {
        let store = RecordingStore::new();
        let refs = vec![
            MediaRef::new("https://x/a.jpg", "a-id"),
            MediaRef::default(),
            MediaRef::new("https://x/b.jpg", "b-id"),
        ];
        release_all(&store, &refs).await;
        assert_eq!(store.deletes.lock().unwrap().as_slice(), ["a-id", "b-id"]);
    }

    #[tokio::test]
    async fn test_delete_failure_is_non_blocking() {
        let store = RecordingStore::failing_deletes();
        // Must not propagate the error
        release(&store, &MediaRef::new("u", "doomed")).await;
        assert_eq!(store.delete_count(), 1);
    }

    #[test]
    fn test_file_payload_decode() {
        let value = json!({"filename": "a.jpg", "data": "aGVsbG8="});
        let file = FilePayload::from_json("image", &value).unwrap();
        assert_eq!(file.filename, "a.jpg");
        assert_eq!(file.data, b"hello");
    }

    #[test]
    fn test_file_payload_rejects_bad_base64() {
        let value = json!({"filename": "a.jpg", "data": "!!not-base64!!"});
        assert!(FilePayload::from_json("image", &value).is_err());
    }

    #[test]
    fn test_file_payload_rejects_empty() {
        let value = json!({"filename": "a.jpg", "data": ""});
        assert!(FilePayload::from_json("image", &value).is_err());
    }
}

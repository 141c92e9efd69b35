//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext that wires the router to a fresh in-memory store
//! and a temporary upload directory, plus direct store access for seeding.

pub mod fixtures;

use std::path::Path;
use std::sync::Arc;

use axum::Router;

use study_helper_backend::models::{Document, NewDocument};
use study_helper_backend::services::files::FileStore;
use study_helper_backend::store::{MemStore, Storage};
use study_helper_backend::AppState;

/// Test context owning the store, the temporary upload directory, and the
/// assembled router.
pub struct TestContext {
    pub store: Arc<MemStore>,
    upload_dir: tempfile::TempDir,
    app: Router,
}

impl TestContext {
    pub fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("failed to create temp dir");
        let files = FileStore::new(upload_dir.path().join("uploads"))
            .expect("failed to create upload directory");
        let store = Arc::new(MemStore::new());

        let state = AppState {
            store: store.clone(),
            files: Arc::new(files),
        };
        let app = study_helper_backend::router(state);

        Self {
            store,
            upload_dir,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// The directory uploaded files land in.
    pub fn upload_root(&self) -> std::path::PathBuf {
        self.upload_dir.path().join("uploads")
    }

    /// Seed a document whose text extraction has already completed.
    pub fn seed_document_with_text(&self, original_name: &str, text: &str) -> Document {
        let document = self.seed_document_without_text(original_name);
        self.store
            .set_document_text(&document.id, text.to_string());
        self.store
            .get_document(&document.id)
            .expect("seeded document missing")
    }

    /// Seed a document still waiting on extraction (no text content).
    pub fn seed_document_without_text(&self, original_name: &str) -> Document {
        let filename = format!("stored-{original_name}");
        self.store.create_document(NewDocument {
            filename: filename.clone(),
            original_name: original_name.to_string(),
            file_path: self
                .upload_root()
                .join(&filename)
                .to_string_lossy()
                .into_owned(),
            file_size: 512,
        })
    }
}

/// Count regular files under a directory.
pub fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.filter_map(|e| e.ok()).count())
        .unwrap_or(0)
}

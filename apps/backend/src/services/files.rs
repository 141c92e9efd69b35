//! Disk storage for uploaded documents.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

/// Manages the uploads directory: unique naming, writes, and deletes.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at the given directory, creating it if
    /// necessary.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Generate a unique stored filename preserving the original extension.
    /// The original name is sanitized to prevent path traversal.
    pub fn unique_filename(original_name: &str) -> String {
        let extension = extension_of(original_name);

        let sanitized: String = original_name
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_' || *c == '.')
            .take(50)
            .collect();
        let stem = sanitized
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&sanitized);

        if extension.is_empty() {
            format!("{}-{}", Uuid::new_v4(), stem)
        } else {
            format!("{}-{}.{}", Uuid::new_v4(), stem, extension)
        }
    }

    /// Write file bytes under the uploads root, returning the full path.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.root.join(filename);
        fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Delete a stored file. A missing file is not an error.
    pub async fn remove(&self, path: &str) -> std::io::Result<()> {
        match fs::remove_file(path).await {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .filter(|ext| ext.len() <= 10 && !ext.contains(' ') && !ext.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

//! # tb-storage-local
//! tinboard/crates/tb-plugins/tb-storage-local/src/lib.rs
//! Local filesystem implementation of `MediaStore`.
//! Uploads land under a single directory with random, collision-resistant
//! filenames; posts reference them by relative path.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use tb_core::error::{AppError, Result};
use tb_core::traits::MediaStore;

pub struct LocalMediaStore {
    /// Root directory for all uploads (e.g., "./data/uploads")
    root_path: PathBuf,
    /// Prefix used in the stored reference path (e.g., "uploads")
    url_prefix: String,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf, url_prefix: String) -> Self {
        Self {
            root_path: root,
            url_prefix,
        }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    /// Saves an upload as `<random-token>.<ext>`, creating the uploads
    /// directory on first use, and returns the relative reference path.
    async fn save_upload(&self, data: Vec<u8>, ext: &str) -> Result<String> {
        fs::create_dir_all(&self.root_path)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let name = format!("{}.{}", Uuid::new_v4().simple(), ext);
        fs::write(self.root_path.join(&name), &data)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(format!("{}/{}", self.url_prefix.trim_end_matches('/'), name))
    }
}

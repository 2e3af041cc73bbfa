//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.
//! Handlers only ever see these interfaces, so tests can substitute fakes
//! and a later persistent backend never touches the API layer.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Post, Thread};

/// Data contract for boards, threads, and posts.
#[async_trait]
pub trait ForumStore: Send + Sync {
    // Board Operations
    async fn list_boards(&self) -> Result<Vec<String>>;

    // Thread Operations
    /// Appends a thread to the given board. Fails with `NotFound` when the
    /// board slug is outside the registry.
    async fn create_thread(&self, board: &str, title: String) -> Result<Thread>;
    async fn get_thread(&self, id: u64) -> Result<Option<Thread>>;
    /// Threads on a board in creation order, optionally filtered by a
    /// case-insensitive title substring. Unknown boards yield an empty list.
    async fn list_threads(&self, board: &str, search: Option<&str>) -> Result<Vec<Thread>>;

    // Post Operations
    /// Appends a post to the given thread. Fails with `NotFound` when the
    /// thread does not exist.
    async fn create_post(
        &self,
        thread_id: u64,
        content: String,
        image_path: Option<String>,
    ) -> Result<Post>;
    async fn list_posts(&self, thread_id: u64) -> Result<Vec<Post>>;
}

/// Media storage contract for handling uploads.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Saves raw bytes under a collision-resistant generated name and
    /// returns the relative reference path for the Post model.
    async fn save_upload(&self, data: Vec<u8>, ext: &str) -> Result<String>;
}

//! # tb-store-memory Implementation
//!
//! In-memory implementation of `ForumStore`. Threads and posts live in two
//! append-only vectors behind a single `RwLock`; the board registry is fixed
//! at construction. Nothing survives a process restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use tb_core::boards::DEFAULT_BOARDS;
use tb_core::error::{AppError, Result};
use tb_core::models::{Post, Thread};
use tb_core::traits::ForumStore;

pub struct MemoryStore {
    boards: Vec<String>,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    threads: Vec<Thread>,
    posts: Vec<Post>,
}

impl MemoryStore {
    /// An empty store over the given board registry.
    pub fn new(boards: Vec<String>) -> Self {
        Self {
            boards,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// The default registry plus the sample threads and posts the original
    /// board ships with. The binary and the integration tests start here.
    pub fn seeded() -> Self {
        let mut inner = Inner::default();
        inner.threads.push(Thread {
            id: 1,
            board: "tech".to_string(),
            title: "Welcome to Tech Board".to_string(),
            created: Utc::now(),
        });
        inner.threads.push(Thread {
            id: 2,
            board: "random".to_string(),
            title: "Random Chat".to_string(),
            created: Utc::now(),
        });
        inner.posts.push(Post {
            id: 1,
            thread_id: 1,
            content: "This is the first post on tech board!".to_string(),
            image_path: None,
            created: Utc::now(),
        });
        inner.posts.push(Post {
            id: 2,
            thread_id: 2,
            content: "Randomness starts here!".to_string(),
            image_path: None,
            created: Utc::now(),
        });
        Self {
            boards: DEFAULT_BOARDS.iter().map(|b| b.to_string()).collect(),
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl ForumStore for MemoryStore {
    async fn list_boards(&self) -> Result<Vec<String>> {
        Ok(self.boards.clone())
    }

    /// Appends a thread, assigning `max(id) + 1` under the write lock so
    /// concurrent creations cannot collide.
    async fn create_thread(&self, board: &str, title: String) -> Result<Thread> {
        if !self.boards.iter().any(|b| b == board) {
            return Err(AppError::NotFound("board".to_string(), board.to_string()));
        }
        let mut inner = self.inner.write().await;
        let id = inner.threads.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let thread = Thread {
            id,
            board: board.to_string(),
            title,
            created: Utc::now(),
        };
        inner.threads.push(thread.clone());
        log::debug!("created thread {} on /{}/", id, board);
        Ok(thread)
    }

    async fn get_thread(&self, id: u64) -> Result<Option<Thread>> {
        let inner = self.inner.read().await;
        Ok(inner.threads.iter().find(|t| t.id == id).cloned())
    }

    async fn list_threads(&self, board: &str, search: Option<&str>) -> Result<Vec<Thread>> {
        let inner = self.inner.read().await;
        let search = search.map(str::to_lowercase).filter(|q| !q.is_empty());
        Ok(inner
            .threads
            .iter()
            .filter(|t| t.board == board)
            .filter(|t| match &search {
                Some(q) => t.title.to_lowercase().contains(q),
                None => true,
            })
            .cloned()
            .collect())
    }

    /// Appends a post, enforcing that the target thread exists. The
    /// existence check and the `max(id) + 1` assignment happen under the
    /// same write lock.
    async fn create_post(
        &self,
        thread_id: u64,
        content: String,
        image_path: Option<String>,
    ) -> Result<Post> {
        let mut inner = self.inner.write().await;
        if !inner.threads.iter().any(|t| t.id == thread_id) {
            return Err(AppError::NotFound(
                "thread".to_string(),
                thread_id.to_string(),
            ));
        }
        let id = inner.posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let post = Post {
            id,
            thread_id,
            content,
            image_path,
            created: Utc::now(),
        };
        inner.posts.push(post.clone());
        log::debug!("created post {} in thread {}", id, thread_id);
        Ok(post)
    }

    async fn list_posts(&self, thread_id: u64) -> Result<Vec<Post>> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .iter()
            .filter(|p| p.thread_id == thread_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_thread_assigns_sequential_ids() {
        let store = MemoryStore::seeded();
        let t = store
            .create_thread("tech", "Hello".to_string())
            .await
            .unwrap();
        // Seed contains threads 1 and 2.
        assert_eq!(t.id, 3);

        let threads = store.list_threads("tech", None).await.unwrap();
        assert!(threads.iter().any(|t| t.id == 3 && t.title == "Hello"));
    }

    #[tokio::test]
    async fn test_create_thread_rejects_unknown_board() {
        let store = MemoryStore::seeded();
        let err = store
            .create_thread("notaboard", "x".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_, _)));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let store = MemoryStore::seeded();
        let hits = store.list_threads("tech", Some("welcome")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Welcome to Tech Board");

        let misses = store.list_threads("tech", Some("zzz")).await.unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_board_lists_empty() {
        let store = MemoryStore::seeded();
        let threads = store.list_threads("notaboard", None).await.unwrap();
        assert!(threads.is_empty());
    }

    #[tokio::test]
    async fn test_create_post_requires_existing_thread() {
        let store = MemoryStore::seeded();
        let err = store
            .create_post(99, "orphan".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_, _)));
        assert!(store.list_posts(99).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reply_without_image() {
        let store = MemoryStore::seeded();
        let post = store
            .create_post(1, "test".to_string(), None)
            .await
            .unwrap();
        assert_eq!(post.id, 3);
        assert!(post.image_path.is_none());

        let posts = store.list_posts(1).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts.last().unwrap().content, "test");
    }

    #[tokio::test]
    async fn test_concurrent_replies_get_unique_ids() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::seeded());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create_post(1, format!("post {i}"), None).await
            }));
        }
        let mut ids = Vec::new();
        for h in handles {
            ids.push(h.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }
}

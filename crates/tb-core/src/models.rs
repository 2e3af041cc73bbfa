//! # Domain Models
//!
//! These structs represent the core entities of Tinboard.
//! IDs are small sequential integers assigned by the store; the store
//! guarantees uniqueness by serializing inserts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Thread lives on a board and contains a collection of Posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: u64,
    /// Slug of the board this thread belongs to (e.g., "tech")
    pub board: String,
    pub title: String,
    pub created: DateTime<Utc>,
}

/// The fundamental unit of conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub thread_id: u64,
    pub content: String,
    /// Relative path to the attached image (e.g., "uploads/<token>.png"),
    /// absent when the reply carried no file
    pub image_path: Option<String>,
    pub created: DateTime<Utc>,
}

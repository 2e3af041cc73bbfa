//! tinboard/crates/tb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Tinboard.

pub mod boards;
pub mod error;
pub mod models;
pub mod traits;
pub mod upload;

// Re-exporting for easier access in other crates
pub use boards::*;
pub use error::*;
pub use models::*;
pub use traits::*;
pub use upload::*;

#[cfg(test)]
mod tests {
    use super::models::*;

    #[test]
    fn test_post_without_image() {
        let post = Post {
            id: 1,
            thread_id: 1,
            content: "Hello Rust!".to_string(),
            image_path: None,
            created: chrono::Utc::now(),
        };
        assert_eq!(post.id, 1);
        assert!(post.image_path.is_none());
    }

    #[test]
    fn test_thread_serializes_with_board_slug() {
        let thread = Thread {
            id: 7,
            board: "tech".to_string(),
            title: "Welcome".to_string(),
            created: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&thread).unwrap();
        assert_eq!(json["board"], "tech");
        assert_eq!(json["id"], 7);
    }
}

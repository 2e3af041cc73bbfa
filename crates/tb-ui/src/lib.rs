use askama::Template;
use tb_core::models::{Post, Thread};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub boards: Vec<String>,
    /// The active single-letter filter, if any
    pub letter: Option<String>,
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub board: String,
    pub threads: Vec<Thread>,
    pub query: Option<String>,
}

#[derive(Template)]
#[template(path = "thread.html")]
pub struct ThreadTemplate {
    pub board: String,
    pub thread: Thread,
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_index_renders_board_links() {
        let html = IndexTemplate {
            boards: vec!["tech".to_string(), "random".to_string()],
            letter: None,
        }
        .render()
        .unwrap();
        assert!(html.contains("/tech/"));
        assert!(html.contains("/random/"));
    }

    #[test]
    fn test_thread_template_escapes_content() {
        let html = ThreadTemplate {
            board: "tech".to_string(),
            thread: Thread {
                id: 1,
                board: "tech".to_string(),
                title: "t".to_string(),
                created: Utc::now(),
            },
            posts: vec![Post {
                id: 1,
                thread_id: 1,
                content: "<script>alert(1)</script>".to_string(),
                image_path: None,
                created: Utc::now(),
            }],
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>alert"));
    }
}

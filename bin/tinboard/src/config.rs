//! Environment-driven configuration with defaults that work out of the box.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Where uploaded images land on disk
    pub uploads_dir: PathBuf,
    /// Prefix stored in post image paths and mounted as a static route
    pub uploads_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("TINBOARD_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("TINBOARD_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            uploads_dir: env::var("TINBOARD_UPLOADS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/uploads")),
            uploads_url: env::var("TINBOARD_UPLOADS_URL").unwrap_or_else(|_| "uploads".to_string()),
        }
    }
}

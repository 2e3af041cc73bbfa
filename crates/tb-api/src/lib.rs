//! # tb-api
//!
//! The web routing and orchestration layer for Tinboard.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

/// Configures the routes for the imageboard.
///
/// # Developer Note
/// We use a scoped configuration to allow the main binary to mount
/// the API under different paths if needed (e.g., /api/v1/).
/// `/boards/{letter}/` must be registered before the `/{board}/` pattern
/// or the literal segment would be captured as a board slug.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            // The Board Index, optionally letter-filtered
            .route("/", web::get().to(handlers::index))
            .route("/boards/{letter}/", web::get().to(handlers::index_filtered))
            // The Thread Listing (e.g., /tech/?q=welcome)
            .route("/{board}/", web::get().to(handlers::board_view))
            .route("/{board}/new", web::post().to(handlers::new_thread))
            // The Thread View and posting endpoints
            .route(
                "/{board}/{thread_id}/posts",
                web::get().to(handlers::posts_json),
            )
            .route(
                "/{board}/{thread_id}/reply",
                web::post().to(handlers::reply),
            )
            .route("/{board}/{thread_id}/", web::get().to(handlers::view_thread)),
    );
}

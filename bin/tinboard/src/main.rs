//! # Tinboard Binary
//!
//! The entry point that assembles the application based on compile-time features.

mod config;

use actix_files::Files;
use actix_web::{web, App, HttpServer};
use tb_api::handlers::AppState;
use tb_api::middleware;

// Feature-gated imports: swap backends without touching handler code
#[cfg(feature = "store-memory")]
use tb_store_memory::MemoryStore;

#[cfg(feature = "storage-local")]
use tb_storage_local::LocalMediaStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let cfg = config::Config::from_env();
    std::fs::create_dir_all(&cfg.uploads_dir)?;

    // 1. Initialize the forum store
    #[cfg(feature = "store-memory")]
    let store = MemoryStore::seeded();

    // 2. Initialize the media store
    #[cfg(feature = "storage-local")]
    let media = LocalMediaStore::new(cfg.uploads_dir.clone(), cfg.uploads_url.clone());

    // 3. Wrap in AppState (dynamic dispatch keeps the handlers backend-agnostic)
    let state = web::Data::new(AppState {
        store: Box::new(store),
        media: Box::new(media),
    });

    log::info!("🚀 Tinboard starting on http://{}:{}", cfg.host, cfg.port);

    let uploads_dir = cfg.uploads_dir.clone();
    let uploads_mount = format!("/{}", cfg.uploads_url.trim_matches('/'));
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .wrap(middleware::cors_policy())
            // Static uploads must be mounted before the /{board}/ catch-all
            .service(Files::new(&uploads_mount, uploads_dir.clone()))
            .configure(tb_api::configure_routes)
    })
    .bind((cfg.host.as_str(), cfg.port))?
    .run()
    .await
}

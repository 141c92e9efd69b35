pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::routes::documents::MAX_UPLOAD_BYTES;
use crate::services::files::FileStore;
use crate::store::{MemStore, Storage};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub files: Arc<FileStore>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Document routes
        .route("/documents", get(routes::documents::list))
        .route("/documents", post(routes::documents::upload))
        .route("/documents/{id}", delete(routes::documents::delete))
        // Question routes
        .route("/questions/prepare", post(routes::questions::prepare))
        .route("/questions/commit", post(routes::questions::commit))
        .route("/questions/{documentId}", get(routes::questions::list))
        // Chat routes
        .route("/chat/messages", get(routes::chat::list))
        .route("/chat/message", post(routes::chat::post_message))
        .route("/chat/response", post(routes::chat::post_response))
        .route("/chat", delete(routes::chat::clear))
        // Notes routes
        .route("/notes/prepare", post(routes::notes::prepare))
        .route("/notes/commit", post(routes::notes::commit))
        .route("/notes/{id}", get(routes::notes::list))
        .route("/notes/detail/{id}", get(routes::notes::detail))
        .route("/notes/{id}", delete(routes::notes::delete))
        // Uploads are larger than axum's default body limit.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
    tracing::info!("Using upload directory {}", upload_dir);
    let files = FileStore::new(upload_dir)?;

    let state = AppState {
        store: Arc::new(MemStore::new()),
        files: Arc::new(files),
    };

    let app = router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

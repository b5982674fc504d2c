//! HTTP surface for chess scribe editing sessions.
//!
//! The front end renders whatever view comes back and sends edit and import
//! events; all game logic lives in `scribe_core`.

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::store::SessionStore;

/// Build the router with a fresh session store.
pub fn app(config: &Config) -> Router {
    let store = SessionStore::new(config.max_sessions);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/sessions", post(routes::sessions::create_session))
        .route(
            "/api/sessions/{id}",
            get(routes::sessions::get_session).delete(routes::sessions::delete_session),
        )
        .route("/api/sessions/{id}/moves", post(routes::sessions::edit_move))
        .route("/api/sessions/{id}/pgn", put(routes::sessions::import_pgn))
        .route("/api/sessions/{id}/options", get(routes::sessions::get_options))
        .layer(Extension(store))
        .layer(cors)
}

/// Serve on an already bound listener until the process stops.
pub async fn run(listener: TcpListener, config: Config) -> std::io::Result<()> {
    let app = app(&config);
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Starting server on {addr}");
    }
    axum::serve(listener, app).await
}

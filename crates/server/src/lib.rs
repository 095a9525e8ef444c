use std::path::Path;

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod cli;

pub mod db;

mod state;
pub use state::*;

pub mod routes;

/// The api routes plus the static front page from `assets_dir`
pub fn app<P: AsRef<Path>>(state: AppState, assets_dir: P) -> Router {
    Router::new()
        .merge(routes::router::<AppState>())
        .fallback_service(ServeDir::new(assets_dir))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

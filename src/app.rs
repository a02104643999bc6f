use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::{config::AppConfig, database::Database, routes, store::ProductStore};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    /// `None` when the store is not backed by Postgres.
    pub db: Option<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            products: Arc::new(db.products()),
            db: Some(db),
        }
    }

    pub fn with_store(products: Arc<dyn ProductStore>) -> Self {
        Self { products, db: None }
    }
}

pub fn build(config: &AppConfig, state: AppState) -> Router {
    router(state, config.server.max_body_size)
}

pub fn router(state: AppState, max_body_size: usize) -> Router {
    // Request spans and completion events at INFO.
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    routes::create_router()
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(trace)
        .with_state(state)
}

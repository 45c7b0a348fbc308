pub mod api;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    infrastructure::store::{EntityStore, MemoryStore},
    services::idgt::IdgtLedger,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn EntityStore>,
    pub idgt: Arc<IdgtLedger>,
}

impl AppState {
    /// State backed by a fresh in-memory store and an empty IDGT ledger.
    pub fn in_memory(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(MemoryStore::new()),
            idgt: Arc::new(IdgtLedger::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .server
                .cors_allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect::<Vec<_>>(),
        )
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", api::router(&state.config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::logging::make_log_span)
                .on_request(())
                .on_eos(()),
        )
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(
            state.config.server.max_concurrent_requests,
        ))
        .with_state(state)
}

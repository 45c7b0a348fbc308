pub mod routes;
pub mod types;

use axum::Router;

use crate::{AppState, config::Config};

/// All REST routes, relative to the `/api` prefix.
pub fn router(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(routes::users::router())
        .merge(routes::ip_assets::router(&config.upload))
        .merge(routes::verify::router())
        .merge(routes::royalties::router())
        .merge(routes::derivatives::router())
        .merge(routes::story::router())
        .merge(routes::idgt::router())
        .merge(routes::defi::router())
}

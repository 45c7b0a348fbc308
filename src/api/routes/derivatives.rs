use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    AppState,
    api::types::parse_body,
    error::Result,
    infrastructure::store::entities::{DerivativeWork, NewDerivativeWork},
};

pub async fn create_derivative_work(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DerivativeWork>> {
    let new_work: NewDerivativeWork = parse_body(&body, "Invalid derivative work data")?;

    let work = state.store.create_derivative_work(new_work);
    tracing::info!(
        derivative_id = work.id,
        parent_ip_id = %work.parent_ip_id,
        child_ip_id = %work.child_ip_id,
        "Derivative work recorded"
    );

    Ok(Json(work))
}

pub async fn list_derivatives_by_parent(
    State(state): State<AppState>,
    Path(parent_ip_id): Path<String>,
) -> Json<Vec<DerivativeWork>> {
    Json(state.store.get_derivative_works_by_parent_id(&parent_ip_id))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/derivatives", post(create_derivative_work))
        .route(
            "/derivatives/parent/{parent_ip_id}",
            get(list_derivatives_by_parent),
        )
}

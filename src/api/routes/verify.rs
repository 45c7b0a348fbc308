use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    AppState,
    infrastructure::store::entities::{IpAsset, User},
};

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    pub verified: bool,
    pub asset: IpAsset,
    pub owner: Option<User>,
    pub derivatives: usize,
}

pub async fn verify_ip(State(state): State<AppState>, Path(ip_id): Path<String>) -> Response {
    let Some(asset) = state.store.get_ip_asset_by_ip_id(&ip_id) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "IP asset not found", "verified": false })),
        )
            .into_response();
    };

    let owner = asset.user_id.and_then(|user_id| state.store.get_user(user_id));
    let derivatives = state
        .store
        .get_derivative_works_by_parent_id(&asset.ip_id)
        .len();

    Json(VerificationResponse {
        verified: true,
        asset,
        owner,
        derivatives,
    })
    .into_response()
}

pub fn router() -> Router<AppState> {
    Router::new().route("/verify/{ip_id}", get(verify_ip))
}

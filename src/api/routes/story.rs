use axum::{Json, Router, body::Bytes, extract::State, routing::post};

use crate::{
    AppState,
    api::types::{ClaimRevenueParams, RegisterStoryIpParams, parse_body},
    error::{AppError, Result},
    services::story::{
        self as story_service,
        types::{RevenueClaim, StoryRegistration},
    },
};

pub async fn register_ip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StoryRegistration>> {
    let params: RegisterStoryIpParams = parse_body(&body, "Invalid registration data")?;

    let ip_asset_id = params
        .ip_asset_id
        .as_ref()
        .and_then(|id| id.as_i32())
        .ok_or_else(|| AppError::InvalidParams("IP asset ID is required".into()))?;

    tracing::debug!(
        ip_asset_id,
        parent_ip_ids = ?params.parent_ip_ids,
        license_terms_ids = ?params.license_terms_ids,
        "Registering IP with Story Protocol"
    );

    story_service::register_ip(&state, ip_asset_id).map(Json)
}

pub async fn claim_revenue(body: Bytes) -> Result<Json<RevenueClaim>> {
    let params: ClaimRevenueParams = parse_body(&body, "Invalid claim data")?;

    tracing::debug!(
        child_ip_ids = ?params.child_ip_ids,
        royalty_policies = ?params.royalty_policies,
        currency_tokens = ?params.currency_tokens,
        "Claiming revenue"
    );

    Ok(Json(story_service::claim_revenue(
        &params.ancestor_ip_id,
        &params.claimer,
    )))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/story/register-ip", post(register_ip))
        .route("/story/claim-revenue", post(claim_revenue))
}

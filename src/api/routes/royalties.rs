use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, patch, post},
};

use crate::{
    AppState,
    api::types::{ClaimRoyaltyParams, parse_body},
    error::{AppError, Result},
    infrastructure::store::entities::{NewRoyaltyPayment, RoyaltyPayment, RoyaltyPaymentUpdate},
    services::royalty::{self as royalty_service, types::RoyaltySummary},
};

pub async fn get_user_royalties(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Json<RoyaltySummary> {
    Json(royalty_service::royalties_for_user(&state, user_id))
}

pub async fn create_royalty_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoyaltyPayment>> {
    let new_payment: NewRoyaltyPayment = parse_body(&body, "Invalid royalty data")?;

    if !new_payment
        .amount
        .trim()
        .parse::<f64>()
        .is_ok_and(f64::is_finite)
    {
        return Err(AppError::Validation {
            message: "Invalid royalty data".into(),
            errors: serde_json::json!(["amount must be a decimal number"]),
        });
    }

    let payment = state.store.create_royalty_payment(new_payment);
    tracing::info!(
        royalty_payment_id = payment.id,
        ip_asset_id = ?payment.ip_asset_id,
        amount = %payment.amount,
        "Royalty payment recorded"
    );

    Ok(Json(payment))
}

pub async fn claim_royalty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<RoyaltyPayment>> {
    let params: ClaimRoyaltyParams = if body.is_empty() {
        ClaimRoyaltyParams::default()
    } else {
        parse_body(&body, "Invalid claim data")?
    };

    let payment = state
        .store
        .update_royalty_payment(id, RoyaltyPaymentUpdate::claim(params.tx_hash))
        .ok_or(AppError::RoyaltyPaymentNotFound)?;
    tracing::info!(royalty_payment_id = id, "Royalty claimed");

    Ok(Json(payment))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/royalties", post(create_royalty_payment))
        .route("/royalties/user/{user_id}", get(get_user_royalties))
        .route("/royalties/{id}/claim", patch(claim_royalty))
}

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    AppState,
    api::types::{
        IdgtRegisterParams, IdgtRegisterResponse, IdgtRoyaltyParams, IdgtRoyaltyResponse,
        IdgtUsageFeeParams, IdgtUsageFeeResponse, NumericInput, parse_body, present,
    },
    error::{AppError, Result},
    services::idgt::{
        self as idgt_service,
        types::{IdgtStats, TokenInfo},
    },
};

fn missing_fields() -> AppError {
    AppError::InvalidParams("Missing required fields".into())
}

fn required_number(value: Option<NumericInput>) -> Option<NumericInput> {
    value.filter(|v| !v.is_blank())
}

pub async fn register_ip(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdgtRegisterResponse>> {
    let params: IdgtRegisterParams = parse_body(&body, "Invalid registration data")?;

    let (Some(ip_asset_id), Some(owner_address), Some(ip_id)) = (
        required_number(params.ip_asset_id),
        present(params.owner_address),
        present(params.ip_id),
    ) else {
        return Err(missing_fields());
    };
    let ip_asset_id = ip_asset_id
        .as_i32()
        .ok_or_else(|| AppError::InvalidParams("IP asset ID must be an integer".into()))?;

    let registration =
        idgt_service::process_ip_registration(&state, ip_asset_id, &owner_address, &ip_id)?;

    Ok(Json(IdgtRegisterResponse {
        success: true,
        message: "IP registered successfully and IDGT tokens awarded".into(),
        transaction_hash: registration.transaction_hash,
        tokens_awarded: registration.tokens_awarded,
    }))
}

pub async fn pay_royalty(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdgtRoyaltyResponse>> {
    let params: IdgtRoyaltyParams = parse_body(&body, "Invalid royalty data")?;

    let (Some(ip_id), Some(amount), Some(payer_address)) = (
        present(params.ip_id),
        required_number(params.amount),
        present(params.payer_address),
    ) else {
        return Err(missing_fields());
    };

    let transfer =
        idgt_service::process_royalty_payment(&state, &ip_id, &amount.as_text(), &payer_address)?;

    Ok(Json(IdgtRoyaltyResponse {
        success: true,
        message: "Royalty payment processed successfully".into(),
        transaction_hash: transfer.transaction_hash,
        amount_paid: transfer.amount_paid,
    }))
}

pub async fn pay_usage_fee(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<IdgtUsageFeeResponse>> {
    let params: IdgtUsageFeeParams = parse_body(&body, "Invalid usage fee data")?;

    let (Some(ip_id), Some(eth_amount), Some(user_address)) = (
        present(params.ip_id),
        required_number(params.eth_amount),
        present(params.user_address),
    ) else {
        return Err(missing_fields());
    };

    let fee =
        idgt_service::process_usage_fee(&state, &ip_id, &eth_amount.as_text(), &user_address)?;

    Ok(Json(IdgtUsageFeeResponse {
        success: true,
        message: "Usage fee processed successfully".into(),
        transaction_hash: fee.transaction_hash,
        fee_amount: fee.fee_amount,
    }))
}

pub async fn get_user_token_info(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Json<TokenInfo> {
    Json(idgt_service::user_token_info(&state, &address))
}

pub async fn get_stats() -> Json<IdgtStats> {
    Json(idgt_service::stats())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/idgt/register-ip", post(register_ip))
        .route("/idgt/pay-royalty", post(pay_royalty))
        .route("/idgt/pay-usage-fee", post(pay_usage_fee))
        .route("/idgt/user/{address}", get(get_user_token_info))
        .route("/idgt/stats", get(get_stats))
}

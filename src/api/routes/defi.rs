use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};
use rand::Rng;

use crate::{
    AppState,
    api::types::{
        BorrowParams, BorrowResponse, NumericInput, RegisterPatternParams,
        RegisterPatternResponse, RepayParams, RepayResponse, StakeParams, StakeResponse,
        UnstakeParams, UnstakeResponse, parse_body, present,
    },
    error::{AppError, Result},
    services::{
        chain::mock_tx_hash,
        defi::{
            self as defi_service, STAKE_EXCHANGE_RATE,
            types::{DefiStats, IpRegistryHoldings, LoanPosition, StakingPosition},
        },
    },
};

const AMOUNT_AND_ADDRESS_REQUIRED: &str = "Amount and user address required";

/// Pulls a positive amount plus its textual form, as echoed back to clients.
fn positive_amount(value: &NumericInput, message: &str) -> Result<(f64, String)> {
    match value.as_f64() {
        Some(amount) if amount > 0.0 => Ok((amount, value.as_text())),
        _ => Err(AppError::InvalidParams(message.to_string())),
    }
}

fn amount_and_address(params: StakeParams) -> Result<(f64, String, String)> {
    let (Some(amount), Some(address)) = (
        params.amount.filter(|a| !a.is_blank()),
        present(params.user_address),
    ) else {
        return Err(AppError::InvalidParams(AMOUNT_AND_ADDRESS_REQUIRED.into()));
    };
    let (value, text) = positive_amount(&amount, "Amount must be a positive number")?;

    Ok((value, text, address))
}

pub async fn get_staking(Path(address): Path<String>) -> Json<StakingPosition> {
    tracing::debug!(address = %address, "Fetching staking position");
    Json(defi_service::staking_position())
}

pub async fn stake(body: Bytes) -> Result<Json<StakeResponse>> {
    let params: StakeParams = parse_body(&body, "Invalid stake data")?;
    let (amount, amount_text, address) = amount_and_address(params)?;

    let lst_minted = (amount * STAKE_EXCHANGE_RATE).to_string();
    tracing::info!(user = %address, amount, "Tokens staked");

    Ok(Json(StakeResponse {
        success: true,
        transaction_hash: mock_tx_hash(),
        message: format!("Staked {amount_text} tokens and minted {lst_minted} LST"),
        lst_minted,
    }))
}

pub async fn unstake(State(state): State<AppState>, body: Bytes) -> Result<Json<UnstakeResponse>> {
    let params: UnstakeParams = parse_body(&body, "Invalid unstake data")?;
    let (_, amount_text, address) = amount_and_address(params)?;

    let delay = defi_service::describe_delay(state.config.defi.unstake_delay);
    let unlock_time = defi_service::unstake_unlock_time(&state.config.defi);
    tracing::info!(user = %address, amount = %amount_text, unlock_time, "Unstake requested");

    Ok(Json(UnstakeResponse {
        success: true,
        transaction_hash: mock_tx_hash(),
        unlock_time,
        message: format!(
            "Unstake request for {amount_text} LST submitted. Unlock in {delay}."
        ),
    }))
}

pub async fn get_ip_registry(Path(address): Path<String>) -> Json<IpRegistryHoldings> {
    tracing::debug!(address = %address, "Fetching IP registry holdings");
    Json(defi_service::ip_registry_holdings())
}

pub async fn register_pattern(body: Bytes) -> Result<Json<RegisterPatternResponse>> {
    let params: RegisterPatternParams = parse_body(&body, "Invalid pattern data")?;

    let metadata = params.metadata;
    let (Some(_), Some(pattern_name), Some(owner)) = (
        present(metadata.cultural_origin.clone()),
        present(metadata.pattern_name.clone()),
        present(params.owner_address),
    ) else {
        return Err(AppError::InvalidParams(
            "Cultural origin, pattern name, and owner address required".into(),
        ));
    };

    let token_id = rand::rng().random_range(1..=10_000);
    tracing::info!(owner = %owner, token_id, pattern = %pattern_name, "Pattern registered");

    Ok(Json(RegisterPatternResponse {
        success: true,
        transaction_hash: mock_tx_hash(),
        token_id,
        message: format!("IP pattern \"{pattern_name}\" registered successfully"),
        metadata,
    }))
}

pub async fn get_loan(Path(address): Path<String>) -> Json<LoanPosition> {
    tracing::debug!(address = %address, "Fetching loan position");
    Json(defi_service::loan_position())
}

pub async fn borrow(State(state): State<AppState>, body: Bytes) -> Result<Json<BorrowResponse>> {
    let params: BorrowParams = parse_body(&body, "Invalid borrow data")?;

    let (Some(collateral), Some(borrow), Some(address)) = (
        params.collateral_amount.filter(|a| !a.is_blank()),
        params.borrow_amount.filter(|a| !a.is_blank()),
        present(params.user_address),
    ) else {
        return Err(AppError::InvalidParams(
            "Collateral amount, borrow amount, and user address required".into(),
        ));
    };

    let (collateral_value, collateral_text) =
        positive_amount(&collateral, "Collateral amount must be a positive number")?;
    let (borrow_value, borrow_text) =
        positive_amount(&borrow, "Borrow amount must be a positive number")?;

    let quote = defi_service::quote_borrow(&state.config.defi, collateral_value, borrow_value)?;
    tracing::info!(
        user = %address,
        collateral = collateral_value,
        borrowed = borrow_value,
        health_factor = quote.health_factor,
        "Stablecoin borrowed"
    );

    Ok(Json(BorrowResponse {
        success: true,
        transaction_hash: mock_tx_hash(),
        message: format!("Borrowed {borrow_text} IPUSD against {collateral_text} LST collateral"),
        collateral_deposited: collateral_text,
        stablecoin_minted: borrow_text,
        health_factor: quote.health_factor,
    }))
}

pub async fn repay(State(state): State<AppState>, body: Bytes) -> Result<Json<RepayResponse>> {
    let params: RepayParams = parse_body(&body, "Invalid repay data")?;
    let (amount, amount_text, address) = amount_and_address(params)?;

    let split = defi_service::split_repayment(&state.config.defi, amount);
    let principal_paid = format!("{:.2}", split.principal);
    let interest_paid = format!("{:.2}", split.interest);
    tracing::info!(user = %address, amount, "Loan repaid");

    Ok(Json(RepayResponse {
        success: true,
        transaction_hash: mock_tx_hash(),
        message: format!(
            "Repaid {amount_text} IPUSD ({principal_paid} principal + {interest_paid} interest)"
        ),
        total_repaid: amount_text,
        principal_paid,
        interest_paid,
    }))
}

pub async fn get_stats() -> Json<DefiStats> {
    Json(defi_service::stats())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/defi/staking/{address}", get(get_staking))
        .route("/defi/stake", post(stake))
        .route("/defi/unstake", post(unstake))
        .route("/defi/ip-registry/{address}", get(get_ip_registry))
        .route("/defi/register-ip", post(register_pattern))
        .route("/defi/loan/{address}", get(get_loan))
        .route("/defi/borrow", post(borrow))
        .route("/defi/repay", post(repay))
        .route("/defi/stats", get(get_stats))
}

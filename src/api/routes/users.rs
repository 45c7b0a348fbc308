use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    AppState,
    api::types::parse_body,
    error::{AppError, Result},
    infrastructure::store::entities::{NewUser, User},
};

/// Returns the existing user for a known wallet instead of creating a second
/// record; the store itself does not enforce wallet uniqueness.
pub async fn create_user(State(state): State<AppState>, body: Bytes) -> Result<Json<User>> {
    let new_user: NewUser = parse_body(&body, "Invalid user data")?;

    if new_user.wallet_address.trim().is_empty() {
        return Err(AppError::InvalidParams("Wallet address is required".into()));
    }

    if let Some(existing) = state
        .store
        .get_user_by_wallet_address(&new_user.wallet_address)
    {
        return Ok(Json(existing));
    }

    let user = state.store.create_user(new_user);
    tracing::info!(user_id = user.id, wallet = %user.wallet_address, "User created");

    Ok(Json(user))
}

pub async fn get_user_by_wallet(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<User>> {
    state
        .store
        .get_user_by_wallet_address(&address)
        .map(Json)
        .ok_or(AppError::UserNotFound)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/wallet/{address}", get(get_user_by_wallet))
}

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{get, post},
};

use crate::{
    AppState,
    api::types::{IpAssetForm, parse_body},
    config::UploadConfig,
    error::{AppError, Result},
    infrastructure::store::entities::{IpAsset, IpAssetUpdate},
    services::upload,
};

/// Room for multipart boundaries and the text fields around the file.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub async fn create_ip_asset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<IpAsset>> {
    let upload_config = &state.config.upload;
    let mut form = IpAssetForm::default();
    let mut file_bytes = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let content_type = field.content_type().unwrap_or_default().to_string();
            upload::ensure_allowed_type(upload_config, &content_type)?;

            let bytes = field.bytes().await?;
            upload::ensure_within_limit(upload_config, bytes.len())?;
            file_bytes = Some(bytes);
        } else {
            form.insert(name, field.text().await?);
        }
    }

    let file_bytes =
        file_bytes.ok_or_else(|| AppError::InvalidParams("File is required".into()))?;
    let user_id = form.user_id()?;

    let stored = upload::store_file(upload_config, &file_bytes).await?;

    let new_asset = match form.into_new_ip_asset(&stored) {
        Ok(asset) => asset,
        Err(e) => {
            if let Err(remove_err) = tokio::fs::remove_file(&stored.path).await {
                tracing::warn!(error = %remove_err, "Failed to remove rejected upload");
            }
            return Err(e);
        }
    };

    let asset = state.store.create_ip_asset(new_asset, user_id);
    tracing::info!(
        ip_asset_id = asset.id,
        ip_id = %asset.ip_id,
        user_id,
        "IP asset created"
    );

    Ok(Json(asset))
}

pub async fn list_ip_assets_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Json<Vec<IpAsset>> {
    Json(state.store.get_ip_assets_by_user_id(user_id))
}

pub async fn get_ip_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<IpAsset>> {
    state
        .store
        .get_ip_asset(id)
        .map(Json)
        .ok_or(AppError::IpAssetNotFound)
}

pub async fn update_ip_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<IpAsset>> {
    let update: IpAssetUpdate = parse_body(&body, "Invalid IP asset data")?;

    let asset = state
        .store
        .update_ip_asset(id, update)
        .ok_or(AppError::IpAssetNotFound)?;
    tracing::debug!(ip_asset_id = id, status = ?asset.status, "IP asset updated");

    Ok(Json(asset))
}

pub fn router(upload_config: &UploadConfig) -> Router<AppState> {
    Router::new()
        .route(
            "/ip-assets",
            post(create_ip_asset).layer(DefaultBodyLimit::max(
                upload_config.max_file_size + MULTIPART_OVERHEAD,
            )),
        )
        .route("/ip-assets/user/{user_id}", get(list_ip_assets_by_user))
        .route("/ip-assets/{id}", get(get_ip_asset).patch(update_ip_asset))
}

pub mod types;

use rand::Rng;

use crate::{
    AppState,
    error::{AppError, Result},
    infrastructure::store::entities::{IpAssetStatus, IpAssetUpdate},
    services::{
        chain::{mock_address, mock_tx_hash},
        story::types::{RevenueClaim, StoryRegistration},
    },
};

pub const REVENUE_CURRENCY: &str = "WIP";

/// Simulates registering the asset with Story Protocol. The asset is marked
/// `registered` and keeps its own `ipId`; the chain-side id is only reported.
pub fn register_ip(state: &AppState, ip_asset_id: i32) -> Result<StoryRegistration> {
    let chain_ip_id = mock_address();
    let tx_hash = mock_tx_hash();

    let asset = state
        .store
        .update_ip_asset(
            ip_asset_id,
            IpAssetUpdate {
                registration_tx_hash: Some(tx_hash.clone()),
                status: Some(IpAssetStatus::Registered),
                ..Default::default()
            },
        )
        .ok_or(AppError::IpAssetNotFound)?;

    tracing::info!(
        ip_asset_id,
        ip_id = %asset.ip_id,
        chain_ip_id = %chain_ip_id,
        "IP asset registered"
    );

    Ok(StoryRegistration {
        ip_id: chain_ip_id,
        tx_hash,
        success: true,
    })
}

pub fn claim_revenue(ancestor_ip_id: &str, claimer: &str) -> RevenueClaim {
    let cents: u32 = rand::rng().random_range(0..1000);
    let claimed_amount = format!("{:.2}", f64::from(cents) / 100.0);

    tracing::info!(
        ancestor_ip_id,
        claimer,
        claimed_amount = %claimed_amount,
        "Revenue claimed"
    );

    RevenueClaim {
        tx_hash: mock_tx_hash(),
        claimed_amount,
        currency: REVENUE_CURRENCY.to_string(),
        success: true,
    }
}

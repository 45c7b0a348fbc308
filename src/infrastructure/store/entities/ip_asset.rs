use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROYALTY_RATE: &str = "5.00";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: i32,
    pub ip_id: String,
    pub user_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub asset_type: AssetType,
    pub file_name: String,
    pub file_size: Option<i64>,
    pub ipfs_hash: Option<String>,
    pub metadata_hash: Option<String>,
    pub cultural_origin: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub creation_date: Option<String>,

    /// Percentage with two decimal places, e.g. `"5.00"`.
    pub royalty_rate: String,
    pub registration_tx_hash: Option<String>,
    pub license_terms_id: Option<String>,
    pub idgt_registered: bool,
    pub idgt_reward_amount: Option<String>,
    pub idgt_transaction_hash: Option<String>,
    pub status: IpAssetStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Design,
    Song,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpAssetStatus {
    #[default]
    Pending,
    Registered,
    Failed,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIpAsset {
    pub title: String,
    pub description: Option<String>,
    pub asset_type: AssetType,
    pub file_name: String,
    pub file_size: Option<i64>,
    pub cultural_origin: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub creation_date: Option<String>,
    pub royalty_rate: Option<String>,
}

/// Shallow-merge patch. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IpAssetUpdate {
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub asset_type: Option<AssetType>,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub ipfs_hash: Option<String>,
    pub metadata_hash: Option<String>,
    pub cultural_origin: Option<String>,
    pub language: Option<String>,
    pub region: Option<String>,
    pub creation_date: Option<String>,
    pub royalty_rate: Option<String>,
    pub registration_tx_hash: Option<String>,
    pub license_terms_id: Option<String>,
    pub idgt_registered: Option<bool>,
    pub idgt_reward_amount: Option<String>,
    pub idgt_transaction_hash: Option<String>,
    pub status: Option<IpAssetStatus>,
}

impl Model {
    pub fn merge(&mut self, update: IpAssetUpdate) {
        if let Some(user_id) = update.user_id {
            self.user_id = Some(user_id);
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(asset_type) = update.asset_type {
            self.asset_type = asset_type;
        }
        if let Some(file_name) = update.file_name {
            self.file_name = file_name;
        }
        if let Some(file_size) = update.file_size {
            self.file_size = Some(file_size);
        }
        if let Some(ipfs_hash) = update.ipfs_hash {
            self.ipfs_hash = Some(ipfs_hash);
        }
        if let Some(metadata_hash) = update.metadata_hash {
            self.metadata_hash = Some(metadata_hash);
        }
        if let Some(cultural_origin) = update.cultural_origin {
            self.cultural_origin = Some(cultural_origin);
        }
        if let Some(language) = update.language {
            self.language = Some(language);
        }
        if let Some(region) = update.region {
            self.region = Some(region);
        }
        if let Some(creation_date) = update.creation_date {
            self.creation_date = Some(creation_date);
        }
        if let Some(royalty_rate) = update.royalty_rate {
            self.royalty_rate = royalty_rate;
        }
        if let Some(tx_hash) = update.registration_tx_hash {
            self.registration_tx_hash = Some(tx_hash);
        }
        if let Some(license_terms_id) = update.license_terms_id {
            self.license_terms_id = Some(license_terms_id);
        }
        if let Some(registered) = update.idgt_registered {
            self.idgt_registered = registered;
        }
        if let Some(reward) = update.idgt_reward_amount {
            self.idgt_reward_amount = Some(reward);
        }
        if let Some(tx_hash) = update.idgt_transaction_hash {
            self.idgt_transaction_hash = Some(tx_hash);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

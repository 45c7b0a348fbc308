use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Links a child work to the `ipId` of its parent. The parent is matched by
/// value and never checked for existence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: i32,
    pub parent_ip_id: String,
    pub child_ip_id: String,
    pub license_terms_id: String,
    pub registration_tx_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDerivativeWork {
    pub parent_ip_id: String,
    pub child_ip_id: String,
    pub license_terms_id: String,

    #[serde(default)]
    pub registration_tx_hash: Option<String>,
}

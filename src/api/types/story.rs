use serde::Deserialize;
use serde_json::Value;

use super::common::NumericInput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStoryIpParams {
    pub ip_asset_id: Option<NumericInput>,

    #[serde(default)]
    pub parent_ip_ids: Vec<String>,

    #[serde(default)]
    pub license_terms_ids: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRevenueParams {
    #[serde(default)]
    pub ancestor_ip_id: String,

    #[serde(default)]
    pub claimer: String,

    #[serde(default)]
    pub child_ip_ids: Vec<String>,

    #[serde(default)]
    pub royalty_policies: Vec<String>,

    #[serde(default)]
    pub currency_tokens: Vec<String>,
}

use serde::{Deserialize, Serialize};

use super::common::NumericInput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtRegisterParams {
    pub ip_asset_id: Option<NumericInput>,
    pub owner_address: Option<String>,
    pub ip_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtRoyaltyParams {
    pub ip_id: Option<String>,
    pub amount: Option<NumericInput>,
    pub payer_address: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtUsageFeeParams {
    pub ip_id: Option<String>,
    pub eth_amount: Option<NumericInput>,
    pub user_address: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtRegisterResponse {
    pub success: bool,
    pub message: String,
    pub transaction_hash: String,
    pub tokens_awarded: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtRoyaltyResponse {
    pub success: bool,
    pub message: String,
    pub transaction_hash: String,
    pub amount_paid: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdgtUsageFeeResponse {
    pub success: bool,
    pub message: String,
    pub transaction_hash: String,
    pub fee_amount: String,
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::NumericInput;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountParams {
    pub amount: Option<NumericInput>,
    pub user_address: Option<String>,
}

pub type StakeParams = AmountParams;
pub type UnstakeParams = AmountParams;
pub type RepayParams = AmountParams;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowParams {
    pub collateral_amount: Option<NumericInput>,
    pub borrow_amount: Option<NumericInput>,
    pub user_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternMetadata {
    pub cultural_origin: Option<String>,
    pub artisan_name: Option<String>,
    pub pattern_name: Option<String>,
    pub technique: Option<String>,
    pub materials: Option<Value>,
    pub region: Option<String>,
    pub tribe: Option<String>,
    pub royalty_percentage: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPatternParams {
    #[serde(flatten)]
    pub metadata: PatternMetadata,
    pub owner_address: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub lst_minted: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnstakeResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub unlock_time: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPatternResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub token_id: u32,
    pub message: String,
    pub metadata: PatternMetadata,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub collateral_deposited: String,
    pub stablecoin_minted: String,
    pub health_factor: f64,
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepayResponse {
    pub success: bool,
    pub transaction_hash: String,
    pub total_repaid: String,
    pub principal_paid: String,
    pub interest_paid: String,
    pub message: String,
}
